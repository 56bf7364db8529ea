use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AgeGroup, Regime};

/// Inputs for an old-regime calculation.
///
/// All deduction fields are declared amounts and must be non-negative;
/// `deduction_80c` is capped at ₹1,50,000 before it is summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldRegimeInputs {
    pub gross_income: Decimal,
    pub age_group: AgeGroup,
    pub deduction_80c: Decimal,
    pub deduction_80d: Decimal,
    pub deduction_80tta: Decimal,
    pub hra_exemption: Decimal,
    pub other_deductions: Decimal,
}

/// Inputs for a new-regime calculation. No itemized deductions are
/// accepted; only the flat standard deduction applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegimeInputs {
    pub gross_income: Decimal,
}

/// Tagged union over the two regimes' input shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "regime", rename_all = "lowercase")]
pub enum RegimeInputs {
    Old(OldRegimeInputs),
    New(NewRegimeInputs),
}

impl RegimeInputs {
    pub fn regime(&self) -> Regime {
        match self {
            Self::Old(_) => Regime::Old,
            Self::New(_) => Regime::New,
        }
    }

    pub fn gross_income(&self) -> Decimal {
        match self {
            Self::Old(inputs) => inputs.gross_income,
            Self::New(inputs) => inputs.gross_income,
        }
    }
}
