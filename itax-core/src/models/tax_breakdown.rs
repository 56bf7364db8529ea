use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Regime;

/// Tax attributed to a single slab the taxable income reached.
///
/// Slabs past the taxable income are omitted from the breakdown rather
/// than listed with zero amounts; a reached zero-rate slab is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabContribution {
    pub slab: String,
    pub taxable_amount: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Complete result of a liability calculation.
///
/// A value object: produced fresh per request, never mutated, and
/// bit-identical for identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross_income: Decimal,
    pub standard_deduction: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub slab_wise_tax: Vec<SlabContribution>,
    pub tax_before_rebate: Decimal,
    pub rebate_87a: Decimal,
    pub tax_after_rebate: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    pub total_tax_payable: Decimal,
    pub regime: Regime,
}
