use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A half-open progressive-rate bracket `[from, to)`.
///
/// `to = None` marks the final, unbounded bracket. `rate` is a percentage
/// (5 means 5%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub from: Decimal,
    pub to: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxSlab {
    /// Human-readable bracket label in lakhs, e.g. `"₹3L – ₹7L"` or
    /// `"Above ₹10L"`. Lakh values are rounded half-up to whole numbers,
    /// so the ₹2,50,000 boundary renders as ₹3L.
    pub fn label(&self) -> String {
        match self.to {
            Some(to) => format!("₹{}L – ₹{}L", in_lakhs(self.from), in_lakhs(to)),
            None => format!("Above ₹{}L", in_lakhs(self.from)),
        }
    }
}

fn in_lakhs(amount: Decimal) -> Decimal {
    (amount / Decimal::from_parts(100_000, 0, 0, false, 0))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
