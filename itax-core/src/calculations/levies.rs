//! Rebate, surcharge and cess rules applied on top of the slab tax.

use rust_decimal::Decimal;

use crate::calculations::common::rupees;
use crate::models::Regime;

const fn rate(percent_hundredths: u32) -> Decimal {
    Decimal::from_parts(percent_hundredths, 0, 0, false, 2)
}

/// Health and education cess: flat 4% of (tax after rebate + surcharge).
pub const CESS_RATE: Decimal = rate(4);

const OLD_REBATE_LIMIT: Decimal = rupees(500_000);
const OLD_REBATE_CAP: Decimal = rupees(12_500);
const NEW_REBATE_LIMIT: Decimal = rupees(700_000);
const NEW_REBATE_CAP: Decimal = rupees(25_000);

/// Section 87A rebate: wipes out tax up to a cap when taxable income is
/// at or below the regime's relief threshold.
///
/// Never exceeds the computed tax, so tax after rebate cannot go
/// negative.
pub fn rebate_87a(
    taxable_income: Decimal,
    total_tax: Decimal,
    regime: Regime,
) -> Decimal {
    let (limit, cap) = match regime {
        Regime::Old => (OLD_REBATE_LIMIT, OLD_REBATE_CAP),
        Regime::New => (NEW_REBATE_LIMIT, NEW_REBATE_CAP),
    };

    if taxable_income <= limit {
        total_tax.min(cap)
    } else {
        Decimal::ZERO
    }
}

/// Surcharge on tax for high earners. A step function on **gross**
/// income (not taxable income), identical for both regimes, and a flat
/// multiplier on the entire tax after rebate. No marginal relief at
/// tier boundaries.
pub fn surcharge(
    gross_income: Decimal,
    tax_after_rebate: Decimal,
) -> Decimal {
    let tier_rate = if gross_income > rupees(50_000_000) {
        rate(37)
    } else if gross_income > rupees(20_000_000) {
        rate(25)
    } else if gross_income > rupees(10_000_000) {
        rate(15)
    } else if gross_income > rupees(5_000_000) {
        rate(10)
    } else {
        return Decimal::ZERO;
    };

    tax_after_rebate * tier_rate
}

/// Cess on the combined tax-plus-surcharge amount. No threshold, no cap.
pub fn cess(tax_plus_surcharge: Decimal) -> Decimal {
    tax_plus_surcharge * CESS_RATE
}
