//! Slab table provider for FY 2024-25.
//!
//! Every regime and age-group combination has a defined table; the
//! tables are ordered ascending by `from`, cover `[0, ∞)` and have no
//! gaps or overlaps.

use rust_decimal::Decimal;

use crate::calculations::common::rupees;
use crate::models::{AgeGroup, TaxSlab};

const fn percent(rate: u32) -> Decimal {
    Decimal::from_parts(rate, 0, 0, false, 0)
}

fn slab(
    from: u32,
    to: Option<u32>,
    rate: u32,
) -> TaxSlab {
    TaxSlab {
        from: rupees(from),
        to: to.map(rupees),
        rate: percent(rate),
    }
}

/// New-regime table; age-independent.
pub fn new_regime_slabs() -> Vec<TaxSlab> {
    vec![
        slab(0, Some(300_000), 0),
        slab(300_000, Some(700_000), 5),
        slab(700_000, Some(1_000_000), 10),
        slab(1_000_000, Some(1_200_000), 15),
        slab(1_200_000, Some(1_500_000), 20),
        slab(1_500_000, None, 30),
    ]
}

/// Old-regime table for the given age group. The basic exemption limit
/// rises with age: ₹2.5L below 60, ₹3L for senior citizens, ₹5L above 80.
pub fn old_regime_slabs(age_group: AgeGroup) -> Vec<TaxSlab> {
    match age_group {
        AgeGroup::Below60 => vec![
            slab(0, Some(250_000), 0),
            slab(250_000, Some(500_000), 5),
            slab(500_000, Some(1_000_000), 20),
            slab(1_000_000, None, 30),
        ],
        AgeGroup::SixtyTo80 => vec![
            slab(0, Some(300_000), 0),
            slab(300_000, Some(500_000), 5),
            slab(500_000, Some(1_000_000), 20),
            slab(1_000_000, None, 30),
        ],
        AgeGroup::Above80 => vec![
            slab(0, Some(500_000), 0),
            slab(500_000, Some(1_000_000), 20),
            slab(1_000_000, None, 30),
        ],
    }
}
