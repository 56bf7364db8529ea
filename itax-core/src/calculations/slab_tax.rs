//! Progressive slab-wise tax computation.

use rust_decimal::Decimal;

use crate::models::{SlabContribution, TaxSlab};

/// Applies an ordered slab table to `taxable_income`, producing the
/// per-slab contributions and their full-precision sum.
///
/// Iteration stops at the first slab whose lower bound is at or above
/// the taxable income; later slabs are omitted entirely rather than
/// reported as zero entries. A reached zero-rate slab is reported with
/// `tax = 0`. No intermediate rounding is applied.
pub fn compute_slab_tax(
    taxable_income: Decimal,
    slabs: &[TaxSlab],
) -> (Vec<SlabContribution>, Decimal) {
    let mut contributions = Vec::new();
    let mut total_tax = Decimal::ZERO;

    for slab in slabs {
        if taxable_income <= slab.from {
            break;
        }

        let upper = match slab.to {
            Some(to) => taxable_income.min(to),
            None => taxable_income,
        };
        let taxable_in_slab = upper - slab.from;
        if taxable_in_slab <= Decimal::ZERO {
            continue;
        }

        let tax = taxable_in_slab * slab.rate / Decimal::ONE_HUNDRED;
        total_tax += tax;
        contributions.push(SlabContribution {
            slab: slab.label(),
            taxable_amount: taxable_in_slab,
            rate: slab.rate,
            tax,
        });
    }

    (contributions, total_tax)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::calculations::slabs::{new_regime_slabs, old_regime_slabs};
    use crate::models::AgeGroup;

    use super::*;

    #[test]
    fn zero_income_yields_empty_breakdown() {
        let (contributions, total) = compute_slab_tax(Decimal::ZERO, &new_regime_slabs());

        assert_eq!(contributions, vec![]);
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn income_inside_exempt_slab_yields_single_zero_contribution() {
        let slabs = old_regime_slabs(AgeGroup::Below60);

        let (contributions, total) = compute_slab_tax(dec!(200000), &slabs);

        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions[0].taxable_amount, dec!(200000));
        assert_eq!(contributions[0].tax, Decimal::ZERO);
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn old_regime_income_spanning_three_slabs() {
        let slabs = old_regime_slabs(AgeGroup::Below60);

        let (contributions, total) = compute_slab_tax(dec!(550000), &slabs);

        // 0% on 2.5L, 5% on 2.5L (12500), 20% on 50k (10000)
        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions[0].tax, dec!(0));
        assert_eq!(contributions[1].tax, dec!(12500));
        assert_eq!(contributions[2].tax, dec!(10000));
        assert_eq!(total, dec!(22500));
    }

    #[test]
    fn unreached_slabs_are_omitted_not_zeroed() {
        let slabs = new_regime_slabs();

        let (contributions, _) = compute_slab_tax(dec!(725000), &slabs);

        // Reaches only the first three of six slabs.
        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions[2].taxable_amount, dec!(25000));
    }

    #[test]
    fn income_exactly_on_boundary_does_not_enter_next_slab() {
        let slabs = new_regime_slabs();

        let (contributions, total) = compute_slab_tax(dec!(700000), &slabs);

        assert_eq!(contributions.len(), 2);
        assert_eq!(total, dec!(20000));
    }

    #[test]
    fn unbounded_slab_taxes_the_full_excess() {
        let slabs = new_regime_slabs();

        let (contributions, total) = compute_slab_tax(dec!(2000000), &slabs);

        let top = contributions.last().unwrap();
        assert_eq!(top.slab, "Above ₹15L");
        assert_eq!(top.taxable_amount, dec!(500000));
        assert_eq!(top.tax, dec!(150000));
        // 0 + 20000 + 30000 + 30000 + 60000 + 150000
        assert_eq!(total, dec!(290000));
    }

    #[test]
    fn contributions_sum_to_total() {
        let slabs = old_regime_slabs(AgeGroup::SixtyTo80);

        let (contributions, total) = compute_slab_tax(dec!(1234567), &slabs);

        let sum: Decimal = contributions.iter().map(|c| c.tax).sum();
        assert_eq!(sum, total);
    }
}
