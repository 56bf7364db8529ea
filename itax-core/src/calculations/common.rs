//! Shared numeric helpers for the calculation pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding mode for the final payable amount: half away from zero, to
/// the whole rupee. Pinned here so no step relies on a platform default.
pub const PAYABLE_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Builds a whole-rupee amount. `const` so slab boundaries and caps can
/// be plain constants.
pub(crate) const fn rupees(amount: u32) -> Decimal {
    Decimal::from_parts(amount, 0, 0, false, 0)
}

/// Rounds a value to the nearest whole rupee using [`PAYABLE_ROUNDING`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(23400.4)), dec!(23400));
/// assert_eq!(round_to_rupee(dec!(23400.5)), dec!(23401));
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, PAYABLE_ROUNDING)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_rupee tests
    // =========================================================================

    #[test]
    fn round_to_rupee_rounds_down_below_midpoint() {
        let result = round_to_rupee(dec!(23400.49));

        assert_eq!(result, dec!(23400));
    }

    #[test]
    fn round_to_rupee_rounds_up_at_midpoint() {
        let result = round_to_rupee(dec!(23400.5));

        assert_eq!(result, dec!(23401));
    }

    #[test]
    fn round_to_rupee_rounds_away_from_zero_for_negative_midpoint() {
        let result = round_to_rupee(dec!(-0.5));

        assert_eq!(result, dec!(-1));
    }

    #[test]
    fn round_to_rupee_preserves_whole_rupees() {
        let result = round_to_rupee(dec!(900));

        assert_eq!(result, dec!(900));
    }

    #[test]
    fn rupees_builds_whole_amounts() {
        assert_eq!(rupees(150_000), dec!(150000));
        assert_eq!(rupees(0), Decimal::ZERO);
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100), dec!(200));

        assert_eq!(result, dec!(200));
    }

    #[test]
    fn max_clamps_negative_against_zero() {
        let result = max(dec!(-50000), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }
}
