//! Indian-locale currency rendering.

use itax_core::round_to_rupee;
use rust_decimal::Decimal;

/// Formats an amount as Indian-locale currency with zero fraction
/// digits: the last three digits form one group, everything above is
/// grouped in pairs (lakh/crore style), e.g. `₹1,23,45,678`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_to_rupee(amount);
    let digits = rounded.abs().normalize().to_string();
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut parts = vec![tail.to_string()];
    while !head.is_empty() {
        let cut = head.len().saturating_sub(2);
        parts.push(head[cut..].to_string());
        head = &head[..cut];
    }
    parts.reverse();
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(900)), "₹900");
    }

    #[test]
    fn thousands_group_the_last_three_digits() {
        assert_eq!(format_inr(dec!(23400)), "₹23,400");
    }

    #[test]
    fn lakhs_group_in_pairs_above_thousands() {
        assert_eq!(format_inr(dec!(800000)), "₹8,00,000");
        assert_eq!(format_inr(dec!(1234567)), "₹12,34,567");
    }

    #[test]
    fn crore_scale_amounts_keep_pair_grouping() {
        assert_eq!(format_inr(dec!(50000000)), "₹5,00,00,000");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn fractional_amounts_round_to_the_rupee() {
        assert_eq!(format_inr(dec!(70290.4)), "₹70,290");
        assert_eq!(format_inr(dec!(70290.5)), "₹70,291");
    }

    #[test]
    fn negative_amounts_carry_the_sign_outside() {
        assert_eq!(format_inr(dec!(-1234)), "-₹1,234");
    }
}
