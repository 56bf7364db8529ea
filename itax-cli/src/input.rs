//! Raw amount parsing for user-supplied numeric strings.

use std::str::FromStr;

use anyhow::{Result, bail};
use rust_decimal::Decimal;

/// Parses a currency amount from user input.
///
/// Accepts comma thousands separators and an optional leading `₹`
/// (e.g. `"₹12,50,000"`). Rejects empty input, non-numeric text and
/// negative amounts; the engine never sees a malformed number.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned = raw
        .trim()
        .trim_start_matches('₹')
        .trim_start()
        .replace(',', "");

    if cleaned.is_empty() {
        bail!("amount is empty");
    }

    let amount = match Decimal::from_str(&cleaned) {
        Ok(amount) => amount,
        Err(_) => bail!("'{raw}' is not a number"),
    };

    if amount.is_sign_negative() {
        bail!("amount must be non-negative, got {amount}");
    }

    Ok(amount)
}
