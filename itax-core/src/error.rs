use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for malformed calculator inputs.
///
/// Well-typed but extreme inputs (zero income, very large income) are not
/// errors; they produce a valid, possibly degenerate, breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// Gross income must be a non-negative amount.
    #[error("gross income must be non-negative, got {0}")]
    NegativeGrossIncome(Decimal),

    /// A declared deduction field was negative.
    #[error("{field} must be non-negative, got {amount}")]
    NegativeDeduction {
        field: &'static str,
        amount: Decimal,
    },

    /// The age-group tag did not match any known group.
    #[error("unrecognized age group '{0}' (expected below60, 60to80 or above80)")]
    UnrecognizedAgeGroup(String),

    /// The regime tag did not match any known regime.
    #[error("unrecognized regime '{0}' (expected old or new)")]
    UnrecognizedRegime(String),
}
