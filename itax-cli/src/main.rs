use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

use itax_core::{
    AgeGroup, NewRegimeInputs, OldRegimeInputs, Regime, RegimeInputs, calculate_tax,
};

mod format;
mod input;
mod logging;
mod render;

/// Income-tax liability calculator for FY 2024-25.
///
/// Computes a full slab-wise breakdown (rebate, surcharge, cess) under
/// the old or new regime and prints it. Amounts accept comma separators
/// and an optional leading ₹, e.g. "12,50,000".
#[derive(Parser, Debug)]
#[command(name = "itax")]
#[command(version, about, long_about = None)]
struct Args {
    /// Tax regime: "new" or "old"
    #[arg(short, long, default_value = "new")]
    regime: String,

    /// Gross annual income
    #[arg(short, long)]
    income: String,

    /// Age group for the old regime: below60, 60to80 or above80
    #[arg(short, long, default_value = "below60")]
    age_group: String,

    /// Section 80C deduction (old regime; capped at ₹1,50,000)
    #[arg(long, default_value = "0")]
    deduction_80c: String,

    /// Section 80D deduction (old regime)
    #[arg(long, default_value = "0")]
    deduction_80d: String,

    /// Section 80TTA deduction (old regime)
    #[arg(long, default_value = "0")]
    deduction_80tta: String,

    /// HRA exemption (old regime)
    #[arg(long, default_value = "0")]
    hra_exemption: String,

    /// Any other deductions (old regime)
    #[arg(long, default_value = "0")]
    other_deductions: String,

    /// Emit the breakdown as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn amount(
    raw: &str,
    field: &str,
) -> Result<Decimal> {
    input::parse_amount(raw).with_context(|| format!("invalid {field}: '{raw}'"))
}

fn build_inputs(args: &Args) -> Result<RegimeInputs> {
    let regime = Regime::from_str(&args.regime)?;
    let gross_income = amount(&args.income, "income")?;

    let inputs = match regime {
        Regime::New => RegimeInputs::New(NewRegimeInputs { gross_income }),
        Regime::Old => RegimeInputs::Old(OldRegimeInputs {
            gross_income,
            age_group: AgeGroup::from_str(&args.age_group)?,
            deduction_80c: amount(&args.deduction_80c, "deduction-80c")?,
            deduction_80d: amount(&args.deduction_80d, "deduction-80d")?,
            deduction_80tta: amount(&args.deduction_80tta, "deduction-80tta")?,
            hra_exemption: amount(&args.hra_exemption, "hra-exemption")?,
            other_deductions: amount(&args.other_deductions, "other-deductions")?,
        }),
    };

    Ok(inputs)
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let inputs = build_inputs(&args)?;
    debug!(
        regime = inputs.regime().as_str(),
        income = %inputs.gross_income(),
        "computing liability breakdown"
    );

    let breakdown = calculate_tax(&inputs).context("tax calculation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render::text_report(&breakdown));
    }

    Ok(())
}
