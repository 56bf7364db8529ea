//! Breakdown assembler: validates inputs and composes the pipeline.
//!
//! Sequence: deductions → taxable income → slab-wise tax → Section 87A
//! rebate → surcharge → cess → final payable rounded to the rupee.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_to_rupee, rupees};
use crate::calculations::levies::{cess, rebate_87a, surcharge};
use crate::calculations::slab_tax::compute_slab_tax;
use crate::calculations::slabs::{new_regime_slabs, old_regime_slabs};
use crate::error::InvalidInput;
use crate::models::{
    NewRegimeInputs, OldRegimeInputs, Regime, RegimeInputs, TaxBreakdown, TaxSlab,
};

/// Flat standard deduction under the old regime.
pub const STANDARD_DEDUCTION_OLD: Decimal = rupees(50_000);

/// Flat standard deduction under the new regime; the only deduction it
/// allows.
pub const STANDARD_DEDUCTION_NEW: Decimal = rupees(75_000);

/// Ceiling on the Section 80C deduction, applied before summation.
pub const DEDUCTION_80C_CAP: Decimal = rupees(150_000);

/// Computes the full liability breakdown for the given inputs.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the gross income or any declared
/// deduction is negative. Any non-negative income, however extreme,
/// produces a valid breakdown.
pub fn calculate_tax(inputs: &RegimeInputs) -> Result<TaxBreakdown, InvalidInput> {
    match inputs {
        RegimeInputs::Old(inputs) => calculate_old_regime(inputs),
        RegimeInputs::New(inputs) => calculate_new_regime(inputs),
    }
}

fn calculate_old_regime(inputs: &OldRegimeInputs) -> Result<TaxBreakdown, InvalidInput> {
    validate_gross_income(inputs.gross_income)?;
    validate_deduction("deduction_80c", inputs.deduction_80c)?;
    validate_deduction("deduction_80d", inputs.deduction_80d)?;
    validate_deduction("deduction_80tta", inputs.deduction_80tta)?;
    validate_deduction("hra_exemption", inputs.hra_exemption)?;
    validate_deduction("other_deductions", inputs.other_deductions)?;

    let total_deductions = inputs.deduction_80c.min(DEDUCTION_80C_CAP)
        + inputs.deduction_80d
        + inputs.deduction_80tta
        + inputs.hra_exemption
        + inputs.other_deductions
        + STANDARD_DEDUCTION_OLD;

    Ok(assemble(
        Regime::Old,
        inputs.gross_income,
        STANDARD_DEDUCTION_OLD,
        total_deductions,
        &old_regime_slabs(inputs.age_group),
    ))
}

fn calculate_new_regime(inputs: &NewRegimeInputs) -> Result<TaxBreakdown, InvalidInput> {
    validate_gross_income(inputs.gross_income)?;

    Ok(assemble(
        Regime::New,
        inputs.gross_income,
        STANDARD_DEDUCTION_NEW,
        STANDARD_DEDUCTION_NEW,
        &new_regime_slabs(),
    ))
}

fn validate_gross_income(gross_income: Decimal) -> Result<(), InvalidInput> {
    if gross_income < Decimal::ZERO {
        return Err(InvalidInput::NegativeGrossIncome(gross_income));
    }
    Ok(())
}

fn validate_deduction(
    field: &'static str,
    amount: Decimal,
) -> Result<(), InvalidInput> {
    if amount < Decimal::ZERO {
        return Err(InvalidInput::NegativeDeduction { field, amount });
    }
    Ok(())
}

fn assemble(
    regime: Regime,
    gross_income: Decimal,
    standard_deduction: Decimal,
    total_deductions: Decimal,
    slabs: &[TaxSlab],
) -> TaxBreakdown {
    let taxable_income = max(gross_income - total_deductions, Decimal::ZERO);

    let (slab_wise_tax, tax_before_rebate) = compute_slab_tax(taxable_income, slabs);

    let rebate_87a = rebate_87a(taxable_income, tax_before_rebate, regime);
    let tax_after_rebate = tax_before_rebate - rebate_87a;

    // Surcharge tiers are keyed on gross income, not taxable income.
    let surcharge = surcharge(gross_income, tax_after_rebate);
    let cess = cess(tax_after_rebate + surcharge);
    let total_tax_payable = round_to_rupee(tax_after_rebate + surcharge + cess);

    TaxBreakdown {
        gross_income,
        standard_deduction,
        total_deductions,
        taxable_income,
        slab_wise_tax,
        tax_before_rebate,
        rebate_87a,
        tax_after_rebate,
        surcharge,
        cess,
        total_tax_payable,
        regime,
    }
}
