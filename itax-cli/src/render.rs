//! Plain-text report rendering for a computed breakdown.

use std::fmt::Write;

use itax_core::{Regime, TaxBreakdown};

use crate::format::format_inr;

pub fn text_report(breakdown: &TaxBreakdown) -> String {
    let regime_name = match breakdown.regime {
        Regime::Old => "Old Regime",
        Regime::New => "New Regime",
    };

    let mut out = String::new();
    let _ = writeln!(out, "Income Tax Calculation ({regime_name}, FY 2024-25)");
    let _ = writeln!(out);

    line(&mut out, "Gross income", breakdown.gross_income);
    line(&mut out, "Standard deduction", breakdown.standard_deduction);
    line(&mut out, "Total deductions", breakdown.total_deductions);
    line(&mut out, "Taxable income", breakdown.taxable_income);
    let _ = writeln!(out);

    if breakdown.slab_wise_tax.is_empty() {
        let _ = writeln!(out, "No taxable income; no slab tax due.");
    } else {
        let _ = writeln!(out, "Slab-wise tax");
        for contribution in &breakdown.slab_wise_tax {
            let _ = writeln!(
                out,
                "  {:<16} {:>3}%  on {:>14}  {:>14}",
                contribution.slab,
                contribution.rate,
                format_inr(contribution.taxable_amount),
                format_inr(contribution.tax),
            );
        }
    }
    let _ = writeln!(out);

    line(&mut out, "Tax before rebate", breakdown.tax_before_rebate);
    line(&mut out, "Rebate u/s 87A", breakdown.rebate_87a);
    line(&mut out, "Tax after rebate", breakdown.tax_after_rebate);
    line(&mut out, "Surcharge", breakdown.surcharge);
    line(&mut out, "Health & education cess", breakdown.cess);
    line(&mut out, "Total tax payable", breakdown.total_tax_payable);

    out
}

fn line(
    out: &mut String,
    label: &str,
    amount: rust_decimal::Decimal,
) {
    let _ = writeln!(out, "{:<24} {:>16}", label, format_inr(amount));
}
