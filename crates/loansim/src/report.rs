//! Headless quote for the `quote` command.
//!
//! Validates the same way the wizard does, then prints the summary figures
//! and, on request, the month-by-month table.

use std::fmt::{self, Write};

use jiff::civil::Date;
use loansim_core::{
    BirthDateError, FormErrors, LoanForm, LoanQuote, format_brl, validate_birth_date,
};

use crate::util::format::{format_annual_rate, format_months, parse_birth_date};

#[derive(Debug)]
pub enum ReportError {
    BirthDate(BirthDateError),
    Form(FormErrors),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::BirthDate(e) => write!(f, "Data de nascimento: {}", e),
            ReportError::Form(e) => write!(f, "Empréstimo: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

/// Validate command line input and price the loan on `today`.
pub fn build_quote(
    birth_date: &str,
    amount: &str,
    term: &str,
    today: Date,
) -> Result<LoanQuote, ReportError> {
    let birth_date = validate_birth_date(parse_birth_date(birth_date), today)
        .map_err(ReportError::BirthDate)?;
    let loan = LoanForm::parse(amount, term).map_err(ReportError::Form)?;
    let months = i32::try_from(loan.months).unwrap_or(i32::MAX);

    Ok(LoanQuote::for_borrower(
        loan.principal,
        months,
        Some(birth_date),
        today,
    ))
}

/// Plain-text summary, optionally followed by the schedule table.
pub fn render_report(quote: &LoanQuote, include_schedule: bool) -> String {
    let mut out = String::new();
    // Writing into a String only fails if a Display impl does
    if let Err(e) = write_report(&mut out, quote, include_schedule) {
        tracing::error!(error = %e, "Failed to format report");
    }
    out
}

fn write_report(out: &mut impl Write, quote: &LoanQuote, include_schedule: bool) -> fmt::Result {
    writeln!(out, "Resultado da Simulação")?;
    writeln!(out)?;

    let rows = [
        ("Valor do empréstimo", format_brl(quote.terms.principal)),
        ("Prazo", format_months(quote.terms.months)),
        ("Taxa aplicada", format_annual_rate(quote.annual_rate_percent())),
        ("Valor das parcelas", format_brl(quote.monthly_payment)),
        ("Valor Total a Pagar", format_brl(quote.total_payable)),
        ("Total de Juros", format_brl(quote.total_interest)),
    ];
    for (label, value) in rows {
        writeln!(out, "  {:<22}{:>18}", format!("{}:", label), value)?;
    }

    if !include_schedule {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:>16}  {:>16}  {:>16}",
        "Mês", "Amortização", "Juros", "Parcela"
    )?;
    for entry in &quote.schedule() {
        writeln!(
            out,
            "{:>5}  {:>16}  {:>16}  {:>16}",
            entry.period,
            format_brl(entry.principal),
            format_brl(entry.interest),
            format_brl(entry.payment)
        )?;
    }
    Ok(())
}
