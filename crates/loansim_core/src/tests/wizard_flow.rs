//! Tests chaining validation, rate selection and pricing the way the wizard does

use jiff::civil::{Date, date};

use crate::currency::{format_brl, parse_brl};
use crate::quote::LoanQuote;
use crate::rate::annual_rate;
use crate::validation::{LoanForm, validate_birth_date};

const TODAY: Date = date(2025, 6, 15);

#[test]
fn test_full_simulation() {
    let birth = validate_birth_date(Some(date(1990, 3, 10)), TODAY).unwrap();
    let form = LoanForm::parse("R$ 100.000,00", "24").unwrap();

    let quote = LoanQuote::for_borrower(form.principal, form.months as i32, Some(birth), TODAY);

    // 35 years old: 3% a.a.
    assert_eq!(quote.annual_rate_percent(), 3.0);
    assert!(quote.monthly_payment > 100_000.0 / 24.0);
    assert_eq!(quote.schedule().len(), 24);
    assert_eq!(format_brl(quote.total_payable), format_brl(quote.monthly_payment * 24.0));
}

#[test]
fn test_amount_entered_as_plain_digits() {
    let form = LoanForm::parse("50000", "12").unwrap();
    assert_eq!(form.principal, parse_brl("R$ 50.000,00"));
}

#[test]
fn test_missing_birth_date_prices_at_zero_rate() {
    // The wizard never gets here, but the engine still answers
    let quote = LoanQuote::for_borrower(12_000.0, 12, None, TODAY);
    assert_eq!(annual_rate(None, TODAY), 0.0);
    assert_eq!(quote.monthly_payment, 1_000.0);
    assert_eq!(format_brl(quote.monthly_payment), "R$ 1.000,00");
}

#[test]
fn test_senior_borrower_summary() {
    let quote = LoanQuote::for_borrower(20_000.0, 10, Some(date(1950, 1, 1)), TODAY);
    assert_eq!(quote.annual_rate_percent(), 4.0);
    assert!(quote.total_interest > 0.0);
    assert!(quote.total_interest < 20_000.0 * 0.04);
}
