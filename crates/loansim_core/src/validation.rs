//! Input validation for the simulation wizard.
//!
//! The calculation modules accept anything and degrade to zero; rejecting bad
//! input before it reaches them is the job of this module. Error messages are
//! the user-facing (pt-BR) texts shown next to each field.

use std::fmt;

use jiff::civil::Date;

use crate::currency::parse_brl;
use crate::rate::age_in_years;

/// Minimum borrower age in whole years
pub const MINIMUM_AGE: i32 = 18;

/// Longest accepted loan term, in months
pub const MAX_TERM_MONTHS: u32 = 9_999;

/// Errors for the birth date field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDateError {
    /// No date, or text that is not a date
    Missing,
    /// Younger than [`MINIMUM_AGE`] (includes dates in the future)
    Underage { age: i32 },
}

impl fmt::Display for BirthDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthDateError::Missing => write!(f, "Por favor, informe uma data válida."),
            BirthDateError::Underage { .. } => {
                write!(f, "Você deve ter pelo menos {MINIMUM_AGE} anos.")
            }
        }
    }
}

impl std::error::Error for BirthDateError {}

/// Errors for the loan amount field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Empty, or not a positive amount
    Missing,
    /// Text without any number in it
    Invalid,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Missing => write!(f, "Informe o valor do empréstimo."),
            AmountError::Invalid => write!(f, "Informe um valor válido para o empréstimo."),
        }
    }
}

impl std::error::Error for AmountError {}

/// Errors for the loan term field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermError {
    /// Empty, or not a positive number of months
    Missing,
    /// Not a whole number
    Invalid,
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::Missing => write!(f, "Informe o prazo de pagamento."),
            TermError::Invalid => write!(f, "Informe um prazo válido de pagamento."),
        }
    }
}

impl std::error::Error for TermError {}

/// Per-field errors of the loan details form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub amount: Option<AmountError>,
    pub term: Option<TermError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.term.is_none()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.amount, self.term) {
            (Some(amount), Some(term)) => write!(f, "{amount} {term}"),
            (Some(amount), None) => write!(f, "{amount}"),
            (None, Some(term)) => write!(f, "{term}"),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for FormErrors {}

/// Check that a birth date is present and the borrower is old enough on `today`.
pub fn validate_birth_date(birth_date: Option<Date>, today: Date) -> Result<Date, BirthDateError> {
    let birth = birth_date.ok_or(BirthDateError::Missing)?;
    let age = age_in_years(birth, today);
    if age < MINIMUM_AGE {
        return Err(BirthDateError::Underage { age });
    }
    Ok(birth)
}

fn check_amount(amount: &str) -> Result<f64, AmountError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AmountError::Missing);
    }
    if !amount.chars().any(|c| c.is_ascii_digit()) {
        return Err(AmountError::Invalid);
    }

    let value = parse_brl(amount);
    if value <= 0.0 {
        return Err(AmountError::Missing);
    }
    Ok(value)
}

fn check_term(term: &str) -> Result<u32, TermError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(TermError::Missing);
    }

    match term.parse::<i64>() {
        Ok(months) if months <= 0 => Err(TermError::Missing),
        Ok(months) => u32::try_from(months)
            .ok()
            .filter(|&months| months <= MAX_TERM_MONTHS)
            .ok_or(TermError::Invalid),
        Err(_) => Err(TermError::Invalid),
    }
}

/// Validate the raw loan amount and term strings.
pub fn validate_loan_form(amount: &str, term: &str) -> FormErrors {
    FormErrors {
        amount: check_amount(amount).err(),
        term: check_term(term).err(),
    }
}

/// Whether the "continue" action of the loan form should be disabled.
///
/// Cheaper than [`validate_loan_form`]: only catches empty or non-positive
/// fields, and any pending navigation.
pub fn is_form_invalid(amount: &str, term: &str, pending: bool) -> bool {
    let amount = amount.trim();
    let term = term.trim();

    pending
        || amount.is_empty()
        || term.is_empty()
        || parse_brl(amount) <= 0.0
        || term.parse::<f64>().is_ok_and(|t| t <= 0.0)
}

/// A validated loan form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanForm {
    pub principal: f64,
    pub months: u32,
}

impl LoanForm {
    pub fn parse(amount: &str, term: &str) -> Result<Self, FormErrors> {
        match (check_amount(amount), check_term(term)) {
            (Ok(principal), Ok(months)) => Ok(Self { principal, months }),
            (amount, term) => Err(FormErrors {
                amount: amount.err(),
                term: term.err(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    const TODAY: Date = date(2025, 6, 15);

    #[test]
    fn test_birth_date_missing() {
        assert_eq!(
            validate_birth_date(None, TODAY),
            Err(BirthDateError::Missing)
        );
        assert_eq!(
            BirthDateError::Missing.to_string(),
            "Por favor, informe uma data válida."
        );
    }

    #[test]
    fn test_birth_date_underage() {
        let err = validate_birth_date(Some(date(2007, 6, 16)), TODAY).unwrap_err();
        assert_eq!(err, BirthDateError::Underage { age: 17 });
        assert_eq!(err.to_string(), "Você deve ter pelo menos 18 anos.");
    }

    #[test]
    fn test_birth_date_in_future_is_underage() {
        assert!(matches!(
            validate_birth_date(Some(date(2026, 1, 1)), TODAY),
            Err(BirthDateError::Underage { .. })
        ));
    }

    #[test]
    fn test_birth_date_eighteenth_birthday_is_accepted() {
        let birth = date(2007, 6, 15);
        assert_eq!(validate_birth_date(Some(birth), TODAY), Ok(birth));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_loan_form("100.000", "12").is_empty());
        assert!(validate_loan_form("R$ 50.000,00", " 24 ").is_empty());
    }

    #[test]
    fn test_empty_fields() {
        let errors = validate_loan_form("", "");
        assert_eq!(errors.amount, Some(AmountError::Missing));
        assert_eq!(errors.term, Some(TermError::Missing));
        assert_eq!(
            errors.to_string(),
            "Informe o valor do empréstimo. Informe o prazo de pagamento."
        );
    }

    #[test]
    fn test_non_numeric_fields() {
        let errors = validate_loan_form("abc", "doze");
        assert_eq!(errors.amount, Some(AmountError::Invalid));
        assert_eq!(errors.term, Some(TermError::Invalid));
        assert_eq!(
            AmountError::Invalid.to_string(),
            "Informe um valor válido para o empréstimo."
        );
        assert_eq!(
            TermError::Invalid.to_string(),
            "Informe um prazo válido de pagamento."
        );
    }

    #[test]
    fn test_non_positive_fields() {
        let errors = validate_loan_form("0", "-3");
        assert_eq!(errors.amount, Some(AmountError::Missing));
        assert_eq!(errors.term, Some(TermError::Missing));
    }

    #[test]
    fn test_fractional_term_is_invalid() {
        assert_eq!(
            validate_loan_form("1000", "12.5").term,
            Some(TermError::Invalid)
        );
    }

    #[test]
    fn test_term_upper_bound() {
        assert_eq!(check_term("9999"), Ok(MAX_TERM_MONTHS));
        assert_eq!(check_term("10000"), Err(TermError::Invalid));
        assert_eq!(check_term("200000"), Err(TermError::Invalid));
        assert_eq!(check_term("99999999999999999999"), Err(TermError::Invalid));
        assert!(LoanForm::parse("100.000", "2000000000").is_err());
    }

    #[test]
    fn test_is_form_invalid() {
        assert!(!is_form_invalid("100.000", "12", false));
        assert!(is_form_invalid("100.000", "12", true));
        assert!(is_form_invalid("", "12", false));
        assert!(is_form_invalid("100.000", "", false));
        assert!(is_form_invalid("0", "12", false));
        assert!(is_form_invalid("100.000", "0", false));
        // Non-numeric terms are left to full validation
        assert!(!is_form_invalid("100.000", "abc", false));
    }

    #[test]
    fn test_loan_form_parse() {
        let form = LoanForm::parse("R$ 100.000,00", "36").unwrap();
        assert_eq!(form.principal, 100_000.0);
        assert_eq!(form.months, 36);

        let errors = LoanForm::parse("R$ 100.000,00", "").unwrap_err();
        assert_eq!(errors.amount, None);
        assert_eq!(errors.term, Some(TermError::Missing));
    }
}
