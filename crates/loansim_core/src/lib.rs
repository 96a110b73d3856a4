//! Loan simulation library
//!
//! This crate provides the calculation engine behind the loan simulation wizard.
//! It supports:
//! - Brazilian Real currency formatting and lenient parsing
//! - Age-based annual interest rate tiers
//! - Fixed-payment (Price table) amortization
//! - Month-by-month schedules with bar and line chart views
//! - Form validation for the wizard steps
//!
//! Every calculation is a pure function: invalid or degenerate input maps to
//! zero (or an empty schedule) instead of an error.
//!
//! ```ignore
//! use loansim_core::{LoanQuote, format_brl, parse_brl};
//!
//! let today = jiff::civil::date(2025, 6, 1);
//! let quote = LoanQuote::for_borrower(
//!     parse_brl("R$ 100.000,00"),
//!     24,
//!     Some(jiff::civil::date(1990, 3, 15)),
//!     today,
//! );
//! println!("{}", format_brl(quote.monthly_payment));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod currency;
pub mod quote;
pub mod rate;
pub mod schedule;
pub mod validation;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use amortization::{LoanTerms, monthly_payment, monthly_rate};
pub use currency::{format_brl, parse_brl};
pub use quote::LoanQuote;
pub use rate::{RateTier, age_in_years, annual_rate};
pub use schedule::{
    AmortizationEntry, BarPoint, LinePoint, Schedule, bar_chart_data, generate, line_chart_data,
};
pub use validation::{
    AmountError, BirthDateError, FormErrors, LoanForm, MAX_TERM_MONTHS, MINIMUM_AGE, TermError,
    is_form_invalid, validate_birth_date, validate_loan_form,
};
