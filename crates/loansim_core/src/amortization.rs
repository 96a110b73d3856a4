//! Fixed-payment loan amortization.
//!
//! Computes the constant monthly installment of a loan (the "Price table"
//! annuity formula). The calculation is total: invalid inputs yield a payment
//! of `0.0` rather than an error, and no rounding is applied.

use serde::{Deserialize, Serialize};

use crate::schedule::{self, Schedule};

/// Inputs of a loan simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units
    pub principal: f64,
    /// Number of monthly installments
    pub months: i32,
    /// Annual interest rate in percent (e.g. `3.0` for 3% a.a.)
    pub annual_rate_percent: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, months: i32, annual_rate_percent: f64) -> Self {
        Self {
            principal,
            months,
            annual_rate_percent,
        }
    }

    /// Whether these terms describe a loan that can be priced.
    pub fn is_valid(&self) -> bool {
        !self.principal.is_nan()
            && !self.annual_rate_percent.is_nan()
            && self.principal > 0.0
            && self.months > 0
            && self.annual_rate_percent >= 0.0
    }

    pub fn monthly_payment(&self) -> f64 {
        monthly_payment(self.principal, self.months, self.annual_rate_percent)
    }

    /// Month-by-month breakdown for these terms at their own monthly payment.
    pub fn schedule(&self) -> Schedule {
        schedule::generate(
            self.principal,
            self.months,
            self.monthly_payment(),
            self.annual_rate_percent,
        )
    }
}

/// Convert an annual percentage rate into a monthly fractional rate.
#[inline]
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Fixed monthly payment for a loan.
///
/// Returns `0.0` when any input is NaN, `principal <= 0`, `months <= 0` or
/// `annual_rate_percent < 0`. A zero rate splits the principal evenly.
pub fn monthly_payment(principal: f64, months: i32, annual_rate_percent: f64) -> f64 {
    if !LoanTerms::new(principal, months, annual_rate_percent).is_valid() {
        return 0.0;
    }

    let rate = monthly_rate(annual_rate_percent);
    let compound_factor = (1.0 + rate).powi(months);

    if compound_factor == 1.0 {
        // Rate too small to register in 1 + r
        return principal / months as f64;
    }
    if compound_factor.is_infinite() {
        // Long terms converge on paying only the interest
        return principal * rate;
    }

    principal * rate * compound_factor / (compound_factor - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_payment() {
        let payment = monthly_payment(100_000.0, 12, 10.0);
        assert!(
            (payment - 8791.59).abs() < 0.01,
            "Expected ~8791.59, got {payment:.4}"
        );
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(monthly_payment(12_000.0, 12, 0.0), 1000.0);
        assert_eq!(monthly_payment(10_000.0, 3, 0.0), 10_000.0 / 3.0);
    }

    #[test]
    fn test_invalid_inputs_yield_zero() {
        assert_eq!(monthly_payment(f64::NAN, 12, 10.0), 0.0);
        assert_eq!(monthly_payment(100_000.0, 12, f64::NAN), 0.0);
        assert_eq!(monthly_payment(100_000.0, 0, 10.0), 0.0);
        assert_eq!(monthly_payment(100_000.0, -6, 10.0), 0.0);
        assert_eq!(monthly_payment(100_000.0, 12, -1.0), 0.0);
        assert_eq!(monthly_payment(-100_000.0, 12, 10.0), 0.0);
        assert_eq!(monthly_payment(0.0, 12, 10.0), 0.0);
    }

    #[test]
    fn test_single_month_repays_principal_plus_one_month_interest() {
        let payment = monthly_payment(1_000.0, 1, 12.0);
        assert!((payment - 1_010.0).abs() < 1e-9);
    }

    #[test]
    fn test_payment_exceeds_straight_line_when_rate_positive() {
        let principal = 50_000.0;
        let months = 36;
        let payment = monthly_payment(principal, months, 3.0);
        assert!(payment > principal / months as f64);
    }

    #[test]
    fn test_payment_grows_with_rate() {
        let low = monthly_payment(50_000.0, 24, 2.0);
        let high = monthly_payment(50_000.0, 24, 5.0);
        assert!(high > low);
    }

    #[test]
    fn test_loan_terms_matches_free_function() {
        let terms = LoanTerms::new(80_000.0, 48, 3.0);
        assert!(terms.is_valid());
        assert_eq!(terms.monthly_payment(), monthly_payment(80_000.0, 48, 3.0));
        assert_eq!(terms.schedule().len(), 48);
    }

    #[test]
    fn test_very_long_terms_stay_finite() {
        let perpetual = 100_000.0 * monthly_rate(5.0);
        for months in [150_000, 200_000, 1_000_000, i32::MAX] {
            let payment = monthly_payment(100_000.0, months, 5.0);
            assert!(payment.is_finite(), "{months} months gave {payment}");
            assert!((payment - perpetual).abs() < 1e-6);
        }
    }

    #[test]
    fn test_negligible_rate_is_straight_line() {
        assert_eq!(monthly_payment(12_000.0, 12, 1e-20), 1000.0);
    }

    #[test]
    fn test_monthly_rate() {
        assert!((monthly_rate(12.0) - 0.01).abs() < 1e-15);
        assert_eq!(monthly_rate(0.0), 0.0);
    }
}
