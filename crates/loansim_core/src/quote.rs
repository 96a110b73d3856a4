//! Summary figures of a simulated loan.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::amortization::LoanTerms;
use crate::rate::annual_rate;
use crate::schedule::Schedule;

/// The headline numbers shown for a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub terms: LoanTerms,
    /// Fixed installment paid every month
    pub monthly_payment: f64,
    /// Sum of all installments
    pub total_payable: f64,
    /// Total paid above the principal
    pub total_interest: f64,
}

impl LoanQuote {
    pub fn new(terms: LoanTerms) -> Self {
        let monthly_payment = terms.monthly_payment();
        let total_payable = monthly_payment * terms.months.max(0) as f64;

        Self {
            terms,
            monthly_payment,
            total_payable,
            total_interest: total_payable - terms.principal,
        }
    }

    /// Price a loan for a borrower, selecting the rate tier from their age on `today`.
    pub fn for_borrower(
        principal: f64,
        months: i32,
        birth_date: Option<Date>,
        today: Date,
    ) -> Self {
        let rate = annual_rate(birth_date, today);
        Self::new(LoanTerms::new(principal, months, rate))
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.terms.annual_rate_percent
    }

    /// Month-by-month breakdown at this quote's monthly payment.
    pub fn schedule(&self) -> Schedule {
        crate::schedule::generate(
            self.terms.principal,
            self.terms.months,
            self.monthly_payment,
            self.terms.annual_rate_percent,
        )
    }
}
