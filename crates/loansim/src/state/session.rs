//! Data collected across the wizard steps.
//!
//! Serialized as JSON with the field names `birthDate` and `loanData` so a
//! saved session reads the same as the browser version of the simulator.

use jiff::civil::Date;
use loansim_core::{LoanQuote, MAX_TERM_MONTHS, parse_brl};
use serde::{Deserialize, Serialize};

/// Loan amount and term as entered on the loan details step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanData {
    /// Amount exactly as typed (e.g. "100.000,00")
    pub amount: Option<String>,
    /// Term in months
    pub term: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSession {
    #[serde(default)]
    pub birth_date: Option<Date>,
    #[serde(default)]
    pub loan_data: LoanData,
}

impl SimulationSession {
    /// Whether every step before the summary has been filled in
    pub fn is_complete(&self) -> bool {
        self.birth_date.is_some() && self.loan_data.amount.is_some() && self.loan_data.term.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Price the stored loan for the stored borrower on `today`.
    ///
    /// `None` until the session is complete, or when a saved term is out of range.
    pub fn quote(&self, today: Date) -> Option<LoanQuote> {
        if !self.is_complete() {
            return None;
        }
        let principal = self.loan_data.amount.as_deref().map(parse_brl)?;
        let term = self.loan_data.term.filter(|&term| term <= MAX_TERM_MONTHS)?;
        let months = i32::try_from(term).ok()?;
        Some(LoanQuote::for_borrower(
            principal,
            months,
            self.birth_date,
            today,
        ))
    }
}
