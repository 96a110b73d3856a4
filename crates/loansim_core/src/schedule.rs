//! Month-by-month amortization schedules.
//!
//! A [`Schedule`] is produced by a single fold over the periods of a loan,
//! carrying the remaining principal forward. Chart consumers read it through
//! two views: [`Schedule::bar_series`] (principal, interest and total per
//! month) and [`Schedule::line_series`] (interest per month). Both views are
//! projections of the same entries, so their interest figures are identical.

use serde::{Deserialize, Serialize};

use crate::amortization::monthly_rate;

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based period number
    pub period: u32,
    /// Portion of the payment that reduces the principal
    pub principal: f64,
    /// Portion of the payment that pays interest
    pub interest: f64,
    /// Total payment for the period (`principal + interest`)
    pub payment: f64,
}

/// Bar chart point: the split of one month's payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    /// Month label ("1", "2", ...)
    pub month: String,
    pub principal: f64,
    pub interest: f64,
    pub payment: f64,
}

/// Line chart point: interest paid in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Month label ("1", "2", ...)
    pub month: String,
    pub interest: f64,
}

/// Chronologically ordered amortization entries, one per month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    entries: Vec<AmortizationEntry>,
    remaining_balance: f64,
}

impl Schedule {
    pub fn entries(&self) -> &[AmortizationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AmortizationEntry> {
        self.entries.iter()
    }

    /// Principal still owed after the last period.
    ///
    /// Close to zero when the schedule was generated with the loan's own
    /// monthly payment.
    pub fn remaining_balance(&self) -> f64 {
        self.remaining_balance
    }

    pub fn total_interest(&self) -> f64 {
        self.entries.iter().map(|e| e.interest).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.entries.iter().map(|e| e.payment).sum()
    }

    /// Principal, interest and total payment per month.
    pub fn bar_series(&self) -> Vec<BarPoint> {
        self.entries
            .iter()
            .map(|e| BarPoint {
                month: e.period.to_string(),
                principal: e.principal,
                interest: e.interest,
                payment: e.payment,
            })
            .collect()
    }

    /// Interest per month.
    pub fn line_series(&self) -> Vec<LinePoint> {
        self.entries
            .iter()
            .map(|e| LinePoint {
                month: e.period.to_string(),
                interest: e.interest,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a AmortizationEntry;
    type IntoIter = std::slice::Iter<'a, AmortizationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Build the month-by-month schedule of a loan.
///
/// Returns an empty schedule when `months <= 0`. Interest for each period is
/// charged on the principal remaining after the previous period; whatever is
/// left of `monthly_payment` amortizes the principal.
pub fn generate(
    principal: f64,
    months: i32,
    monthly_payment: f64,
    annual_rate_percent: f64,
) -> Schedule {
    if months <= 0 {
        return Schedule::default();
    }

    let rate = monthly_rate(annual_rate_percent);
    let mut remaining = principal;
    let mut entries = Vec::with_capacity(months as usize);

    for period in 1..=months as u32 {
        let interest = remaining * rate;
        let principal_part = monthly_payment - interest;
        remaining -= principal_part;

        entries.push(AmortizationEntry {
            period,
            principal: principal_part,
            interest,
            payment: principal_part + interest,
        });
    }

    Schedule {
        entries,
        remaining_balance: remaining,
    }
}

/// Bar chart data for a loan; shorthand for `generate(..).bar_series()`.
pub fn bar_chart_data(
    principal: f64,
    months: i32,
    monthly_payment: f64,
    annual_rate_percent: f64,
) -> Vec<BarPoint> {
    generate(principal, months, monthly_payment, annual_rate_percent).bar_series()
}

/// Line chart data for a loan; shorthand for `generate(..).line_series()`.
pub fn line_chart_data(
    principal: f64,
    months: i32,
    monthly_payment: f64,
    annual_rate_percent: f64,
) -> Vec<LinePoint> {
    generate(principal, months, monthly_payment, annual_rate_percent).line_series()
}
