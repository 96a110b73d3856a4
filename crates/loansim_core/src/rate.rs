//! Age-based annual interest rate tiers.
//!
//! The borrower's age in whole years on the evaluation date selects one of
//! four tiers. Missing or future birth dates are not errors; they simply
//! select no rate (`0.0`).

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Interest rate tier selected by the borrower's age (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateTier {
    /// Up to 25 years old
    Young,
    /// 26 to 40 years old
    Adult,
    /// 41 to 60 years old
    Mature,
    /// Over 60 years old
    Senior,
}

impl RateTier {
    pub const ALL: [RateTier; 4] = [
        RateTier::Young,
        RateTier::Adult,
        RateTier::Mature,
        RateTier::Senior,
    ];

    pub fn for_age(age: i32) -> Self {
        match age {
            ..=25 => RateTier::Young,
            26..=40 => RateTier::Adult,
            41..=60 => RateTier::Mature,
            _ => RateTier::Senior,
        }
    }

    /// Annual interest rate in percent (e.g. `5.0` for 5% a.a.)
    pub fn annual_rate_percent(&self) -> f64 {
        match self {
            RateTier::Young => 5.0,
            RateTier::Adult => 3.0,
            RateTier::Mature => 2.0,
            RateTier::Senior => 4.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateTier::Young => "até 25 anos",
            RateTier::Adult => "26 a 40 anos",
            RateTier::Mature => "41 a 60 anos",
            RateTier::Senior => "acima de 60 anos",
        }
    }
}

/// Age in whole years on `today`.
///
/// One year is subtracted from the naive year difference when this year's
/// birthday has not happened yet. Negative for birth dates after `today`.
pub fn age_in_years(birth_date: Date, today: Date) -> i32 {
    let mut years = today.year() as i32 - birth_date.year() as i32;

    if today.month() < birth_date.month()
        || (today.month() == birth_date.month() && today.day() < birth_date.day())
    {
        years -= 1;
    }

    years
}

/// Annual interest rate (percent) for a borrower born on `birth_date`.
///
/// Returns `0.0` when the birth date is missing or after `today`.
pub fn annual_rate(birth_date: Option<Date>, today: Date) -> f64 {
    match birth_date {
        Some(birth) if birth <= today => {
            RateTier::for_age(age_in_years(birth, today)).annual_rate_percent()
        }
        _ => 0.0,
    }
}
