//! Elapsed time calculation
//!
//! Elapsed whole days are split into years, months and days using fixed
//! approximations (a 365-day year and a 30.34-day month). Leap years and real
//! month lengths are ignored, so results differ from a calendar-exact diff.

use std::fmt;

use chrono::NaiveDateTime;

use crate::date::{candidate_date, elapsed_days};
use crate::form::DateParts;

/// Days in an approximate year
pub const DAYS_IN_YEAR: f64 = 365.0;

/// Days in an approximate month
pub const DAYS_IN_MONTH: f64 = 30.34;

/// Elapsed time split into years, months and days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationResult {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Outcome of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    /// The fields named a real date
    Elapsed {
        /// Whole days between the date and the reference instant
        days: i64,
        duration: DurationResult,
    },
    /// A field was unparseable or the date is outside the calendar
    NotANumber,
}

impl Calculation {
    /// The decomposed duration, if any
    pub fn duration(&self) -> Option<DurationResult> {
        match self {
            Calculation::Elapsed { duration, .. } => Some(*duration),
            Calculation::NotANumber => None,
        }
    }
}

/// Split a whole-day count into (years, months, days)
///
/// Floors at every step and subtracts as it goes. Negative counts are not
/// special-cased: -10 days becomes -1 years, 11 months, 21 days.
pub fn decompose(elapsed_days: i64) -> DurationResult {
    let mut remaining = elapsed_days as f64;

    let years = (remaining / DAYS_IN_YEAR).floor();
    remaining -= years * DAYS_IN_YEAR;

    let months = (remaining / DAYS_IN_MONTH).floor();
    remaining -= months * DAYS_IN_MONTH;

    let days = remaining.floor();

    DurationResult {
        years: years as i64,
        months: months as i64,
        days: days as i64,
    }
}

/// Compute the time elapsed from the date the fields name until `now`
pub fn calculate(parts: &DateParts, now: NaiveDateTime) -> Calculation {
    match candidate_date(parts) {
        Some(candidate) => {
            let days = elapsed_days(candidate, now);
            Calculation::Elapsed {
                days,
                duration: decompose(days),
            }
        }
        None => Calculation::NotANumber,
    }
}

impl fmt::Display for DurationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months, {} days", self.years, self.months, self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn result(years: i64, months: i64, days: i64) -> DurationResult {
        DurationResult { years, months, days }
    }

    #[test]
    fn test_decompose_zero() {
        assert_eq!(decompose(0), result(0, 0, 0));
    }

    #[test]
    fn test_decompose_whole_years() {
        assert_eq!(decompose(365), result(1, 0, 0));
        assert_eq!(decompose(730), result(2, 0, 0));
        assert_eq!(decompose(8766), result(24, 0, 6));
    }

    #[test]
    fn test_decompose_uses_fractional_month() {
        assert_eq!(decompose(30), result(0, 0, 30));
        assert_eq!(decompose(31), result(0, 1, 0));
        assert_eq!(decompose(100), result(0, 3, 8));
        assert_eq!(decompose(364), result(0, 11, 30));
    }

    #[test]
    fn test_decompose_negative() {
        assert_eq!(decompose(-1), result(-1, 11, 30));
        assert_eq!(decompose(-10), result(-1, 11, 21));
        assert_eq!(decompose(-365), result(-1, 0, 0));
    }

    #[test]
    fn test_calculate_known_date() {
        let parts = DateParts {
            day: Some(1),
            month: Some(1),
            year: Some(2000),
        };

        let calculation = calculate(&parts, midnight(2024, 1, 1));
        assert_eq!(
            calculation,
            Calculation::Elapsed {
                days: 8766,
                duration: result(24, 0, 6),
            }
        );
    }

    #[test]
    fn test_calculate_future_date() {
        let parts = DateParts {
            day: Some(1),
            month: Some(1),
            year: Some(2030),
        };

        match calculate(&parts, midnight(2024, 1, 1)) {
            Calculation::Elapsed { days, duration } => {
                assert!(days < 0);
                assert!(duration.years < 0);
                assert!(duration.months >= 0);
                assert!(duration.days >= 0);
            }
            Calculation::NotANumber => panic!("Expected Elapsed"),
        }
    }

    #[test]
    fn test_calculate_not_a_number() {
        let parts = DateParts {
            day: None,
            month: Some(1),
            year: Some(2000),
        };

        let calculation = calculate(&parts, midnight(2024, 1, 1));
        assert_eq!(calculation, Calculation::NotANumber);
        assert_eq!(calculation.duration(), None);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let parts = DateParts {
            day: Some(14),
            month: Some(6),
            year: Some(1992),
        };
        let now = midnight(2025, 11, 2);

        assert_eq!(calculate(&parts, now), calculate(&parts, now));
    }

    #[test]
    fn test_display() {
        assert_eq!(result(24, 0, 6).to_string(), "24 years, 0 months, 6 days");
    }
}
