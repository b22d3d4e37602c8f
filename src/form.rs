//! Form state
//!
//! Holds the three date fields, their out-of-range flags and the latest
//! calculation. Every transition takes the state by value and returns the next
//! one; nothing else is mutated.

use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use tracing::{debug, warn};

use crate::date::parse_field;
use crate::duration::{calculate, Calculation};
use crate::error::{Error, Result};

/// Shown in place of a result before the first submission
pub const PLACEHOLDER: &str = "--";

/// Shown in place of a result when the fields do not name a date
pub const NOT_A_NUMBER: &str = "NaN";

/// One of the three date fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 3] = [Field::Day, Field::Month, Field::Year];

    /// Lowercase identifier, e.g. `day`
    pub fn name(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
        }
    }

    /// Label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Day => "Day",
            Field::Month => "Month",
            Field::Year => "Year",
        }
    }

    /// Hint shown while the input is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Day => "DD",
            Field::Month => "MM",
            Field::Year => "YYYY",
        }
    }

    /// Largest value that is not flagged
    pub fn max(self, current_year: i32) -> i64 {
        match self {
            Field::Day => 31,
            Field::Month => 12,
            Field::Year => i64::from(current_year),
        }
    }

    /// Whether a parsed value exceeds this field's bound
    ///
    /// There is no lower bound, and an unparseable value is never flagged.
    pub fn is_out_of_range(self, value: Option<i64>, current_year: i32) -> bool {
        value.is_some_and(|v| v > self.max(current_year))
    }

    /// Next field in form order, wrapping around
    pub fn next(self) -> Field {
        match self {
            Field::Day => Field::Month,
            Field::Month => Field::Year,
            Field::Year => Field::Day,
        }
    }

    /// Previous field in form order, wrapping around
    pub fn prev(self) -> Field {
        match self {
            Field::Day => Field::Year,
            Field::Month => Field::Day,
            Field::Year => Field::Month,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw values of the three fields
///
/// `None` marks text that did not parse as an integer. No calendar validity
/// is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

impl Default for DateParts {
    fn default() -> Self {
        Self {
            day: Some(0),
            month: Some(0),
            year: Some(0),
        }
    }
}

impl DateParts {
    pub fn get(&self, field: Field) -> Option<i64> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    fn set(&mut self, field: Field, value: Option<i64>) {
        match field {
            Field::Day => self.day = value,
            Field::Month => self.month = value,
            Field::Year => self.year = value,
        }
    }
}

/// Per-field out-of-range flags; `true` means the field exceeds its bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityFlags {
    pub day: bool,
    pub month: bool,
    pub year: bool,
}

impl ValidityFlags {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    fn set(&mut self, field: Field, flagged: bool) {
        match field {
            Field::Day => self.day = flagged,
            Field::Month => self.month = flagged,
            Field::Year => self.year = flagged,
        }
    }

    /// Whether any field is flagged
    pub fn any(&self) -> bool {
        self.day || self.month || self.year
    }
}

/// Complete state of the form
///
/// `result` is `None` until the first submission and is replaced by every
/// later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub parts: DateParts,
    pub flags: ValidityFlags,
    pub result: Option<Calculation>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply new raw text to one field
    ///
    /// Only `field`'s value and flag change. Flags are cosmetic and never
    /// block a lenient submission.
    pub fn with_field(mut self, field: Field, raw: &str, current_year: i32) -> Self {
        let value = parse_field(raw);
        let flagged = field.is_out_of_range(value, current_year);

        debug!(field = field.name(), raw, ?value, flagged, "field changed");

        self.parts.set(field, value);
        self.flags.set(field, flagged);
        self
    }

    /// Submit the current fields, replacing any previous result
    pub fn submitted(mut self, now: NaiveDateTime) -> Self {
        let calculation = calculate(&self.parts, now);
        debug!(parts = ?self.parts, ?calculation, "submitted");

        self.result = Some(calculation);
        self
    }

    /// Submit only when every field parses and lies within its accepted range
    ///
    /// Day must be within 1..=31, month within 1..=12 and year within
    /// 1..=current year. Fields are checked in form order and the first
    /// failure is returned; the state is left as it was.
    pub fn submitted_strict(self, now: NaiveDateTime) -> Result<Self> {
        let current_year = now.year();

        for field in Field::ALL {
            let Some(value) = self.parts.get(field) else {
                warn!(field = field.name(), "submission rejected: not a number");
                return Err(Error::UnparseableField(field));
            };

            let (min, max) = (1, field.max(current_year));
            if !(min..=max).contains(&value) {
                warn!(field = field.name(), value, min, max, "submission rejected");
                return Err(Error::FieldOutOfRange { field, value, min, max });
            }
        }

        Ok(self.submitted(now))
    }

    /// One-line summary of the latest result, e.g. `24 years, 0 months, 6 days`
    ///
    /// `None` before the first submission.
    pub fn summary(&self) -> Option<String> {
        self.result.as_ref()?;
        let [years, months, days] = self.display_values();
        Some(format!("{} years, {} months, {} days", years, months, days))
    }

    /// Text shown for (years, months, days)
    pub fn display_values(&self) -> [String; 3] {
        match self.result {
            None => [PLACEHOLDER.to_string(), PLACEHOLDER.to_string(), PLACEHOLDER.to_string()],
            Some(Calculation::NotANumber) => [
                NOT_A_NUMBER.to_string(),
                NOT_A_NUMBER.to_string(),
                NOT_A_NUMBER.to_string(),
            ],
            Some(Calculation::Elapsed { duration, .. }) => [
                duration.years.to_string(),
                duration.months.to_string(),
                duration.days.to_string(),
            ],
        }
    }
}
