//! Age Calculator Library
//!
//! Computes the time elapsed between a date entered as three loose fields
//! (day, month, year) and the current date. This library provides
//! functionality to:
//! - Parse and flag day, month and year fields independently
//! - Roll out-of-range fields over into a real calendar date
//! - Split the elapsed days into approximate years, months and days
//! - Drive an interactive terminal form
//!
//! # Example
//!
//! ```
//! use age_calculator::form::{Field, FormState};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! let state = FormState::new()
//!     .with_field(Field::Day, "1", 2024)
//!     .with_field(Field::Month, "1", 2024)
//!     .with_field(Field::Year, "2000", 2024)
//!     .submitted(now);
//!
//! assert_eq!(state.display_values(), ["24", "0", "6"]);
//! ```

pub mod error;
pub mod date;
pub mod duration;
pub mod form;
pub mod logging;
pub mod tui;

// Re-export commonly used items
pub use error::{Error, Result};
pub use duration::{calculate, Calculation, DurationResult};
pub use form::{DateParts, Field, FormState, ValidityFlags};
