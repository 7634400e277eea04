//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type used as the calculation
//! context for batch payroll runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pay period against which a payroll batch is run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     id: "2026-01".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Unique identifier for the period (e.g., "2026-01").
    pub id: String,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The date rates are resolved against for this period.
    ///
    /// Rates effective mid-period apply to the whole period, so the period
    /// end date is used.
    pub fn rate_resolution_date(&self) -> NaiveDate {
        self.end_date
    }
}
