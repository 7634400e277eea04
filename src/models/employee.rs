//! Employee model and contributor classification.
//!
//! This module defines the Employee struct consumed from the relational
//! store and the GOSI contributor classification derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CompensationComponents, SalaryBand};

/// GOSI contributor classification, determining which rate row applies.
///
/// `SaudiPrEligible` is an extension point for Saudi permanent-residency
/// treatment; it currently resolves to the same statutory rates as `Saudi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributorClassification {
    /// Saudi national.
    Saudi,
    /// Non-Saudi employee.
    NonSaudi,
    /// Saudi permanent-residency eligible contributor.
    SaudiPrEligible,
}

impl ContributorClassification {
    /// Derives the classification from a free-form nationality string.
    ///
    /// An employee is classified as Saudi when the nationality field
    /// case-insensitively contains "saudi". This rule is deliberately
    /// coarse for edge cases such as dual nationals; see DESIGN.md for the
    /// planned enumerated replacement.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::ContributorClassification;
    ///
    /// assert_eq!(
    ///     ContributorClassification::from_nationality("Saudi Arabia"),
    ///     ContributorClassification::Saudi
    /// );
    /// assert_eq!(
    ///     ContributorClassification::from_nationality("Egyptian"),
    ///     ContributorClassification::NonSaudi
    /// );
    /// ```
    pub fn from_nationality(nationality: &str) -> Self {
        if nationality.to_lowercase().contains("saudi") {
            Self::Saudi
        } else {
            Self::NonSaudi
        }
    }

    /// Parses a classification from its wire representation.
    ///
    /// Accepts the same snake_case tokens used in JSON ("saudi",
    /// "non_saudi", "saudi_pr_eligible").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "saudi" => Some(Self::Saudi),
            "non_saudi" => Some(Self::NonSaudi),
            "saudi_pr_eligible" => Some(Self::SaudiPrEligible),
            _ => None,
        }
    }
}

impl fmt::Display for ContributorClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Saudi => "saudi",
            Self::NonSaudi => "non_saudi",
            Self::SaudiPrEligible => "saudi_pr_eligible",
        };
        f.write_str(token)
    }
}

/// Employment status of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and paid.
    Active,
    /// On unpaid leave; excluded from payroll runs.
    OnLeave,
    /// No longer employed.
    Terminated,
}

/// An employee record as consumed from the relational store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The company the employee belongs to.
    pub company_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// Free-form nationality string (e.g., "Saudi Arabia").
    pub nationality: String,
    /// Explicit Saudi flag; when present it overrides nationality matching.
    #[serde(default)]
    pub is_saudi: Option<bool>,
    /// Employment status.
    pub status: EmployeeStatus,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The department the employee belongs to, if assigned.
    #[serde(default)]
    pub department_id: Option<String>,
    /// The employee's manager, if assigned.
    #[serde(default)]
    pub manager_id: Option<String>,
    /// Current compensation components (zero-filled when not yet set).
    #[serde(default)]
    pub compensation: CompensationComponents,
    /// The salary band assigned via the employee's job grade, if any.
    #[serde(default)]
    pub salary_band: Option<SalaryBand>,
}

impl Employee {
    /// Returns true if the employee participates in payroll runs.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns the GOSI contributor classification for this employee.
    ///
    /// The explicit `is_saudi` flag wins when present; otherwise the
    /// nationality string is matched.
    pub fn classification(&self) -> ContributorClassification {
        match self.is_saudi {
            Some(true) => ContributorClassification::Saudi,
            Some(false) => ContributorClassification::NonSaudi,
            None => ContributorClassification::from_nationality(&self.nationality),
        }
    }
}
