//! Salary band model and band-compliance checks.
//!
//! A salary band is the advisory minimum/midpoint/maximum envelope attached
//! to a job grade. Out-of-band salaries are flagged with a [`BandWarning`],
//! never rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The advisory salary envelope for a job grade.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryBand;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let band = SalaryBand {
///     minimum_salary: Decimal::from_str("8000").unwrap(),
///     midpoint_salary: Decimal::from_str("12000").unwrap(),
///     maximum_salary: Decimal::from_str("16000").unwrap(),
/// };
/// assert!(band.contains(Decimal::from_str("10000").unwrap()));
/// assert!(!band.contains(Decimal::from_str("17000").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    /// The minimum salary of the band (inclusive).
    pub minimum_salary: Decimal,
    /// The midpoint salary of the band, used for compa-ratio reporting.
    pub midpoint_salary: Decimal,
    /// The maximum salary of the band (inclusive).
    pub maximum_salary: Decimal,
}

/// The direction in which a salary falls outside its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandViolation {
    /// The proposed basic salary is below the band minimum.
    BelowMinimum,
    /// The proposed basic salary is above the band maximum.
    AboveMaximum,
}

/// An advisory warning raised when a proposed salary falls outside its band.
///
/// Warnings are attached to the change outcome so administrators can see
/// them; they never block the change from being recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandWarning {
    /// Which side of the band was violated.
    pub violation: BandViolation,
    /// The proposed basic salary that triggered the warning.
    pub basic_salary: Decimal,
    /// The band minimum at the time of the check.
    pub minimum_salary: Decimal,
    /// The band maximum at the time of the check.
    pub maximum_salary: Decimal,
}

impl BandWarning {
    /// Returns a human-readable description of the warning.
    pub fn message(&self) -> String {
        match self.violation {
            BandViolation::BelowMinimum => format!(
                "Basic salary {} is below the band minimum {}",
                self.basic_salary, self.minimum_salary
            ),
            BandViolation::AboveMaximum => format!(
                "Basic salary {} is above the band maximum {}",
                self.basic_salary, self.maximum_salary
            ),
        }
    }
}

impl SalaryBand {
    /// Checks whether a basic salary falls within the band (inclusive).
    pub fn contains(&self, basic_salary: Decimal) -> bool {
        basic_salary >= self.minimum_salary && basic_salary <= self.maximum_salary
    }

    /// Checks a proposed basic salary against the band.
    ///
    /// Returns `None` when the salary is inside the band, or a
    /// [`BandWarning`] describing the violation otherwise.
    pub fn check(&self, basic_salary: Decimal) -> Option<BandWarning> {
        let violation = if basic_salary < self.minimum_salary {
            BandViolation::BelowMinimum
        } else if basic_salary > self.maximum_salary {
            BandViolation::AboveMaximum
        } else {
            return None;
        };

        Some(BandWarning {
            violation,
            basic_salary,
            minimum_salary: self.minimum_salary,
            maximum_salary: self.maximum_salary,
        })
    }

    /// Returns the salary as a percentage of the band midpoint.
    ///
    /// Used only in reporting, never in core calculation. Returns `None`
    /// when the midpoint is zero.
    pub fn compa_ratio(&self, basic_salary: Decimal) -> Option<Decimal> {
        if self.midpoint_salary.is_zero() {
            return None;
        }
        Some(basic_salary / self.midpoint_salary * Decimal::ONE_HUNDRED)
    }
}
