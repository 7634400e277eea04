//! Rate configuration types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ContributorClassification;

/// Where a rate configuration row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Entered by an administrator.
    Manual,
    /// Synced from the external GOSI rate service.
    ExternalApi,
}

/// One GOSI rate configuration row.
///
/// Rows are versioned by `effective_from` and never deleted; at most one
/// row per `(company_id, contributor_type)` is active at a time. The
/// external sync service overwrites rows with `source = external_api`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GosiRateConfig {
    /// The company this row applies to.
    pub company_id: String,
    /// The contributor classification this row applies to.
    pub contributor_type: ContributorClassification,
    /// Employee-side contribution rate, in `[0, 1]`.
    pub employee_rate: Decimal,
    /// Employer-side contribution rate, in `[0, 1]`.
    pub employer_rate: Decimal,
    /// The wage ceiling the contribution base is capped at.
    pub max_wage_ceiling: Decimal,
    /// The date this row takes effect.
    pub effective_from: NaiveDate,
    /// Whether this row is the active one for its key.
    pub is_active: bool,
    /// Where the row came from.
    pub source: RateSource,
}

impl GosiRateConfig {
    /// Validates the row's rates and ceiling.
    pub fn validate(&self) -> EngineResult<()> {
        validate_rate("employee_rate", self.employee_rate)?;
        validate_rate("employer_rate", self.employer_rate)?;
        validate_ceiling(self.max_wage_ceiling)
    }
}

/// A resolved set of rates, ready to be passed into the calculator.
///
/// Resolution (table lookup or statutory fallback) happens before
/// calculation, keeping the calculator itself free of I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSet {
    /// Employee-side contribution rate, in `[0, 1]`.
    pub employee_rate: Decimal,
    /// Employer-side contribution rate, in `[0, 1]`.
    pub employer_rate: Decimal,
    /// The wage ceiling the contribution base is capped at.
    pub wage_ceiling: Decimal,
}

impl RateSet {
    /// Validates rates are in `[0, 1]` and the ceiling is positive.
    pub fn validate(&self) -> EngineResult<()> {
        validate_rate("employee_rate", self.employee_rate)?;
        validate_rate("employer_rate", self.employer_rate)?;
        validate_ceiling(self.wage_ceiling)
    }
}

impl From<&GosiRateConfig> for RateSet {
    fn from(row: &GosiRateConfig) -> Self {
        Self {
            employee_rate: row.employee_rate,
            employer_rate: row.employer_rate,
            wage_ceiling: row.max_wage_ceiling,
        }
    }
}

fn validate_rate(field: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::Validation {
            field: field.to_string(),
            message: "must be between 0 and 1".to_string(),
        });
    }
    Ok(())
}

fn validate_ceiling(ceiling: Decimal) -> EngineResult<()> {
    if ceiling <= Decimal::ZERO {
        return Err(EngineError::Validation {
            field: "wage_ceiling".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
