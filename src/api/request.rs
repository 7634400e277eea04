//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationComponents, ContributorClassification};

/// Request body for the `/payroll/calculate` endpoint.
///
/// The compensation component fields are flattened into the body, so a
/// request is the component fields plus the contributor type:
///
/// ```json
/// {
///   "basic_salary": "15000",
///   "housing_allowance": "3000",
///   "contributor_type": "saudi"
/// }
/// ```
///
/// `company_id` scopes the rate lookup (statutory defaults apply when it
/// is omitted or unconfigured) and `as_of` pins the rate date, defaulting
/// to today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The contributor classification to resolve rates for.
    pub contributor_type: ContributorClassification,
    /// The employee the calculation is for, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The company to scope the rate lookup to.
    #[serde(default)]
    pub company_id: Option<String>,
    /// The date to resolve rates as of; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The compensation components, flattened into the body.
    #[serde(flatten)]
    pub components: CompensationComponents,
}
