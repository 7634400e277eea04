//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] row produced by a calculation
//! and the [`PayrollLineItem`] persisted per `(employee, period)` by batch
//! payroll runs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContributorClassification;

/// The output of one payroll calculation for one employee.
///
/// A `PayrollResult` is either upserted as the employee's single "current
/// payroll" row (salary-adjustment flow) or kept as an audit snapshot;
/// monetary values retain full decimal precision — use [`PayrollResult::rounded`]
/// for presentation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ContributorClassification, PayrollResult};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayrollResult {
///     calculation_id: Uuid::new_v4(),
///     calculated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     company_id: "acme".to_string(),
///     contributor_type: ContributorClassification::Saudi,
///     gross_salary: Decimal::ZERO,
///     gosi_wage_base: Decimal::ZERO,
///     gosi_employee: Decimal::ZERO,
///     gosi_employer: Decimal::ZERO,
///     net_salary: Decimal::ZERO,
/// };
/// assert_eq!(result.net_salary, result.gross_salary - result.gosi_employee);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The company the employee belongs to.
    pub company_id: String,
    /// The contributor classification the rates were resolved for.
    pub contributor_type: ContributorClassification,
    /// Basic salary plus all allowances.
    pub gross_salary: Decimal,
    /// The GOSI wage base after applying the ceiling cap.
    pub gosi_wage_base: Decimal,
    /// Employee-side GOSI contribution, deducted from pay.
    pub gosi_employee: Decimal,
    /// Employer-side GOSI contribution; informational, never deducted.
    pub gosi_employer: Decimal,
    /// Gross salary minus the employee-side GOSI contribution.
    pub net_salary: Decimal,
}

impl PayrollResult {
    /// Returns a copy with every monetary field rounded to two decimal
    /// places, for presentation. Mid-calculation values are never rounded.
    pub fn rounded(&self) -> Self {
        Self {
            gross_salary: self.gross_salary.round_dp(2),
            gosi_wage_base: self.gosi_wage_base.round_dp(2),
            gosi_employee: self.gosi_employee.round_dp(2),
            gosi_employer: self.gosi_employer.round_dp(2),
            net_salary: self.net_salary.round_dp(2),
            ..self.clone()
        }
    }
}

/// One row of a payroll batch, persisted per `(employee, period)`.
///
/// Line items are upserted by the batch orchestrator: a fresh calculation
/// either inserts a new row or merges into the stored one field by field
/// (see the batch module's merge rules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// Unique identifier for this line item.
    pub line_id: Uuid,
    /// The employee this line pays.
    pub employee_id: String,
    /// The company the batch belongs to.
    pub company_id: String,
    /// The pay period this line covers.
    pub period_id: String,
    /// Basic salary plus all allowances.
    pub gross_salary: Decimal,
    /// The GOSI wage base after applying the ceiling cap.
    pub gosi_wage_base: Decimal,
    /// Employee-side GOSI contribution.
    pub gosi_employee: Decimal,
    /// Employer-side GOSI contribution.
    pub gosi_employer: Decimal,
    /// Gross salary minus the employee-side GOSI contribution.
    pub net_salary: Decimal,
    /// Payment routing IBAN carried from the compensation record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Payment routing bank name carried from the compensation record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}
