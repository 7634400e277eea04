//! The payroll calculator.
//!
//! Combines a compensation snapshot with a resolved GOSI rate set to
//! produce gross salary, the capped wage base, both contributions, and net
//! salary. The function is pure: identical inputs always yield
//! decimal-identical outputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::CompensationComponents;
use crate::rates::RateSet;

use super::gross::gross_of;
use super::wage_base::{capped_wage, gosi_wage_base};

/// The numeric output of one payroll calculation.
///
/// Callers attach identity and timestamps to produce a persisted
/// [`crate::models::PayrollResult`]; the breakdown itself carries only the
/// computed amounts, at full decimal precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Basic salary plus all allowances.
    pub gross_salary: Decimal,
    /// Basic salary plus housing allowance, before the ceiling cap.
    pub gosi_base: Decimal,
    /// The wage base after applying the ceiling cap.
    pub gosi_wage_base: Decimal,
    /// Employee-side GOSI contribution (`gosi_wage_base * employee_rate`).
    pub gosi_employee: Decimal,
    /// Employer-side GOSI contribution; informational, never deducted.
    pub gosi_employer: Decimal,
    /// Gross salary minus the employee-side contribution.
    pub net_salary: Decimal,
}

impl PayrollBreakdown {
    /// Returns a copy rounded to two decimal places, for presentation.
    pub fn rounded(&self) -> Self {
        Self {
            gross_salary: self.gross_salary.round_dp(2),
            gosi_base: self.gosi_base.round_dp(2),
            gosi_wage_base: self.gosi_wage_base.round_dp(2),
            gosi_employee: self.gosi_employee.round_dp(2),
            gosi_employer: self.gosi_employer.round_dp(2),
            net_salary: self.net_salary.round_dp(2),
        }
    }
}

/// Calculates payroll for one employee from components and resolved rates.
///
/// The order of operations is fixed to reproduce statutory results:
/// 1. gross salary = basic + housing + transportation + food + mobile + other
/// 2. GOSI base = basic + housing (other allowances excluded by statute)
/// 3. GOSI wage = min(base, ceiling)
/// 4. employee contribution = wage * employee rate
/// 5. employer contribution = wage * employer rate
/// 6. net salary = gross - employee contribution
///
/// All arithmetic is decimal; rounding happens only at presentation time.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::Validation`] when any monetary
/// input is negative, a rate is outside `[0, 1]`, or the ceiling is not
/// positive.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate;
/// use payroll_engine::models::CompensationComponents;
/// use payroll_engine::rates::RateSet;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = CompensationComponents {
///     basic_salary: Decimal::from_str("15000").unwrap(),
///     housing_allowance: Decimal::from_str("3000").unwrap(),
///     transportation_allowance: Decimal::from_str("1000").unwrap(),
///     other_allowances: Decimal::from_str("500").unwrap(),
///     ..Default::default()
/// };
/// let rates = RateSet {
///     employee_rate: Decimal::from_str("0.0975").unwrap(),
///     employer_rate: Decimal::from_str("0.1175").unwrap(),
///     wage_ceiling: Decimal::from_str("45000").unwrap(),
/// };
///
/// let breakdown = calculate(&components, &rates).unwrap();
/// assert_eq!(breakdown.gross_salary, Decimal::from_str("19500").unwrap());
/// assert_eq!(breakdown.gosi_employee, Decimal::from_str("1755.0000").unwrap());
/// assert_eq!(breakdown.net_salary, Decimal::from_str("17745.0000").unwrap());
/// ```
pub fn calculate(
    components: &CompensationComponents,
    rates: &RateSet,
) -> EngineResult<PayrollBreakdown> {
    rates.validate()?;

    let gross_salary = gross_of(components)?;
    let gosi_base = gosi_wage_base(components);
    let wage = capped_wage(gosi_base, rates.wage_ceiling);
    let gosi_employee = wage * rates.employee_rate;
    let gosi_employer = wage * rates.employer_rate;
    let net_salary = gross_salary - gosi_employee;

    Ok(PayrollBreakdown {
        gross_salary,
        gosi_base,
        gosi_wage_base: wage,
        gosi_employee,
        gosi_employer,
        net_salary,
    })
}
