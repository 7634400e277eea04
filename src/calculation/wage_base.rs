//! GOSI wage-base derivation and ceiling cap.

use rust_decimal::Decimal;

use crate::models::CompensationComponents;

/// Returns the uncapped GOSI wage base: basic salary plus housing allowance.
///
/// Transportation, food, mobile and other allowances are excluded from the
/// base by statute, not by oversight.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::gosi_wage_base;
/// use payroll_engine::models::CompensationComponents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = CompensationComponents {
///     basic_salary: Decimal::from_str("15000").unwrap(),
///     housing_allowance: Decimal::from_str("3000").unwrap(),
///     transportation_allowance: Decimal::from_str("1000").unwrap(),
///     ..Default::default()
/// };
/// assert_eq!(gosi_wage_base(&components), Decimal::from_str("18000").unwrap());
/// ```
pub fn gosi_wage_base(components: &CompensationComponents) -> Decimal {
    components.basic_salary + components.housing_allowance
}

/// Caps a wage base at the statutory ceiling: `min(base, ceiling)`.
pub fn capped_wage(base: Decimal, ceiling: Decimal) -> Decimal {
    base.min(ceiling)
}
