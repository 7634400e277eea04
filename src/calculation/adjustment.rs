//! Salary-adjustment input-mode transforms.
//!
//! The adjustment form accepts either a percentage increase or an absolute
//! new amount. Both are views of the same linear transform, so converting
//! between them must reproduce the same proposed basic salary.

use rust_decimal::Decimal;

/// Applies a percentage increase to a basic salary (percentage mode).
///
/// `pct` is expressed in percent: `apply_percentage(10000, 5)` yields
/// `10500`. Negative percentages decrease the salary.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::apply_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let new_basic = apply_percentage(
///     Decimal::from_str("10000").unwrap(),
///     Decimal::from_str("5").unwrap(),
/// );
/// assert_eq!(new_basic, Decimal::from_str("10500").unwrap());
/// ```
pub fn apply_percentage(basic_salary: Decimal, pct: Decimal) -> Decimal {
    basic_salary * (Decimal::ONE + pct / Decimal::ONE_HUNDRED)
}

/// Derives the percentage increase between two basic salaries (amount mode).
///
/// Returns zero when the old salary is zero, mirroring the ledger's
/// delta-percentage rule.
pub fn increase_percentage(old_basic: Decimal, new_basic: Decimal) -> Decimal {
    if old_basic.is_zero() {
        return Decimal::ZERO;
    }
    (new_basic - old_basic) / old_basic * Decimal::ONE_HUNDRED
}
