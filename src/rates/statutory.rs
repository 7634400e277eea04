//! Hard-coded statutory default rates.
//!
//! Used when no configured rate row matches and fallback is enabled. The
//! values mirror the published GOSI contribution schedule: Saudi nationals
//! contribute 9.75% employee-side and 11.75% employer-side; non-Saudi
//! employees contribute nothing employee-side and 2% employer-side
//! (occupational hazards only). Both are capped at a SAR 45,000 wage
//! ceiling.

use rust_decimal::Decimal;

use crate::models::ContributorClassification;

use super::types::RateSet;

/// Returns the statutory wage ceiling (SAR 45,000).
pub fn statutory_wage_ceiling() -> Decimal {
    Decimal::new(45_000, 0)
}

/// Returns the statutory default rates for a contributor classification.
///
/// `SaudiPrEligible` currently resolves to the Saudi schedule.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ContributorClassification;
/// use payroll_engine::rates::statutory_rates;
/// use rust_decimal::Decimal;
///
/// let rates = statutory_rates(ContributorClassification::Saudi);
/// assert_eq!(rates.employee_rate, Decimal::new(975, 4)); // 9.75%
/// assert_eq!(rates.employer_rate, Decimal::new(1175, 4)); // 11.75%
/// ```
pub fn statutory_rates(classification: ContributorClassification) -> RateSet {
    match classification {
        ContributorClassification::Saudi | ContributorClassification::SaudiPrEligible => RateSet {
            employee_rate: Decimal::new(975, 4),
            employer_rate: Decimal::new(1175, 4),
            wage_ceiling: statutory_wage_ceiling(),
        },
        ContributorClassification::NonSaudi => RateSet {
            employee_rate: Decimal::ZERO,
            employer_rate: Decimal::new(2, 2),
            wage_ceiling: statutory_wage_ceiling(),
        },
    }
}
