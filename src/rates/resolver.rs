//! The GOSI rate resolver.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::ContributorClassification;

use super::statutory::statutory_rates;
use super::table::RateTable;
use super::types::RateSet;

/// Resolves the applicable GOSI rates for a company, contributor
/// classification and date.
///
/// The resolver selects the active row with the latest
/// `effective_from <= as_of` from its [`RateTable`]; when none matches it
/// falls back to the hard-coded statutory defaults unless fallback has
/// been disabled, in which case resolution fails with
/// [`EngineError::ConfigurationMissing`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::models::ContributorClassification;
/// use payroll_engine::rates::{GosiRateResolver, RateTable};
/// use rust_decimal::Decimal;
///
/// let resolver = GosiRateResolver::new(RateTable::new());
/// let rates = resolver
///     .resolve(
///         "acme",
///         ContributorClassification::Saudi,
///         NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     )
///     .unwrap();
/// assert_eq!(rates.employee_rate, Decimal::new(975, 4));
/// ```
#[derive(Debug, Clone)]
pub struct GosiRateResolver {
    table: RateTable,
    fallback_to_statutory: bool,
}

impl GosiRateResolver {
    /// Creates a resolver with statutory fallback enabled.
    pub fn new(table: RateTable) -> Self {
        Self {
            table,
            fallback_to_statutory: true,
        }
    }

    /// Creates a resolver with an explicit fallback policy.
    pub fn with_fallback(table: RateTable, fallback_to_statutory: bool) -> Self {
        Self {
            table,
            fallback_to_statutory,
        }
    }

    /// Returns the underlying rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Returns a mutable reference to the rate table, for administrative
    /// updates and external-service sync.
    pub fn table_mut(&mut self) -> &mut RateTable {
        &mut self.table
    }

    /// Resolves the rates for `(company_id, contributor_type)` as of a date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigurationMissing`] only when no row
    /// matches and statutory fallback is disabled; with fallback enabled
    /// resolution never fails.
    pub fn resolve(
        &self,
        company_id: &str,
        contributor_type: ContributorClassification,
        as_of: NaiveDate,
    ) -> EngineResult<RateSet> {
        if let Some(row) = self.table.active_row(company_id, contributor_type, as_of) {
            return Ok(RateSet::from(row));
        }

        if self.fallback_to_statutory {
            return Ok(statutory_rates(contributor_type));
        }

        warn!(
            company_id = %company_id,
            contributor_type = %contributor_type,
            %as_of,
            "No rate configuration found and statutory fallback is disabled"
        );
        Err(EngineError::ConfigurationMissing {
            company_id: company_id.to_string(),
            contributor_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{GosiRateConfig, RateSource};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_configured_table() -> RateTable {
        let mut table = RateTable::new();
        table
            .upsert(GosiRateConfig {
                company_id: "acme".to_string(),
                contributor_type: ContributorClassification::Saudi,
                employee_rate: dec("0.10"),
                employer_rate: dec("0.12"),
                max_wage_ceiling: dec("50000"),
                effective_from: date(2025, 7, 1),
                is_active: true,
                source: RateSource::ExternalApi,
            })
            .unwrap();
        table
    }

    /// RR-001: configured row wins over statutory defaults
    #[test]
    fn test_configured_row_wins() {
        let resolver = GosiRateResolver::new(create_configured_table());
        let rates = resolver
            .resolve("acme", ContributorClassification::Saudi, date(2026, 1, 1))
            .unwrap();
        assert_eq!(rates.employee_rate, dec("0.10"));
        assert_eq!(rates.employer_rate, dec("0.12"));
        assert_eq!(rates.wage_ceiling, dec("50000"));
    }

    /// RR-002: missing row falls back to statutory defaults
    #[test]
    fn test_missing_row_falls_back_to_statutory() {
        let resolver = GosiRateResolver::new(RateTable::new());

        let saudi = resolver
            .resolve("acme", ContributorClassification::Saudi, date(2026, 1, 1))
            .unwrap();
        assert_eq!(saudi.employee_rate, dec("0.0975"));
        assert_eq!(saudi.employer_rate, dec("0.1175"));
        assert_eq!(saudi.wage_ceiling, dec("45000"));

        let non_saudi = resolver
            .resolve("acme", ContributorClassification::NonSaudi, date(2026, 1, 1))
            .unwrap();
        assert_eq!(non_saudi.employee_rate, Decimal::ZERO);
        assert_eq!(non_saudi.employer_rate, dec("0.02"));
    }

    /// RR-003: disabled fallback surfaces ConfigurationMissing
    #[test]
    fn test_disabled_fallback_is_hard_failure() {
        let resolver = GosiRateResolver::with_fallback(RateTable::new(), false);
        let result =
            resolver.resolve("acme", ContributorClassification::Saudi, date(2026, 1, 1));
        match result.unwrap_err() {
            EngineError::ConfigurationMissing {
                company_id,
                contributor_type,
            } => {
                assert_eq!(company_id, "acme");
                assert_eq!(contributor_type, ContributorClassification::Saudi);
            }
            other => panic!("Expected ConfigurationMissing, got {:?}", other),
        }
    }

    /// RR-004: a row effective after the as-of date is not selected
    #[test]
    fn test_future_row_not_selected() {
        let resolver = GosiRateResolver::new(create_configured_table());
        // Before the configured row takes effect: statutory fallback.
        let rates = resolver
            .resolve("acme", ContributorClassification::Saudi, date(2025, 6, 30))
            .unwrap();
        assert_eq!(rates.employee_rate, dec("0.0975"));
    }

    #[test]
    fn test_other_company_falls_back() {
        let resolver = GosiRateResolver::new(create_configured_table());
        let rates = resolver
            .resolve("globex", ContributorClassification::Saudi, date(2026, 1, 1))
            .unwrap();
        assert_eq!(rates.employee_rate, dec("0.0975"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = GosiRateResolver::new(create_configured_table());
        let first = resolver
            .resolve("acme", ContributorClassification::Saudi, date(2026, 1, 1))
            .unwrap();
        let second = resolver
            .resolve("acme", ContributorClassification::Saudi, date(2026, 1, 1))
            .unwrap();
        assert_eq!(first, second);
    }
}
