//! The GOSI rate configuration table.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::ContributorClassification;

use super::types::GosiRateConfig;

/// In-memory view of the rate configuration table.
///
/// The table maintains the storage-layer uniqueness invariant: at most one
/// active row per `(company_id, contributor_type)`. Upserting a new active
/// row deactivates the previous one; historical rows are retained, never
/// deleted, so past periods can be recomputed.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rows: Vec<GosiRateConfig>,
}

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and inserts a row, enforcing the single-active invariant.
    ///
    /// When the incoming row is active, any currently active row for the
    /// same `(company_id, contributor_type)` is deactivated first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Validation`] when the row's
    /// rates are outside `[0, 1]` or its ceiling is not positive.
    pub fn upsert(&mut self, row: GosiRateConfig) -> EngineResult<()> {
        row.validate()?;

        if row.is_active {
            for existing in self.rows.iter_mut().filter(|r| {
                r.company_id == row.company_id && r.contributor_type == row.contributor_type
            }) {
                existing.is_active = false;
            }
        }

        self.rows.push(row);
        Ok(())
    }

    /// Returns the active row for a key with the latest
    /// `effective_from <= as_of`, if any.
    pub fn active_row(
        &self,
        company_id: &str,
        contributor_type: ContributorClassification,
        as_of: NaiveDate,
    ) -> Option<&GosiRateConfig> {
        self.rows
            .iter()
            .filter(|r| {
                r.is_active
                    && r.company_id == company_id
                    && r.contributor_type == contributor_type
                    && r.effective_from <= as_of
            })
            .max_by_key(|r| r.effective_from)
    }

    /// Returns all rows for a key, newest effective date first.
    pub fn history(
        &self,
        company_id: &str,
        contributor_type: ContributorClassification,
    ) -> Vec<&GosiRateConfig> {
        let mut rows: Vec<&GosiRateConfig> = self
            .rows
            .iter()
            .filter(|r| {
                r.company_id == company_id && r.contributor_type == contributor_type
            })
            .collect();
        rows.sort_by(|a, b| b.effective_from.cmp(&a.effective_from));
        rows
    }

    /// Returns all rows in insertion order.
    pub fn rows(&self) -> &[GosiRateConfig] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateSource;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_row(
        company_id: &str,
        contributor_type: ContributorClassification,
        effective_from: NaiveDate,
        employee_rate: &str,
    ) -> GosiRateConfig {
        GosiRateConfig {
            company_id: company_id.to_string(),
            contributor_type,
            employee_rate: dec(employee_rate),
            employer_rate: dec("0.1175"),
            max_wage_ceiling: dec("45000"),
            effective_from,
            is_active: true,
            source: RateSource::Manual,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// RT-001: upserting an active row deactivates the previous one
    #[test]
    fn test_upsert_keeps_single_active_row_per_key() {
        let mut table = RateTable::new();
        table
            .upsert(create_row(
                "acme",
                ContributorClassification::Saudi,
                date(2024, 7, 1),
                "0.09",
            ))
            .unwrap();
        table
            .upsert(create_row(
                "acme",
                ContributorClassification::Saudi,
                date(2025, 7, 1),
                "0.0975",
            ))
            .unwrap();

        let active: Vec<_> = table
            .rows()
            .iter()
            .filter(|r| r.is_active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].effective_from, date(2025, 7, 1));
        // History is retained.
        assert_eq!(table.rows().len(), 2);
    }

    /// RT-002: different keys keep independent active rows
    #[test]
    fn test_active_rows_independent_per_key() {
        let mut table = RateTable::new();
        table
            .upsert(create_row(
                "acme",
                ContributorClassification::Saudi,
                date(2025, 7, 1),
                "0.0975",
            ))
            .unwrap();
        table
            .upsert(create_row(
                "acme",
                ContributorClassification::NonSaudi,
                date(2025, 7, 1),
                "0",
            ))
            .unwrap();
        table
            .upsert(create_row(
                "globex",
                ContributorClassification::Saudi,
                date(2025, 7, 1),
                "0.0975",
            ))
            .unwrap();

        assert_eq!(table.rows().iter().filter(|r| r.is_active).count(), 3);
    }

    /// RT-003: active_row honors the as-of date
    #[test]
    fn test_active_row_honors_as_of_date() {
        let mut table = RateTable::new();
        table
            .upsert(create_row(
                "acme",
                ContributorClassification::Saudi,
                date(2025, 7, 1),
                "0.0975",
            ))
            .unwrap();

        // Before the row takes effect, there is no match.
        assert!(
            table
                .active_row("acme", ContributorClassification::Saudi, date(2025, 6, 30))
                .is_none()
        );
        assert!(
            table
                .active_row("acme", ContributorClassification::Saudi, date(2025, 7, 1))
                .is_some()
        );
    }

    #[test]
    fn test_active_row_missing_key_is_none() {
        let table = RateTable::new();
        assert!(
            table
                .active_row("acme", ContributorClassification::Saudi, date(2026, 1, 1))
                .is_none()
        );
    }

    #[test]
    fn test_invalid_row_rejected() {
        let mut table = RateTable::new();
        let mut row = create_row(
            "acme",
            ContributorClassification::Saudi,
            date(2025, 7, 1),
            "0.0975",
        );
        row.max_wage_ceiling = Decimal::ZERO;
        assert!(table.upsert(row).is_err());
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_inactive_row_does_not_deactivate_active_one() {
        let mut table = RateTable::new();
        table
            .upsert(create_row(
                "acme",
                ContributorClassification::Saudi,
                date(2025, 7, 1),
                "0.0975",
            ))
            .unwrap();

        let mut historical = create_row(
            "acme",
            ContributorClassification::Saudi,
            date(2023, 7, 1),
            "0.09",
        );
        historical.is_active = false;
        table.upsert(historical).unwrap();

        let active = table
            .active_row("acme", ContributorClassification::Saudi, date(2026, 1, 1))
            .unwrap();
        assert_eq!(active.effective_from, date(2025, 7, 1));
    }

    #[test]
    fn test_history_sorted_newest_first() {
        let mut table = RateTable::new();
        for (year, rate) in [(2023, "0.09"), (2025, "0.0975"), (2024, "0.095")] {
            table
                .upsert(create_row(
                    "acme",
                    ContributorClassification::Saudi,
                    date(year, 7, 1),
                    rate,
                ))
                .unwrap();
        }

        let history = table.history("acme", ContributorClassification::Saudi);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].effective_from, date(2025, 7, 1));
        assert_eq!(history[2].effective_from, date(2023, 7, 1));
    }
}
