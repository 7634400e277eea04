//! The compensation change ledger.
//!
//! The sole mutation entry point for compensation: every adjustment is
//! appended as an immutable [`CompensationChangeRecord`] and the employee's
//! single "current payroll" row is recomputed and upserted in the same
//! atomic commit. The event log and the materialized current row are kept
//! as two collections, updated together; the projection is never the sole
//! source of truth.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, gross_of};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BandWarning, CompensationChangeRecord, CompensationComponents, PayrollResult,
};
use crate::rates::GosiRateResolver;
use crate::store::PayrollStore;

/// The outcome of a recorded compensation change.
///
/// Band warnings are advisory: they accompany the outcome so an
/// administrator can see them, but they never block the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOutcome {
    /// The appended ledger record.
    pub record: CompensationChangeRecord,
    /// The recomputed current payroll row.
    pub payroll: PayrollResult,
    /// Advisory warnings raised during the change.
    pub warnings: Vec<BandWarning>,
}

/// The compensation change ledger.
///
/// Holds references to the store and the rate resolver; all writes go
/// through [`CompensationLedger::propose_change`].
pub struct CompensationLedger<'a, S: PayrollStore> {
    store: &'a S,
    resolver: &'a GosiRateResolver,
}

impl<'a, S: PayrollStore> CompensationLedger<'a, S> {
    /// Creates a ledger over a store and rate resolver.
    pub fn new(store: &'a S, resolver: &'a GosiRateResolver) -> Self {
        Self { store, resolver }
    }

    /// Records a compensation change and recomputes current payroll.
    ///
    /// Loads the current components as the old snapshot (zero-filled when
    /// the employee has none yet), computes the delta and percentage
    /// change, checks the proposed basic salary against the employee's
    /// salary band, appends the change record, and upserts the recomputed
    /// payroll row — the last two atomically.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmployeeNotFound`] when the employee is missing.
    /// - [`EngineError::Validation`] when the new components are invalid.
    /// - [`EngineError::ConcurrencyConflict`] when another writer committed
    ///   first; the caller should reload and retry.
    pub fn propose_change(
        &self,
        employee_id: &str,
        new_components: CompensationComponents,
        effective_date: NaiveDate,
        reason: &str,
        actor: &str,
    ) -> EngineResult<ChangeOutcome> {
        let employee =
            self.store
                .employee(employee_id)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    employee_id: employee_id.to_string(),
                })?;
        let expected_version = self.store.compensation_version(employee_id);

        let old_components = employee.compensation.clone();
        let old_total = gross_of(&old_components)?;
        let new_total = gross_of(&new_components)?;
        let delta = new_total - old_total;
        let delta_pct = if old_total.is_zero() {
            Decimal::ZERO
        } else {
            delta / old_total * Decimal::ONE_HUNDRED
        };

        let mut warnings = Vec::new();
        if let Some(band) = &employee.salary_band {
            if let Some(warning) = band.check(new_components.basic_salary) {
                warn!(
                    employee_id = %employee_id,
                    basic_salary = %new_components.basic_salary,
                    violation = ?warning.violation,
                    "Proposed basic salary is outside the assigned band"
                );
                warnings.push(warning);
            }
        }

        let classification = employee.classification();
        let rates =
            self.resolver
                .resolve(&employee.company_id, classification, effective_date)?;
        let breakdown = calculate(&new_components, &rates)?;

        let record = CompensationChangeRecord {
            record_id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            old_basic_salary: old_components.basic_salary,
            new_basic_salary: new_components.basic_salary,
            old_components,
            new_components: new_components.clone(),
            old_total,
            new_total,
            delta,
            delta_pct,
            effective_date,
            change_reason: reason.to_string(),
            changed_by: actor.to_string(),
            created_at: Utc::now(),
        };

        let payroll = PayrollResult {
            calculation_id: Uuid::new_v4(),
            calculated_at: record.created_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: employee_id.to_string(),
            company_id: employee.company_id.clone(),
            contributor_type: classification,
            gross_salary: breakdown.gross_salary,
            gosi_wage_base: breakdown.gosi_wage_base,
            gosi_employee: breakdown.gosi_employee,
            gosi_employer: breakdown.gosi_employer,
            net_salary: breakdown.net_salary,
        };

        self.store.commit_change(
            new_components,
            record.clone(),
            payroll.clone(),
            expected_version,
        )?;

        info!(
            employee_id = %employee_id,
            delta = %delta,
            delta_pct = %delta_pct,
            changed_by = %actor,
            "Compensation change recorded"
        );

        Ok(ChangeOutcome {
            record,
            payroll,
            warnings,
        })
    }
}
