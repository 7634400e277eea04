//! The batch payroll orchestrator.
//!
//! Applies the payroll calculator across all active employees of a company
//! for a pay period. Each employee is computed independently and the
//! per-employee results are partitioned into successes and failures, so a
//! failure on one employee never aborts the batch. Totals cover successes
//! only.

mod merge;

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::error::EngineResult;
use crate::models::{Employee, PayPeriod, PayrollLineItem};
use crate::rates::GosiRateResolver;
use crate::store::PayrollStore;

pub use merge::merge_line;

/// A per-employee failure recorded during a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// The employee whose line item could not be computed.
    pub employee_id: String,
    /// The error that occurred, rendered for reporting.
    pub error: String,
}

/// Aggregate totals over the successful line items of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchTotals {
    /// Sum of gross salaries.
    pub total_gross: Decimal,
    /// Sum of employee-side GOSI contributions.
    pub total_gosi_employee: Decimal,
    /// Sum of employer-side GOSI contributions.
    pub total_gosi_employer: Decimal,
    /// Sum of net salaries.
    pub total_net: Decimal,
    /// Number of employees successfully paid.
    pub employee_count: usize,
}

/// Tracks which employees a batch run has already processed.
///
/// Passing the checkpoint of an interrupted run to
/// [`BatchOrchestrator::run_batch`] resumes it: already-processed
/// employees are skipped. Failed employees are not checkpointed, so a
/// resumed run retries them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchCheckpoint {
    processed: BTreeSet<String>,
}

impl BatchCheckpoint {
    /// Creates an empty checkpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the employee was already processed.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.processed.contains(employee_id)
    }

    /// Marks an employee as processed.
    pub fn mark(&mut self, employee_id: &str) {
        self.processed.insert(employee_id.to_string());
    }

    /// Returns the processed employee ids.
    pub fn processed(&self) -> impl Iterator<Item = &str> {
        self.processed.iter().map(String::as_str)
    }
}

/// The result of one batch payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBatch {
    /// Unique identifier for this run.
    pub batch_id: Uuid,
    /// The company the batch was run for.
    pub company_id: String,
    /// The pay period the batch covers.
    pub period: PayPeriod,
    /// Line items computed (and upserted) by this run.
    pub line_items: Vec<PayrollLineItem>,
    /// Employees whose computation failed; the batch still completes.
    pub failures: Vec<BatchFailure>,
    /// Totals over the successful line items of this run.
    pub totals: BatchTotals,
    /// Checkpoint covering this run and any resumed-from run.
    pub checkpoint: BatchCheckpoint,
}

/// Runs batch payroll over a store and rate resolver.
pub struct BatchOrchestrator<'a, S: PayrollStore> {
    store: &'a S,
    resolver: &'a GosiRateResolver,
}

impl<'a, S: PayrollStore> BatchOrchestrator<'a, S> {
    /// Creates an orchestrator over a store and rate resolver.
    pub fn new(store: &'a S, resolver: &'a GosiRateResolver) -> Self {
        Self { store, resolver }
    }

    /// Runs payroll for all active employees of a company.
    ///
    /// For each employee the current components and rates as of the period
    /// are fed through the calculator, and the resulting line item is
    /// upserted against any stored row for `(employee, period)` using the
    /// field-level merge of [`merge_line`]. Per-employee errors are
    /// collected into [`PayrollBatch::failures`]; totals cover successes
    /// only.
    pub fn run_batch(
        &self,
        company_id: &str,
        period: &PayPeriod,
        resume: Option<BatchCheckpoint>,
    ) -> PayrollBatch {
        let batch_id = Uuid::new_v4();
        let employees = self.store.active_employees(company_id);
        let mut checkpoint = resume.unwrap_or_default();

        info!(
            %batch_id,
            company_id = %company_id,
            period_id = %period.id,
            employees = employees.len(),
            "Starting batch payroll run"
        );

        let mut line_items = Vec::new();
        let mut failures = Vec::new();
        let mut totals = BatchTotals::default();

        for employee in &employees {
            if checkpoint.contains(&employee.id) {
                continue;
            }

            match self.compute_line(employee, period) {
                Ok(line) => {
                    let stored = match self.store.payroll_line(&employee.id, &period.id) {
                        Some(existing) => merge_line(&existing, line),
                        None => line,
                    };
                    self.store.upsert_payroll_line(stored.clone());

                    totals.total_gross += stored.gross_salary;
                    totals.total_gosi_employee += stored.gosi_employee;
                    totals.total_gosi_employer += stored.gosi_employer;
                    totals.total_net += stored.net_salary;
                    totals.employee_count += 1;

                    checkpoint.mark(&employee.id);
                    line_items.push(stored);
                }
                Err(error) => {
                    warn!(
                        %batch_id,
                        employee_id = %employee.id,
                        error = %error,
                        "Skipping employee after calculation failure"
                    );
                    failures.push(BatchFailure {
                        employee_id: employee.id.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        info!(
            %batch_id,
            paid = totals.employee_count,
            failed = failures.len(),
            total_net = %totals.total_net,
            "Batch payroll run completed"
        );

        PayrollBatch {
            batch_id,
            company_id: company_id.to_string(),
            period: period.clone(),
            line_items,
            failures,
            totals,
            checkpoint,
        }
    }

    /// Computes a fresh line item for one employee.
    fn compute_line(
        &self,
        employee: &Employee,
        period: &PayPeriod,
    ) -> EngineResult<PayrollLineItem> {
        let rates = self.resolver.resolve(
            &employee.company_id,
            employee.classification(),
            period.rate_resolution_date(),
        )?;
        let breakdown = calculate(&employee.compensation, &rates)?;

        Ok(PayrollLineItem {
            line_id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            company_id: employee.company_id.clone(),
            period_id: period.id.clone(),
            gross_salary: breakdown.gross_salary,
            gosi_wage_base: breakdown.gosi_wage_base,
            gosi_employee: breakdown.gosi_employee,
            gosi_employer: breakdown.gosi_employer,
            net_salary: breakdown.net_salary,
            iban: employee.compensation.iban.clone(),
            bank_name: employee.compensation.bank_name.clone(),
        })
    }
}
