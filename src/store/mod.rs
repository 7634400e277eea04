//! Storage seam for the payroll engine.
//!
//! Persistent storage is an external collaborator: the engine consumes a
//! generic relational store through the [`PayrollStore`] trait, which
//! covers exactly the operations the core needs. Any backend offering
//! transactions and unique constraints suffices; [`MemoryStore`] is the
//! in-process implementation used by tests and examples.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompensationChangeRecord, CompensationComponents, Employee, PayrollLineItem, PayrollResult,
};

/// The storage operations the payroll core depends on.
///
/// The two-step ledger write (history insert plus current-payroll upsert)
/// is expressed as a single [`PayrollStore::commit_change`] call so
/// implementations can make it atomic; a partial write must never be
/// observable. `expected_version` carries the optimistic-concurrency check
/// that serializes racing writers per employee.
pub trait PayrollStore {
    /// Returns an employee by id.
    fn employee(&self, employee_id: &str) -> Option<Employee>;

    /// Returns all active employees of a company.
    fn active_employees(&self, company_id: &str) -> Vec<Employee>;

    /// Returns the version of an employee's compensation record.
    ///
    /// Starts at zero and increments on every committed change.
    fn compensation_version(&self, employee_id: &str) -> u64;

    /// Atomically applies a compensation change: updates the employee's
    /// components, appends the change record, and upserts the current
    /// payroll row.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConcurrencyConflict`] when
    /// `expected_version` no longer matches the stored version, and
    /// [`EngineError::EmployeeNotFound`] when the employee is missing.
    /// Nothing is written in either case.
    fn commit_change(
        &self,
        new_components: CompensationComponents,
        record: CompensationChangeRecord,
        payroll: PayrollResult,
        expected_version: u64,
    ) -> EngineResult<()>;

    /// Returns an employee's change history, newest effective date first.
    fn change_history(&self, employee_id: &str) -> Vec<CompensationChangeRecord>;

    /// Returns the employee's current payroll row, if one exists.
    fn current_payroll(&self, employee_id: &str) -> Option<PayrollResult>;

    /// Returns the payroll line item for `(employee, period)`, if any.
    fn payroll_line(&self, employee_id: &str, period_id: &str) -> Option<PayrollLineItem>;

    /// Inserts or replaces the payroll line item for `(employee, period)`.
    fn upsert_payroll_line(&self, line: PayrollLineItem);
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    employees: HashMap<String, Employee>,
    versions: HashMap<String, u64>,
    history: HashMap<String, Vec<CompensationChangeRecord>>,
    current_payroll: HashMap<String, PayrollResult>,
    lines: HashMap<(String, String), PayrollLineItem>,
}

/// In-memory [`PayrollStore`] backed by a single interior lock.
///
/// The lock makes [`PayrollStore::commit_change`] atomic (the transaction
/// equivalent) and serializes concurrent writers; the per-employee version
/// counter turns interleaved updates into [`EngineError::ConcurrencyConflict`]
/// for the losing writer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee record.
    pub fn insert_employee(&self, employee: Employee) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.employees.insert(employee.id.clone(), employee);
    }
}

impl PayrollStore for MemoryStore {
    fn employee(&self, employee_id: &str) -> Option<Employee> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.employees.get(employee_id).cloned()
    }

    fn active_employees(&self, company_id: &str) -> Vec<Employee> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut employees: Vec<Employee> = inner
            .employees
            .values()
            .filter(|e| e.company_id == company_id && e.is_active())
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        employees
    }

    fn compensation_version(&self, employee_id: &str) -> u64 {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.versions.get(employee_id).copied().unwrap_or(0)
    }

    fn commit_change(
        &self,
        new_components: CompensationComponents,
        record: CompensationChangeRecord,
        payroll: PayrollResult,
        expected_version: u64,
    ) -> EngineResult<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        let employee_id = record.employee_id.clone();
        let current_version = inner.versions.get(&employee_id).copied().unwrap_or(0);
        if current_version != expected_version {
            return Err(EngineError::ConcurrencyConflict { employee_id });
        }

        let employee = inner.employees.get_mut(&employee_id).ok_or_else(|| {
            EngineError::EmployeeNotFound {
                employee_id: employee_id.clone(),
            }
        })?;

        // All three writes land under the same lock guard.
        employee.compensation = new_components;
        inner
            .history
            .entry(employee_id.clone())
            .or_default()
            .push(record);
        inner.current_payroll.insert(employee_id.clone(), payroll);
        inner.versions.insert(employee_id, current_version + 1);

        Ok(())
    }

    fn change_history(&self, employee_id: &str) -> Vec<CompensationChangeRecord> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut records = inner
            .history
            .get(employee_id)
            .cloned()
            .unwrap_or_default();
        records.sort_by(|a, b| {
            b.effective_date
                .cmp(&a.effective_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        records
    }

    fn current_payroll(&self, employee_id: &str) -> Option<PayrollResult> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.current_payroll.get(employee_id).cloned()
    }

    fn payroll_line(&self, employee_id: &str, period_id: &str) -> Option<PayrollLineItem> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .lines
            .get(&(employee_id.to_string(), period_id.to_string()))
            .cloned()
    }

    fn upsert_payroll_line(&self, line: PayrollLineItem) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner
            .lines
            .insert((line.employee_id.clone(), line.period_id.clone()), line);
    }
}
