//! Compensation change record model.
//!
//! One immutable entry per salary adjustment. Records are appended by the
//! ledger and never mutated or deleted afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CompensationComponents;

/// An append-only record of one compensation adjustment.
///
/// The old and new snapshots are denormalized in full so a past pay state
/// can be reconstructed without consulting any other table: `new_total`
/// always equals `new_basic_salary` plus the allowances of the new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationChangeRecord {
    /// Unique identifier for this record.
    pub record_id: Uuid,
    /// The employee whose compensation changed.
    pub employee_id: String,
    /// Basic salary before the change.
    pub old_basic_salary: Decimal,
    /// Basic salary after the change.
    pub new_basic_salary: Decimal,
    /// Full compensation snapshot before the change.
    pub old_components: CompensationComponents,
    /// Full compensation snapshot after the change.
    pub new_components: CompensationComponents,
    /// Gross total before the change.
    pub old_total: Decimal,
    /// Gross total after the change.
    pub new_total: Decimal,
    /// `new_total - old_total`.
    pub delta: Decimal,
    /// Percentage change relative to `old_total`; zero when `old_total` is zero.
    pub delta_pct: Decimal,
    /// The date the change takes effect.
    pub effective_date: NaiveDate,
    /// Why the change was made (e.g., "annual review").
    pub change_reason: String,
    /// The actor who made the change.
    pub changed_by: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
