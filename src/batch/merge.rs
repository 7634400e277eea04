//! Field-level merge for payroll line upserts.

use crate::models::PayrollLineItem;

/// Merges a freshly computed line into the stored one, field by field.
///
/// The rules mirror the bulk-upload update policy: a newly supplied
/// non-zero monetary value or non-empty string overrides the stored value,
/// otherwise the stored value is preserved. Scoping identifiers
/// (`employee_id`, `company_id`, `period_id`) are always taken from the
/// incoming snapshot; the stored row's `line_id` is preserved, since an
/// upsert never changes a row's primary key.
pub fn merge_line(existing: &PayrollLineItem, incoming: PayrollLineItem) -> PayrollLineItem {
    let pick = |incoming: rust_decimal::Decimal, stored: rust_decimal::Decimal| {
        if incoming.is_zero() { stored } else { incoming }
    };
    let pick_str = |incoming: Option<String>, stored: &Option<String>| match incoming {
        Some(value) if !value.is_empty() => Some(value),
        _ => stored.clone(),
    };

    PayrollLineItem {
        line_id: existing.line_id,
        employee_id: incoming.employee_id,
        company_id: incoming.company_id,
        period_id: incoming.period_id,
        gross_salary: pick(incoming.gross_salary, existing.gross_salary),
        gosi_wage_base: pick(incoming.gosi_wage_base, existing.gosi_wage_base),
        gosi_employee: pick(incoming.gosi_employee, existing.gosi_employee),
        gosi_employer: pick(incoming.gosi_employer, existing.gosi_employer),
        net_salary: pick(incoming.net_salary, existing.net_salary),
        iban: pick_str(incoming.iban, &existing.iban),
        bank_name: pick_str(incoming.bank_name, &existing.bank_name),
    }
}
