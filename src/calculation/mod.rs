//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: gross salary
//! summation, GOSI wage-base derivation and capping, the payroll
//! calculator that combines a compensation snapshot with a resolved rate
//! set, and the salary-adjustment input-mode transforms.

mod adjustment;
mod calculator;
mod gross;
mod wage_base;

pub use adjustment::{apply_percentage, increase_percentage};
pub use calculator::{calculate, PayrollBreakdown};
pub use gross::gross_of;
pub use wage_base::{capped_wage, gosi_wage_base};
