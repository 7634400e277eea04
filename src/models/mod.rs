//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod change_record;
mod compensation;
mod employee;
mod pay_period;
mod payroll_result;
mod salary_band;

pub use change_record::CompensationChangeRecord;
pub use compensation::CompensationComponents;
pub use employee::{ContributorClassification, Employee, EmployeeStatus};
pub use pay_period::PayPeriod;
pub use payroll_result::{PayrollLineItem, PayrollResult};
pub use salary_band::{BandViolation, BandWarning, SalaryBand};
