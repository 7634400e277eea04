//! Payroll computation and salary-adjustment engine.
//!
//! This crate computes gross pay, GOSI statutory contributions (General
//! Organization for Social Insurance, Saudi Arabia), and net pay from an
//! employee's compensation components, and maintains an append-only ledger
//! of compensation changes with salary-band compliance checks.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod error;
pub mod ledger;
pub mod models;
pub mod rates;
pub mod store;
