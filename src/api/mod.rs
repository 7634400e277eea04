//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for calculating payroll and
//! resolving statutory rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculateRequest;
pub use response::ApiError;
pub use state::AppState;
