//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::rates::GosiRateResolver;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded rate resolver.
#[derive(Clone)]
pub struct AppState {
    /// The rate resolver backing rate lookups.
    resolver: Arc<GosiRateResolver>,
}

impl AppState {
    /// Creates a new application state with the given rate resolver.
    pub fn new(resolver: GosiRateResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Returns a reference to the rate resolver.
    pub fn resolver(&self) -> &GosiRateResolver {
        &self.resolver
    }
}
