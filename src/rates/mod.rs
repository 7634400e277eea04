//! GOSI rate configuration and resolution.
//!
//! This module owns the rate-configuration table (one row per company,
//! contributor type and effective date), the resolver that picks the
//! applicable row for a date with statutory fallback, the hard-coded
//! statutory defaults, and a YAML loader for seeding the table from
//! configuration files.

mod loader;
mod resolver;
mod statutory;
mod table;
mod types;

pub use loader::RatesLoader;
pub use resolver::GosiRateResolver;
pub use statutory::{statutory_rates, statutory_wage_ceiling};
pub use table::RateTable;
pub use types::{GosiRateConfig, RateSet, RateSource};
