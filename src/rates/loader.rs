//! Rate configuration loading from YAML files.
//!
//! This module provides the [`RatesLoader`] type for seeding a
//! [`GosiRateResolver`] from a configuration directory.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::resolver::GosiRateResolver;
use super::table::RateTable;
use super::types::GosiRateConfig;

/// Engine settings loaded from `settings.yaml`.
#[derive(Debug, Clone, Deserialize)]
struct EngineSettings {
    /// Whether missing rate rows fall back to statutory defaults.
    fallback_to_statutory: bool,
}

/// A rate file: a list of rate configuration rows.
#[derive(Debug, Clone, Deserialize)]
struct RateFileConfig {
    rates: Vec<GosiRateConfig>,
}

/// Loads GOSI rate configuration from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/gosi/
/// ├── settings.yaml    # Engine settings (fallback policy)
/// └── rates/
///     └── 2025-07-01.yaml  # Rate rows effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::rates::RatesLoader;
///
/// let resolver = RatesLoader::load("./config/gosi").unwrap();
/// println!("Loaded {} rate rows", resolver.table().rows().len());
/// ```
pub struct RatesLoader;

impl RatesLoader {
    /// Loads settings and rate rows from the specified directory.
    ///
    /// Rows are applied in ascending `effective_from` order so the newest
    /// active row per `(company, contributor_type)` wins, matching the
    /// table's single-active invariant.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when a required file or directory is
    /// missing, `ConfigParseError` when a file contains invalid YAML, or a
    /// `Validation` error when a row fails rate/ceiling validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<GosiRateResolver> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings: EngineSettings = Self::load_yaml(&settings_path)?;

        let rates_dir = path.join("rates");
        let mut rows = Self::load_rate_rows(&rates_dir)?;
        rows.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));

        let mut table = RateTable::new();
        for row in rows {
            table.upsert(row)?;
        }

        Ok(GosiRateResolver::with_fallback(
            table,
            settings.fallback_to_statutory,
        ))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate rows from the rates directory.
    fn load_rate_rows(rates_dir: &Path) -> EngineResult<Vec<GosiRateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rows = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file: RateFileConfig = Self::load_yaml(&path)?;
                rows.extend(file.rates);
            }
        }

        if rows.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rows)
    }
}
