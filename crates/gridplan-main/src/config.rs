// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "gridplan.toml";

/// Application configuration loaded from TOML. Every field has a
/// default so a missing file or sparse file both work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for the cost calculator inputs
    pub calculator: CalculatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            calculator: CalculatorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub daily_usage_kwh: f64,
    pub daily_solar_export_kwh: f64,
    pub usage_profile: String,
    pub controlled_load_kwh_per_day: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            daily_usage_kwh: 16.0,
            daily_solar_export_kwh: 0.0,
            usage_profile: "Flat Usage".to_owned(),
            // Typical hot water system
            controlled_load_kwh_per_day: 8.0,
        }
    }
}

/// Load configuration. An explicitly given path must exist and parse;
/// otherwise the default path is tried and built-in defaults are used
/// when it is absent.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                return Ok(AppConfig::default());
            }
            default
        }
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sparse_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[calculator]\ndaily_usage_kwh = 22.0").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.calculator.daily_usage_kwh, 22.0);
        assert_eq!(config.calculator.usage_profile, "Flat Usage");
        assert_eq!(config.calculator.controlled_load_kwh_per_day, 8.0);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/gridplan.toml"))).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "calculator = not-a-table").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}
