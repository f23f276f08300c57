//! Runtime configuration loaded from `groundtrack.toml`.
//!
//! The [`GroundtrackConfig`] struct holds every tunable parameter.
//! Values missing from the file fall back to sensible defaults, and the
//! file itself is optional.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration loaded from `groundtrack.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundtrackConfig {
    /// Demo scenario to run when none is given on the command line.
    #[serde(default = "default_scenario")]
    pub default_scenario: String,

    /// Simulated per-command processing delay shown by the demo spinner.
    /// Presentation only; the registry resolves commands instantly.
    #[serde(default = "default_command_delay_ms")]
    pub command_delay_ms: u64,

    /// Fuel level below which telemetry lines are flagged in the output.
    #[serde(default = "default_fuel_warning_threshold")]
    pub fuel_warning_threshold: f64,
}

fn default_scenario() -> String {
    "mars".to_string()
}

fn default_command_delay_ms() -> u64 {
    100
}

fn default_fuel_warning_threshold() -> f64 {
    25.0
}

impl Default for GroundtrackConfig {
    fn default() -> Self {
        Self {
            default_scenario: default_scenario(),
            command_delay_ms: default_command_delay_ms(),
            fuel_warning_threshold: default_fuel_warning_threshold(),
        }
    }
}

impl GroundtrackConfig {
    /// Load configuration from `groundtrack.toml` in the current directory.
    /// Falls back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new("groundtrack.toml");
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<GroundtrackConfig>(&contents)?
        } else {
            Self::default()
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = GroundtrackConfig::default();
        assert_eq!(config.default_scenario, "mars");
        assert_eq!(config.command_delay_ms, 100);
        assert_eq!(config.fuel_warning_threshold, 25.0);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            default_scenario = "abort"
            command_delay_ms = 0
        "#;
        let config: GroundtrackConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_scenario, "abort");
        assert_eq!(config.command_delay_ms, 0);
        assert_eq!(config.fuel_warning_threshold, 25.0);
    }

    #[test]
    fn load_falls_back_to_defaults() {
        // The test working directory normally has no groundtrack.toml.
        let config = GroundtrackConfig::load().unwrap();
        assert_eq!(config.default_scenario, "mars");
    }
}
