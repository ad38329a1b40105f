//! Driver configuration loaded from TOML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tireheat_core::experiments::{RampHoldSettings, SlipSweepSettings};
use tireheat_core::TireParams;

/// Full driver configuration. Every section is optional; missing fields fall
/// back to the canonical scenario constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub tire: TireParams,
    pub sweep: SlipSweepSettings,
    pub time_domain: RampHoldSettings,
}

impl DriverConfig {
    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("TOML parse error")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tire.validate().context("[tire]")?;
        self.sweep.validate().context("[sweep]")?;
        self.time_domain.validate().context("[time_domain]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = DriverConfig::from_toml("").unwrap();
        assert_eq!(cfg, DriverConfig::default());
        assert_eq!(cfg.tire.mu, 1.0);
        assert_eq!(cfg.tire.ck, 50_000.0);
        assert_eq!(cfg.sweep.loads, vec![600.0, 900.0, 1200.0]);
        assert_eq!(cfg.time_domain.samples, 300);
    }

    #[test]
    fn partial_sections_override_only_named_fields() {
        let toml_str = r#"
            [tire]
            mu = 0.9
            ck = 60000.0

            [sweep]
            loads = [800.0]

            [time_domain]
            slip_max = 0.1
            speed = 15.0
        "#;
        let cfg = DriverConfig::from_toml(toml_str).unwrap();
        assert_eq!(cfg.tire.mu, 0.9);
        assert_eq!(cfg.sweep.loads, vec![800.0]);
        assert_eq!(cfg.sweep.samples, 200);
        assert_eq!(cfg.time_domain.slip_max, 0.1);
        assert_eq!(cfg.time_domain.speed, 15.0);
        assert_eq!(cfg.time_domain.duration, 3.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = DriverConfig::from_toml("[tire]\nmu = -1.0\nck = 50000.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("[tire]"));

        let err = DriverConfig::from_toml("[sweep]\nsamples = 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("samples"));

        assert!(DriverConfig::from_toml("[tire]\nmu = \"high\"\n").is_err());
    }
}
