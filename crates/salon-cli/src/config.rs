//! CLI configuration file support.
//!
//! ```toml
//! [business_hours]
//! opening_hour = 9
//! closing_hour = 18
//! granularity_minutes = 30
//! ```
//!
//! Every key is optional; missing keys take the defaults above.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use salon_engine::BusinessHours;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SalonConfig {
    pub business_hours: BusinessHours,
}

impl SalonConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SalonConfig = toml::from_str(content).context("Failed to parse TOML")?;
        config.business_hours.validate()?;
        Ok(config)
    }

    /// The file at `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
