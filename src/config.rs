//! Demo settings shared by the binaries.
//!
//! ```toml
//! tax_rate = 0.19
//! milk_surcharge = 0.2
//! color = "blue"
//! step = 1.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PatternError, Result};
use crate::shapes::Color;

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Fraction added by the `Tax` decorator (0.19 means +19%).
    pub tax_rate: f64,
    /// Surcharge in currency units added by the `Milk` decorator.
    pub milk_surcharge: f64,
    /// Colour used by the GL draw strategy.
    pub color: Color,
    /// Distance a bridge mover travels per step.
    pub step: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.19,
            milk_surcharge: 0.2,
            color: Color::Blue,
            step: 1.0,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from the file named by `PATTERNS_CONFIG`, or fall back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading demo config");
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(PatternError::InvalidArgument("tax_rate must be a non-negative number"));
        }
        if !self.milk_surcharge.is_finite() || self.milk_surcharge < 0.0 {
            return Err(PatternError::InvalidArgument(
                "milk_surcharge must be a non-negative number",
            ));
        }
        if !self.step.is_finite() {
            return Err(PatternError::InvalidArgument("step must be finite"));
        }
        Ok(())
    }
}
