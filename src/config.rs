// 7.0 config.rs: all settings in one place. display precision and log verbosity.
// the impact warning threshold is a fixed constant in preview.rs, not config.

use crate::input::DisplayPrecision;
use crate::preview::PreviewFormat;
use serde::{Deserialize, Serialize};

/// rust_decimal cannot represent more fractional digits than this.
pub const MAX_DECIMALS: u32 = 28;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Precision the percent buttons floor allocations to.
    pub margin_precision: DisplayPrecision,
    pub preview: PreviewFormat,
    /// Log engine decisions at info instead of debug.
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            margin_precision: DisplayPrecision::Suggested,
            preview: PreviewFormat::default(),
            verbose: false,
        }
    }
}

impl EngineConfig {
    // verbose logging while developing against a local node
    pub fn development() -> Self {
        Self {
            verbose: true,
            ..Self::default()
        }
    }

    // sUSD amounts always at cents in production
    pub fn production() -> Self {
        Self {
            margin_precision: DisplayPrecision::Fixed(2),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_precision("margin_precision", self.margin_precision)?;
        check_precision("preview.price", self.preview.price)?;
        check_precision("preview.money", self.preview.money)?;
        Ok(())
    }
}

fn check_precision(field: &'static str, precision: DisplayPrecision) -> Result<(), ConfigError> {
    match precision {
        DisplayPrecision::Fixed(dp) if dp > MAX_DECIMALS => Err(ConfigError::PrecisionTooHigh {
            field,
            decimals: dp,
            max: MAX_DECIMALS,
        }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field}: {decimals} decimals exceeds maximum of {max}")]
    PrecisionTooHigh {
        field: &'static str,
        decimals: u32,
        max: u32,
    },
}

// Environment presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn config(&self) -> EngineConfig {
        match self {
            Environment::Development => EngineConfig::development(),
            Environment::Production => EngineConfig::production(),
        }
    }
}
