// 8.0 engine/core.rs: the engine owns nothing but its config. every call is
// a pure function of its arguments, so one instance can be shared freely.

use crate::config::{ConfigError, EngineConfig};

#[derive(Debug, Clone, Default)]
pub struct SizingEngine {
    pub(super) config: EngineConfig,
}

impl SizingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
