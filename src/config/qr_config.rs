// src/config/qr_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use crate::error::{QrError, Result};
use crate::integer_math::prime_factory::MAX_PRIME_DIGITS;

/// Main engine configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Digit count of each prime factor generated by the smoke-test binary
    pub prime_digits: u32,

    /// Randomized algorithm tuning
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Miller-Rabin witnesses per candidate (default: 100)
    pub miller_rabin_rounds: usize,

    /// Cap on resampling loops; unbounded when absent
    pub max_attempts: Option<usize>,
}

impl Default for QrConfig {
    fn default() -> Self {
        QrConfig {
            log_level: "info".to_string(),
            prime_digits: 6,
            engine: EngineConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            miller_rabin_rounds: 100,
            max_attempts: None,
        }
    }
}

impl QrConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("qrflip.toml").exists() {
            builder = builder.add_source(File::with_name("qrflip.toml"));
        } else if Path::new("qrflip.yaml").exists() {
            builder = builder.add_source(File::with_name("qrflip.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut builder = Self::defaults()?;
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }
        Self::finish(builder)
    }

    pub fn validate(&self) -> Result<()> {
        if self.engine.miller_rabin_rounds == 0 {
            return Err(QrError::Config("engine.miller_rabin_rounds must be at least 1".to_string()));
        }
        if self.prime_digits == 0 || self.prime_digits > MAX_PRIME_DIGITS / 2 {
            // n = p*q must stay inside u64
            return Err(QrError::Config(format!(
                "prime_digits must be in 1..={}, got {}",
                MAX_PRIME_DIGITS / 2,
                self.prime_digits
            )));
        }
        Ok(())
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("prime_digits", 6)?
            .set_default("engine.miller_rabin_rounds", 100)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        // Override with environment variables, e.g. QRFLIP_ENGINE__MAX_ATTEMPTS
        let config = builder
            .add_source(
                Environment::with_prefix("QRFLIP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let loaded: QrConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}
