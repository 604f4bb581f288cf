use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Local currency per USD used when a caller supplies no usable rate.
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(1450);

/// Errors arising from engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("default exchange rate must be positive, got {0}")]
    InvalidExchangeRate(Decimal),
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deployment-level settings for [`PdaEngine`](crate::pricing::engine::PdaEngine).
///
/// # Examples
///
/// ```
/// use pda_engine::pricing::config::EngineConfig;
/// use rust_decimal_macros::dec;
///
/// let config = EngineConfig::new(dec!(1500)).unwrap();
/// assert_eq!(config.default_exchange_rate(), dec!(1500));
/// assert!(EngineConfig::new(dec!(0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_exchange_rate")]
    default_exchange_rate: Decimal,
}

fn default_exchange_rate() -> Decimal {
    DEFAULT_EXCHANGE_RATE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}

impl EngineConfig {
    pub fn new(default_exchange_rate: Decimal) -> Result<Self, ConfigError> {
        let config = Self {
            default_exchange_rate,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn default_exchange_rate(&self) -> Decimal {
        self.default_exchange_rate
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_exchange_rate <= Decimal::ZERO {
            return Err(ConfigError::InvalidExchangeRate(self.default_exchange_rate));
        }
        Ok(())
    }
}
