//! Configuration management

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub telephony: TelephonyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephonyConfig {
    /// Country code applied to nationally formatted handles, e.g. "+1"
    pub default_country_code: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telephony: TelephonyConfig::default(),
        }
    }
}

impl Default for TelephonyConfig {
    fn default() -> Self {
        Self {
            default_country_code: "+1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional `dialout.toml` in the working
    /// directory, with `DIALOUT_*` environment variable overrides
    /// (e.g. `DIALOUT_TELEPHONY__DEFAULT_COUNTRY_CODE`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("dialout").required(false))
            .add_source(config::Environment::with_prefix("DIALOUT").separator("__"))
            .build()?
            .try_deserialize()
    }
}
