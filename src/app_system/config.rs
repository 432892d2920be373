use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::locality::IbgeLocalityClient;

pub const DATA_DIR_VAR: &str = "MICRO_ERP_DATA_DIR";
pub const LOCALITY_URL_VAR: &str = "MICRO_ERP_LOCALITY_URL";
pub const CHANNEL_BUFFER_VAR: &str = "MICRO_ERP_CHANNEL_BUFFER";
pub const LOCALITY_TIMEOUT_VAR: &str = "MICRO_ERP_LOCALITY_TIMEOUT_SECS";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding one `<collection>.json` file per collection.
    pub data_dir: PathBuf,
    pub locality_url: String,
    /// Mailbox size of every collection actor.
    pub channel_buffer: usize,
    pub locality_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            locality_url: IbgeLocalityClient::DEFAULT_BASE_URL.to_string(),
            channel_buffer: 32,
            locality_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (existing variables win) and then reads the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = get(LOCALITY_URL_VAR) {
            config.locality_url = url;
        }
        if let Some(raw) = get(CHANNEL_BUFFER_VAR) {
            let buffer: usize = parse(CHANNEL_BUFFER_VAR, &raw)?;
            if buffer == 0 {
                return Err(ConfigError::Invalid {
                    key: CHANNEL_BUFFER_VAR,
                    value: raw,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.channel_buffer = buffer;
        }
        if let Some(raw) = get(LOCALITY_TIMEOUT_VAR) {
            config.locality_timeout = Duration::from_secs(parse(LOCALITY_TIMEOUT_VAR, &raw)?);
        }

        Ok(config)
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
