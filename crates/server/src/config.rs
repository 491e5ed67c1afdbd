use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Process-wide settings, read once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Used when a request carries no token of its own
    pub default_token: Option<String>,
    /// Directory holding `index.html` and other static assets
    pub static_dir: PathBuf,
    pub api_base: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Outbound proxy for Telegram traffic, e.g. `http://127.0.0.1:3128`
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            default_token: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            api_base: telegram::DEFAULT_API_BASE.to_string(),
            request_timeout: telegram::DEFAULT_TIMEOUT,
            connect_timeout: Duration::from_secs(10),
            proxy: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: v,
            })?,
            None => defaults.port,
        };

        let request_timeout = match get("TELEGRAM_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    key: "TELEGRAM_TIMEOUT_SECS",
                    value: v,
                })?,
            None => defaults.request_timeout,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            default_token: get("TELEGRAM_BOT_TOKEN"),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            api_base: get("TELEGRAM_API_URL").unwrap_or(defaults.api_base),
            request_timeout,
            connect_timeout: defaults.connect_timeout,
            proxy: get("TELEGRAM_PROXY"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the path to the root HTML page
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
