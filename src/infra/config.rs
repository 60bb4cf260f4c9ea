//! Centralized configuration (environment variables + defaults).

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Load the reference dataset at startup.
    pub seed_data: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `SEED_DATA` and `LOG_FORMAT`. Call `dotenv::dotenv()` first
    /// if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(v) => parse_port(&v)?,
            None => DEFAULT_PORT,
        };
        let seed_data = match lookup("SEED_DATA") {
            Some(v) => parse_bool("SEED_DATA", &v)?,
            None => true,
        };
        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => parse_log_format(&v)?,
            None => LogFormat::Pretty,
        };
        Ok(Self {
            host,
            port,
            seed_data,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_data: true,
            log_format: LogFormat::Pretty,
        }
    }
}

fn parse_port(v: &str) -> Result<u16, ConfigError> {
    v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
        var: "PORT",
        expected: "a port number (0-65535)",
        value: v.to_string(),
    })
}

fn parse_bool(var: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            expected: "true or false",
            value: v.to_string(),
        }),
    }
}

fn parse_log_format(v: &str) -> Result<LogFormat, ConfigError> {
    match v.trim().to_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            var: "LOG_FORMAT",
            expected: "pretty or json",
            value: v.to_string(),
        }),
    }
}
