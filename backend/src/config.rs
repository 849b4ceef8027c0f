//! Server settings read from the process environment.
//!
//! | Variable                    | Default     |
//! |-----------------------------|-------------|
//! | `FLIGHT_CHECKER_HOST`       | `127.0.0.1` |
//! | `FLIGHT_CHECKER_PORT`       | `8080`      |
//! | `FLIGHT_CHECKER_WORKERS`    | actix default (one per core) |
//! | `FLIGHT_CHECKER_JSON_LIMIT` | `1048576` bytes |
//!
//! Logging is configured separately through `RUST_LOG`.

use std::fmt;
use std::str::FromStr;

const HOST_VAR: &str = "FLIGHT_CHECKER_HOST";
const PORT_VAR: &str = "FLIGHT_CHECKER_PORT";
const WORKERS_VAR: &str = "FLIGHT_CHECKER_WORKERS";
const JSON_LIMIT_VAR: &str = "FLIGHT_CHECKER_JSON_LIMIT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JSON_LIMIT: usize = 1024 * 1024; // 1 MB

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` keeps actix's default worker count.
    pub workers: Option<usize>,
    /// Maximum accepted JSON body size in bytes.
    pub json_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `var` is set but `value` does not parse.
    Invalid { var: &'static str, value: String },
    /// `var` parsed but must be greater than zero.
    Zero { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { var, value } => write!(f, "{var}: invalid value '{value}'"),
            Self::Zero { var } => write!(f, "{var}: must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port);
        let workers = parse_var::<usize, _>(&lookup, WORKERS_VAR)?;
        let json_limit = parse_var(&lookup, JSON_LIMIT_VAR)?.unwrap_or(defaults.json_limit);

        if port == 0 {
            return Err(ConfigError::Zero { var: PORT_VAR });
        }
        if workers == Some(0) {
            return Err(ConfigError::Zero { var: WORKERS_VAR });
        }
        if json_limit == 0 {
            return Err(ConfigError::Zero { var: JSON_LIMIT_VAR });
        }

        Ok(Self {
            host,
            port,
            workers,
            json_limit,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
