// Environment configuration with defaults. `main` loads a `.env` file first.

use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "WORK_TIMERS_ADDR";
pub const OUTBOX_TOPIC_VAR: &str = "WORK_TIMERS_OUTBOX_TOPIC";
pub const GRAPHQL_PATH_VAR: &str = "WORK_TIMERS_GRAPHQL_PATH";
pub const API_URL_VAR: &str = "WORK_TIMERS_API_URL";
pub const CORRUPTION_THRESHOLD_VAR: &str = "WORK_TIMERS_CORRUPTION_THRESHOLD";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_OUTBOX_TOPIC: &str = "work-timers.v1";
const DEFAULT_GRAPHQL_PATH: &str = "/gql";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddr { name: &'static str, value: String },

    #[error("{name} must be a number in (0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: String },

    #[error("{name} must start with '/', got {value}")]
    InvalidPath { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub outbox_topic: String,
    pub graphql_path: String,
    /// Base URL the time tracker client talks to.
    pub api_url: String,
    /// Paused share of raw elapsed time above which the client treats a timer as corrupted.
    pub corruption_threshold: f64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &'static str, default: &str| -> Result<String, ConfigError> {
            let value = lookup(name).unwrap_or_else(|| default.to_string());
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(ConfigError::Empty { name });
            }
            Ok(value)
        };

        let addr = read(ADDR_VAR, DEFAULT_ADDR)?;
        let addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            name: ADDR_VAR,
            value: addr.clone(),
        })?;

        let graphql_path = read(GRAPHQL_PATH_VAR, DEFAULT_GRAPHQL_PATH)?;
        if !graphql_path.starts_with('/') {
            return Err(ConfigError::InvalidPath {
                name: GRAPHQL_PATH_VAR,
                value: graphql_path,
            });
        }

        let threshold = read(
            CORRUPTION_THRESHOLD_VAR,
            &crate::modules::work_timers::core::elapsed::DEFAULT_CORRUPTION_THRESHOLD.to_string(),
        )?;
        let corruption_threshold = threshold
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0 && *value <= 1.0)
            .ok_or_else(|| ConfigError::InvalidThreshold {
                name: CORRUPTION_THRESHOLD_VAR,
                value: threshold.clone(),
            })?;

        Ok(Self {
            addr,
            outbox_topic: read(OUTBOX_TOPIC_VAR, DEFAULT_OUTBOX_TOPIC)?,
            graphql_path,
            api_url: read(API_URL_VAR, DEFAULT_API_URL)?
                .trim_end_matches('/')
                .to_string(),
            corruption_threshold,
        })
    }
}
