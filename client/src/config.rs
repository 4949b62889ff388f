//! Environment configuration

use std::fmt;
use std::time::Duration;

use metamon_battle::{Backoff, RunOptions};
use metamon_protocol::DEFAULT_API_URL;
use thiserror::Error;

pub const PRIVATE_KEY_VAR: &str = "WALLET_PRIVATE_KEY";
pub const API_URL_VAR: &str = "METAMON_API_URL";
pub const BACKOFF_MIN_VAR: &str = "METAMON_BACKOFF_MIN_MS";
pub const BACKOFF_MAX_VAR: &str = "METAMON_BACKOFF_MAX_MS";
pub const JOIN_TEAMS_VAR: &str = "METAMON_JOIN_TEAMS";
pub const MINT_VAR: &str = "METAMON_MINT";
pub const HTTP_TIMEOUT_VAR: &str = "METAMON_HTTP_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for one run
#[derive(Clone)]
pub struct Config {
    pub private_key: String,
    pub api_url: String,
    pub backoff: Backoff,
    pub join_teams: bool,
    pub mint: bool,
    pub http_timeout: Duration,
}

impl Config {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let private_key = get(PRIVATE_KEY_VAR).ok_or(ConfigError::Missing(PRIVATE_KEY_VAR))?;
        let api_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let min_ms = parse_or(get(BACKOFF_MIN_VAR), BACKOFF_MIN_VAR, 1_000u64)?;
        let max_ms = parse_or(get(BACKOFF_MAX_VAR), BACKOFF_MAX_VAR, 3_000u64)?;
        if min_ms > max_ms {
            return Err(ConfigError::Invalid {
                key: BACKOFF_MAX_VAR,
                value: max_ms.to_string(),
            });
        }

        let timeout_secs = parse_or(get(HTTP_TIMEOUT_VAR), HTTP_TIMEOUT_VAR, 30u64)?;

        Ok(Self {
            private_key,
            api_url,
            backoff: Backoff::new(
                Duration::from_millis(min_ms),
                Duration::from_millis(max_ms),
            ),
            join_teams: parse_flag(get(JOIN_TEAMS_VAR), JOIN_TEAMS_VAR, true)?,
            mint: parse_flag(get(MINT_VAR), MINT_VAR, true)?,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            backoff: self.backoff,
            join_teams: self.join_teams,
            mint: self.mint,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("backoff", &self.backoff)
            .field("join_teams", &self.join_teams)
            .field("mint", &self.mint)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

fn parse_or(value: Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

fn parse_flag(value: Option<String>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Some(v) = value else {
        return Ok(default);
    };

    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: v }),
    }
}
