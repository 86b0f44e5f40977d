//! Runtime configuration, read from `CHRONOLUX_*` environment variables.

use core::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use chronolux_core::{StoreError, StoreResult};
use chronolux_ledger::DEFAULT_CHECKOUT_DELAY;
use chronolux_observability::LogFormat;
use chronolux_query::{DEFAULT_PRICE_CEILING, DEFAULT_SUGGESTION_LIMIT};

pub const ENV_CATALOG_SIZE: &str = "CHRONOLUX_CATALOG_SIZE";
pub const ENV_SEED: &str = "CHRONOLUX_SEED";
pub const ENV_CHECKOUT_DELAY_MS: &str = "CHRONOLUX_CHECKOUT_DELAY_MS";
pub const ENV_PRICE_CEILING: &str = "CHRONOLUX_PRICE_CEILING";
pub const ENV_SUGGESTION_LIMIT: &str = "CHRONOLUX_SUGGESTION_LIMIT";
pub const ENV_LOG_FORMAT: &str = "CHRONOLUX_LOG_FORMAT";

/// Number of products generated when nothing else is configured.
pub const DEFAULT_CATALOG_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub catalog_size: usize,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub checkout_delay: Duration,
    pub price_ceiling: u64,
    pub suggestion_limit: usize,
    pub log_format: LogFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_size: DEFAULT_CATALOG_SIZE,
            seed: None,
            checkout_delay: DEFAULT_CHECKOUT_DELAY,
            price_ceiling: DEFAULT_PRICE_CEILING,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            log_format: LogFormat::default(),
        }
    }
}

impl StoreConfig {
    /// Read the process environment; unset variables keep their defaults.
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_size = parse_or(&lookup, ENV_CATALOG_SIZE, defaults.catalog_size)?;
        let seed = match lookup(ENV_SEED) {
            Some(raw) if !raw.trim().is_empty() => Some(parse(ENV_SEED, &raw)?),
            _ => None,
        };
        let delay_ms = parse_or(
            &lookup,
            ENV_CHECKOUT_DELAY_MS,
            defaults.checkout_delay.as_millis() as u64,
        )?;
        let price_ceiling = parse_or(&lookup, ENV_PRICE_CEILING, defaults.price_ceiling)?;
        let suggestion_limit = parse_or(&lookup, ENV_SUGGESTION_LIMIT, defaults.suggestion_limit)?;
        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| StoreError::validation(format!("{ENV_LOG_FORMAT}: {e}")))?,
            None => defaults.log_format,
        };

        let config = Self {
            catalog_size,
            seed,
            checkout_delay: Duration::from_millis(delay_ms),
            price_ceiling,
            suggestion_limit,
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.price_ceiling == 0 {
            return Err(StoreError::validation(format!(
                "{ENV_PRICE_CEILING} must be positive"
            )));
        }
        Ok(())
    }
}

fn parse<T>(key: &str, raw: &str) -> StoreResult<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| StoreError::validation(format!("{key}={raw:?}: {e}")))
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> StoreResult<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse(key, &raw),
        None => Ok(default),
    }
}
