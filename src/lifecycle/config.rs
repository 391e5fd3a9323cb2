//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_PATH` - File backing the durable store (default: `cart.json`)
//! - `CART_STORAGE_KEY` - Key the cart is stored under (default: `@RocketShoes:cart`)
//! - `CART_CHANNEL_CAPACITY` - Actor mailbox size (default: 32)
//! - `CATALOG_BASE_URL` - Remote catalog API; when unset the in-process catalog is used
//! - `CATALOG_TIMEOUT_SECS` - Request timeout for the remote catalog (default: 10)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::storage::CART_STORAGE_KEY;

const DEFAULT_STORAGE_PATH: &str = "cart.json";
const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub channel_capacity: usize,
    /// Remote catalog, if any.
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: CART_STORAGE_KEY.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            catalog: None,
        }
    }
}

impl CartConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse or is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, so tests need not touch the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_path = lookup("CART_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));
        let storage_key = lookup("CART_STORAGE_KEY").unwrap_or_else(|| CART_STORAGE_KEY.to_string());
        let channel_capacity =
            parse_positive(&lookup, "CART_CHANNEL_CAPACITY", DEFAULT_CHANNEL_CAPACITY)?;

        let catalog = match lookup("CATALOG_BASE_URL") {
            Some(base_url) => Some(CatalogConfig {
                base_url,
                timeout_secs: parse_positive(
                    &lookup,
                    "CATALOG_TIMEOUT_SECS",
                    DEFAULT_CATALOG_TIMEOUT_SECS,
                )?,
            }),
            None => None,
        };

        Ok(Self {
            storage_path,
            storage_key,
            channel_capacity,
            catalog,
        })
    }
}

/// Parse an optional, strictly positive number.
fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}
