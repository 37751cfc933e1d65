use crate::core::{constants::*, error::QuoteResult, QuoteError};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub precision: u8,
    pub pools_file: String,
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> QuoteResult<Self> {
        Ok(Self {
            precision: parse_setting(
                "QUOTE_PRECISION",
                env::var("QUOTE_PRECISION").ok(),
                DEFAULT_PRECISION,
            )?,
            pools_file: env::var("POOLS_FILE").unwrap_or_else(|_| DEFAULT_POOLS_FILE.to_string()),
            cache_ttl_secs: parse_setting(
                "CACHE_TTL_SECS",
                env::var("CACHE_TTL_SECS").ok(),
                POOL_CACHE_TTL,
            )?,
        })
    }

    pub fn validate(&self) -> QuoteResult<()> {
        if self.precision > MAX_DECIMALS {
            return Err(QuoteError::ConfigError(format!(
                "Precision cannot exceed {} digits",
                MAX_DECIMALS
            )));
        }

        if self.cache_ttl_secs == 0 {
            return Err(QuoteError::ConfigError(
                "Cache TTL must be greater than 0".to_string(),
            ));
        }

        if self.pools_file.trim().is_empty() {
            return Err(QuoteError::ConfigError(
                "Pools file path is empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Unset or blank keeps the default; anything unparsable is a config error
fn parse_setting<T: FromStr>(key: &str, raw: Option<String>, default: T) -> QuoteResult<T> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| {
            QuoteError::ConfigError(format!("{} is not a valid number: {}", key, value))
        }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            pools_file: DEFAULT_POOLS_FILE.to_string(),
            cache_ttl_secs: POOL_CACHE_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.precision, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            precision: 19,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            cache_ttl_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("CACHE_TTL_SECS", None, 30u64).unwrap(), 30);
        assert_eq!(parse_setting("CACHE_TTL_SECS", Some(" ".to_string()), 30u64).unwrap(), 30);
        assert_eq!(parse_setting("CACHE_TTL_SECS", Some("120".to_string()), 30u64).unwrap(), 120);

        let err = parse_setting("CACHE_TTL_SECS", Some("soon".to_string()), 30u64).unwrap_err();
        assert!(matches!(err, QuoteError::ConfigError(ref msg) if msg.contains("CACHE_TTL_SECS")));

        let err = parse_setting("QUOTE_PRECISION", Some("six".to_string()), 6u8).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
    }
}
