//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::limits::{
    AccountLimits, DEFAULT_MAX_BALANCE, DEFAULT_MIN_INITIAL_BALANCE, DEFAULT_MIN_USERNAME_LENGTH,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Thresholds applied to every account opened
    pub limits: AccountLimits,

    /// Environment (development, production)
    pub environment: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_username_length = parse_or(
            &lookup,
            "ACCOUNT_MIN_USERNAME_LENGTH",
            DEFAULT_MIN_USERNAME_LENGTH,
        )?;

        let min_initial_balance: Decimal = parse_or(
            &lookup,
            "ACCOUNT_MIN_INITIAL_BALANCE",
            DEFAULT_MIN_INITIAL_BALANCE,
        )?;

        if min_initial_balance < Decimal::ZERO {
            return Err(ConfigError::InvalidValue("ACCOUNT_MIN_INITIAL_BALANCE"));
        }

        let max_balance: Decimal = parse_or(&lookup, "ACCOUNT_MAX_BALANCE", DEFAULT_MAX_BALANCE)?;

        let limits = AccountLimits::new(min_username_length, min_initial_balance, max_balance);
        if !limits.is_consistent() {
            return Err(ConfigError::InconsistentLimits {
                floor: min_initial_balance,
                ceiling: max_balance,
            });
        }

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let log_format = parse_or(&lookup, "LOG_FORMAT", LogFormat::default())?;

        Ok(Self {
            limits,
            environment,
            log_format,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue(key)),
        None => Ok(default),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("Minimum initial balance {floor} must be below maximum balance {ceiling}")]
    InconsistentLimits { floor: Decimal, ceiling: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.limits, AccountLimits::default());
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ACCOUNT_MIN_USERNAME_LENGTH", "3"),
            ("ACCOUNT_MIN_INITIAL_BALANCE", "1.5"),
            ("ACCOUNT_MAX_BALANCE", "500"),
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.limits.min_username_length, 3);
        assert_eq!(config.limits.min_initial_balance, dec!(1.5));
        assert_eq!(config.limits.max_balance, dec!(500));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_value() {
        let result = Config::from_lookup(lookup_from(&[("ACCOUNT_MAX_BALANCE", "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("ACCOUNT_MAX_BALANCE"))
        ));
    }

    #[test]
    fn test_negative_floor_rejected() {
        let result = Config::from_lookup(lookup_from(&[("ACCOUNT_MIN_INITIAL_BALANCE", "-50")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("ACCOUNT_MIN_INITIAL_BALANCE"))
        ));
    }

    #[test]
    fn test_non_positive_ceiling_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("ACCOUNT_MIN_INITIAL_BALANCE", "0"),
            ("ACCOUNT_MAX_BALANCE", "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::InconsistentLimits { .. })));
    }

    #[test]
    fn test_floor_above_ceiling() {
        let result = Config::from_lookup(lookup_from(&[
            ("ACCOUNT_MIN_INITIAL_BALANCE", "100"),
            ("ACCOUNT_MAX_BALANCE", "10"),
        ]));
        assert!(matches!(result, Err(ConfigError::InconsistentLimits { .. })));
    }
}
