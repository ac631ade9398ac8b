use std::{path::PathBuf, time::Duration};

use jiff::SpanRelativeTo;
use thiserror::Error;

const HTTP_HOST: &str = "HTTP_HOST";
const HTTP_PORT: &str = "HTTP_PORT";
const GRACEFUL_SHUTDOWN_TIMEOUT: &str = "GRACEFUL_SHUTDOWN_TIMEOUT";
const HISTORY_PATH: &str = "PACKER_HISTORY_PATH";
const MAX_AMOUNT: &str = "PACKER_MAX_AMOUNT";

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_AMOUNT: u64 = 10_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("env {name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
    pub shutdown_timeout: Duration,
    /// JSON-lines history file, in-memory history when unset.
    pub history_path: Option<PathBuf>,
    /// Largest amount accepted before the optimizer is called.
    pub max_amount: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let http_port = match var(HTTP_PORT) {
            Some(port) => port.trim().parse::<u16>().map_err(|error| ConfigError::Invalid {
                name: HTTP_PORT,
                reason: error.to_string(),
            })?,
            None => DEFAULT_HTTP_PORT,
        };

        let shutdown_timeout = match var(GRACEFUL_SHUTDOWN_TIMEOUT) {
            Some(timeout) => parse_duration(timeout.trim()).map_err(|reason| ConfigError::Invalid {
                name: GRACEFUL_SHUTDOWN_TIMEOUT,
                reason,
            })?,
            None => DEFAULT_SHUTDOWN_TIMEOUT,
        };

        let max_amount = match var(MAX_AMOUNT) {
            Some(amount) => match amount.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        name: MAX_AMOUNT,
                        reason: String::from("must be greater than zero"),
                    });
                }
                Ok(amount) => amount,
                Err(error) => {
                    return Err(ConfigError::Invalid {
                        name: MAX_AMOUNT,
                        reason: error.to_string(),
                    });
                }
            },
            None => DEFAULT_MAX_AMOUNT,
        };

        Ok(AppConfig {
            http_host: var(HTTP_HOST).unwrap_or_else(|| String::from(DEFAULT_HTTP_HOST)),
            http_port,
            shutdown_timeout,
            history_path: var(HISTORY_PATH).map(PathBuf::from),
            max_amount,
        })
    }

    pub fn http_address(&self) -> (&str, u16) {
        (&self.http_host, self.http_port)
    }
}

/// Accepts `10s`, `PT1M`, `1m 30s` or a bare number of seconds.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let duration = if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<i64>() {
        jiff::SignedDuration::from_secs(seconds)
    } else {
        return Err(String::from("Invalid duration"));
    };

    Duration::try_from(duration).map_err(|_| String::from("Duration must not be negative"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.http_address(), ("127.0.0.1", 8080));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(10));
        assert_eq!(config.history_path, None);
        assert_eq!(config.max_amount, 10_000_000);
    }

    #[test]
    fn test_config_from_vars() {
        let config = config(&[
            ("HTTP_HOST", "0.0.0.0"),
            ("HTTP_PORT", "3000"),
            ("GRACEFUL_SHUTDOWN_TIMEOUT", "30s"),
            ("PACKER_HISTORY_PATH", "./history.jsonl"),
            ("PACKER_MAX_AMOUNT", "500000"),
        ])
        .unwrap();

        assert_eq!(config.http_address(), ("0.0.0.0", 3000));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
        assert_eq!(config.history_path, Some(PathBuf::from("./history.jsonl")));
        assert_eq!(config.max_amount, 500_000);
    }

    #[test]
    fn test_config_empty_values_use_defaults() {
        let config = config(&[("HTTP_HOST", ""), ("PACKER_HISTORY_PATH", "  ")]).unwrap();

        assert_eq!(config.http_host, "127.0.0.1");
        assert_eq!(config.history_path, None);
    }

    #[test]
    fn test_config_invalid_values() {
        let error = config(&[("HTTP_PORT", "http")]).unwrap_err();
        assert!(error.to_string().starts_with("env HTTP_PORT is invalid"));

        let error = config(&[("PACKER_MAX_AMOUNT", "0")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "env PACKER_MAX_AMOUNT is invalid: must be greater than zero"
        );

        assert!(config(&[("GRACEFUL_SHUTDOWN_TIMEOUT", "soon")]).is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("10s"), Ok(Duration::from_secs(10)));
        assert_eq!(parse_duration("PT1M"), Ok(Duration::from_secs(60)));
        assert_eq!(parse_duration("1m 30s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration("5"), Ok(Duration::from_secs(5)));
        assert!(parse_duration("-5").is_err());
        assert!(parse_duration("later").is_err());
    }
}
