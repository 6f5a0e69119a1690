//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first, then process variables are read:
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `PORT` | `8080` | listen address for the transport, normalized to `:PORT` |
//! | `DATABASE_URL` | unset | reserved for a durable backend |
//! | `ORDER_MAILBOX_SIZE` | `32` | capacity of the order store's mailbox |

use std::env;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrokerConfig {
    /// Always starts with `:`.
    pub port: String,
    pub database_url: Option<String>,
    pub order_mailbox_size: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            port: format!(":{DEFAULT_PORT}"),
            database_url: None,
            order_mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

impl BrokerConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            debug!("No .env file found, using process environment");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = get("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let port = if port.starts_with(':') {
            port
        } else {
            format!(":{port}")
        };

        let order_mailbox_size = match get("ORDER_MAILBOX_SIZE") {
            None => DEFAULT_MAILBOX_SIZE,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "ORDER_MAILBOX_SIZE",
                        value: raw,
                    })
                }
            },
        };

        let config = Self {
            port,
            database_url: get("DATABASE_URL"),
            order_mailbox_size,
        };
        info!(
            port = %config.port,
            database_configured = config.database_url.is_some(),
            mailbox = config.order_mailbox_size,
            "Configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BrokerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BrokerConfig::default());
        assert_eq!(config.port, ":8080");
    }

    #[test]
    fn test_port_is_normalized() {
        let bare = BrokerConfig::from_lookup(lookup(&[("PORT", "9000")])).unwrap();
        assert_eq!(bare.port, ":9000");

        let prefixed = BrokerConfig::from_lookup(lookup(&[("PORT", ":9001")])).unwrap();
        assert_eq!(prefixed.port, ":9001");
    }

    #[test]
    fn test_database_url_and_mailbox() {
        let config = BrokerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/rides"),
            ("ORDER_MAILBOX_SIZE", "128"),
        ]))
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/rides")
        );
        assert_eq!(config.order_mailbox_size, 128);

        let empty = BrokerConfig::from_lookup(lookup(&[("DATABASE_URL", "")])).unwrap();
        assert_eq!(empty.database_url, None);
    }

    #[test]
    fn test_invalid_mailbox_size() {
        for bad in ["0", "-1", "lots"] {
            let err = BrokerConfig::from_lookup(lookup(&[("ORDER_MAILBOX_SIZE", bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    key: "ORDER_MAILBOX_SIZE",
                    value: bad.to_string()
                }
            );
        }
    }
}
