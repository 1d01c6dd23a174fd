//! # Configuration State
//!
//! Read-only settings for the kiosk.
//!
//! ## Sources (later wins)
//! 1. Built-in defaults
//! 2. `.env` file in the working directory, if present
//! 3. `GRILL_*` environment variables
//! 4. Command-line flags (applied by `run()`)
//!
//! | Variable                      | Default         |
//! |-------------------------------|-----------------|
//! | `GRILL_WHATSAPP_PHONE`        | `5511999999999` |
//! | `GRILL_CONFIRMATION_DELAY_MS` | `3000`          |
//! | `GRILL_RECENT_ORDERS`         | `5`             |

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use grill_core::validation::validate_whatsapp_phone;
use grill_core::{DEFAULT_WHATSAPP_PHONE, RECENT_ORDERS_LIMIT};

pub const ENV_WHATSAPP_PHONE: &str = "GRILL_WHATSAPP_PHONE";
pub const ENV_CONFIRMATION_DELAY_MS: &str = "GRILL_CONFIRMATION_DELAY_MS";
pub const ENV_RECENT_ORDERS: &str = "GRILL_RECENT_ORDERS";

/// How long the checkout screen waits before confirming the hand-off.
pub const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Where checkout messages are sent. Digits only, with country code.
    pub whatsapp_phone: String,

    /// Delay before the console channel acknowledges a hand-off.
    pub confirmation_delay_ms: u64,

    /// Number of orders in the dashboard's "recent orders" list.
    pub recent_orders_limit: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_string(),
            confirmation_delay_ms: DEFAULT_CONFIRMATION_DELAY_MS,
            recent_orders_limit: RECENT_ORDERS_LIMIT,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the environment.
    ///
    /// Calls `dotenvy::dotenv()` first so a `.env` file can supply values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set but
    /// cannot be parsed or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(phone) = lookup(ENV_WHATSAPP_PHONE) {
            config.set_whatsapp_phone(&phone, ENV_WHATSAPP_PHONE)?;
        }

        if let Some(delay) = lookup(ENV_CONFIRMATION_DELAY_MS) {
            config.confirmation_delay_ms = delay
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_CONFIRMATION_DELAY_MS, e))?;
        }

        if let Some(limit) = lookup(ENV_RECENT_ORDERS) {
            config.recent_orders_limit = limit
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_RECENT_ORDERS, e))?;
        }

        Ok(config)
    }

    /// Validates and stores a destination phone. `source` names the setting
    /// in error messages.
    pub fn set_whatsapp_phone(&mut self, phone: &str, source: &str) -> Result<(), ConfigError> {
        self.whatsapp_phone =
            validate_whatsapp_phone(phone).map_err(|e| ConfigError::invalid(source, e))?;
        Ok(())
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}
