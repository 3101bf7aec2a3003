//! Configuration module

use thiserror::Error;

/// Runtime configuration for the demo binary
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Id of the user profile rendered on startup
    pub profile_user_id: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            profile_user_id: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid DEMO_USER_ID: {0}")]
    InvalidUserId(#[from] std::num::ParseIntError),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DEMO_LOG` overrides the log level and `DEMO_USER_ID` selects the
    /// profile rendered on startup; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Ok(level) = std::env::var("DEMO_LOG") {
            cfg.log_level = level;
        }
        if let Ok(id) = std::env::var("DEMO_USER_ID") {
            cfg.profile_user_id = id.parse()?;
        }
        Ok(cfg)
    }
}
