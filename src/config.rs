//! Runtime configuration
//!
//! Read from environment variables at startup.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::nutrition::MatchMode;

pub const ANALYSIS_DELAY_VAR: &str = "FOODCAL_ANALYSIS_DELAY_MS";
pub const MATCH_MODE_VAR: &str = "FOODCAL_MATCH_MODE";

/// Pause before an estimate is surfaced, as a visible "analyzing" step
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub analysis_delay_ms: u64,
    pub match_mode: MatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            match_mode: MatchMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ANALYSIS_DELAY_VAR) {
            config.analysis_delay_ms =
                value.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: ANALYSIS_DELAY_VAR,
                    value: value.clone(),
                    expected: "a whole number of milliseconds",
                })?;
        }

        if let Some(value) = lookup(MATCH_MODE_VAR) {
            config.match_mode = MatchMode::from_str(&value).ok_or_else(|| ConfigError::Invalid {
                var: MATCH_MODE_VAR,
                value: value.clone(),
                expected: "'substring' or 'word_boundary'",
            })?;
        }

        Ok(config)
    }

    /// Config with pacing disabled
    pub fn immediate() -> Self {
        Self {
            analysis_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}
