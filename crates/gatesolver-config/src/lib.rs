//! Configuration system for gatesolver.
//!
//! Load solver configuration from TOML or YAML files to pick the search
//! strategy and tune iterated width without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gatesolver_config::{SolverConfig, StrategyType};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     strategy = "memoized_bfs"
//!     progress_interval = 5000
//!
//!     [iterated_width]
//!     max_width = 2
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, StrategyType::MemoizedBfs);
//! assert_eq!(config.max_width(), Some(2));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use gatesolver_config::SolverConfig;
//!
//! let config = SolverConfig::load("gatesolver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of expansions between progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Search strategy to run.
    #[serde(default)]
    pub strategy: StrategyType,

    /// Iterated width settings (ignored by the BFS strategies).
    #[serde(default)]
    pub iterated_width: IteratedWidthConfig,

    /// Expansions between progress events; 0 disables them.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::default(),
            iterated_width: IteratedWidthConfig::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: StrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the widths tried by iterated width search.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.iterated_width.max_width = Some(max_width);
        self
    }

    /// Sets the number of expansions between progress events.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Returns the configured width cap, if any.
    ///
    /// Convenience method that delegates to `iterated_width.max_width`.
    pub fn max_width(&self) -> Option<usize> {
        self.iterated_width.max_width
    }

    /// Checks values serde cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterated_width.max_width == Some(0) {
            return Err(ConfigError::Invalid(
                "iterated_width.max_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Search strategy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Breadth-first search without duplicate detection.
    PlainBfs,

    /// Breadth-first search skipping already seen states.
    MemoizedBfs,

    /// Breadth-first search with novelty pruning, widening until solved.
    #[default]
    IteratedWidth,
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyType::PlainBfs => write!(f, "PlainBfs"),
            StrategyType::MemoizedBfs => write!(f, "MemoizedBfs"),
            StrategyType::IteratedWidth => write!(f, "IteratedWidth"),
        }
    }
}

/// Iterated width configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IteratedWidthConfig {
    /// Largest width to try (defaults to the piece count).
    pub max_width: Option<usize>,
}

#[cfg(test)]
mod tests;
