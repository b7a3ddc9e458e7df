//! Game configuration loaded from TOML.

use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Delay before the CPU answers a human move, in milliseconds.
    #[serde(default = "default_cpu_delay_ms")]
    cpu_delay_ms: u64,

    /// Mode the session opens in.
    #[serde(default)]
    starting_mode: Mode,

    /// Fixed seed for the CPU tie-break RNG. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_cpu_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cpu_delay_ms: default_cpu_delay_ms(),
            starting_mode: Mode::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            cpu_delay_ms = config.cpu_delay_ms,
            starting_mode = %config.starting_mode,
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// The CPU delay as a [`Duration`].
    pub fn cpu_delay(&self) -> Duration {
        Duration::from_millis(self.cpu_delay_ms)
    }

    /// Overrides the CPU delay.
    pub fn with_cpu_delay_ms(mut self, cpu_delay_ms: u64) -> Self {
        self.cpu_delay_ms = cpu_delay_ms;
        self
    }

    /// Overrides the starting mode.
    pub fn with_starting_mode(mut self, mode: Mode) -> Self {
        self.starting_mode = mode;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
