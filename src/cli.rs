//! Command-line interface for grid_clash.

use clap::Parser;
use grid_clash::{ConfigError, GameConfig, Mode};
use std::path::PathBuf;

/// Grid Clash - tic-tac-toe for two players or against the CPU
#[derive(Parser, Debug)]
#[command(name = "grid_clash")]
#[command(about = "Tic-tac-toe for two players or against the CPU", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mode to start in (duo or solo)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Seed for the CPU's tie-breaking RNG
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before the CPU answers, in milliseconds
    #[arg(long)]
    pub cpu_delay_ms: Option<u64>,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long, default_value = "grid_clash.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Builds the session config: file values first, flags on top.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(mode) = self.mode {
            config = config.with_starting_mode(mode);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(delay) = self.cpu_delay_ms {
            config = config.with_cpu_delay_ms(delay);
        }
        Ok(config)
    }
}
