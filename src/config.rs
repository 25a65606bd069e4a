use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::{logging::LogConfig, render::ThemeKind};

/// Environment variable naming the log directory when `--log-dir` is not given.
pub const LOG_DIR_ENV: &str = "LABYRINTH_LOG_DIR";

/// Default ceiling on `width * height`.
pub const DEFAULT_MAX_CELLS: usize = u8::MAX as usize * u8::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: u16, height: u16 },
    #[error("maze of {width}x{height} exceeds the limit of {max_cells} cells")]
    TooLarge {
        width: u16,
        height: u16,
        max_cells: usize,
    },
}

/// Generate a perfect maze, draw it in the terminal and optionally show the way out
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, name = "labyrinth")]
pub struct Config {
    /// Maze width in cells
    #[arg(default_value_t = 40)]
    pub width: u16,

    /// Maze height in cells
    #[arg(default_value_t = 40)]
    pub height: u16,

    /// Seed for reproducible layouts; fresh OS entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Default::default())]
    pub theme: ThemeKind,

    /// Draw the solution overlay
    #[arg(long = "solve")]
    pub show_solution: bool,

    /// Directory for the log file; logging is off when absent
    #[arg(long, env = LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,

    /// Upper bound on width * height
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    pub max_cells: usize,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width as usize * self.height as usize > self.max_cells {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
                max_cells: self.max_cells,
            });
        }
        Ok(())
    }

    /// Logging settings, when a log directory is configured.
    pub fn log_config(&self) -> Option<LogConfig> {
        self.log_dir.as_ref().map(|dir| LogConfig::new(dir.clone()))
    }
}
