//! Command-line configuration and logger setup.
//!
//! Flags fall back to environment variables, then to built-in defaults.
//! The terminal runs in raw mode, so logs always go to a file.

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::term::AnchorY;

pub const DEFAULT_LOG_FILE: &str = "tui-2048.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal with the arrow keys")]
pub struct Args {
    /// File that receives the game log
    #[arg(long, env = "TUI_2048_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log verbosity
    #[arg(long, env = "TUI_2048_LOG_LEVEL", value_enum, default_value_t)]
    pub log_level: LogLevel,

    /// Pin the board to the top row instead of centering it vertically
    #[arg(long)]
    pub anchor_top: bool,
}

impl Args {
    pub fn anchor_y(&self) -> AnchorY {
        if self.anchor_top {
            AnchorY::Top
        } else {
            AnchorY::Center
        }
    }
}

/// Install the file logger.
///
/// Failure is reported on stderr and the game runs without logging.
pub fn init_logging(args: &Args) {
    if args.log_level == LogLevel::Off {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(&args.log_file) {
        Ok(file) => {
            if let Err(err) = WriteLogger::init(args.log_level.into(), log_config, file) {
                eprintln!("logger already initialized: {err}");
            }
        }
        Err(err) => eprintln!("cannot open log file {}: {err}", args.log_file.display()),
    }
}
