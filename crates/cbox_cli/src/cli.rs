use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use cbox_renderer::RenderConfig;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Progressive Cornell box path tracer.
#[derive(Debug, Parser)]
#[command(name = "cbox", version)]
pub struct Args {
    /// JSON render configuration; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum intersections per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Session seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames (samples per pixel) to accumulate
    #[arg(short, long, default_value_t = 256)]
    pub frames: u64,

    /// Write the image every N frames as well as at the end (0 = only at the end)
    #[arg(long, default_value_t = 0)]
    pub snapshot_every: u64,

    /// Render the box with a plain gray ceiling instead of a light
    #[arg(long)]
    pub no_light: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "cbox.png")]
    pub output: PathBuf,

    /// Logging level (RUST_LOG overrides per module)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply the command line overrides on top of `config`.
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}
