//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{BiasSign, Config};

/// umbra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "umbra", about = "Sphere tessellation and shadow projection")]
pub struct CliArgs {
    /// Sphere subdivision level.
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<i32>,

    /// Shadow plane bias direction.
    #[arg(long, value_enum)]
    pub bias: Option<BiasSign>,

    /// Number of animation frames to simulate.
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(level) = args.level {
            self.tessellation.level = level;
        }
        if let Some(bias) = args.bias {
            self.shadow.bias = bias;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
