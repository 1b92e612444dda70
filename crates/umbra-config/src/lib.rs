//! Configuration for the umbra tools.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and tolerate missing or unknown fields.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BiasSign, Config, DebugConfig, LightConfig, ShadowConfig, TessellationConfig,
    default_config_dir,
};
pub use error::ConfigError;
