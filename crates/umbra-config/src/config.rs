//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Sphere tessellation settings.
    pub tessellation: TessellationConfig,
    /// Planar and depth-map shadow settings.
    pub shadow: ShadowConfig,
    /// Animated point light settings.
    pub light: LightConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Sphere tessellation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TessellationConfig {
    /// Initial subdivision level.
    pub level: i32,
    /// Highest level reachable interactively.
    pub max_level: u32,
}

/// Sign of the epsilon added to the shadow plane offset.
///
/// Spelled `positive`, `negative` or `disabled` on the command line.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum BiasSign {
    /// Offset `+ epsilon`.
    #[default]
    Positive,
    /// Offset `- epsilon`.
    Negative,
    /// No bias; a light on the plane becomes an error.
    Disabled,
}

/// Shadow configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShadowConfig {
    /// Bias direction for the planar shadow matrix.
    pub bias: BiasSign,
    /// Bias magnitude.
    pub epsilon: f32,
    /// Ground plane offset: the floor sits at `y = -plane_offset`.
    pub plane_offset: f32,
    /// Shadow map resolution in texels (square).
    pub shadow_map_size: u32,
}

/// Point light configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    /// Orbit center.
    pub center: [f32; 3],
    /// Orbit radius.
    pub radius: f32,
    /// Radians advanced per animation step.
    pub angular_speed: f32,
    /// Point the shadow-map camera looks at.
    pub target: [f32; 3],
    /// Shadow-map camera field of view in degrees.
    pub fov_y_degrees: f32,
    /// Shadow-map camera near plane.
    pub near: f32,
    /// Shadow-map camera far plane.
    pub far: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            level: 3,
            max_level: 8,
        }
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: BiasSign::Positive,
            epsilon: 1e-4,
            plane_offset: 1.0,
            shadow_map_size: 1024,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 2.0, -2.0],
            radius: 2.0,
            angular_speed: 0.01,
            target: [0.0, -1.0, -3.0],
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 20.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for umbra, e.g. `~/.config/umbra` on Linux.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("umbra")
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
