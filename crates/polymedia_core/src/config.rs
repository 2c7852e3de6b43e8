//! Configuration structures for polymedia.
//!
//! Configuration is layered:
//! - Bundled defaults (include_str! from polymedia.toml)
//! - User overrides (~/.config/polymedia/polymedia.toml, then ./polymedia.toml)
//! - Later layers override earlier ones key by key

use config::{Config, File, FileFormat};
use polymedia_error::{ConfigError, PolymediaError, PolymediaResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../polymedia.toml");

/// Where application assets live on disk.
///
/// # Example
///
/// ```toml
/// [assets]
/// root = "assets"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct AssetConfig {
    /// Directory asset paths are resolved against
    #[serde(default = "default_asset_root")]
    root: PathBuf,
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
        }
    }
}

/// Log output settings.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info", "polymedia_source=debug")
    #[serde(default = "default_level")]
    level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Top-level polymedia configuration.
///
/// # Example
///
/// ```no_run
/// use polymedia_core::PolymediaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PolymediaConfig::load()?;
/// println!("Assets served from {}", config.assets().root().display());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, derive_getters::Getters,
)]
pub struct PolymediaConfig {
    /// Asset bundle settings
    #[serde(default)]
    assets: AssetConfig,

    /// Logging settings
    #[serde(default)]
    logging: LoggingConfig,
}

impl PolymediaConfig {
    /// Load configuration from a specific file path on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PolymediaResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present config file cannot be parsed.
    #[instrument]
    pub fn load() -> PolymediaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/polymedia/polymedia.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("polymedia").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> PolymediaResult<Self> {
        builder
            .build()
            .map_err(|e| {
                PolymediaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PolymediaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
