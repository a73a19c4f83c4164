//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_connect::Glyphs;
use tracing::{debug, info, instrument};

/// Configuration for the kata driver.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct KataConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Bowling output settings.
    bowling: BowlingSettings,

    /// Connection board settings.
    connect: ConnectSettings,
}

/// Settings for bowling reports.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlingSettings {
    /// Print the frame-by-frame scorecard along with the score.
    show_scorecard: bool,
}

/// Settings for connection boards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectSettings {
    /// Glyphs used to parse and render boards.
    glyphs: Glyphs,

    /// Print the winning chain along with the winner.
    show_path: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for KataConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            bowling: BowlingSettings::default(),
            connect: ConnectSettings::default(),
        }
    }
}

impl Default for BowlingSettings {
    fn default() -> Self {
        Self {
            show_scorecard: true,
        }
    }
}

impl ConnectSettings {
    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        let Glyphs { x, o, empty } = self.glyphs;
        if x == o || x == empty || o == empty {
            return Err(ConfigError::new(format!(
                "Connect glyphs must be distinct, got x={:?} o={:?} empty={:?}",
                x, o, empty
            )));
        }
        if [x, o, empty].iter().any(|glyph| glyph.is_whitespace()) {
            return Err(ConfigError::new(format!(
                "Connect glyphs cannot be whitespace, got x={:?} o={:?} empty={:?}",
                x, o, empty
            )));
        }
        Ok(())
    }
}

impl KataConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// Connect glyphs must be distinct and not whitespace, or boards could
    /// not be read back unambiguously.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.connect.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the connect settings' path flag.
    pub fn with_show_path(mut self, show_path: bool) -> Self {
        self.connect.show_path = show_path;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
