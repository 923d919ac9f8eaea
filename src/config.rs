//! Configuration file handling for ascii-image.
//!
//! Loads configuration from `<config dir>/ascii-image/config.toml` or a custom path.
//! Command-line flags always take precedence over values found here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{ColorMode, FontRatio, PaletteCode};
use crate::terminal::TerminalCanvas;

/// Configuration file structure for ascii-image.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub fontratio: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub palette_code: Option<String>,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub random_char: bool,
    #[serde(default)]
    pub invert: bool,
}

/// Canvas used when there is no terminal to measure.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_fallback_width")]
    pub fallback_width: u16,
    #[serde(default = "default_fallback_height")]
    pub fallback_height: u16,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fallback_width: default_fallback_width(),
            fallback_height: default_fallback_height(),
        }
    }
}

fn default_fallback_width() -> u16 {
    80
}

fn default_fallback_height() -> u16 {
    24
}

/// Commented default config written by `config init`.
pub const DEFAULT_CONFIG: &str = r##"# ascii-image configuration

[render]
# Glyph width / height of your terminal font
fontratio = 0.4
# Color: full, b&w, none
color = "full"
# Preset palette: extended, standard, reduced, block
palette_code = "standard"
# Custom palette, densest glyph first (overrides palette_code)
# palette = "#-. "
# Random glyph per pixel
random_char = false
# Map black to the sparsest glyph
invert = false

[output]
# Canvas used by convert-image when stdout is not a terminal and no
# reduction factor is given
fallback_width = 80
fallback_height = 24
"##;

impl Config {
    /// Load configuration from a file path.
    ///
    /// With no explicit path, a missing default file yields the default config.
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound { path });
            }
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn fontratio(&self) -> Result<Option<FontRatio>, ConfigError> {
        self.render
            .fontratio
            .map(|value| {
                FontRatio::new(value).map_err(|e| ConfigError::InvalidValue {
                    key: "render.fontratio",
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    pub fn color(&self) -> Result<Option<ColorMode>, ConfigError> {
        self.render
            .color
            .as_deref()
            .map(|value| {
                value.parse::<ColorMode>().map_err(|message| ConfigError::InvalidValue {
                    key: "render.color",
                    message,
                })
            })
            .transpose()
    }

    pub fn palette_code(&self) -> Result<Option<PaletteCode>, ConfigError> {
        self.render
            .palette_code
            .as_deref()
            .map(|value| {
                value.parse::<PaletteCode>().map_err(|message| ConfigError::InvalidValue {
                    key: "render.palette_code",
                    message,
                })
            })
            .transpose()
    }

    pub fn fallback_canvas(&self) -> Result<TerminalCanvas, ConfigError> {
        TerminalCanvas::new(self.output.fallback_width, self.output.fallback_height).map_err(
            |_| ConfigError::InvalidValue {
                key: "output.fallback_width/fallback_height",
                message: "must both be greater than 0".to_string(),
            },
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    AlreadyExists {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' does not exist", path.display())
            }
            ConfigError::AlreadyExists { path } => {
                write!(
                    f,
                    "Config file already exists: {}\n\
                     Use 'ascii-image config show' to view current settings.",
                    path.display()
                )
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { key, message } => {
                write!(f, "Invalid config value for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-image").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-image/config.toml")
        })
}
