//! Configuration for the rasterizer driver.
//!
//! YAML with precedence: CLI > file > defaults. Every field has a default, so
//! an empty document is a valid configuration.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::render::CurveSteps;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Grid width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Grid height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Export color for cells that were never drawn.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
}

fn default_width() -> u32 {
    500
}
fn default_height() -> u32 {
    500
}
fn default_background() -> [u8; 3] {
    Rgb::WHITE.to_array()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Curve sampling.
    #[serde(default)]
    pub curves: CurveSteps,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            curves: CurveSteps::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Export color for undrawn cells.
    #[must_use]
    pub fn background(&self) -> Rgb {
        Rgb::from_array(self.canvas.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.canvas.width, 500);
        assert_eq!(config.canvas.height, 500);
        assert_eq!(config.background(), Rgb::WHITE);
        assert_eq!(config.curves.bezier_steps, 20);
        assert_eq!(config.curves.hermite_steps, 100);
    }

    #[test]
    fn test_config_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
version: 1
canvas:
  width: 64
  height: 32
  background: [0, 0, 0]
curves:
  bezier_steps: 50
"#;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, 32);
        assert_eq!(config.background(), Rgb::BLACK);
        assert_eq!(config.curves.bezier_steps, 50);
        assert_eq!(config.curves.hermite_steps, 100);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
canvas:
  width: not_a_number
"#;

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load("/nonexistent/path.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }
}
