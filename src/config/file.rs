//! TOML configuration for the demo binary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::props::CameraProps;

/// Configuration loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid viewport dimensions")]
    InvalidViewport,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Hosting container dimensions for the demo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Container width in pixels.
    pub width: u32,
    /// Container height in pixels.
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl ViewportConfig {
    /// Validates the viewport dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidViewport);
        }
        Ok(())
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Camera props applied to the component.
    #[serde(default)]
    pub camera: CameraProps,
    /// Hosting container dimensions.
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.viewport.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropValue;

    #[test]
    fn test_default_viewport_valid() {
        assert!(ViewportConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_viewport_invalid() {
        let viewport = ViewportConfig {
            width: 0,
            height: 480,
        };
        assert!(matches!(
            viewport.validate(),
            Err(ConfigError::InvalidViewport)
        ));
    }

    #[test]
    fn test_parse_camera_section() {
        let config: FileConfig = toml::from_str(
            r#"
            [camera]
            facing = "front"
            capture_audio = true

            [viewport]
            width = 1280
            height = 720
            "#,
        )
        .unwrap();
        assert_eq!(config.camera.facing, PropValue::name("front"));
        assert!(config.camera.capture_audio);
        assert_eq!(config.viewport.width, 1280);
    }
}
