//! TOML scene file support: a background description on disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::background::{
    BackgroundConfig, BackgroundKind, ImagePosition, ImageRepeat, ImageSize,
};

/// Error type for scene file operations.
#[derive(Debug)]
pub enum SceneError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Invalid color format
    InvalidColor(String),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::InvalidColor(s) => write!(f, "Invalid color: {}", s),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for SceneError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for SceneError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root structure for scene TOML files.
///
/// Every field is optional; unspecified values fall back to the documented
/// configuration defaults when converted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    /// Background family (solid, gradient, image)
    pub kind: Option<BackgroundKind>,
    /// Color settings
    pub colors: ColorSection,
    /// Gradient settings
    pub gradient: GradientSection,
    /// Image settings
    pub image: ImageSection,
}

/// Color settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    /// Primary color (any CSS color format)
    pub color1: Option<String>,
    /// Secondary color (any CSS color format)
    pub color2: Option<String>,
}

/// Gradient settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientSection {
    /// Direction in degrees [0, 360)
    pub angle: Option<u16>,
    /// Whether presentation animates the gradient
    pub animate: Option<bool>,
}

/// Image settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSection {
    /// Image reference
    pub url: Option<String>,
    /// Scaling (cover, contain, auto)
    pub size: Option<ImageSize>,
    /// Anchoring (center, top, bottom, left, right)
    pub position: Option<ImagePosition>,
    /// Tiling (no-repeat, repeat, repeat-x, repeat-y)
    pub repeat: Option<ImageRepeat>,
}

/// Validate a color string without changing its spelling.
fn check_color(input: &str) -> Result<String, SceneError> {
    input
        .parse::<csscolorparser::Color>()
        .map_err(|e| SceneError::InvalidColor(format!("'{}': {}", input, e)))?;
    Ok(input.to_string())
}

impl SceneFile {
    /// Load a scene description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        let scene: Self = toml::from_str(&content)?;
        Ok(scene)
    }

    /// Save the scene description to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Convert to a full configuration.
    ///
    /// Uses defaults for any unspecified values; colors are validated as
    /// CSS colors.
    pub fn to_config(&self) -> Result<BackgroundConfig, SceneError> {
        let defaults = BackgroundConfig::default();

        let color1 = match self.colors.color1 {
            Some(ref c) => check_color(c)?,
            None => defaults.color1,
        };
        let color2 = match self.colors.color2 {
            Some(ref c) => check_color(c)?,
            None => defaults.color2,
        };

        Ok(BackgroundConfig {
            kind: self.kind.unwrap_or(defaults.kind),
            color1,
            color2,
            angle: self.gradient.angle.unwrap_or(defaults.angle),
            animate: self.gradient.animate.unwrap_or(defaults.animate),
            image_url: self.image.url.clone().unwrap_or(defaults.image_url),
            image_size: self.image.size.unwrap_or(defaults.image_size),
            image_position: self.image.position.unwrap_or(defaults.image_position),
            image_repeat: self.image.repeat.unwrap_or(defaults.image_repeat),
        })
    }

    /// Create from a full configuration.
    pub fn from_config(config: &BackgroundConfig) -> Self {
        Self {
            kind: Some(config.kind),
            colors: ColorSection {
                color1: Some(config.color1.clone()),
                color2: Some(config.color2.clone()),
            },
            gradient: GradientSection {
                angle: Some(config.angle),
                animate: Some(config.animate),
            },
            image: ImageSection {
                url: Some(config.image_url.clone()),
                size: Some(config.image_size),
                position: Some(config.image_position),
                repeat: Some(config.image_repeat),
            },
        }
    }
}
