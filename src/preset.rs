//! Named, persisted background configurations.

use serde::{Deserialize, Serialize};

use crate::background::{
    BackgroundConfig, BackgroundKind, ImagePosition, ImageRepeat, ImageSize,
};

/// A named snapshot of a background configuration.
///
/// `name` is the primary key in the repository; saving a preset under an
/// existing name overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub config: BackgroundConfig,
}

impl Preset {
    /// Build a preset from the current configuration.
    pub fn from_config(name: impl Into<String>, config: &BackgroundConfig) -> Self {
        Self {
            name: name.into(),
            config: config.clone(),
        }
    }
}

/// Stored shape of a preset record.
///
/// Only `name` and `kind` are required; every other field is optional so
/// records written before a field existed still load. Absent fields are
/// filled with the documented defaults on conversion. Wire names match the
/// records the original store held.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_position: Option<ImagePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_repeat: Option<ImageRepeat>,
}

impl PresetRecord {
    /// Convert to a full preset, filling absent fields with defaults.
    pub fn into_preset(self) -> Preset {
        let defaults = BackgroundConfig::default();
        Preset {
            name: self.name,
            config: BackgroundConfig {
                kind: self.kind,
                color1: self.color1.unwrap_or(defaults.color1),
                color2: self.color2.unwrap_or(defaults.color2),
                angle: self.angle.unwrap_or(defaults.angle),
                animate: self.animate.unwrap_or(defaults.animate),
                image_url: self.image_url.unwrap_or(defaults.image_url),
                image_size: self.image_size.unwrap_or(defaults.image_size),
                image_position: self.image_position.unwrap_or(defaults.image_position),
                image_repeat: self.image_repeat.unwrap_or(defaults.image_repeat),
            },
        }
    }
}

impl From<&Preset> for PresetRecord {
    fn from(preset: &Preset) -> Self {
        let config = &preset.config;
        Self {
            name: preset.name.clone(),
            kind: config.kind,
            color1: Some(config.color1.clone()),
            color2: Some(config.color2.clone()),
            angle: Some(config.angle),
            animate: Some(config.animate),
            image_url: Some(config.image_url.clone()),
            image_size: Some(config.image_size),
            image_position: Some(config.image_position),
            image_repeat: Some(config.image_repeat),
        }
    }
}
