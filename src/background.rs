//! Background configuration model and renderable derivation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which family of background is being composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Single flat color
    Solid,
    /// Two-color directional gradient
    #[default]
    Gradient,
    /// Image reference with layout options
    Image,
}

impl std::fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Gradient => write!(f, "gradient"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// How an image background is scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// Scale to fill, cropping as needed
    #[default]
    Cover,
    /// Scale to fit entirely inside
    Contain,
    /// Intrinsic size
    Auto,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cover => write!(f, "cover"),
            Self::Contain => write!(f, "contain"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Where an image background is anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl std::fmt::Display for ImagePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// How an image background tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRepeat {
    #[default]
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
}

impl std::fmt::Display for ImageRepeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRepeat => write!(f, "no-repeat"),
            Self::Repeat => write!(f, "repeat"),
            Self::RepeatX => write!(f, "repeat-x"),
            Self::RepeatY => write!(f, "repeat-y"),
        }
    }
}

/// Wrap a degree value into [0, 360).
///
/// Out-of-range angles are normalized rather than rejected; 360 maps to 0,
/// which renders identically.
pub fn normalize_angle(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

/// Canonical background configuration.
///
/// Fields not relevant to the current `kind` are retained, never cleared,
/// so switching kinds back and forth restores prior values. Wire field
/// names match the records the store has always held (`type`, `imageUrl`,
/// ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    /// Active background family
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    /// Primary color (solid fill, gradient start)
    pub color1: String,
    /// Secondary color (gradient end)
    pub color2: String,
    /// Gradient direction in degrees [0, 360)
    pub angle: u16,
    /// Whether the gradient is animated by the presentation layer
    pub animate: bool,
    /// Image reference; empty means no image selected
    pub image_url: String,
    /// Image scaling
    pub image_size: ImageSize,
    /// Image anchoring
    pub image_position: ImagePosition,
    /// Image tiling
    pub image_repeat: ImageRepeat,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            color1: "#ff7e5f".to_string(),
            color2: "#feb47b".to_string(),
            angle: 90,
            animate: false,
            image_url: String::new(),
            image_size: ImageSize::Cover,
            image_position: ImagePosition::Center,
            image_repeat: ImageRepeat::NoRepeat,
        }
    }
}

/// A single field-level change to a [`BackgroundConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Kind(BackgroundKind),
    Color1(String),
    Color2(String),
    Angle(i32),
    Animate(bool),
    ImageUrl(String),
    ImageSize(ImageSize),
    ImagePosition(ImagePosition),
    ImageRepeat(ImageRepeat),
}

impl BackgroundConfig {
    /// Apply one field change in place.
    ///
    /// Numeric input is normalized here, at the mutation boundary, so the
    /// stored configuration is always in range.
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::Kind(kind) => self.kind = *kind,
            Mutation::Color1(color) => self.color1 = color.clone(),
            Mutation::Color2(color) => self.color2 = color.clone(),
            Mutation::Angle(degrees) => self.angle = normalize_angle(*degrees),
            Mutation::Animate(on) => self.animate = *on,
            Mutation::ImageUrl(url) => self.image_url = url.clone(),
            Mutation::ImageSize(size) => self.image_size = *size,
            Mutation::ImagePosition(position) => self.image_position = *position,
            Mutation::ImageRepeat(repeat) => self.image_repeat = *repeat,
        }
    }

    /// Derive the renderable background value for the current configuration.
    ///
    /// Pure: no side effects, equal configs derive equal renderables. All
    /// field combinations are defined; an image background with an empty
    /// URL derives the blank background, which is a valid state rather
    /// than an error.
    pub fn derive(&self) -> Renderable {
        match self.kind {
            BackgroundKind::Solid => Renderable::Solid {
                color: self.color1.clone(),
            },
            BackgroundKind::Gradient => Renderable::Gradient {
                color1: self.color1.clone(),
                color2: self.color2.clone(),
                angle: self.angle,
                animated: self.animate,
            },
            BackgroundKind::Image => {
                if self.image_url.is_empty() {
                    Renderable::Blank
                } else {
                    Renderable::Image {
                        url: self.image_url.clone(),
                        position: self.image_position,
                        size: self.image_size,
                        repeat: self.image_repeat,
                    }
                }
            }
        }
    }
}

/// Derived background value consumed by the presentation layer.
///
/// Never persisted and never part of history; recomputed from the
/// configuration after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    /// Flat color fill
    Solid { color: String },
    /// Directional two-color blend; `animated` is consumed by presentation
    Gradient {
        color1: String,
        color2: String,
        angle: u16,
        animated: bool,
    },
    /// Image composite
    Image {
        url: String,
        position: ImagePosition,
        size: ImageSize,
        repeat: ImageRepeat,
    },
    /// Visually empty background
    Blank,
}

impl Renderable {
    /// Render as a CSS `background` shorthand value.
    ///
    /// The blank background renders as the empty string.
    pub fn css(&self) -> String {
        match self {
            Self::Solid { color } => color.clone(),
            Self::Gradient {
                color1,
                color2,
                angle,
                ..
            } => format!("linear-gradient({angle}deg, {color1}, {color2})"),
            Self::Image {
                url,
                position,
                size,
                repeat,
            } => format!("url({url}) {position} / {size} {repeat}"),
            Self::Blank => String::new(),
        }
    }

    /// Whether presentation should run the gradient animation.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Gradient { animated: true, .. })
    }
}
