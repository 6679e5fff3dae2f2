//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::background::{BackgroundKind, ImagePosition, ImageRepeat, ImageSize, Mutation};

/// Background composer with undo history and persisted presets.
#[derive(Parser, Debug)]
#[command(name = "backdrop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Background kind: solid, gradient, or image
    #[arg(short, long, value_enum)]
    pub kind: Option<BackgroundKind>,

    /// Primary color (solid fill, gradient start) in any CSS format
    #[arg(
        long,
        value_name = "COLOR",
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    pub color1: Option<String>,

    /// Secondary color (gradient end) in any CSS format
    #[arg(
        long,
        value_name = "COLOR",
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    pub color2: Option<String>,

    /// Gradient direction in degrees (out-of-range values wrap into 0-359)
    #[arg(short, long, value_name = "DEGREES")]
    pub angle: Option<i32>,

    /// Mark the gradient as animated (pass =false to switch off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub animate: Option<bool>,

    /// Image reference for image backgrounds
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Image scaling: cover, contain, or auto
    #[arg(long, value_enum)]
    pub image_size: Option<ImageSize>,

    /// Image anchoring: center, top, bottom, left, or right
    #[arg(long, value_enum)]
    pub image_position: Option<ImagePosition>,

    /// Image tiling: no-repeat, repeat, repeat-x, or repeat-y
    #[arg(long, value_enum)]
    pub image_repeat: Option<ImageRepeat>,

    /// Start from a stored preset, then apply any flags above on top
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Save the composed background as a preset (overwrites an existing name)
    #[arg(short, long, value_name = "NAME")]
    pub save: Option<String>,

    /// Delete a stored preset and exit
    #[arg(long, value_name = "NAME")]
    pub delete_preset: Option<String>,

    /// List stored presets with their rendered values and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Preset store file (default: the user data directory)
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Load a scene description from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the composed background to a TOML scene file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Output file for the rendered CSS value (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log file path (default: backdrop.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Build the mutation list from whichever composition flags were set.
    ///
    /// Order matters only for readability of the resulting history: the
    /// kind switch comes first, then colors, then gradient and image
    /// fields.
    pub fn mutations(&self) -> Vec<Mutation> {
        let mut mutations = Vec::new();
        if let Some(kind) = self.kind {
            mutations.push(Mutation::Kind(kind));
        }
        if let Some(ref color) = self.color1 {
            mutations.push(Mutation::Color1(color.clone()));
        }
        if let Some(ref color) = self.color2 {
            mutations.push(Mutation::Color2(color.clone()));
        }
        if let Some(angle) = self.angle {
            mutations.push(Mutation::Angle(angle));
        }
        if let Some(animate) = self.animate {
            mutations.push(Mutation::Animate(animate));
        }
        if let Some(ref url) = self.image_url {
            mutations.push(Mutation::ImageUrl(url.clone()));
        }
        if let Some(size) = self.image_size {
            mutations.push(Mutation::ImageSize(size));
        }
        if let Some(position) = self.image_position {
            mutations.push(Mutation::ImagePosition(position));
        }
        if let Some(repeat) = self.image_repeat {
            mutations.push(Mutation::ImageRepeat(repeat));
        }
        mutations
    }
}
