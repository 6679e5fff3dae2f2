use backdrop::background::{BackgroundKind, ImagePosition, ImageSize};
use backdrop::scene::{SceneFile, SceneError};

#[test]
fn test_default_scene_is_all_unset() {
    let scene = SceneFile::default();
    assert!(scene.kind.is_none());
    assert!(scene.colors.color1.is_none());
    assert!(scene.image.url.is_none());
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
kind = "gradient"

[colors]
color1 = "#ff7e5f"
color2 = "#feb47b"

[gradient]
angle = 135
animate = true
"##;

    let scene: SceneFile = toml::from_str(toml_str).unwrap();
    assert_eq!(scene.kind, Some(BackgroundKind::Gradient));
    assert_eq!(scene.colors.color1, Some("#ff7e5f".to_string()));
    assert_eq!(scene.gradient.angle, Some(135));
    assert_eq!(scene.gradient.animate, Some(true));
}

#[test]
fn test_to_config_fills_defaults() {
    let toml_str = r##"
kind = "image"

[image]
url = "wall.png"
position = "top"
"##;

    let scene: SceneFile = toml::from_str(toml_str).unwrap();
    let config = scene.to_config().unwrap();

    assert_eq!(config.kind, BackgroundKind::Image);
    assert_eq!(config.image_url, "wall.png");
    assert_eq!(config.image_position, ImagePosition::Top);
    // Unspecified values fall back to the documented defaults
    assert_eq!(config.image_size, ImageSize::Cover);
    assert_eq!(config.color1, "#ff7e5f");
    assert_eq!(config.angle, 90);
}

#[test]
fn test_to_config_rejects_invalid_color() {
    let toml_str = r##"
[colors]
color1 = "not-a-color"
"##;

    let scene: SceneFile = toml::from_str(toml_str).unwrap();
    let err = scene.to_config().unwrap_err();
    assert!(matches!(err, SceneError::InvalidColor(_)));
}

#[test]
fn test_config_round_trips_through_scene() {
    let mut config = backdrop::background::BackgroundConfig::default();
    config.kind = BackgroundKind::Solid;
    config.color1 = "#112233".to_string();

    let scene = SceneFile::from_config(&config);
    let serialized = toml::to_string_pretty(&scene).unwrap();
    let reparsed: SceneFile = toml::from_str(&serialized).unwrap();

    assert_eq!(reparsed.to_config().unwrap(), config);
}
