use backdrop::background::{
    BackgroundConfig, BackgroundKind, ImagePosition, ImageRepeat, ImageSize, Mutation, Renderable,
    normalize_angle,
};

#[test]
fn test_default_config() {
    let config = BackgroundConfig::default();
    assert_eq!(config.kind, BackgroundKind::Gradient);
    assert_eq!(config.color1, "#ff7e5f");
    assert_eq!(config.color2, "#feb47b");
    assert_eq!(config.angle, 90);
    assert!(!config.animate);
    assert!(config.image_url.is_empty());
    assert_eq!(config.image_size, ImageSize::Cover);
    assert_eq!(config.image_position, ImagePosition::Center);
    assert_eq!(config.image_repeat, ImageRepeat::NoRepeat);
}

#[test]
fn test_derive_solid() {
    let config = BackgroundConfig {
        kind: BackgroundKind::Solid,
        color1: "#336699".to_string(),
        ..Default::default()
    };

    let renderable = config.derive();
    assert_eq!(
        renderable,
        Renderable::Solid {
            color: "#336699".to_string()
        }
    );
    assert_eq!(renderable.css(), "#336699");
}

#[test]
fn test_derive_gradient() {
    let config = BackgroundConfig::default();

    assert_eq!(
        config.derive().css(),
        "linear-gradient(90deg, #ff7e5f, #feb47b)"
    );
}

#[test]
fn test_derive_gradient_carries_animated_flag() {
    let mut config = BackgroundConfig::default();
    assert!(!config.derive().is_animated());

    config.animate = true;
    assert!(config.derive().is_animated());
}

#[test]
fn test_derive_image() {
    let config = BackgroundConfig {
        kind: BackgroundKind::Image,
        image_url: "photo.png".to_string(),
        image_size: ImageSize::Contain,
        image_position: ImagePosition::Top,
        image_repeat: ImageRepeat::RepeatX,
        ..Default::default()
    };

    assert_eq!(config.derive().css(), "url(photo.png) top / contain repeat-x");
}

#[test]
fn test_derive_image_without_url_is_blank() {
    let config = BackgroundConfig {
        kind: BackgroundKind::Image,
        ..Default::default()
    };

    assert_eq!(config.derive(), Renderable::Blank);
    assert_eq!(config.derive().css(), "");
}

#[test]
fn test_derivation_is_pure() {
    let config = BackgroundConfig::default();
    assert_eq!(config.derive(), config.derive());

    // Equal configs derive equal renderables
    let copy = config.clone();
    assert_eq!(config.derive(), copy.derive());
}

#[test]
fn test_angle_normalization() {
    assert_eq!(normalize_angle(0), 0);
    assert_eq!(normalize_angle(359), 359);
    assert_eq!(normalize_angle(360), 0);
    assert_eq!(normalize_angle(450), 90);
    assert_eq!(normalize_angle(-90), 270);
}

#[test]
fn test_angle_normalized_at_mutation_boundary() {
    let mut config = BackgroundConfig::default();
    config.apply(&Mutation::Angle(720 + 45));
    assert_eq!(config.angle, 45);
}

#[test]
fn test_inactive_fields_retained_across_kind_switch() {
    let mut config = BackgroundConfig::default();
    config.apply(&Mutation::Color2("#123456".to_string()));
    config.apply(&Mutation::Angle(180));

    // Switch to solid: gradient fields become inactive but are kept
    config.apply(&Mutation::Kind(BackgroundKind::Solid));
    assert_eq!(config.color2, "#123456");
    assert_eq!(config.angle, 180);

    // Switching back restores the gradient exactly
    config.apply(&Mutation::Kind(BackgroundKind::Gradient));
    assert_eq!(
        config.derive().css(),
        "linear-gradient(180deg, #ff7e5f, #123456)"
    );
}

#[test]
fn test_mutation_covers_every_field() {
    let mut config = BackgroundConfig::default();
    config.apply(&Mutation::Kind(BackgroundKind::Image));
    config.apply(&Mutation::Color1("#111111".to_string()));
    config.apply(&Mutation::Color2("#222222".to_string()));
    config.apply(&Mutation::Angle(10));
    config.apply(&Mutation::Animate(true));
    config.apply(&Mutation::ImageUrl("u.png".to_string()));
    config.apply(&Mutation::ImageSize(ImageSize::Auto));
    config.apply(&Mutation::ImagePosition(ImagePosition::Left));
    config.apply(&Mutation::ImageRepeat(ImageRepeat::Repeat));

    assert_eq!(config.kind, BackgroundKind::Image);
    assert_eq!(config.color1, "#111111");
    assert_eq!(config.color2, "#222222");
    assert_eq!(config.angle, 10);
    assert!(config.animate);
    assert_eq!(config.image_url, "u.png");
    assert_eq!(config.image_size, ImageSize::Auto);
    assert_eq!(config.image_position, ImagePosition::Left);
    assert_eq!(config.image_repeat, ImageRepeat::Repeat);
}

#[test]
fn test_config_wire_field_names() {
    let json = serde_json::to_value(BackgroundConfig::default()).unwrap();
    assert_eq!(json["type"], "gradient");
    assert_eq!(json["color1"], "#ff7e5f");
    assert_eq!(json["imageSize"], "cover");
    assert_eq!(json["imageRepeat"], "no-repeat");
}
