use std::path::PathBuf;

use punchcard_rs::api::{PunchCardConfig, PunchCardStyle, default_output_path};
use punchcard_rs::core::{PUNCH_CARD_HEIGHT, PUNCH_CARD_WIDTH, Viewport};

#[test]
fn config_serde_round_trip_preserves_setup() {
    let config = PunchCardConfig {
        viewport: Viewport::new(PUNCH_CARD_WIDTH, PUNCH_CARD_HEIGHT),
        output_path: PathBuf::from("/tmp/cards/punchCard.png"),
        style: PunchCardStyle::default(),
    };

    let json = serde_json::to_string(&config).expect("serialize config");
    let restored: PunchCardConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(config, restored);
}

#[test]
fn style_defaults_when_missing_from_serialized_config() {
    let json = r#"{
        "viewport": { "width": 600, "height": 150 },
        "output_path": "/tmp/cards/punchCard.png"
    }"#;

    let config: PunchCardConfig = serde_json::from_str(json).expect("deserialize config");
    assert_eq!(config.style, PunchCardStyle::default());
}

#[test]
fn builder_methods_replace_fields() {
    let config = PunchCardConfig {
        viewport: Viewport::new(PUNCH_CARD_WIDTH, PUNCH_CARD_HEIGHT),
        output_path: PathBuf::from("a.png"),
        style: PunchCardStyle::default(),
    }
    .with_viewport(Viewport::new(300, 150))
    .with_output_path("b.png");

    assert_eq!(config.viewport, Viewport::new(300, 150));
    assert_eq!(config.output_path, PathBuf::from("b.png"));
}

#[test]
fn default_output_path_lands_in_the_time_tracker_config_dir() {
    // Home resolution can legitimately fail in stripped-down environments.
    if let Ok(path) = default_output_path() {
        assert!(path.ends_with(".config/time-tracker/punchCard.png"));
    }
}

#[test]
fn default_style_matches_the_stock_card() {
    let style = PunchCardStyle::default();
    assert_eq!(style.background_color, punchcard_rs::render::Color::rgb(1.0, 1.0, 1.0));
    assert_eq!(style.label_font_size_px, 12.0);
    style.validate().expect("default style is valid");
}
