#![cfg(feature = "cairo-backend")]

use std::fs;

use chrono::Weekday;
use punchcard_rs::PunchCardError;
use punchcard_rs::api::{PunchCardConfig, PunchCardStyle, PunchCardWriter};
use punchcard_rs::core::{Event, PUNCH_CARD_HEIGHT, PUNCH_CARD_WIDTH, Viewport};
use tempfile::TempDir;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn test_writer(dir: &TempDir) -> PunchCardWriter {
    let config = PunchCardConfig {
        viewport: Viewport::new(PUNCH_CARD_WIDTH, PUNCH_CARD_HEIGHT),
        output_path: dir.path().join("punchCard.png"),
        style: PunchCardStyle::default(),
    };
    PunchCardWriter::new(config)
}

fn scenario_events() -> Vec<Event> {
    vec![
        Event::new("2024-06-03", 60),
        Event::new("2024-06-04", 30),
    ]
}

#[test]
fn save_creates_missing_directories_and_writes_a_png() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);
    let path = dir.path().join("nested").join("deeper").join("punchCard.png");

    let busiest = writer
        .save_to(&scenario_events(), &path)
        .expect("save punch card");
    assert_eq!(busiest, Weekday::Mon);

    let bytes = fs::read(&path).expect("read written file");
    assert!(bytes.len() > PNG_MAGIC.len());
    assert_eq!(&bytes[..PNG_MAGIC.len()], &PNG_MAGIC);
}

#[test]
fn save_uses_the_configured_output_path() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);

    writer
        .save_punch_card(&scenario_events())
        .expect("save punch card");
    assert!(writer.config().output_path.exists());
}

#[test]
fn save_overwrites_an_existing_file() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);
    let path = writer.config().output_path.clone();

    fs::write(&path, b"stale contents").expect("seed stale file");
    writer
        .save_punch_card(&scenario_events())
        .expect("save punch card");

    let bytes = fs::read(&path).expect("read written file");
    assert_eq!(&bytes[..PNG_MAGIC.len()], &PNG_MAGIC);
}

#[test]
fn rendering_the_same_profile_twice_is_byte_identical() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);

    let first = writer
        .render_png_bytes(&scenario_events())
        .expect("first render");
    let second = writer
        .render_png_bytes(&scenario_events())
        .expect("second render");
    assert_eq!(first, second);
}

#[test]
fn malformed_date_fails_without_touching_an_existing_file() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);
    let path = writer.config().output_path.clone();

    fs::write(&path, b"previous card").expect("seed previous file");

    let err = writer
        .save_punch_card(&[Event::new("2024-13-40", 30)])
        .expect_err("malformed date must fail");
    assert!(matches!(err, PunchCardError::MalformedDate { .. }));

    let bytes = fs::read(&path).expect("read previous file");
    assert_eq!(bytes, b"previous card");
}

#[test]
fn save_returns_the_busiest_weekday() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);

    let events = vec![
        Event::new("2024-06-03", 20),
        Event::new("2024-06-08", 90),
        Event::new("2024-06-09", 40),
    ];
    let busiest = writer.save_punch_card(&events).expect("save punch card");
    assert_eq!(busiest, Weekday::Sat);
}

#[test]
fn empty_event_list_still_writes_a_blank_card() {
    let dir = TempDir::new().expect("temp dir");
    let writer = test_writer(&dir);

    let busiest = writer.save_punch_card(&[]).expect("save blank card");
    assert_eq!(busiest, Weekday::Mon);

    let bytes = fs::read(&writer.config().output_path).expect("read written file");
    assert_eq!(&bytes[..PNG_MAGIC.len()], &PNG_MAGIC);
}
