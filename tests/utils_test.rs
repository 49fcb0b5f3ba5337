use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{TimeZone, Utc};
use collagecli::collage::to_base64;
use collagecli::error::{
    CollageError, DecodeError, FATAL_STATUS_PREFIX, FETCH_FAILED_STATUS, FetchError, UploadError,
};
use collagecli::imgur::parse_link;
use collagecli::management::Controls;
use collagecli::types::{ArtistEntry, GridSize, LastFmImage, TimeRange};
use collagecli::utils::*;

// Helper function to create a Last.fm image entry
fn image(url: &str, size: &str) -> LastFmImage {
    LastFmImage {
        url: url.to_string(),
        size: size.to_string(),
    }
}

#[test]
fn test_grid_size_tile_count() {
    assert_eq!(GridSize::Three.tile_count(), 9);
    assert_eq!(GridSize::Four.tile_count(), 16);
    assert_eq!(GridSize::Five.tile_count(), 25);

    for grid in GridSize::ALL {
        let side = grid.side() as usize;
        assert_eq!(grid.tile_count(), side * side);
    }
}

#[test]
fn test_time_range_period_values() {
    let periods: Vec<&str> = TimeRange::ALL.iter().map(|t| t.as_period()).collect();
    assert_eq!(
        periods,
        vec!["overall", "7day", "1month", "3month", "6month", "12month"]
    );
    assert_eq!(TimeRange::default(), TimeRange::Overall);
    assert_eq!(TimeRange::SevenDay.to_string(), "7day");
}

#[test]
fn test_parse_time_range_valid_inputs() {
    for range in TimeRange::ALL {
        assert_eq!(parse_time_range(range.as_period()).unwrap(), range);
    }

    // Case insensitivity and aliases
    assert_eq!(parse_time_range("OVERALL").unwrap(), TimeRange::Overall);
    assert_eq!(parse_time_range(" 7-day ").unwrap(), TimeRange::SevenDay);
    assert_eq!(parse_time_range("week").unwrap(), TimeRange::SevenDay);
    assert_eq!(parse_time_range("month").unwrap(), TimeRange::OneMonth);
    assert_eq!(parse_time_range("year").unwrap(), TimeRange::TwelveMonth);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    let result = parse_time_range("");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_time_range("2month");
    assert!(result.unwrap_err().contains("invalid value '2month'"));
}

#[test]
fn test_parse_grid_size() {
    assert_eq!(parse_grid_size("3").unwrap(), GridSize::Three);
    assert_eq!(parse_grid_size("4x4").unwrap(), GridSize::Four);
    assert_eq!(parse_grid_size(" 5 ").unwrap(), GridSize::Five);
    assert_eq!(GridSize::Four.to_string(), "4x4");

    assert!(parse_grid_size("").unwrap_err().contains("cannot be empty"));
    assert!(parse_grid_size("6").unwrap_err().contains("invalid value '6'"));
    assert!(parse_grid_size("2").is_err());
}

#[test]
fn test_pick_image_url_prefers_extralarge() {
    let images = vec![
        image("https://img/small.png", "small"),
        image("https://img/large.png", "large"),
        image("https://img/xl.png", "extralarge"),
        image("https://img/mega.png", "mega"),
    ];
    assert_eq!(
        pick_image_url(&images).as_deref(),
        Some("https://img/xl.png")
    );
}

#[test]
fn test_pick_image_url_falls_back_to_largest() {
    let images = vec![
        image("https://img/small.png", "small"),
        image("", "extralarge"),
        image("https://img/medium.png", "medium"),
    ];
    assert_eq!(
        pick_image_url(&images).as_deref(),
        Some("https://img/medium.png")
    );

    // Empty strings count as missing
    let images = vec![image("", "small"), image("  ", "extralarge")];
    assert_eq!(pick_image_url(&images), None);
    assert_eq!(pick_image_url(&[]), None);
}

// Collects formatted log output in memory
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_parse_play_count() {
    assert_eq!(parse_play_count("1234"), 1234);
    assert_eq!(parse_play_count(" 42 "), 42);
}

#[test]
fn test_parse_play_count_malformed_is_logged() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(parse_play_count("n/a"), 0);
        assert_eq!(parse_play_count("-5"), 0);
    });

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output.matches("malformed play count").count(), 2);
    assert!(output.contains("n/a"));
}

#[test]
fn test_label_text() {
    let artist = ArtistEntry {
        name: "Boards of Canada".to_string(),
        play_count: 321,
        image_url: None,
    };
    assert_eq!(label_text(&artist), "Boards of Canada\nPlays: 321");
}

#[test]
fn test_tile_origin_is_row_major() {
    let cell = (300, 200);
    assert_eq!(tile_origin(0, GridSize::Three, cell), (0, 0));
    assert_eq!(tile_origin(1, GridSize::Three, cell), (300, 0));
    assert_eq!(tile_origin(2, GridSize::Three, cell), (600, 0));
    assert_eq!(tile_origin(3, GridSize::Three, cell), (0, 200));
    assert_eq!(tile_origin(8, GridSize::Three, cell), (600, 400));
    assert_eq!(tile_origin(5, GridSize::Four, cell), (300, 200));
}

#[test]
fn test_wrap_label() {
    // One unit per character
    let measure = |s: &str| s.chars().count() as u32;

    let lines = wrap_label("The Velvet Underground\nPlays: 12", 10, measure);
    assert_eq!(lines, vec!["The Velvet", "Underground", "Plays: 12"]);

    // Everything fits on one line per paragraph
    let lines = wrap_label("Low\nPlays: 3", 100, measure);
    assert_eq!(lines, vec!["Low", "Plays: 3"]);

    // An overlong word keeps its own line
    let lines = wrap_label("Godspeedyoublackemperor", 5, measure);
    assert_eq!(lines, vec!["Godspeedyoublackemperor"]);
}

#[test]
fn test_output_path() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

    let dir = std::env::temp_dir();
    let path = output_path(&dir, "test user", now);
    assert_eq!(path, dir.join("collage-test_user-20240309-140507.png"));

    let file = Path::new("/definitely/not/a/dir/out.png");
    assert_eq!(output_path(file, "testuser", now), file.to_path_buf());
}

#[test]
fn test_to_base64_round_trip() {
    let bytes = b"\x89PNG\r\n\x1a\nsome bytes";
    let encoded = to_base64(bytes);
    assert_eq!(STANDARD.decode(encoded).unwrap(), bytes.to_vec());
}

#[test]
fn test_parse_link() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<data type="array" success="1" status="200">
  <id>abc123</id>
  <type>image/png</type>
  <link>https://i.imgur.com/abc123.png</link>
</data>"#;
    assert_eq!(parse_link(xml).unwrap(), "https://i.imgur.com/abc123.png");

    // First non-empty link wins
    let xml = "<data><link></link><link>https://a</link><link>https://b</link></data>";
    assert_eq!(parse_link(xml).unwrap(), "https://a");
}

#[test]
fn test_parse_link_resolves_references() {
    let xml = "<data><link>https://i.imgur.com/a.png?x=1&amp;y=2</link></data>";
    assert_eq!(
        parse_link(xml).unwrap(),
        "https://i.imgur.com/a.png?x=1&y=2"
    );

    let xml = "<data><link>https://i.imgur.com/&#98;&#x63;.png?q=&lt;&gt;</link></data>";
    assert_eq!(parse_link(xml).unwrap(), "https://i.imgur.com/bc.png?q=<>");

    // Unknown entities are rejected instead of dropped
    let xml = "<data><link>https://i.imgur.com/&nbsp;.png</link></data>";
    assert!(matches!(parse_link(xml), Err(UploadError::Xml(_))));
}

#[test]
fn test_parse_link_missing() {
    let xml = r#"<data success="0" status="400"><error>Bad request</error></data>"#;
    assert!(matches!(parse_link(xml), Err(UploadError::MissingLink)));

    assert!(matches!(parse_link(""), Err(UploadError::MissingLink)));
}

#[test]
fn test_status_messages() {
    let err = CollageError::from(FetchError::Empty);
    assert_eq!(err.status_message(), FETCH_FAILED_STATUS);

    let err = CollageError::from(FetchError::Api {
        code: 6,
        message: "User not found".to_string(),
    });
    assert_eq!(err.status_message(), "Error while fetching top artists");

    let err = CollageError::from(UploadError::MissingLink);
    assert_eq!(
        err.status_message(),
        "Fatal error while creating collage: Imgur response does not contain a link"
    );

    let err = CollageError::from(DecodeError::NoImages);
    assert!(err.status_message().starts_with(FATAL_STATUS_PREFIX));
}

#[test]
fn test_controls_guard_restores_flag() {
    let controls = Controls::new();
    let mut rx = controls.subscribe();
    assert!(controls.is_enabled());

    {
        let guard = controls.try_disable();
        assert!(guard.is_some());
        assert!(!controls.is_enabled());
        assert!(!*rx.borrow_and_update());

        // Only one holder at a time
        assert!(controls.try_disable().is_none());
        assert!(controls.clone().try_disable().is_none());
    }

    assert!(controls.is_enabled());
    assert!(*rx.borrow_and_update());
    assert!(controls.try_disable().is_some());
}

#[test]
fn test_output_macros_accept_format_args() {
    let link = "https://i.imgur.com/abc123.png";
    collagecli::info!("Fetching top artists for {}", "testuser");
    collagecli::success!("Collage uploaded to {}", link);
    collagecli::warning!("Failed to open browser, visit {link} manually");
}
