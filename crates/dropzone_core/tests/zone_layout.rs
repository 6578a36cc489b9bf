use dropzone_core::{Category, ItemStatus, LayoutError, PlacementEngine, ZoneLayout};
use std::io::Write;

const TWO_ZONE_LAYOUT: &str = r#"{
    "zones": [
        {
            "id": "inbox",
            "title": "Inbox",
            "accepts": ["message", "chat-element"]
        },
        {
            "id": "review",
            "title": "Review",
            "description": "Items under review",
            "accepts": ["message"],
            "capacity": 2,
            "entry_status": "processing"
        }
    ]
}"#;

#[test]
fn parses_layout_with_optional_fields() {
    let layout = ZoneLayout::from_json_str(TWO_ZONE_LAYOUT).unwrap();

    let inbox = layout.zone("inbox").unwrap();
    assert!(inbox.accepts(Category::ChatElement));
    assert!(!inbox.accepts(Category::TeamMember));
    assert_eq!(inbox.capacity, None);
    assert_eq!(inbox.entry_status, None);
    assert!(inbox.description.is_empty());

    let review = layout.zone("review").unwrap();
    assert_eq!(review.capacity, Some(2));
    assert_eq!(review.entry_status, Some(ItemStatus::Processing));
}

#[test]
fn loads_layout_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_ZONE_LAYOUT.as_bytes()).unwrap();

    let layout = ZoneLayout::from_json_file(file.path()).unwrap();
    let engine = PlacementEngine::new(layout).unwrap();
    assert_eq!(engine.zone_ids().collect::<Vec<_>>(), vec!["inbox", "review"]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ZoneLayout::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LayoutError::Io(_)));
}

#[test]
fn unknown_category_is_parse_error() {
    let raw = r#"{"zones": [{"id": "a", "title": "A", "accepts": ["sticker"]}]}"#;
    let err = ZoneLayout::from_json_str(raw).unwrap_err();
    assert!(matches!(err, LayoutError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse layout"));
}

#[test]
fn parsed_layout_is_validated() {
    let raw = r#"{"zones": [
        {"id": "a", "title": "A", "accepts": ["message"]},
        {"id": "a", "title": "Again", "accepts": ["message"]}
    ]}"#;
    let err = ZoneLayout::from_json_str(raw).unwrap_err();
    assert_eq!(err.to_string(), "zone id is duplicated: a");
}

#[test]
fn default_layout_round_trips_through_json() {
    let layout = ZoneLayout::default_layout();
    let raw = serde_json::to_string(&layout).unwrap();
    assert_eq!(ZoneLayout::from_json_str(&raw).unwrap(), layout);
}
