use dropzone_core::{seed_samples, DragSession, ItemStatus, PlacementEngine};

fn engine_with_samples() -> PlacementEngine {
    let mut engine = PlacementEngine::with_default_layout();
    seed_samples(&mut engine).unwrap();
    engine
}

#[test]
fn pick_up_and_drop_moves_item() {
    let mut engine = engine_with_samples();
    let mut session = DragSession::new();

    session.pick_up("content-1", "components");
    session.hover("layout-center");
    assert_eq!(session.dragged_item(), Some("content-1"));
    assert_eq!(session.hovered_zone(), Some("layout-center"));

    let response = session.drop_on(&mut engine, "layout-center");

    assert!(response.ok, "{}", response.message);
    assert_eq!(response.item_id.as_deref(), Some("content-1"));
    assert_eq!(response.zone_id, "layout-center");
    assert_eq!(response.status, Some(ItemStatus::Pending));
    assert_eq!(response.error_code, None);
    assert_eq!(engine.locate("content-1"), Some("layout-center"));
    assert!(!session.is_dragging());
    assert_eq!(session.hovered_zone(), None);
}

#[test]
fn failed_drop_reports_code_and_ends_gesture() {
    let mut engine = engine_with_samples();
    let mut session = DragSession::new();

    session.pick_up("msg-1", "active");
    let response = session.drop_on(&mut engine, "testing");

    assert!(!response.ok);
    assert_eq!(response.error_code, Some("item_not_found"));
    assert_eq!(response.status, None);
    assert!(response.message.contains("msg-1"));
    assert!(!session.is_dragging());
    assert_eq!(engine.locate("msg-1"), Some("components"));
}

#[test]
fn drop_on_unknown_zone_is_reported() {
    let mut engine = engine_with_samples();
    let mut session = DragSession::new();

    session.pick_up("chat-2", "components");
    let response = session.drop_on(&mut engine, "layout");

    assert_eq!(response.error_code, Some("unknown_zone"));
    assert_eq!(engine.locate("chat-2"), Some("components"));
}

#[test]
fn second_pick_up_replaces_first() {
    let mut engine = engine_with_samples();
    let mut session = DragSession::new();

    session.pick_up("msg-1", "components");
    session.pick_up("msg-2", "components");
    let response = session.drop_on(&mut engine, "archive");

    assert!(response.ok);
    assert_eq!(response.item_id.as_deref(), Some("msg-2"));
    assert_eq!(response.status, Some(ItemStatus::Completed));
    assert_eq!(engine.locate("msg-1"), Some("components"));
}
