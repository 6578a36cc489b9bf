use dropzone_core::payload::{MessageRole, Presence};
use dropzone_core::{
    sample_components, seed_samples, Category, ComponentPayload, PlacementEngine,
    PlacementError,
};

#[test]
fn every_sample_payload_decodes_for_its_category() {
    for item in sample_components() {
        let decoded = ComponentPayload::decode(&item)
            .unwrap_or_else(|err| panic!("sample {} failed to decode: {err}", item.id()));
        assert_eq!(decoded.category(), item.category());
    }
}

#[test]
fn sample_cards_carry_expected_fields() {
    let items = sample_components();
    let find = |id: &str| {
        let item = items.iter().find(|item| item.id() == id).unwrap();
        ComponentPayload::decode(item).unwrap()
    };

    let ComponentPayload::Message(reply) = find("msg-2") else {
        panic!("msg-2 should be a message");
    };
    assert_eq!(reply.role, MessageRole::Assistant);

    let ComponentPayload::TeamMember(member) = find("member-1") else {
        panic!("member-1 should be a team member");
    };
    assert!(member.is_ai);
    assert_eq!(member.presence, Presence::Online);

    let ComponentPayload::ContentItem(content) = find("content-2") else {
        panic!("content-2 should be a content item");
    };
    assert_eq!(content.kind, "code");
    assert_eq!(content.likes, 8);
}

#[test]
fn catalog_covers_four_categories() {
    let items = sample_components();
    for category in [
        Category::Message,
        Category::TeamMember,
        Category::ContentItem,
        Category::ChatElement,
    ] {
        assert_eq!(
            items.iter().filter(|item| item.category() == category).count(),
            2,
            "{category}"
        );
    }
}

#[test]
fn seeding_twice_rejects_every_duplicate() {
    let mut engine = PlacementEngine::with_default_layout();
    seed_samples(&mut engine).unwrap();

    let report = seed_samples(&mut engine).unwrap();

    assert!(report.accepted.is_empty());
    assert_eq!(report.rejected.len(), 8);
    assert_eq!(
        report.rejected[0].reason,
        PlacementError::DuplicateItem("msg-1".to_string())
    );
    assert_eq!(engine.item_count(), 8);
}

#[test]
fn duplicates_are_detected_across_zones() {
    let mut engine = PlacementEngine::with_default_layout();
    seed_samples(&mut engine).unwrap();
    engine.move_item("chat-1", "components", "layout-right").unwrap();
    engine.clear("components").unwrap();

    let report = seed_samples(&mut engine).unwrap();

    assert_eq!(report.accepted.len(), 7);
    assert_eq!(report.rejected[0].item.id(), "chat-1");
}
