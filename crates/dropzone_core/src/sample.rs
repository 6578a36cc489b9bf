//! Built-in sample components for the component library zone.

use crate::engine::error::PlacementResult;
use crate::engine::placement::{PlacementEngine, SeedReport};
use crate::model::item::{Category, Item};
use serde_json::json;

/// Zone the sample catalog is seeded into.
pub const SAMPLE_TARGET_ZONE: &str = "components";

/// Returns the eight sample components, all `pending`.
pub fn sample_components() -> Vec<Item> {
    vec![
        Item::builtin(
            "msg-1",
            Category::Message,
            "User Message",
            json!({
                "role": "user",
                "content": "Hello! How can you help me today?",
                "timestamp": "2:30 PM",
            }),
        )
        .describe("Chat message from user"),
        Item::builtin(
            "msg-2",
            Category::Message,
            "AI Response",
            json!({
                "role": "assistant",
                "content": "I'm here to help! I can assist with coding, design, research, and much more. What would you like to work on?",
                "timestamp": "2:31 PM",
            }),
        )
        .describe("Chat message from AI assistant"),
        Item::builtin(
            "member-1",
            Category::TeamMember,
            "AI Assistant",
            json!({
                "name": "AI Assistant",
                "role": "AI Lead",
                "avatar": "AI",
                "presence": "online",
                "is_ai": true,
            }),
        )
        .describe("AI Lead team member"),
        Item::builtin(
            "member-2",
            Category::TeamMember,
            "Alex Developer",
            json!({
                "name": "Alex",
                "role": "Developer",
                "avatar": "A",
                "presence": "busy",
                "is_ai": false,
            }),
        )
        .describe("Human developer team member"),
        Item::builtin(
            "content-1",
            Category::ContentItem,
            "UI Design",
            json!({
                "kind": "design",
                "title": "Voice Chat Interface",
                "description": "Unique voice-based conversation UI with audio visualizations",
                "progress": "completed",
                "creator": "AI Assistant",
                "likes": 12,
                "comments": 5,
            }),
        )
        .describe("Design content item"),
        Item::builtin(
            "content-2",
            Category::ContentItem,
            "Code Component",
            json!({
                "kind": "code",
                "title": "Modern Chat Components",
                "description": "React components for contemporary chat interface",
                "progress": "in-progress",
                "creator": "Alex",
                "likes": 8,
                "comments": 3,
            }),
        )
        .describe("Code content item"),
        Item::builtin(
            "chat-1",
            Category::ChatElement,
            "New Chat Button",
            json!({
                "icon": "plus",
                "title": "New Chat",
                "description": "Start a new conversation",
            }),
        )
        .describe("Chat interface button"),
        Item::builtin(
            "chat-2",
            Category::ChatElement,
            "Settings Button",
            json!({
                "icon": "settings",
                "title": "Settings",
                "description": "Configure chat preferences",
            }),
        )
        .describe("Chat interface settings"),
    ]
}

/// Seeds the sample catalog into [`SAMPLE_TARGET_ZONE`].
///
/// Seeding twice reports every item as a duplicate.
pub fn seed_samples(engine: &mut PlacementEngine) -> PlacementResult<SeedReport> {
    engine.seed(sample_components(), SAMPLE_TARGET_ZONE)
}
