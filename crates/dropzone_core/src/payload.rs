//! Typed payload views for rendering.
//!
//! # Responsibility
//! - Interpret an item's opaque payload according to its category.
//!
//! # Invariants
//! - The placement engine never calls into this module.
//! - Decoding never mutates the item.

use crate::model::item::{Category, Item};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Author side of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCard {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
}

/// Availability dot shown on a member card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    Busy,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberCard {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub presence: Presence,
    #[serde(default)]
    pub is_ai: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    /// `design`, `code`, `research`, `presentation` or free text.
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Authoring progress label, independent of placement status.
    #[serde(default)]
    pub progress: String,
    pub creator: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatElementCard {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Category-tagged interpretation of [`Item::payload`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentPayload {
    Message(MessageCard),
    TeamMember(TeamMemberCard),
    ContentItem(ContentCard),
    ChatElement(ChatElementCard),
    /// No fixed shape; rendered generically from name/description.
    WorkspaceItem(Value),
}

impl ComponentPayload {
    /// Decodes the payload shape implied by the item's category.
    pub fn decode(item: &Item) -> Result<Self, PayloadError> {
        let raw = item.payload().clone();
        let shape_error = |source| PayloadError {
            item_id: item.id().to_string(),
            category: item.category(),
            source,
        };
        let decoded = match item.category() {
            Category::Message => Self::Message(serde_json::from_value(raw).map_err(shape_error)?),
            Category::TeamMember => {
                Self::TeamMember(serde_json::from_value(raw).map_err(shape_error)?)
            }
            Category::ContentItem => {
                Self::ContentItem(serde_json::from_value(raw).map_err(shape_error)?)
            }
            Category::ChatElement => {
                Self::ChatElement(serde_json::from_value(raw).map_err(shape_error)?)
            }
            Category::WorkspaceItem => Self::WorkspaceItem(raw),
        };
        Ok(decoded)
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Message(_) => Category::Message,
            Self::TeamMember(_) => Category::TeamMember,
            Self::ContentItem(_) => Category::ContentItem,
            Self::ChatElement(_) => Category::ChatElement,
            Self::WorkspaceItem(_) => Category::WorkspaceItem,
        }
    }
}

/// Payload does not match the shape its category requires.
#[derive(Debug)]
pub struct PayloadError {
    pub item_id: String,
    pub category: Category,
    source: serde_json::Error,
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "payload of item {} does not match {} shape: {}",
            self.item_id, self.category, self.source
        )
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentPayload, MessageRole, Presence};
    use crate::model::item::{Category, Item};
    use serde_json::json;

    #[test]
    fn decodes_message_payload() {
        let item = Item::with_id(
            "msg-1",
            Category::Message,
            "User Message",
            json!({"role": "user", "content": "hi", "timestamp": "2:30 PM"}),
        )
        .unwrap();
        match ComponentPayload::decode(&item).unwrap() {
            ComponentPayload::Message(card) => {
                assert_eq!(card.role, MessageRole::User);
                assert_eq!(card.content, "hi");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn team_member_defaults_is_ai_to_false() {
        let item = Item::with_id(
            "member-9",
            Category::TeamMember,
            "Sam",
            json!({"name": "Sam", "role": "PM", "avatar": "S", "presence": "offline"}),
        )
        .unwrap();
        let ComponentPayload::TeamMember(card) = ComponentPayload::decode(&item).unwrap() else {
            panic!("expected team member payload");
        };
        assert_eq!(card.presence, Presence::Offline);
        assert!(!card.is_ai);
    }

    #[test]
    fn shape_mismatch_names_item_and_category() {
        let item =
            Item::with_id("chat-9", Category::ChatElement, "Broken", json!({"title": 3})).unwrap();
        let err = ComponentPayload::decode(&item).unwrap_err();
        assert_eq!(err.item_id, "chat-9");
        assert!(err.to_string().contains("chat-element"));
    }

    #[test]
    fn workspace_items_pass_through_raw_json() {
        let item = Item::with_id(
            "ws-1",
            Category::WorkspaceItem,
            "Widget",
            json!({"anything": [1, 2]}),
        )
        .unwrap();
        let decoded = ComponentPayload::decode(&item).unwrap();
        assert_eq!(decoded.category(), Category::WorkspaceItem);
        assert_eq!(decoded, ComponentPayload::WorkspaceItem(json!({"anything": [1, 2]})));
    }
}
