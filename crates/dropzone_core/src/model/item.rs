//! Placeable item domain model.
//!
//! # Responsibility
//! - Define the record moved between zones by the placement engine.
//! - Keep category-specific data opaque to placement logic.
//!
//! # Invariants
//! - `id` is non-blank and never reused for another item.
//! - `id`, `category` and `payload` never change after construction.
//! - `status` is only rewritten by the engine when the item changes zone.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable item identifier, e.g. `msg-1`.
pub type ItemId = String;

/// Closed set of item kinds a zone can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Chat message bubble.
    Message,
    /// Human or AI collaborator card.
    TeamMember,
    /// Shared design/code/research artifact.
    ContentItem,
    /// Chat chrome control (button, search box).
    ChatElement,
    /// Generic workspace widget.
    WorkspaceItem,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Message,
        Category::TeamMember,
        Category::ContentItem,
        Category::ChatElement,
        Category::WorkspaceItem,
    ];

    /// Wire label used in JSON and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::TeamMember => "team-member",
            Self::ContentItem => "content-item",
            Self::ChatElement => "chat-element",
            Self::WorkspaceItem => "workspace-item",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement lifecycle state shown on the item card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Freshly created, not yet placed anywhere meaningful.
    #[default]
    Pending,
    /// Under evaluation (e.g. in the testing zone).
    Processing,
    /// In use or retired.
    Completed,
    /// Marked as failed by the caller.
    Error,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placeable unit owned by exactly one zone.
///
/// Fields are read-only from outside the crate so that identity and
/// category can only be fixed at construction time. Deserialization goes
/// through the same id validation as [`Item::with_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    id: ItemId,
    category: Category,
    name: String,
    description: String,
    status: ItemStatus,
    /// Category-specific data; see `payload::ComponentPayload` for views.
    payload: Value,
}

impl Item {
    /// Creates a pending item with a generated `<category>-<uuid>` id.
    pub fn new(category: Category, name: impl Into<String>, payload: Value) -> Self {
        Self {
            id: format!("{}-{}", category.as_str(), Uuid::new_v4()),
            category,
            name: name.into(),
            description: String::new(),
            status: ItemStatus::Pending,
            payload,
        }
    }

    /// Creates a pending item with a caller-provided stable id.
    ///
    /// The id is trimmed; blank ids are rejected.
    pub fn with_id(
        id: impl Into<String>,
        category: Category,
        name: impl Into<String>,
        payload: Value,
    ) -> Result<Self, ItemValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::BlankId);
        }
        Ok(Self {
            id: trimmed.to_string(),
            category,
            name: name.into(),
            description: String::new(),
            status: ItemStatus::Pending,
            payload,
        })
    }

    /// Creates a pending item from a compile-time id.
    ///
    /// Used for built-in fixtures whose ids are literals; caller input goes
    /// through [`Item::with_id`].
    pub(crate) fn builtin(
        id: &'static str,
        category: Category,
        name: &'static str,
        payload: Value,
    ) -> Self {
        debug_assert!(!id.trim().is_empty(), "builtin item id must not be blank");
        Self {
            id: id.to_string(),
            category,
            name: name.to_string(),
            description: String::new(),
            status: ItemStatus::Pending,
            payload,
        }
    }

    /// Sets display description (builder style).
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets initial status before the item is seeded (builder style).
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub(crate) fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }
}

/// Wire shape accepted when decoding an [`Item`].
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    category: Category,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: ItemStatus,
    #[serde(default)]
    payload: Value,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Ok(Item::with_id(record.id, record.category, record.name, record.payload)?
            .describe(record.description)
            .with_status(record.status))
    }
}

/// Item construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Id is empty after trim.
    BlankId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "item id must not be blank"),
        }
    }
}

impl Error for ItemValidationError {}
