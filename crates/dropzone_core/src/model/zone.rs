//! Zone configuration and runtime container.
//!
//! # Responsibility
//! - Describe one configured drop target (`ZoneSpec`).
//! - Hold the ordered item list for that target at runtime (`Zone`).
//!
//! # Invariants
//! - Every held item has a category in `accepts`.
//! - `items.len() <= capacity` when a capacity is configured.

use crate::model::item::{Category, Item, ItemStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable zone identifier, e.g. `archive`.
pub type ZoneId = String;

/// Static configuration for one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub id: ZoneId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Categories this zone admits.
    pub accepts: BTreeSet<Category>,
    /// Upper bound on held items; `None` means unbounded.
    #[serde(default)]
    pub capacity: Option<usize>,
    /// Status assigned to items moved into this zone.
    #[serde(default)]
    pub entry_status: Option<ItemStatus>,
}

impl ZoneSpec {
    /// Creates an unbounded zone accepting every category.
    pub fn open(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            accepts: Category::ALL.into_iter().collect(),
            capacity: None,
            entry_status: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn accepting(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.accepts = categories.into_iter().collect();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_entry_status(mut self, status: ItemStatus) -> Self {
        self.entry_status = Some(status);
        self
    }

    pub fn accepts(&self, category: Category) -> bool {
        self.accepts.contains(&category)
    }
}

/// Runtime zone: configuration plus held items in display order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Zone {
    pub(crate) spec: ZoneSpec,
    pub(crate) items: Vec<Item>,
}

impl Zone {
    pub(crate) fn new(spec: ZoneSpec) -> Self {
        Self {
            spec,
            items: Vec::new(),
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.spec.id
    }

    pub(crate) fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == item_id)
    }

    /// Whether one more item fits.
    pub(crate) fn has_room(&self) -> bool {
        self.spec
            .capacity
            .map_or(true, |capacity| self.items.len() < capacity)
    }
}

/// Read-only view of one zone for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSnapshot {
    pub id: ZoneId,
    pub title: String,
    pub description: String,
    pub capacity: Option<usize>,
    pub items: Vec<Item>,
}

impl ZoneSnapshot {
    pub(crate) fn of(zone: &Zone) -> Self {
        Self {
            id: zone.spec.id.clone(),
            title: zone.spec.title.clone(),
            description: zone.spec.description.clone(),
            capacity: zone.spec.capacity,
            items: zone.items.clone(),
        }
    }

    /// Fill badge such as `3/15`; `None` for unbounded zones.
    pub fn fill_label(&self) -> Option<String> {
        self.capacity
            .map(|capacity| format!("{}/{}", self.items.len(), capacity))
    }
}
