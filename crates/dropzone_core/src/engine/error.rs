//! Placement error taxonomy.
//!
//! Every variant is an expected, recoverable rejection. The engine state is
//! unchanged whenever one of these is returned.

use crate::model::item::{Category, ItemId};
use crate::model::zone::ZoneId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PlacementResult<T> = Result<T, PlacementError>;

/// Rejection reasons for engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Referenced zone is not part of the layout.
    UnknownZone(ZoneId),
    /// Item is not held by the claimed source zone.
    ItemNotFound { item_id: ItemId, zone_id: ZoneId },
    /// Destination does not accept the item's category.
    TypeRejected {
        item_id: ItemId,
        category: Category,
        zone_id: ZoneId,
    },
    /// Destination is at its configured limit.
    CapacityExceeded { zone_id: ZoneId, capacity: usize },
    /// Seed batch contained no items.
    EmptySeed,
    /// Item id already exists in the engine or earlier in the batch.
    DuplicateItem(ItemId),
}

impl PlacementError {
    /// Stable machine-readable code for presentation layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownZone(_) => "unknown_zone",
            Self::ItemNotFound { .. } => "item_not_found",
            Self::TypeRejected { .. } => "type_rejected",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::EmptySeed => "empty_seed",
            Self::DuplicateItem(_) => "duplicate_item",
        }
    }
}

impl Display for PlacementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownZone(id) => write!(f, "zone not found: {id}"),
            Self::ItemNotFound { item_id, zone_id } => {
                write!(f, "item {item_id} is not in zone {zone_id}")
            }
            Self::TypeRejected {
                item_id,
                category,
                zone_id,
            } => write!(
                f,
                "zone {zone_id} does not accept {category} items (item {item_id})"
            ),
            Self::CapacityExceeded { zone_id, capacity } => {
                write!(f, "zone {zone_id} is full ({capacity} items)")
            }
            Self::EmptySeed => write!(f, "seed batch must not be empty"),
            Self::DuplicateItem(id) => write!(f, "item id already placed: {id}"),
        }
    }
}

impl Error for PlacementError {}
