//! Placement rules for the drag-and-drop component sandbox.
//! This crate is the single source of truth for zone membership invariants.

pub mod engine;
pub mod gesture;
pub mod layout;
pub mod logging;
pub mod model;
pub mod payload;
pub mod sample;

pub use engine::error::{PlacementError, PlacementResult};
pub use engine::placement::{MoveOutcome, PlacementEngine, SeedRejection, SeedReport};
pub use gesture::{DragSession, DropResponse};
pub use layout::{LayoutError, ZoneLayout};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Category, Item, ItemId, ItemStatus, ItemValidationError};
pub use model::zone::{ZoneId, ZoneSnapshot, ZoneSpec};
pub use payload::{ComponentPayload, PayloadError};
pub use sample::{sample_components, seed_samples};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
