//! Drag gesture adapter for presentation layers.
//!
//! # Responsibility
//! - Track pick-up / hover state between pointer events.
//! - Turn one drop into exactly one engine move.
//! - Report results as a flat envelope that never fails.
//!
//! # Invariants
//! - A drop always ends the gesture, whether the move succeeded or not.
//! - The session holds ids only, never item data.

use crate::engine::placement::PlacementEngine;
use crate::model::item::{ItemId, ItemStatus};
use crate::model::zone::ZoneId;
use log::debug;

/// Error code reported when a drop arrives without a pick-up.
pub const NO_DRAG_IN_PROGRESS: &str = "no_drag_in_progress";

#[derive(Debug, Clone, PartialEq, Eq)]
struct DraggedItem {
    item_id: ItemId,
    zone_id: ZoneId,
}

/// Gesture state for one pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<DraggedItem>,
    hovered_zone: Option<ZoneId>,
}

/// Result envelope for one drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResponse {
    /// Whether the move was committed.
    pub ok: bool,
    /// Dragged item, when a drag was in progress.
    pub item_id: Option<String>,
    /// Zone the drop targeted.
    pub zone_id: String,
    /// Item status after the move.
    pub status: Option<ItemStatus>,
    /// Stable error code on failure.
    pub error_code: Option<&'static str>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl DropResponse {
    fn success(item_id: String, zone_id: String, status: ItemStatus) -> Self {
        Self {
            message: format!("Moved {item_id} to {zone_id}."),
            ok: true,
            item_id: Some(item_id),
            zone_id,
            status: Some(status),
            error_code: None,
        }
    }

    fn failure(
        item_id: Option<String>,
        zone_id: String,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            ok: false,
            item_id,
            zone_id,
            status: None,
            error_code: Some(code),
            message: message.into(),
        }
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `item_id` out of `zone_id`, replacing any prior drag.
    pub fn pick_up(&mut self, item_id: impl Into<String>, zone_id: impl Into<String>) {
        self.dragged = Some(DraggedItem {
            item_id: item_id.into(),
            zone_id: zone_id.into(),
        });
    }

    /// Marks `zone_id` as the highlighted drop target.
    pub fn hover(&mut self, zone_id: impl Into<String>) {
        self.hovered_zone = Some(zone_id.into());
    }

    pub fn leave(&mut self) {
        self.hovered_zone = None;
    }

    /// Abandons the gesture without touching the engine.
    pub fn cancel(&mut self) {
        self.dragged = None;
        self.hovered_zone = None;
    }

    pub fn dragged_item(&self) -> Option<&str> {
        self.dragged.as_ref().map(|dragged| dragged.item_id.as_str())
    }

    pub fn hovered_zone(&self) -> Option<&str> {
        self.hovered_zone.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Drops the dragged item on `zone_id` and ends the gesture.
    pub fn drop_on(&mut self, engine: &mut PlacementEngine, zone_id: &str) -> DropResponse {
        self.hovered_zone = None;
        let Some(dragged) = self.dragged.take() else {
            debug!(
                "event=drop_ignored module=gesture status=rejected zone_id={} code={}",
                zone_id, NO_DRAG_IN_PROGRESS
            );
            return DropResponse::failure(
                None,
                zone_id.to_string(),
                NO_DRAG_IN_PROGRESS,
                "No item is being dragged.",
            );
        };

        match engine.move_item(&dragged.item_id, &dragged.zone_id, zone_id) {
            Ok(outcome) => {
                DropResponse::success(dragged.item_id, zone_id.to_string(), outcome.item.status())
            }
            Err(err) => DropResponse::failure(
                Some(dragged.item_id),
                zone_id.to_string(),
                err.code(),
                err.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragSession, NO_DRAG_IN_PROGRESS};
    use crate::engine::placement::PlacementEngine;

    #[test]
    fn drop_without_pick_up_is_reported() {
        let mut engine = PlacementEngine::with_default_layout();
        let mut session = DragSession::new();
        session.hover("active");

        let response = session.drop_on(&mut engine, "active");
        assert!(!response.ok);
        assert_eq!(response.error_code, Some(NO_DRAG_IN_PROGRESS));
        assert_eq!(session.hovered_zone(), None);
    }

    #[test]
    fn cancel_clears_state() {
        let mut session = DragSession::new();
        session.pick_up("msg-1", "components");
        session.hover("testing");
        assert!(session.is_dragging());

        session.cancel();
        assert!(!session.is_dragging());
        assert_eq!(session.dragged_item(), None);
        assert_eq!(session.hovered_zone(), None);
    }
}
