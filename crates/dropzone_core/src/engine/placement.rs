//! Placement engine.
//!
//! # Responsibility
//! - Own the zone -> items mapping for one layout.
//! - Mediate every seed/move/clear so zone rules always hold.
//! - Hand out owned snapshots only.
//!
//! # Invariants
//! - Every item is held by exactly one zone.
//! - Every held item has a category its zone accepts.
//! - No zone holds more items than its capacity.
//! - A rejected operation leaves every zone unchanged.

use crate::engine::error::{PlacementError, PlacementResult};
use crate::layout::{LayoutError, ZoneLayout};
use crate::model::item::{Item, ItemId, ItemStatus};
use crate::model::zone::{Zone, ZoneId, ZoneSnapshot, ZoneSpec};
use log::{debug, info};
use std::collections::HashSet;

/// Result of a committed move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// Item as stored after the move.
    pub item: Item,
    pub from_zone: ZoneId,
    pub to_zone: ZoneId,
    /// Status before the destination entry status was applied.
    pub previous_status: ItemStatus,
    /// Index of the item in the destination zone.
    pub position: usize,
}

/// One seed item the target zone refused.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRejection {
    pub item: Item,
    pub reason: PlacementError,
}

/// Result of a seed batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeedReport {
    /// Ids appended to the zone, in input order.
    pub accepted: Vec<ItemId>,
    /// Items returned to the caller, in input order.
    pub rejected: Vec<SeedRejection>,
}

impl SeedReport {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// In-memory zone map with rule-checked mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementEngine {
    zones: Vec<Zone>,
}

impl PlacementEngine {
    /// Builds an engine with empty zones from a validated layout.
    pub fn new(layout: ZoneLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let zones = layout.zones.into_iter().map(Zone::new).collect::<Vec<_>>();
        info!(
            "event=engine_init module=engine status=ok zones={}",
            zones.len()
        );
        Ok(Self { zones })
    }

    /// Builds an engine from `ZoneLayout::default_layout`.
    pub fn with_default_layout() -> Self {
        Self {
            zones: ZoneLayout::default_layout()
                .zones
                .into_iter()
                .map(Zone::new)
                .collect(),
        }
    }

    /// Appends newly created items to one zone.
    ///
    /// Each item passes the same checks as a move (duplicate id, category,
    /// capacity). Refused items are returned in the report; the rest are
    /// appended in input order.
    ///
    /// # Errors
    /// - `UnknownZone` when `zone_id` is not configured.
    /// - `EmptySeed` when `items` is empty.
    pub fn seed(&mut self, items: Vec<Item>, zone_id: &str) -> PlacementResult<SeedReport> {
        let index = self.zone_index(zone_id)?;
        if items.is_empty() {
            return Err(PlacementError::EmptySeed);
        }

        let mut known: HashSet<ItemId> = self
            .zones
            .iter()
            .flat_map(|zone| zone.items.iter().map(|item| item.id().to_string()))
            .collect();
        let mut report = SeedReport::default();
        let zone = &mut self.zones[index];

        for item in items {
            let verdict = if known.contains(item.id()) {
                Err(PlacementError::DuplicateItem(item.id().to_string()))
            } else if !zone.spec.accepts(item.category()) {
                Err(PlacementError::TypeRejected {
                    item_id: item.id().to_string(),
                    category: item.category(),
                    zone_id: zone.spec.id.clone(),
                })
            } else if let Some(capacity) = zone.spec.capacity.filter(|_| !zone.has_room()) {
                Err(PlacementError::CapacityExceeded {
                    zone_id: zone.spec.id.clone(),
                    capacity,
                })
            } else {
                Ok(())
            };

            match verdict {
                Ok(()) => {
                    known.insert(item.id().to_string());
                    report.accepted.push(item.id().to_string());
                    zone.items.push(item);
                }
                Err(reason) => {
                    debug!(
                        "event=seed_item_rejected module=engine status=rejected zone_id={} item_id={} code={}",
                        zone.spec.id,
                        item.id(),
                        reason.code()
                    );
                    report.rejected.push(SeedRejection { item, reason });
                }
            }
        }

        info!(
            "event=zone_seeded module=engine status=ok zone_id={} accepted={} rejected={}",
            zone.spec.id,
            report.accepted.len(),
            report.rejected.len()
        );
        Ok(report)
    }

    /// Moves one item between zones after checking every rule.
    ///
    /// Checks run in order and the first failure wins: both zones exist,
    /// the item is in `from_zone`, the destination accepts its category, the
    /// destination has room. Nothing is mutated on failure.
    ///
    /// A move within one zone keeps the item's position and applies the
    /// zone's entry status; it is still refused when the zone is full.
    pub fn move_item(
        &mut self,
        item_id: &str,
        from_zone: &str,
        to_zone: &str,
    ) -> PlacementResult<MoveOutcome> {
        let result = self.try_move(item_id, from_zone, to_zone);
        match &result {
            Ok(outcome) => info!(
                "event=item_moved module=engine status=ok item_id={} from={} to={} item_status={}",
                item_id,
                from_zone,
                to_zone,
                outcome.item.status()
            ),
            Err(err) => debug!(
                "event=move_rejected module=engine status=rejected item_id={} from={} to={} code={}",
                item_id,
                from_zone,
                to_zone,
                err.code()
            ),
        }
        result
    }

    fn try_move(
        &mut self,
        item_id: &str,
        from_zone: &str,
        to_zone: &str,
    ) -> PlacementResult<MoveOutcome> {
        let from_index = self.zone_index(from_zone)?;
        let to_index = self.zone_index(to_zone)?;

        let position = self.zones[from_index].position_of(item_id).ok_or_else(|| {
            PlacementError::ItemNotFound {
                item_id: item_id.to_string(),
                zone_id: from_zone.to_string(),
            }
        })?;

        let category = self.zones[from_index].items[position].category();
        let destination = &self.zones[to_index];
        if !destination.spec.accepts(category) {
            return Err(PlacementError::TypeRejected {
                item_id: item_id.to_string(),
                category,
                zone_id: to_zone.to_string(),
            });
        }
        if let Some(capacity) = destination.spec.capacity {
            if destination.items.len() >= capacity {
                return Err(PlacementError::CapacityExceeded {
                    zone_id: to_zone.to_string(),
                    capacity,
                });
            }
        }
        let entry_status = destination.spec.entry_status;

        if from_index == to_index {
            let item = &mut self.zones[to_index].items[position];
            let previous_status = item.status();
            if let Some(status) = entry_status {
                item.set_status(status);
            }
            return Ok(MoveOutcome {
                item: item.clone(),
                from_zone: from_zone.to_string(),
                to_zone: to_zone.to_string(),
                previous_status,
                position,
            });
        }

        // All checks passed; nothing below can fail.
        let mut item = self.zones[from_index].items.remove(position);
        let previous_status = item.status();
        if let Some(status) = entry_status {
            item.set_status(status);
        }
        let destination = &mut self.zones[to_index];
        destination.items.push(item.clone());

        Ok(MoveOutcome {
            item,
            from_zone: from_zone.to_string(),
            to_zone: to_zone.to_string(),
            previous_status,
            position: destination.items.len() - 1,
        })
    }

    /// Discards every item in one zone. Returns how many were dropped.
    pub fn clear(&mut self, zone_id: &str) -> PlacementResult<usize> {
        let index = self.zone_index(zone_id)?;
        let removed = self.zones[index].items.len();
        self.zones[index].items.clear();
        info!(
            "event=zone_cleared module=engine status=ok zone_id={} removed={}",
            zone_id, removed
        );
        Ok(removed)
    }

    /// Owned copy of one zone's items in display order.
    pub fn query(&self, zone_id: &str) -> PlacementResult<Vec<Item>> {
        let index = self.zone_index(zone_id)?;
        Ok(self.zones[index].items.clone())
    }

    /// Owned view of one zone including its metadata.
    pub fn zone_snapshot(&self, zone_id: &str) -> PlacementResult<ZoneSnapshot> {
        let index = self.zone_index(zone_id)?;
        Ok(ZoneSnapshot::of(&self.zones[index]))
    }

    /// Owned view of every zone in layout order.
    pub fn snapshot(&self) -> Vec<ZoneSnapshot> {
        self.zones.iter().map(ZoneSnapshot::of).collect()
    }

    /// Zone currently holding `item_id`, if any.
    pub fn locate(&self, item_id: &str) -> Option<&str> {
        self.zones
            .iter()
            .find(|zone| zone.position_of(item_id).is_some())
            .map(Zone::id)
    }

    /// Total items across all zones.
    pub fn item_count(&self) -> usize {
        self.zones.iter().map(|zone| zone.items.len()).sum()
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(Zone::id)
    }

    pub fn zone_spec(&self, zone_id: &str) -> Option<&ZoneSpec> {
        self.zones
            .iter()
            .find(|zone| zone.id() == zone_id)
            .map(|zone| &zone.spec)
    }

    fn zone_index(&self, zone_id: &str) -> PlacementResult<usize> {
        self.zones
            .iter()
            .position(|zone| zone.id() == zone_id)
            .ok_or_else(|| PlacementError::UnknownZone(zone_id.to_string()))
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::with_default_layout()
    }
}
