//! Placement domain model.
//!
//! # Responsibility
//! - Define items, zone configuration and zone snapshots.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Zone membership is only mutated through the placement engine.

pub mod item;
pub mod zone;
