//! Placement engine and its error taxonomy.
//!
//! # Responsibility
//! - Keep presentation layers decoupled from zone bookkeeping.
//! - Expose seed/move/clear/query as the only ways to touch zone membership.

pub mod error;
pub mod placement;
