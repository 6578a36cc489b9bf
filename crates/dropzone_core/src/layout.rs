//! Zone layout configuration.
//!
//! # Responsibility
//! - Declare the fixed zone table an engine is built from.
//! - Validate layout declarations before any engine exists.
//! - Load layouts from JSON text or files.
//!
//! # Invariants
//! - Zone ids are unique lowercase kebab-case identifiers.
//! - Every zone accepts at least one category.
//! - A configured capacity is at least 1.

use crate::model::item::{Category, ItemStatus};
use crate::model::zone::ZoneSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

static ZONE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid zone id regex"));

/// Capacity of the built-in archive zone.
pub const ARCHIVE_CAPACITY: usize = 15;

/// Ordered zone table. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub zones: Vec<ZoneSpec>,
}

impl ZoneLayout {
    pub fn new(zones: Vec<ZoneSpec>) -> Self {
        Self { zones }
    }

    /// Built-in layout: library, lifecycle zones and the three layout panels.
    pub fn default_layout() -> Self {
        Self::new(vec![
            ZoneSpec::open("components", "Component Library")
                .describe("Available UI components"),
            ZoneSpec::open("active", "Active Components")
                .describe("Components in use")
                .with_entry_status(ItemStatus::Completed),
            ZoneSpec::open("testing", "Testing Zone")
                .describe("Components being tested")
                .with_entry_status(ItemStatus::Processing),
            ZoneSpec::open("archive", "Archive")
                .describe("Retired components")
                .with_capacity(ARCHIVE_CAPACITY)
                .with_entry_status(ItemStatus::Completed),
            ZoneSpec::open("layout-left", "Left Panel")
                .describe("Navigation and sidebar components"),
            ZoneSpec::open("layout-center", "Main Content")
                .describe("Primary interface components"),
            ZoneSpec::open("layout-right", "Right Panel")
                .describe("Tools and detail components"),
        ])
    }

    /// Parses and validates a JSON layout.
    pub fn from_json_str(raw: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(raw)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads, parses and validates a JSON layout file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Validates declaration-level layout invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.zones.is_empty() {
            return Err(LayoutError::NoZones);
        }

        let mut seen = BTreeSet::<&str>::new();
        for zone in &self.zones {
            if zone.id.trim().is_empty() {
                return Err(LayoutError::BlankZoneId);
            }
            if !ZONE_ID_RE.is_match(&zone.id) {
                return Err(LayoutError::InvalidZoneId(zone.id.clone()));
            }
            if !seen.insert(zone.id.as_str()) {
                return Err(LayoutError::DuplicateZoneId(zone.id.clone()));
            }
            if zone.accepts.is_empty() {
                return Err(LayoutError::NoAcceptedCategories(zone.id.clone()));
            }
            if zone.capacity == Some(0) {
                return Err(LayoutError::ZeroCapacity(zone.id.clone()));
            }
        }
        Ok(())
    }

    pub fn zone(&self, id: &str) -> Option<&ZoneSpec> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Zones admitting `category`, in layout order.
    pub fn zones_accepting(&self, category: Category) -> impl Iterator<Item = &ZoneSpec> {
        self.zones.iter().filter(move |zone| zone.accepts(category))
    }
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self::default_layout()
    }
}

/// Layout loading and validation errors.
#[derive(Debug)]
pub enum LayoutError {
    NoZones,
    BlankZoneId,
    InvalidZoneId(String),
    DuplicateZoneId(String),
    NoAcceptedCategories(String),
    ZeroCapacity(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoZones => write!(f, "layout must declare at least one zone"),
            Self::BlankZoneId => write!(f, "zone id must not be blank"),
            Self::InvalidZoneId(id) => write!(
                f,
                "zone id is invalid: {id} (expected lowercase kebab-case)"
            ),
            Self::DuplicateZoneId(id) => write!(f, "zone id is duplicated: {id}"),
            Self::NoAcceptedCategories(id) => {
                write!(f, "zone must accept at least one category: {id}")
            }
            Self::ZeroCapacity(id) => write!(f, "zone capacity must be at least 1: {id}"),
            Self::Io(err) => write!(f, "failed to read layout: {err}"),
            Self::Parse(err) => write!(f, "failed to parse layout: {err}"),
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
