use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for the "all locations" entry of the filter menu
pub const ALL_LOCATIONS_LABEL: &str = "Semua Lokasi";

/// Parking location identifier as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Entry of the location filter menu
///
/// `All` is the synthesized sentinel; it can never collide with a real
/// identifier, even one spelled like its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Only(Location),
}

impl LocationFilter {
    pub fn only(id: impl Into<String>) -> Self {
        LocationFilter::Only(Location::new(id))
    }

    /// The specific location selected, if any
    pub fn location(&self) -> Option<&Location> {
        match self {
            LocationFilter::All => None,
            LocationFilter::Only(location) => Some(location),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, LocationFilter::All)
    }
}

impl From<Option<Location>> for LocationFilter {
    fn from(location: Option<Location>) -> Self {
        location.map_or(LocationFilter::All, LocationFilter::Only)
    }
}

impl fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFilter::All => f.write_str(ALL_LOCATIONS_LABEL),
            LocationFilter::Only(location) => location.fmt(f),
        }
    }
}
