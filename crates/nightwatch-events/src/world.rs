//! World Types
//!
//! Location identifiers, door sides and agent kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A node of the pizzeria location graph.
///
/// Serializes to kebab-case names such as `"west-hall-corner"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationId {
    ShowStage,
    DiningArea,
    PirateCove,
    Backstage,
    SupplyCloset,
    EastHall,
    WestHall,
    EastHallCorner,
    WestHallCorner,
}

impl LocationId {
    /// Every location, in camera order.
    pub const ALL: [LocationId; 9] = [
        LocationId::ShowStage,
        LocationId::DiningArea,
        LocationId::PirateCove,
        LocationId::Backstage,
        LocationId::SupplyCloset,
        LocationId::EastHall,
        LocationId::WestHall,
        LocationId::EastHallCorner,
        LocationId::WestHallCorner,
    ];

    /// Returns all location variants.
    pub fn all() -> &'static [LocationId] {
        &Self::ALL
    }

    /// Stable kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationId::ShowStage => "show-stage",
            LocationId::DiningArea => "dining-area",
            LocationId::PirateCove => "pirate-cove",
            LocationId::Backstage => "backstage",
            LocationId::SupplyCloset => "supply-closet",
            LocationId::EastHall => "east-hall",
            LocationId::WestHall => "west-hall",
            LocationId::EastHallCorner => "east-hall-corner",
            LocationId::WestHallCorner => "west-hall-corner",
        }
    }

    /// Default human-readable label, used for logs and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            LocationId::ShowStage => "Show Stage",
            LocationId::DiningArea => "Dining Area",
            LocationId::PirateCove => "Pirate Cove",
            LocationId::Backstage => "Backstage",
            LocationId::SupplyCloset => "Supply Closet",
            LocationId::EastHall => "East Hall",
            LocationId::WestHall => "West Hall",
            LocationId::EastHallCorner => "East Hall Corner",
            LocationId::WestHallCorner => "West Hall Corner",
        }
    }

    /// The corner outside the office door on the given side.
    pub fn corner(side: Side) -> Self {
        match side {
            Side::Left => LocationId::WestHallCorner,
            Side::Right => LocationId::EastHallCorner,
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocationError(pub String);

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown location: '{}'", self.0)
    }
}

impl std::error::Error for ParseLocationError {}

impl FromStr for LocationId {
    type Err = ParseLocationError;

    /// Accepts kebab-case or snake_case ids, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        LocationId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ParseLocationError(s.to_string()))
    }
}

/// Side of the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Movement policy tag for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Wanders anywhere in the building except where it already stands.
    Roamer,
    /// Follows a fixed route out of Pirate Cove.
    Runner,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Roamer => write!(f, "roamer"),
            AgentKind::Runner => write!(f, "runner"),
        }
    }
}
