//! Phase and subsystem identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Menu,
    Running,
    Lost,
    Won,
}

impl Phase {
    /// Returns true for the phases that end a night.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Lost | Phase::Won)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Menu => write!(f, "menu"),
            Phase::Running => write!(f, "running"),
            Phase::Lost => write!(f, "lost"),
            Phase::Won => write!(f, "won"),
        }
    }
}

/// A player-toggleable power consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    Camera,
    LeftDoor,
    RightDoor,
    LeftLight,
    RightLight,
}

impl Subsystem {
    pub const ALL: [Subsystem; 5] = [
        Subsystem::Camera,
        Subsystem::LeftDoor,
        Subsystem::RightDoor,
        Subsystem::LeftLight,
        Subsystem::RightLight,
    ];
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subsystem::Camera => write!(f, "camera"),
            Subsystem::LeftDoor => write!(f, "left_door"),
            Subsystem::RightDoor => write!(f, "right_door"),
            Subsystem::LeftLight => write!(f, "left_light"),
            Subsystem::RightLight => write!(f, "right_light"),
        }
    }
}
