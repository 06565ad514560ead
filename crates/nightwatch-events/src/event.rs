//! Event Types
//!
//! Advisory notifications emitted by the simulation core. Presentation layers
//! react to them (play a cue, flash the screen); the simulation never depends
//! on them being observed.

use serde::{Deserialize, Serialize};

use crate::{AgentKind, LocationId, NightTimestamp, Phase, Side, Subsystem};

/// Primary event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Lifecycle,
    Subsystem,
    Movement,
    Threat,
}

/// Event payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A night entered the running phase.
    NightStarted { night: u32 },
    /// A door, light or the camera monitor changed state by player intent.
    SubsystemToggled { subsystem: Subsystem, active: bool },
    /// The camera monitor switched to another feed.
    CameraSelected { location: LocationId },
    AgentMoved {
        agent: String,
        kind: AgentKind,
        from: LocationId,
        to: LocationId,
    },
    /// Power hit zero and every subsystem shut off.
    PowerDepleted,
    /// An agent got through an open door. The night is lost.
    ThreatTriggered { agent: String, side: Side },
    /// The clock reached 6:00 AM.
    NightWon { night: u32 },
    ReturnedToMenu { from: Phase },
}

impl EventKind {
    /// Returns the category for this payload.
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::NightStarted { .. }
            | EventKind::NightWon { .. }
            | EventKind::ReturnedToMenu { .. } => EventType::Lifecycle,
            EventKind::SubsystemToggled { .. }
            | EventKind::CameraSelected { .. }
            | EventKind::PowerDepleted => EventType::Subsystem,
            EventKind::AgentMoved { .. } => EventType::Movement,
            EventKind::ThreatTriggered { .. } => EventType::Threat,
        }
    }
}

/// A single emitted event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightEvent {
    /// Unique identifier (e.g., "evt_00000042")
    pub event_id: String,
    /// When the event occurred
    pub timestamp: NightTimestamp,
    pub kind: EventKind,
}

impl NightEvent {
    pub fn new(event_id: impl Into<String>, timestamp: NightTimestamp, kind: EventKind) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            kind,
        }
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Serializes the event as a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates an event ID with the given sequence number.
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}
