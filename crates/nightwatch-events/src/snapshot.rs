//! Snapshot Types
//!
//! Serialization structs for the read-only view handed to presentation.
//!
//! A snapshot captures everything a screen needs to render one frame: clock,
//! power, subsystem flags, the active camera feed and where every agent is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AgentKind, ClockTime, LocationId, Phase, Side};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Subsystem flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemsSnapshot {
    pub camera_active: bool,
    pub left_door_closed: bool,
    pub right_door_closed: bool,
    pub left_light_on: bool,
    pub right_light_on: bool,
}

/// What the selected camera currently shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFeed {
    pub location: LocationId,
    #[serde(default)]
    pub agents_present: Vec<String>,
}

/// One office door as seen from the desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorView {
    pub side: Side,
    pub door_closed: bool,
    pub light_on: bool,
    /// Agents standing at this door's corner; empty unless the light is on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible_agents: Vec<String>,
}

/// Agent snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    pub kind: AgentKind,
    pub location: LocationId,
    pub aggressiveness: f64,
    #[serde(default)]
    pub is_moving: bool,
}

/// Complete simulation snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub snapshot_id: String,
    pub session_id: Uuid,
    /// Running-period counter; changes on every night start and night end
    pub generation: u64,
    pub phase: Phase,
    pub night_index: u32,
    pub elapsed_minutes: u32,
    pub clock: ClockTime,
    pub power: u32,
    /// Current drain per power tick
    pub power_usage: u32,
    pub subsystems: SubsystemsSnapshot,
    pub selected_camera: LocationId,
    /// Present only while the camera monitor is up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_feed: Option<CameraFeed>,
    pub doors: Vec<DoorView>,
    pub agents: Vec<AgentSnapshot>,
}

impl SimulationSnapshot {
    /// Returns the agent with the given name.
    pub fn agent(&self, name: &str) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Returns the view of one door.
    pub fn door(&self, side: Side) -> Option<&DoorView> {
        self.doors.iter().find(|d| d.side == side)
    }

    /// Names of every agent standing at `location`.
    pub fn agents_at(&self, location: LocationId) -> Vec<&str> {
        self.agents
            .iter()
            .filter(|a| a.location == location)
            .map(|a| a.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> SimulationSnapshot {
        SimulationSnapshot {
            snapshot_id: generate_snapshot_id(3),
            session_id: Uuid::nil(),
            generation: 1,
            phase: Phase::Running,
            night_index: 2,
            elapsed_minutes: 61,
            clock: ClockTime::from_elapsed(61),
            power: 87,
            power_usage: 3,
            subsystems: SubsystemsSnapshot {
                left_door_closed: true,
                ..Default::default()
            },
            selected_camera: LocationId::ShowStage,
            camera_feed: None,
            doors: vec![
                DoorView {
                    side: Side::Left,
                    door_closed: true,
                    light_on: false,
                    visible_agents: vec![],
                },
                DoorView {
                    side: Side::Right,
                    door_closed: false,
                    light_on: true,
                    visible_agents: vec!["Chica".into()],
                },
            ],
            agents: vec![
                AgentSnapshot {
                    name: "Foxy".into(),
                    kind: AgentKind::Runner,
                    location: LocationId::PirateCove,
                    aggressiveness: 3.0,
                    is_moving: false,
                },
                AgentSnapshot {
                    name: "Chica".into(),
                    kind: AgentKind::Roamer,
                    location: LocationId::EastHallCorner,
                    aggressiveness: 2.0,
                    is_moving: true,
                },
            ],
        }
    }

    #[test]
    fn test_snapshot_id_format() {
        assert_eq!(generate_snapshot_id(12), "snap_000012");
    }

    #[test]
    fn test_snapshot_lookups() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.agent("Foxy").unwrap().location, LocationId::PirateCove);
        assert!(snapshot.agent("Golden").is_none());
        assert_eq!(snapshot.door(Side::Right).unwrap().visible_agents, vec!["Chica"]);
        assert_eq!(snapshot.agents_at(LocationId::EastHallCorner), vec!["Chica"]);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(sample_snapshot()).unwrap();
        assert_eq!(json["phase"], "running");
        assert_eq!(json["clock"], "1:01 AM");
        assert_eq!(json["selected_camera"], "show-stage");
        // Camera feed is omitted while the monitor is down
        assert!(json.get("camera_feed").is_none());
        // Empty door views skip the visible list
        assert!(json["doors"][0].get("visible_agents").is_none());
    }
}
