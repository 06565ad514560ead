//! Autopilot
//!
//! A scripted player. It reads a snapshot and answers with the intents a
//! careful guard would send: shut a door while something stands at its corner,
//! reopen it once the corner is clear, and keep lights and the monitor off to
//! save power.

use nightwatch_events::{LocationId, Phase, Side, SimulationSnapshot};

use crate::simulation::Intent;

/// Stateless door-minding player
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Intents to send in response to `snapshot`. Empty outside a powered,
    /// running night.
    pub fn decide(&self, snapshot: &SimulationSnapshot) -> Vec<Intent> {
        if snapshot.phase != Phase::Running || snapshot.power == 0 {
            return Vec::new();
        }

        let mut intents = Vec::new();
        for side in Side::BOTH {
            let Some(door) = snapshot.door(side) else {
                continue;
            };
            let threatened = !snapshot.agents_at(LocationId::corner(side)).is_empty();
            if threatened != door.door_closed {
                intents.push(Intent::ToggleDoor(side));
            }
            if door.light_on {
                intents.push(Intent::ToggleLight(side));
            }
        }
        if snapshot.subsystems.camera_active {
            intents.push(Intent::ToggleCameraMode);
        }
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::simulation::Simulation;

    fn running() -> Simulation {
        let mut sim = Simulation::new(Config::default());
        sim.start_night(0);
        sim
    }

    #[test]
    fn test_quiet_office_needs_nothing() {
        let sim = running();
        assert!(Autopilot::new().decide(&sim.snapshot()).is_empty());
    }

    #[test]
    fn test_idle_outside_running() {
        let sim = Simulation::new(Config::default());
        assert!(Autopilot::new().decide(&sim.snapshot()).is_empty());
    }

    #[test]
    fn test_opens_door_when_corner_clear() {
        let mut sim = running();
        sim.toggle_door(Side::Right);
        sim.toggle_light(Side::Left);
        sim.toggle_camera_mode();

        let intents = Autopilot::new().decide(&sim.snapshot());
        assert_eq!(
            intents,
            vec![
                Intent::ToggleLight(Side::Left),
                Intent::ToggleDoor(Side::Right),
                Intent::ToggleCameraMode,
            ]
        );

        for intent in intents {
            assert!(sim.apply(intent, 0));
        }
        assert!(!sim.state().subsystems.any_active());
    }

    #[test]
    fn test_closes_door_on_threat() {
        let mut snapshot = running().snapshot();
        let foxy = snapshot.agents.iter_mut().find(|a| a.name == "Foxy").unwrap();
        foxy.location = LocationId::WestHallCorner;

        assert_eq!(
            Autopilot::new().decide(&snapshot),
            vec![Intent::ToggleDoor(Side::Left)]
        );
    }
}
