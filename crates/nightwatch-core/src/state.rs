//! Simulation State
//!
//! The single owned aggregate every system reads and the orchestrator writes.

use nightwatch_events::{ClockTime, LocationId, Phase, Side};

use crate::components::{Agent, Subsystems};
use crate::config::MAX_POWER;

/// Camera shown when the monitor first comes up.
pub const DEFAULT_CAMERA: LocationId = LocationId::ShowStage;

/// Everything that changes during a night.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub phase: Phase,
    /// Starts at 1; grows only when a won night rolls into the next one
    pub night_index: u32,
    pub elapsed_minutes: u32,
    pub power: u32,
    pub subsystems: Subsystems,
    pub selected_camera: LocationId,
    pub agents: Vec<Agent>,
}

impl SimulationState {
    /// A menu-phase state holding a fresh night-1 layout.
    pub fn new(agents: Vec<Agent>, max_power: u32) -> Self {
        let mut state = Self {
            phase: Phase::Menu,
            night_index: 1,
            elapsed_minutes: 0,
            power: max_power,
            subsystems: Subsystems::default(),
            selected_camera: DEFAULT_CAMERA,
            agents,
        };
        state.reset_night(0, max_power);
        state
    }

    /// Clears all per-night state. Phase and night index are untouched.
    ///
    /// Power starts at `max_power`, capped at 100.
    pub fn reset_night(&mut self, now_ms: u64, max_power: u32) {
        self.elapsed_minutes = 0;
        self.power = max_power.min(MAX_POWER);
        self.subsystems = Subsystems::default();
        self.selected_camera = DEFAULT_CAMERA;
        for agent in &mut self.agents {
            agent.reset_to_spawn(now_ms);
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn clock(&self) -> ClockTime {
        ClockTime::from_elapsed(self.elapsed_minutes)
    }

    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn agent_mut(&mut self, name: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.name == name)
    }

    /// Names of agents standing at `location`.
    pub fn agents_at(&self, location: LocationId) -> Vec<String> {
        self.agents
            .iter()
            .filter(|a| a.location == location)
            .map(|a| a.name.clone())
            .collect()
    }

    /// Agents a lit door reveals. Empty while that side's light is off.
    pub fn visible_at_door(&self, side: Side) -> Vec<String> {
        if !self.subsystems.light_on(side) {
            return Vec::new();
        }
        self.agents_at(LocationId::corner(side))
    }
}
