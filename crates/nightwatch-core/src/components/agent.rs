//! Agent Components

use nightwatch_events::{AgentKind, AgentSnapshot, LocationId};

/// An animatronic.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub name: String,
    pub kind: AgentKind,
    pub location: LocationId,
    /// Where the agent stands when a night begins
    pub spawn: LocationId,
    /// Scales move probability; static per agent
    pub aggressiveness: f64,
    /// Simulation milliseconds of the last successful move (or night start)
    pub last_move_ms: u64,
    /// True only for the movement tick in which the agent moved
    pub is_moving: bool,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        kind: AgentKind,
        spawn: LocationId,
        aggressiveness: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            location: spawn,
            spawn,
            aggressiveness,
            last_move_ms: 0,
            is_moving: false,
        }
    }

    /// Pins the agent back to its spawn point.
    pub fn reset_to_spawn(&mut self, now_ms: u64) {
        self.location = self.spawn;
        self.last_move_ms = now_ms;
        self.is_moving = false;
    }

    /// Strictly more than `cooldown_ms` has passed since the last move.
    pub fn cooldown_elapsed(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_move_ms) > cooldown_ms
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            name: self.name.clone(),
            kind: self.kind,
            location: self.location,
            aggressiveness: self.aggressiveness,
            is_moving: self.is_moving,
        }
    }
}
