//! Threat System
//!
//! Detects agents at a corner next to an open door and rolls whether the
//! breach ends the night. An unresolved breach is re-rolled every threat tick.

use nightwatch_events::{LocationId, Phase, Side};

use crate::components::{Agent, Subsystems};
use crate::config::ThreatConfig;
use crate::rng::RandomSource;
use crate::state::SimulationState;

/// An agent standing at an open door
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breach {
    pub agent: String,
    pub side: Side,
}

/// Returns the first breach, checking the left door before the right.
pub fn find_breach(agents: &[Agent], doors: &Subsystems) -> Option<Breach> {
    Side::BOTH.into_iter().find_map(|side| {
        if doors.door_closed(side) {
            return None;
        }
        let corner = LocationId::corner(side);
        agents.iter().find(|a| a.location == corner).map(|a| Breach {
            agent: a.name.clone(),
            side,
        })
    })
}

/// One threat tick. Sets the phase to Lost and returns the breach that
/// triggered it, or returns None if the player survives this tick.
///
/// Rolls at most once, and only when a breach exists.
pub fn check_loss(
    state: &mut SimulationState,
    threat: &ThreatConfig,
    rng: &mut impl RandomSource,
) -> Option<Breach> {
    if !state.is_running() {
        return None;
    }

    let breach = find_breach(&state.agents, &state.subsystems)?;
    if rng.roll() < threat.loss_probability {
        state.phase = Phase::Lost;
        Some(breach)
    } else {
        None
    }
}
