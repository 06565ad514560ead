//! Power System
//!
//! Drains the shared power reserve by the cost of whatever is switched on.
//! Reaching zero is a one-way blackout for the rest of the night.

use nightwatch_events::Subsystem;

use crate::components::Subsystems;
use crate::config::PowerConfig;
use crate::state::SimulationState;

/// Drain weight of a single subsystem.
pub fn subsystem_cost(subsystem: Subsystem, power: &PowerConfig) -> u32 {
    match subsystem {
        Subsystem::Camera => power.camera_usage,
        Subsystem::LeftDoor | Subsystem::RightDoor => power.door_usage,
        Subsystem::LeftLight | Subsystem::RightLight => power.light_usage,
    }
}

/// Power drawn per power tick: the base load plus every active subsystem.
pub fn usage(subsystems: &Subsystems, power: &PowerConfig) -> u32 {
    subsystems
        .active()
        .map(|s| subsystem_cost(s, power))
        .fold(power.base_usage, u32::saturating_add)
}

/// Result of one power tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Power dropped by `usage` and some remains
    Drained { usage: u32 },
    /// This tick emptied the reserve; every subsystem is now off
    Depleted,
    /// Already at zero
    Exhausted,
}

/// Applies one power tick.
pub fn drain(state: &mut SimulationState, power: &PowerConfig) -> DrainOutcome {
    if state.power == 0 {
        state.subsystems.shut_down();
        return DrainOutcome::Exhausted;
    }

    let usage = usage(&state.subsystems, power);
    state.power = state.power.saturating_sub(usage).min(power.max_power);

    if state.power == 0 {
        state.subsystems.shut_down();
        DrainOutcome::Depleted
    } else {
        DrainOutcome::Drained { usage }
    }
}
