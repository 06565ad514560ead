//! Clock System
//!
//! Advances in-game minutes and detects the end of the night.

use nightwatch_events::Phase;

use crate::config::NightConfig;
use crate::state::SimulationState;

/// Result of one minute tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockOutcome {
    /// Time moved forward; the night goes on
    Advanced,
    /// The clock hit the end of the night and the phase is now Won
    NightComplete,
    /// Not running; nothing changed
    Halted,
}

/// Moves the clock forward one tick.
///
/// Clamps at the night length and flips the phase to Won exactly once; later
/// calls are no-ops because the phase is no longer Running.
pub fn advance(state: &mut SimulationState, night: &NightConfig) -> ClockOutcome {
    if !state.is_running() {
        return ClockOutcome::Halted;
    }

    let next = state.elapsed_minutes.saturating_add(night.minutes_per_tick);
    if next >= night.length_minutes {
        state.elapsed_minutes = night.length_minutes;
        state.phase = Phase::Won;
        ClockOutcome::NightComplete
    } else {
        state.elapsed_minutes = next;
        ClockOutcome::Advanced
    }
}
