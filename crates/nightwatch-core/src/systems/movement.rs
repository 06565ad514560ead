//! Movement System
//!
//! Stochastic agent movement. Each movement tick every agent whose cooldown
//! has passed rolls once against a probability that grows with its
//! aggressiveness, the night number and how late it is.

use nightwatch_events::{AgentKind, LocationId};

use crate::components::{Agent, LocationGraph};
use crate::config::MovementConfig;
use crate::rng::RandomSource;

/// Global night state a move roll depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveContext {
    pub night_index: u32,
    pub elapsed_minutes: u32,
}

/// `aggressiveness * night * base_rate + minutes * time_rate`
pub fn move_probability(agent: &Agent, ctx: MoveContext, movement: &MovementConfig) -> f64 {
    agent.aggressiveness * f64::from(ctx.night_index) * movement.base_rate
        + f64::from(ctx.elapsed_minutes) * movement.time_rate
}

/// Picks where an agent of `kind` goes next.
///
/// Falls back to `from` if the graph offers no candidate.
pub fn destination_policy(
    kind: AgentKind,
    from: LocationId,
    graph: &LocationGraph,
    rng: &mut impl RandomSource,
) -> LocationId {
    let candidates = graph.reachable_from(from, kind);
    let index = rng.pick_index(candidates.len());
    candidates.get(index).copied().unwrap_or(from)
}

/// One movement attempt. Returns the updated agent.
pub fn try_move(
    agent: &Agent,
    ctx: MoveContext,
    now_ms: u64,
    graph: &LocationGraph,
    movement: &MovementConfig,
    rng: &mut impl RandomSource,
) -> Agent {
    let mut next = agent.clone();
    next.is_moving = false;

    if !agent.cooldown_elapsed(now_ms, movement.cooldown_ms) {
        return next;
    }

    let chance = move_probability(agent, ctx, movement);
    if rng.roll() >= chance {
        return next;
    }

    next.location = destination_policy(agent.kind, agent.location, graph, rng);
    next.last_move_ms = now_ms;
    next.is_moving = true;
    next
}
