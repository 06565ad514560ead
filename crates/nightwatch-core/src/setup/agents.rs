//! Agent Spawning
//!
//! Builds the night's animatronics from the configured roster.

use nightwatch_events::{AgentKind, LocationId};
use std::collections::BTreeMap;

use crate::components::Agent;
use crate::config::AgentConfig;

/// The four reference animatronics.
pub fn default_roster() -> Vec<AgentConfig> {
    vec![
        AgentConfig::new("Freddy", AgentKind::Roamer, 1.0, LocationId::ShowStage),
        AgentConfig::new("Bonnie", AgentKind::Roamer, 2.0, LocationId::ShowStage),
        AgentConfig::new("Chica", AgentKind::Roamer, 2.0, LocationId::ShowStage),
        AgentConfig::new("Foxy", AgentKind::Runner, 3.0, LocationId::PirateCove),
    ]
}

/// Spawn one agent per roster entry, each at its spawn point.
pub fn spawn_agents(roster: &[AgentConfig]) -> Vec<Agent> {
    roster
        .iter()
        .map(|entry| Agent::new(entry.name.clone(), entry.kind, entry.spawn, entry.aggressiveness))
        .collect()
}

/// Summary of spawned agents
#[derive(Debug, Default)]
pub struct SpawnSummary {
    pub total_agents: usize,
    pub by_location: BTreeMap<LocationId, Vec<String>>,
}

/// Groups agents by where they currently stand.
pub fn get_spawn_summary(agents: &[Agent]) -> SpawnSummary {
    let mut summary = SpawnSummary {
        total_agents: agents.len(),
        ..Default::default()
    };
    for agent in agents {
        summary
            .by_location
            .entry(agent.location)
            .or_default()
            .push(agent.name.clone());
    }
    summary
}
