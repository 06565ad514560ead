//! World Components
//!
//! The static location graph agents move through.

use nightwatch_events::{AgentKind, LocationId};

/// Fixed route a runner takes out of Pirate Cove toward the left door.
pub const RUNNER_ROUTE: [LocationId; 3] = [
    LocationId::PirateCove,
    LocationId::WestHall,
    LocationId::WestHallCorner,
];

/// Immutable topology of the building.
#[derive(Debug, Clone)]
pub struct LocationGraph {
    locations: Vec<LocationId>,
    runner_route: Vec<LocationId>,
}

impl Default for LocationGraph {
    fn default() -> Self {
        Self::standard()
    }
}

impl LocationGraph {
    /// The nine-room pizzeria.
    pub fn standard() -> Self {
        Self {
            locations: LocationId::ALL.to_vec(),
            runner_route: RUNNER_ROUTE.to_vec(),
        }
    }

    /// Get all locations
    pub fn all_locations(&self) -> &[LocationId] {
        &self.locations
    }

    pub fn contains(&self, location: LocationId) -> bool {
        self.locations.contains(&location)
    }

    pub fn runner_route(&self) -> &[LocationId] {
        &self.runner_route
    }

    /// Locations an agent of `kind` standing at `from` may move to next.
    ///
    /// Roamers can go anywhere but where they are. Runners pick from their
    /// route, which may include the spot they already occupy.
    pub fn reachable_from(&self, from: LocationId, kind: AgentKind) -> Vec<LocationId> {
        match kind {
            AgentKind::Runner => self.runner_route.clone(),
            AgentKind::Roamer => self
                .locations
                .iter()
                .copied()
                .filter(|l| *l != from)
                .collect(),
        }
    }

    /// Resolves a raw camera id to a location of this graph.
    pub fn resolve(&self, raw: &str) -> Option<LocationId> {
        raw.parse::<LocationId>()
            .ok()
            .filter(|id| self.contains(*id))
    }
}
