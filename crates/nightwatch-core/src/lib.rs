//! Night-shift survival simulation core.
//!
//! Public API for the simulation: a clock, a power budget, a building full of
//! wandering agents and the doors that keep them out.

pub mod autopilot;
pub mod components;
pub mod config;
pub mod driver;
pub mod events;
pub mod headless;
pub mod output;
pub mod rng;
pub mod schedule;
pub mod setup;
pub mod simulation;
pub mod state;
pub mod systems;

pub use autopilot::Autopilot;
pub use components::*;
pub use config::{Config, ConfigError};
pub use driver::{DriverCommand, DriverHandle};
pub use events::{read_log, EventLogger, EventQueue};
pub use headless::{HeadlessRunner, NightSummary};
pub use rng::{RandomSource, ScriptedRolls, SimRng};
pub use schedule::{Cadence, TickSchedule};
pub use simulation::{Intent, Simulation};
pub use state::SimulationState;
