//! Simulation components: agents, the office and the location graph.

pub mod agent;
pub mod office;
pub mod world;

pub use agent::Agent;
pub use office::{door_of, light_of, Subsystems};
pub use world::{LocationGraph, RUNNER_ROUTE};
