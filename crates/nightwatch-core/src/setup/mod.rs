//! Setup
//!
//! Roster defaults and agent spawning.

pub mod agents;

pub use agents::*;
