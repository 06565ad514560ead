//! Shared data types for the night-shift simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core simulation and any presentation layer both depend on it.

pub mod clock;
pub mod event;
pub mod phase;
pub mod snapshot;
pub mod world;

// Re-export clock types
pub use clock::{ClockTime, Meridiem, NightTimestamp, ParseClockError, NIGHT_LENGTH_MINUTES};

// Re-export event types
pub use event::{generate_event_id, EventKind, EventType, NightEvent};

// Re-export phase types
pub use phase::{Phase, Subsystem};

// Re-export world types
pub use world::{AgentKind, LocationId, ParseLocationError, Side};

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, AgentSnapshot, CameraFeed, DoorView, SimulationSnapshot,
    SubsystemsSnapshot,
};
