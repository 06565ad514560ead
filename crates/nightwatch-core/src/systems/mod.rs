//! Systems
//!
//! Per-tick state transforms: clock, power, movement and threat.

pub mod clock;
pub mod movement;
pub mod power;
pub mod threat;

pub use clock::{advance, ClockOutcome};
pub use movement::{destination_policy, move_probability, try_move, MoveContext};
pub use power::{drain, subsystem_cost, usage, DrainOutcome};
pub use threat::{check_loss, find_breach, Breach};
