//! Deterministic simulation module
//!
//! The whole minigame core lives here and must stay pure and deterministic:
//! - Progress computed from accumulated frame time, never wall-clock reads
//! - Seeded RNG only, injected by the caller
//! - No rendering or platform dependencies

pub mod machine;
pub mod state;
pub mod tick;

pub use machine::CatchMachine;
pub use state::{Phase, PhaseClock, RngState, RotationState};
pub use tick::{TickInput, tick};
