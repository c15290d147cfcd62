//! Spin Catch - a timed rotating-object catch minigame core
//!
//! Core modules:
//! - `sim`: deterministic rotation state machine (phases, catch window,
//!   big-rotation cooldown)
//! - `tuning`: data-driven timing configuration
//!
//! The crate owns no window, renderer, or input device. The host loop reads
//! its own clock and input source, calls `advance(dt, catch_pressed)` once
//! per frame, then reads back the angle and phase to display.

pub mod sim;
pub mod tuning;

pub use sim::{CatchMachine, Phase, PhaseClock, RotationState, TickInput};
pub use tuning::Tuning;

/// Default timing and sweep constants
pub mod consts {
    /// Seconds for one baseline roll
    pub const ROLL_DURATION: f32 = 1.0;
    /// Seconds the catch window stays open
    pub const PAUSE_DURATION: f32 = 0.2;
    /// Seconds a big rotation takes
    pub const BIG_ROTATION_DURATION: f32 = 1.2;
    /// Minimum seconds between big-rotation entries (entry to entry)
    pub const BIG_ROTATION_COOLDOWN: f32 = 6.0;
    /// Degrees swept by one roll
    pub const ROLL_SWEEP: f32 = 360.0;
    /// Degrees swept by a big rotation
    pub const BIG_ROTATION_SWEEP: f32 = 720.0;
    /// Probability that a completed roll triggers a big rotation
    /// (cooldown permitting)
    pub const BIG_ROTATION_CHANCE: f32 = 0.5;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if a >= 360.0 { a - 360.0 } else { a }
}
