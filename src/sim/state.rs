//! Rotation state and core simulation types
//!
//! Everything that must advance deterministically lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Current phase of the rotation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Baseline 360-degree roll
    Rolling,
    /// Short window during which a catch press is accepted
    Pause,
    /// Rare cooldown-gated 720-degree rotation, no trailing pause
    BigRotation,
    /// Frozen after a successful catch, waiting for the player to resume
    CaughtPause,
}

impl Phase {
    /// Stable machine name
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Rolling => "rolling",
            Phase::Pause => "pause",
            Phase::BigRotation => "big_rot",
            Phase::CaughtPause => "caught_pause",
        }
    }

    /// Human-readable label for HUD display
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Rolling => "Rolling",
            Phase::Pause => "Pause",
            Phase::BigRotation => "Big Rotation",
            Phase::CaughtPause => "Caught",
        }
    }
}

/// Elapsed time within the current phase
///
/// Accumulated from frame deltas rather than sampled from a system clock, so
/// the state machine stays frame-rate independent and testable with
/// synthetic `dt` sequences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PhaseClock {
    elapsed: f32,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one frame delta
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Zero the clock (called on every phase transition)
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Seconds since the last reset
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// RNG seed wrapper for reproducible runs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// The live rotating entity
///
/// Created once in `Rolling` with angle 0 and mutated exclusively by
/// [`tick`](crate::sim::tick::tick).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationState {
    /// Active phase (exactly one at any time)
    pub phase: Phase,
    /// Time since the current phase began
    pub phase_clock: PhaseClock,
    /// Interpolation origin of the active phase, degrees in [0, 360);
    /// set at phase entry, never mutated mid-phase
    pub base_angle: f32,
    /// Displayed angle, degrees in [0, 360); recomputed every tick
    pub current_angle: f32,
    /// Monotonic simulation clock, seconds accumulated from `dt`
    pub now: f64,
    /// Sim time at which a big rotation was last *entered*; starts at
    /// `-cooldown` so the first roll completion is immediately eligible
    pub last_big_rotation: f64,
    /// True only while inside `CaughtPause`
    pub caught: bool,
    /// Raw catch-key level from the previous tick, for press-edge detection
    pub catch_held: bool,
}

impl RotationState {
    pub fn new(cooldown: f32) -> Self {
        Self {
            phase: Phase::Rolling,
            phase_clock: PhaseClock::new(),
            base_angle: 0.0,
            current_angle: 0.0,
            now: 0.0,
            last_big_rotation: -f64::from(cooldown),
            caught: false,
            catch_held: false,
        }
    }

    /// Atomically switch phases: freeze the current angle into the new
    /// phase's base and restart the phase clock.
    pub fn enter_phase(&mut self, phase: Phase) {
        self.base_angle = normalize_degrees(self.current_angle);
        self.phase = phase;
        self.phase_clock.reset();
    }

    /// Seconds since the last big-rotation entry
    pub fn since_big_rotation(&self) -> f32 {
        (self.now - self.last_big_rotation) as f32
    }
}
