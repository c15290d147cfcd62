//! Host-facing wrapper around the rotation tick
//!
//! Owns the state, the tuning, and the loop's RNG source, and projects the
//! data a display layer needs: phase label, normalized angle, countdowns.

use rand_pcg::Pcg32;

use super::state::{Phase, RngState, RotationState};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// The catch minigame, one rotating entity
#[derive(Debug, Clone)]
pub struct CatchMachine {
    state: RotationState,
    tuning: Tuning,
    rng: Pcg32,
}

impl CatchMachine {
    /// Create a machine with default tuning, seeded for reproducibility
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: RotationState::new(tuning.big_rotation_cooldown),
            rng: RngState::new(seed).to_rng(),
            tuning,
        }
    }

    /// Advance one frame. `dt` is this frame's delta in seconds,
    /// `catch_pressed` the raw catch-key level.
    pub fn advance(&mut self, dt: f32, catch_pressed: bool) {
        let input = TickInput {
            catch: catch_pressed,
        };
        tick(&mut self.state, &input, dt, &self.tuning, &mut self.rng);
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn phase_label(&self) -> &'static str {
        self.state.phase.label()
    }

    /// Displayed angle in degrees, normalized to [0, 360)
    pub fn angle(&self) -> f32 {
        self.state.current_angle
    }

    /// Seconds until the current phase times out on its own.
    /// `CaughtPause` has no timeout and reports zero.
    pub fn time_remaining_in_phase(&self) -> f32 {
        let duration = match self.state.phase {
            Phase::Rolling => self.tuning.roll_duration,
            Phase::Pause => self.tuning.pause_duration,
            Phase::BigRotation => self.tuning.big_rotation_duration,
            Phase::CaughtPause => return 0.0,
        };
        (duration - self.state.phase_clock.elapsed()).max(0.0)
    }

    /// Seconds until the next big rotation becomes eligible
    pub fn cooldown_remaining(&self) -> f32 {
        (self.tuning.big_rotation_cooldown - self.state.since_big_rotation()).max(0.0)
    }

    pub fn is_caught(&self) -> bool {
        self.state.caught
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
