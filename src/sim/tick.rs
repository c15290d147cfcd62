//! Frame tick for the rotation state machine
//!
//! `tick()` is the only mutator of [`RotationState`]. The host loop calls it
//! once per frame with that frame's `dt`, the raw catch-key level, and the
//! loop-owned RNG; progress within a phase is a function of accumulated
//! time, so the cadence of calls does not change the trajectory.

use rand::Rng;

use super::state::{Phase, RotationState};
use crate::normalize_degrees;
use crate::tuning::Tuning;

/// Input signal for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Catch-key level this tick; the core edge-detects presses itself, so
    /// a held key counts as one press
    pub catch: bool,
}

/// Advance the rotation state by one frame
///
/// `dt` must be non-negative; a negative delta is a caller bug.
pub fn tick(
    state: &mut RotationState,
    input: &TickInput,
    dt: f32,
    tuning: &Tuning,
    rng: &mut impl Rng,
) {
    debug_assert!(dt >= 0.0, "tick called with negative dt: {dt}");

    state.now += f64::from(dt);
    state.phase_clock.advance(dt);

    let pressed = input.catch && !state.catch_held;
    state.catch_held = input.catch;

    match state.phase {
        Phase::Rolling => {
            let progress = (state.phase_clock.elapsed() / tuning.roll_duration).min(1.0);
            state.current_angle =
                normalize_degrees(state.base_angle + progress * tuning.roll_sweep);
            if progress >= 1.0 {
                // Cooldown check and coin flip happen exactly once per roll
                // completion. A big rotation rolls straight through with no
                // trailing catch window.
                if state.since_big_rotation() >= tuning.big_rotation_cooldown
                    && rng.random_bool(f64::from(tuning.big_rotation_chance))
                {
                    state.last_big_rotation = state.now;
                    log::debug!("big rotation triggered at t={:.2}s", state.now);
                    state.enter_phase(Phase::BigRotation);
                } else {
                    state.enter_phase(Phase::Pause);
                }
            }
        }

        Phase::Pause => {
            state.current_angle = state.base_angle;
            let elapsed = state.phase_clock.elapsed();
            // Press exactly at the boundary still counts (inclusive window)
            if pressed && elapsed <= tuning.pause_duration {
                state.caught = true;
                state.enter_phase(Phase::CaughtPause);
            } else if elapsed >= tuning.pause_duration {
                state.enter_phase(Phase::Rolling);
            }
        }

        Phase::BigRotation => {
            let progress =
                (state.phase_clock.elapsed() / tuning.big_rotation_duration).min(1.0);
            state.current_angle =
                normalize_degrees(state.base_angle + progress * tuning.big_rotation_sweep);
            if progress >= 1.0 {
                state.enter_phase(Phase::Rolling);
            }
        }

        Phase::CaughtPause => {
            state.current_angle = state.base_angle;
            // No timeout: only a fresh press restarts the cycle
            if pressed {
                state.caught = false;
                state.enter_phase(Phase::Rolling);
            }
        }
    }
}
