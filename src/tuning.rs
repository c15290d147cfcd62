//! Data-driven timing tuning
//!
//! Every duration, sweep, and probability the state machine uses lives here,
//! so balance changes never touch the simulation code. Loaded from JSON when
//! the host provides one, defaults otherwise.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Timing and sweep parameters for the rotation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds for one baseline roll
    pub roll_duration: f32,
    /// Seconds the catch window stays open
    pub pause_duration: f32,
    /// Seconds a big rotation takes
    pub big_rotation_duration: f32,
    /// Minimum seconds between big-rotation entries
    pub big_rotation_cooldown: f32,
    /// Degrees swept by one roll
    pub roll_sweep: f32,
    /// Degrees swept by a big rotation
    pub big_rotation_sweep: f32,
    /// Probability that an eligible roll completion triggers a big rotation
    pub big_rotation_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            roll_duration: consts::ROLL_DURATION,
            pause_duration: consts::PAUSE_DURATION,
            big_rotation_duration: consts::BIG_ROTATION_DURATION,
            big_rotation_cooldown: consts::BIG_ROTATION_COOLDOWN,
            roll_sweep: consts::ROLL_SWEEP,
            big_rotation_sweep: consts::BIG_ROTATION_SWEEP,
            big_rotation_chance: consts::BIG_ROTATION_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, falling back to `None` on malformed or
    /// out-of-range values. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(tuning) if tuning.is_valid() => Some(tuning),
            Ok(tuning) => {
                log::warn!("tuning rejected: {tuning:?}");
                None
            }
            Err(err) => {
                log::warn!("failed to parse tuning: {err}");
                None
            }
        }
    }

    /// Durations must be positive and the trigger chance a probability
    pub fn is_valid(&self) -> bool {
        self.roll_duration > 0.0
            && self.pause_duration > 0.0
            && self.big_rotation_duration > 0.0
            && self.big_rotation_cooldown >= 0.0
            && (0.0..=1.0).contains(&self.big_rotation_chance)
    }
}
