//! Spin Catch entry point
//!
//! Headless demo host: a real-time frame loop drives the state machine and a
//! scripted player presses the catch key during pause windows. A graphical
//! host would call the same `advance`/projection surface each frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use spin_catch::{CatchMachine, Phase};

/// Demo frame cadence (the sim itself is frame-rate independent)
const FRAME_DT: f32 = 1.0 / 60.0;
/// How long the demo plays before exiting
const DEMO_SECONDS: f32 = 30.0;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Spin Catch demo starting (seed {seed})");

    let mut machine = CatchMachine::new(seed);
    let mut last_phase = machine.phase();
    let mut catches = 0u32;

    let frames = (DEMO_SECONDS / FRAME_DT) as u32;
    let mut frame_start = Instant::now();

    for _ in 0..frames {
        // Scripted player: press on the first tick of every pause window,
        // release afterwards, and tap again half a second after a catch.
        let press = match machine.phase() {
            Phase::Pause => machine.time_remaining_in_phase() > 0.0,
            Phase::CaughtPause => machine.state().phase_clock.elapsed() > 0.5,
            _ => false,
        };

        machine.advance(FRAME_DT, press);

        let phase = machine.phase();
        if phase != last_phase {
            if phase == Phase::CaughtPause {
                catches += 1;
            }
            log::info!(
                "{} -> {} | angle {:5.1} deg | cooldown {:.1}s",
                last_phase.label(),
                phase.label(),
                machine.angle(),
                machine.cooldown_remaining(),
            );
            last_phase = phase;
        }

        // Hold the frame cadence without letting render debt accumulate
        let elapsed = frame_start.elapsed();
        let budget = Duration::from_secs_f32(FRAME_DT);
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        frame_start = Instant::now();
    }

    log::info!("demo finished: {catches} catches in {DEMO_SECONDS}s");
}
