//! Frame timing
//!
//! Fixed-timestep accumulator: real elapsed time is banked each frame and
//! spent in whole `SIM_DT` ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

pub struct FrameClock {
    pub fixed_dt: f64,
    pub max_substeps: u32,
    accumulator: f64,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            fixed_dt: SIM_DT as f64,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Bank the time since the previous frame and return how many ticks to run.
    ///
    /// The first frame always runs one tick. Time beyond `max_substeps` ticks
    /// is dropped rather than carried into later frames.
    pub fn begin_frame(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_time.replace(now) else {
            return 1;
        };

        self.accumulator += (now - last).max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_substeps {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        // Spiral-of-death cap
        if self.accumulator >= self.fixed_dt {
            log::warn!(
                "Frame fell behind by {:.1}ms, dropping it",
                self.accumulator * 1000.0
            );
            self.accumulator %= self.fixed_dt;
        }

        steps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleep off whatever is left of a 1/60 s frame budget
#[cfg(not(target_arch = "wasm32"))]
pub fn throttle(frame_start: std::time::Instant) {
    let budget = std::time::Duration::from_secs_f32(SIM_DT);
    if let Some(time_to_wait) = budget.checked_sub(frame_start.elapsed()) {
        std::thread::sleep(time_to_wait);
    }
}
