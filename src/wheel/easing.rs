//! Spin animation sampling
//!
//! The animation only interpolates between two rotations the engine already
//! fixed; it never decides where the wheel stops.

use serde::{Deserialize, Serialize};

/// Cubic ease-out: fast start, long settle
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolation from a start rotation to a final rotation over time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinAnimation {
    pub start: f64,
    pub end: f64,
    pub duration_secs: f64,
    pub elapsed_secs: f64,
}

impl SpinAnimation {
    pub fn new(start: f64, end: f64, duration_secs: f64) -> Self {
        Self {
            start,
            end,
            duration_secs: duration_secs.max(0.0),
            elapsed_secs: 0.0,
        }
    }

    /// Linear time progress in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed_secs += dt;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Rotation to draw right now; exactly `end` once finished
    pub fn sample(&self) -> f64 {
        if self.is_finished() {
            return self.end;
        }
        self.start + (self.end - self.start) * ease_out_cubic(self.progress())
    }
}
