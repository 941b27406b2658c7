//! Rotation engine
//!
//! Turns a chosen winner index into the next absolute rotation. The result is
//! always strictly ahead of the current rotation and, fed back through
//! [`segment_at_pointer`](super::convention::segment_at_pointer), yields the
//! chosen index.

use rand::Rng;

use super::convention::{WHEEL_CONVENTION, alignment_angle};
use crate::consts::{DEFAULT_MAX_FULL_SPINS, DEFAULT_MIN_FULL_SPINS, FULL_TURN_DEG};
use crate::error::{Result, WheelError};
use crate::{forward_distance, normalize_degrees};

/// Inclusive range of extra full turns added to a spin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTurns {
    min: u32,
    max: u32,
}

impl Default for SpinTurns {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_FULL_SPINS,
            max: DEFAULT_MAX_FULL_SPINS,
        }
    }
}

impl SpinTurns {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(WheelError::InvalidSpinRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Always the same number of turns (tests, reduced motion)
    pub fn fixed(turns: u32) -> Self {
        Self {
            min: turns,
            max: turns,
        }
    }

    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Draw a turn count from the injected generator
    pub fn choose<R: Rng>(&self, rng: &mut R) -> u32 {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

/// Rotation that lands `target` under the pointer after exactly `full_turns`
/// extra turns.
///
/// A zero-turn spin that is already aligned still advances one full turn so
/// the wheel never stands still.
pub fn rotation_for_turns(
    current: f64,
    count: usize,
    target: usize,
    full_turns: u32,
) -> Result<f64> {
    if !current.is_finite() {
        return Err(WheelError::NonFiniteRotation(current));
    }
    let alignment = alignment_angle(target, count)?;
    let current_normalized = normalize_degrees(current);
    let delta = forward_distance(current_normalized, alignment);

    let mut turns = full_turns as f64;
    if full_turns == 0 && delta == 0.0 {
        turns = 1.0;
    }

    let next = current + FULL_TURN_DEG * turns + delta;
    log::debug!(
        "Spin to {}/{}: current={:.3} (norm {:.3}) align={:.3} delta={:.3} turns={} -> {:.3}",
        target,
        count,
        current,
        current_normalized,
        alignment,
        delta,
        turns,
        next
    );
    Ok(next)
}

/// Next absolute rotation for a spin to `target`, with the number of extra
/// turns drawn from `turns` using `rng`.
pub fn compute_target_rotation<R: Rng>(
    current: f64,
    count: usize,
    target: usize,
    turns: SpinTurns,
    rng: &mut R,
) -> Result<f64> {
    // Validate before drawing so a bad call never consumes randomness
    alignment_angle(target, count)?;
    let full_turns = turns.choose(rng);
    rotation_for_turns(current, count, target, full_turns)
}

/// Index the wheel will show once it stops at `rotation`
#[inline]
pub fn winner_at(rotation: f64, count: usize) -> Result<usize> {
    WHEEL_CONVENTION.segment_at_pointer(rotation, count)
}
