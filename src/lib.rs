//! Spin Wheel - rotation and winner-selection core for a "spin the wheel" widget
//!
//! Core modules:
//! - `wheel`: Deterministic wheel core (angular convention, rotation engine, controller)
//! - `renderer`: Segment and pointer geometry driven by the same convention
//! - `platform`: Browser bindings
//! - `settings`: Spin tuning and accessibility preferences
//! - `history`: Recent winners log

pub mod error;
pub mod history;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod wheel;

pub use error::{Result, WheelError};
pub use history::SpinHistory;
pub use settings::WheelSettings;

use glam::Vec2;

/// Wheel configuration constants
pub mod consts {
    /// Full circle in degrees
    pub const FULL_TURN_DEG: f64 = 360.0;

    /// Screen angle of the pointer (degrees clockwise from +x, canvas y-down).
    /// 270° is the visual top of the wheel.
    pub const POINTER_SCREEN_ANGLE_DEG: f64 = 270.0;

    /// Default extra full rotations per spin
    pub const DEFAULT_MIN_FULL_SPINS: u32 = 3;
    pub const DEFAULT_MAX_FULL_SPINS: u32 = 6;

    /// Default spin animation length
    pub const DEFAULT_SPIN_DURATION_SECS: f64 = 5.0;
    /// Spin animation length when reduced motion is requested
    pub const REDUCED_MOTION_SPIN_DURATION_SECS: f64 = 1.5;

    /// Fixed animation timestep (60 Hz)
    pub const ANIM_DT: f64 = 1.0 / 60.0;

    /// Entries a wheel accepts through `SegmentSet`; the angle math itself has no cap
    pub const MAX_SEGMENTS: usize = 1000;
}

/// Normalize an angle in degrees to the half-open range [0°, 360°).
///
/// `rem_euclid` can round up to exactly 360.0 for tiny negative inputs;
/// that case folds back to 0 so the result never leaves the range.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN_DEG);
    if wrapped >= consts::FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Smallest non-negative clockwise distance from `from` to `to`, in [0°, 360°)
#[inline]
pub fn forward_distance(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// Convert polar (r, theta in screen degrees) to cartesian (x, y), y pointing down
#[inline]
pub fn polar_to_cartesian(r: f32, theta_deg: f64) -> Vec2 {
    let theta = theta_deg.to_radians();
    Vec2::new(r * theta.cos() as f32, r * theta.sin() as f32)
}
