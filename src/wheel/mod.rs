//! Deterministic wheel core
//!
//! Everything that decides where the wheel stops lives here. This module must
//! be pure and deterministic:
//! - One angular convention for drawing, lookup and alignment
//! - Seeded RNG only
//! - Rotation state owned by a `WheelState`, never global
//! - No rendering or platform dependencies

pub mod convention;
pub mod easing;
pub mod rotation;
pub mod segments;
pub mod state;
pub mod tick;

pub use convention::{
    AngularConvention, WHEEL_CONVENTION, alignment_angle, angle_per_segment, segment_at_pointer,
    segment_local_start,
};
pub use easing::{SpinAnimation, ease_out_cubic};
pub use rotation::{SpinTurns, compute_target_rotation, rotation_for_turns, winner_at};
pub use segments::{SegmentSet, SegmentSlice};
pub use state::{RngState, RotationState, SpinPhase, SpinResult, WheelEvent, WheelState};
pub use tick::{TickInput, tick};
