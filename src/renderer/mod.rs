//! Wheel geometry
//!
//! Builds triangle lists for the segments, hub and pointer. Placement goes
//! through the wheel's angular convention, the same one winners are read from.

pub mod shapes;
pub mod vertex;

pub use shapes::{WheelMesh, build_wheel, circle, pointer, segment_color, wheel_segments};
pub use vertex::{Vertex, colors};
