//! Vertex types for 2D wheel rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes for upload to a vertex buffer or canvas image
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for wheel elements
pub mod colors {
    pub const SEGMENT_PALETTE: [[f32; 4]; 6] = [
        [0.93, 0.33, 0.31, 1.0], // Red
        [0.98, 0.69, 0.23, 1.0], // Amber
        [0.40, 0.73, 0.42, 1.0], // Green
        [0.26, 0.65, 0.96, 1.0], // Blue
        [0.67, 0.28, 0.74, 1.0], // Purple
        [0.15, 0.78, 0.85, 1.0], // Cyan
    ];
    pub const WINNER_HIGHLIGHT: [f32; 4] = [1.0, 0.95, 0.55, 1.0];
    pub const POINTER: [f32; 4] = [0.1, 0.1, 0.12, 1.0];
    pub const HUB: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
