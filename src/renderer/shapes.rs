//! Shape generation for wheel primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::error::{Result, WheelError};
use crate::polar_to_cartesian;
use crate::wheel::{SpinPhase, WHEEL_CONVENTION, WheelState, angle_per_segment};

/// Triangles per full circle for round shapes
const CIRCLE_STEPS: u32 = 96;

/// Hub radius as a fraction of the wheel radius
const HUB_FRACTION: f32 = 0.12;

/// Pointer size as a fraction of the wheel radius
const POINTER_FRACTION: f32 = 0.12;

/// Everything needed to draw one frame of a wheel
#[derive(Debug, Clone, Default)]
pub struct WheelMesh {
    pub segments: Vec<Vertex>,
    pub hub: Vec<Vertex>,
    pub pointer: Vec<Vertex>,
}

impl WheelMesh {
    /// All triangles in draw order
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out = Vec::with_capacity(self.segments.len() + self.hub.len() + self.pointer.len());
        out.extend_from_slice(&self.segments);
        out.extend_from_slice(&self.hub);
        out.extend_from_slice(&self.pointer);
        out
    }
}

/// Palette color for a segment; the last segment never repeats the first
pub fn segment_color(index: usize, count: usize) -> [f32; 4] {
    let n = colors::SEGMENT_PALETTE.len();
    let mut slot = index % n;
    if count > 1 && index == count - 1 && slot == 0 {
        slot = 1;
    }
    colors::SEGMENT_PALETTE[slot]
}

/// Generate fan triangles for every segment at `rotation`
pub fn wheel_segments(
    count: usize,
    rotation: f64,
    radius: f32,
    highlight: Option<usize>,
    steps_per_segment: u32,
) -> Result<Vec<Vertex>> {
    let span = angle_per_segment(count)?;
    if let Some(index) = highlight {
        if index >= count {
            return Err(WheelError::TargetOutOfRange { index, count });
        }
    }
    let steps = steps_per_segment.max(1);
    let mut vertices = Vec::with_capacity(count * steps as usize * 3);

    for i in 0..count {
        let start = WHEEL_CONVENTION.segment_screen_start(i, rotation, count)?;
        let color = if highlight == Some(i) {
            colors::WINNER_HIGHLIGHT
        } else {
            segment_color(i, count)
        };

        for s in 0..steps {
            let theta1 = start + span * s as f64 / steps as f64;
            let theta2 = start + span * (s + 1) as f64 / steps as f64;
            let p1 = polar_to_cartesian(radius, theta1);
            let p2 = polar_to_cartesian(radius, theta2);

            vertices.push(Vertex::new(0.0, 0.0, color));
            vertices.push(Vertex::new(p1.x, p1.y, color));
            vertices.push(Vertex::new(p2.x, p2.y, color));
        }
    }

    Ok(vertices)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], steps: u32) -> Vec<Vertex> {
    let steps = steps.max(3);
    let mut vertices = Vec::with_capacity((steps * 3) as usize);

    for i in 0..steps {
        let theta1 = 360.0 * i as f64 / steps as f64;
        let theta2 = 360.0 * (i + 1) as f64 / steps as f64;
        let p1 = center + polar_to_cartesian(radius, theta1);
        let p2 = center + polar_to_cartesian(radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Pointer triangle at the rim, tip pointing at the wheel centre
pub fn pointer(radius: f32, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let angle = WHEEL_CONVENTION.pointer_screen_deg();
    let dir = polar_to_cartesian(1.0, angle);
    let perp = Vec2::new(-dir.y, dir.x);

    let tip = dir * (radius - size * 0.4);
    let base = dir * (radius + size * 0.6);
    let left = base + perp * size * 0.5;
    let right = base - perp * size * 0.5;

    vec![
        Vertex::new(tip.x, tip.y, color),
        Vertex::new(left.x, left.y, color),
        Vertex::new(right.x, right.y, color),
    ]
}

/// Build the mesh for a wheel as it should appear this frame
pub fn build_wheel(state: &WheelState, radius: f32) -> Result<WheelMesh> {
    let count = state.segments().len();
    if count == 0 {
        return Err(WheelError::EmptySegmentSet);
    }

    let has_spun = state.rotation().accumulated() != 0.0;
    let highlight = match state.phase() {
        SpinPhase::Idle if state.settings().highlight_winner && has_spun => {
            Some(state.winner_index()?)
        }
        _ => None,
    };

    let steps_per_segment = (CIRCLE_STEPS as usize / count).max(1) as u32;
    let rotation = state.frame_rotation();
    Ok(WheelMesh {
        segments: wheel_segments(count, rotation, radius, highlight, steps_per_segment)?,
        hub: circle(Vec2::ZERO, radius * HUB_FRACTION, colors::HUB, CIRCLE_STEPS / 2),
        pointer: pointer(radius, radius * POINTER_FRACTION, colors::POINTER),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::POINTER_SCREEN_ANGLE_DEG;
    use crate::settings::WheelSettings;
    use crate::wheel::segment_at_pointer;

    fn sign(p: Vec2, a: Vec2, b: Vec2) -> f32 {
        (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
    }

    fn in_triangle(p: Vec2, tri: &[Vertex]) -> bool {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec2::from(v.position));
        let d1 = sign(p, a, b);
        let d2 = sign(p, b, c);
        let d3 = sign(p, c, a);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// Which drawn segment covers the point just inside the rim under the pointer
    fn drawn_segment_at_pointer(vertices: &[Vertex], steps: usize) -> Option<usize> {
        let probe = polar_to_cartesian(90.0, POINTER_SCREEN_ANGLE_DEG);
        vertices
            .chunks(3)
            .position(|tri| in_triangle(probe, tri))
            .map(|t| t / steps)
    }

    #[test]
    fn test_vertex_count() {
        let v = wheel_segments(5, 0.0, 100.0, None, 4).unwrap();
        assert_eq!(v.len(), 5 * 4 * 3);
        assert!(wheel_segments(0, 0.0, 100.0, None, 4).is_err());
        assert!(wheel_segments(3, 0.0, 100.0, Some(3), 4).is_err());
    }

    #[test]
    fn test_drawn_segment_matches_lookup() {
        let steps = 8;
        for count in [2, 3, 5, 8, 13] {
            let aps = 360.0 / count as f64;
            for k in 0..20 {
                // Stay clear of exact boundaries for the geometric probe
                let rotation = k as f64 * 37.0 + aps * 0.3 - 200.0;
                let vertices = wheel_segments(count, rotation, 100.0, None, steps).unwrap();
                assert_eq!(
                    drawn_segment_at_pointer(&vertices, steps as usize),
                    Some(segment_at_pointer(rotation, count).unwrap()),
                    "count {count} rotation {rotation}"
                );
            }
        }
    }

    #[test]
    fn test_segment_colors_no_wrap_repeat() {
        for count in 2..20 {
            assert_ne!(segment_color(0, count), segment_color(count - 1, count));
            for i in 0..count - 1 {
                assert_ne!(segment_color(i, count), segment_color(i + 1, count));
            }
        }
    }

    #[test]
    fn test_pointer_points_down_from_top() {
        let tri = pointer(100.0, 10.0, colors::POINTER);
        // Tip is below the base in y-down screen space
        assert!(tri[0].position[1] > tri[1].position[1]);
        assert!(tri[0].position[0].abs() < 1e-3);
    }

    #[test]
    fn test_build_wheel_highlights_winner() {
        let entries = ["a", "b", "c", "d", "e"];
        let mut state = WheelState::with_entries(entries, WheelSettings::default(), 3).unwrap();
        let mesh = build_wheel(&state, 100.0).unwrap();
        assert!(!mesh.segments.iter().any(|v| v.color == colors::WINNER_HIGHLIGHT));

        state.begin_spin(3).unwrap();
        state.complete_spin().unwrap();
        let mesh = build_wheel(&state, 100.0).unwrap();
        let steps = 96 / 5;
        let first_highlight = mesh
            .segments
            .iter()
            .position(|v| v.color == colors::WINNER_HIGHLIGHT)
            .unwrap();
        assert_eq!(first_highlight / (steps * 3), 3);
        assert_eq!(drawn_segment_at_pointer(&mesh.segments, steps), Some(3));
        assert_eq!(mesh.vertices().len(), mesh.segments.len() + mesh.hub.len() + 3);
    }

    #[test]
    fn test_build_empty_wheel() {
        let state = WheelState::new(1);
        assert!(matches!(build_wheel(&state, 100.0), Err(WheelError::EmptySegmentSet)));
    }
}
