//! Angular convention shared by the rotation engine and the renderer
//!
//! Screen angles are degrees measured clockwise from +x (canvas, y down).
//! Wheel-local angles are measured clockwise from the pointer with the wheel
//! at rotation 0. Segment `i` owns the half-open local interval
//! `[i * aps, (i + 1) * aps)`, so rotation 0 puts segment 0's start under
//! the pointer. Positive rotation turns the wheel clockwise on screen.
//!
//! Every placement rule (drawing, pointer lookup, target alignment) goes
//! through [`AngularConvention`]; no other module may carry its own offset.

use crate::consts::{FULL_TURN_DEG, POINTER_SCREEN_ANGLE_DEG};
use crate::error::{Result, WheelError};
use crate::normalize_degrees;

/// The one convention the wheel is drawn and evaluated with
pub const WHEEL_CONVENTION: AngularConvention = AngularConvention {
    pointer_screen_deg: POINTER_SCREEN_ANGLE_DEG,
    align_fraction: 0.5,
};

/// Where the pointer sits and where inside a segment a spin should stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularConvention {
    /// Screen angle of the pointer
    pointer_screen_deg: f64,
    /// Fraction of a segment (0..1) that lands under the pointer; 0.5 = centre
    align_fraction: f64,
}

/// Angular width of one segment, `360 / count`
pub fn angle_per_segment(count: usize) -> Result<f64> {
    check_count(count)?;
    Ok(FULL_TURN_DEG / count as f64)
}

/// Local angle where segment `index` starts, `index * 360 / count`
pub fn segment_local_start(index: usize, count: usize) -> Result<f64> {
    check_count(count)?;
    if index >= count {
        return Err(WheelError::TargetOutOfRange { index, count });
    }
    // Same multiply-then-divide order as the pointer lookup
    Ok(index as f64 * FULL_TURN_DEG / count as f64)
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(WheelError::InvalidSegmentCount(count));
    }
    Ok(())
}

fn check_rotation(rotation: f64) -> Result<()> {
    if !rotation.is_finite() {
        return Err(WheelError::NonFiniteRotation(rotation));
    }
    Ok(())
}

impl AngularConvention {
    #[inline]
    pub fn pointer_screen_deg(&self) -> f64 {
        self.pointer_screen_deg
    }

    /// Wheel-local angle currently under a given screen angle
    #[inline]
    pub fn local_angle_at(&self, screen_deg: f64, rotation: f64) -> f64 {
        normalize_degrees(screen_deg - self.pointer_screen_deg - rotation)
    }

    /// Index of the segment drawn under a screen angle
    pub fn segment_at_screen_angle(
        &self,
        screen_deg: f64,
        rotation: f64,
        count: usize,
    ) -> Result<usize> {
        check_count(count)?;
        check_rotation(rotation)?;
        let local = self.local_angle_at(screen_deg, rotation);
        // Multiply before dividing so exact boundaries (i * 360 / n) stay exact
        let index = (local * count as f64 / FULL_TURN_DEG).floor() as usize;
        Ok(index.min(count - 1))
    }

    /// Index of the segment under the pointer
    pub fn segment_at_pointer(&self, rotation: f64, count: usize) -> Result<usize> {
        self.segment_at_screen_angle(self.pointer_screen_deg, rotation, count)
    }

    /// Rotation (in [0°, 360°)) that places `index` under the pointer.
    ///
    /// Exact inverse of [`Self::segment_at_pointer`]: the pointer lands at
    /// `align_fraction` of the way through the segment.
    pub fn alignment_angle(&self, index: usize, count: usize) -> Result<f64> {
        check_count(count)?;
        if index >= count {
            return Err(WheelError::TargetOutOfRange { index, count });
        }
        let local = (index as f64 + self.align_fraction) * FULL_TURN_DEG / count as f64;
        Ok(normalize_degrees(-local))
    }

    /// Screen angle at which segment `index` starts being drawn
    pub fn segment_screen_start(&self, index: usize, rotation: f64, count: usize) -> Result<f64> {
        let start = segment_local_start(index, count)?;
        Ok(normalize_degrees(self.pointer_screen_deg + rotation + start))
    }
}

/// Segment under the pointer for the wheel convention
#[inline]
pub fn segment_at_pointer(rotation: f64, count: usize) -> Result<usize> {
    WHEEL_CONVENTION.segment_at_pointer(rotation, count)
}

/// Alignment angle for the wheel convention
#[inline]
pub fn alignment_angle(index: usize, count: usize) -> Result<f64> {
    WHEEL_CONVENTION.alignment_angle(index, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment_always_zero() {
        for rotation in [0.0, 1.0, 180.0, 359.999, 360.0, -1.0, -720.5, 1e9, -1e9] {
            assert_eq!(segment_at_pointer(rotation, 1).unwrap(), 0);
        }
    }

    #[test]
    fn test_rotation_zero_is_segment_zero() {
        for count in 1..=12 {
            assert_eq!(segment_at_pointer(0.0, count).unwrap(), 0);
        }
    }

    #[test]
    fn test_clockwise_rotation_brings_last_segment() {
        // Turning the wheel clockwise slides the previous segment under the pointer
        assert_eq!(segment_at_pointer(10.0, 4).unwrap(), 3);
        assert_eq!(segment_at_pointer(100.0, 4).unwrap(), 2);
        assert_eq!(segment_at_pointer(-10.0, 4).unwrap(), 0);
        assert_eq!(segment_at_pointer(-100.0, 4).unwrap(), 1);
    }

    #[test]
    fn test_boundaries_are_half_open() {
        // Local angle 90° with 4 segments is the start of segment 1
        assert_eq!(segment_at_pointer(-90.0, 4).unwrap(), 1);
        assert_eq!(segment_at_pointer(270.0, 4).unwrap(), 1);
        assert_eq!(segment_at_pointer(-180.0, 4).unwrap(), 2);
        assert_eq!(segment_at_pointer(-270.0, 4).unwrap(), 3);
        assert_eq!(segment_at_pointer(-360.0, 4).unwrap(), 0);
    }

    #[test]
    fn test_boundary_resolution_is_stable() {
        for count in 1..=50 {
            let aps = angle_per_segment(count).unwrap();
            for i in 0..count {
                let rotation = -(i as f64) * aps;
                let first = segment_at_pointer(rotation, count).unwrap();
                for _ in 0..5 {
                    assert_eq!(segment_at_pointer(rotation, count).unwrap(), first);
                }
            }
        }
    }

    #[test]
    fn test_alignment_is_inverse() {
        for count in 1..=100 {
            for index in 0..count {
                let angle = alignment_angle(index, count).unwrap();
                assert!((0.0..360.0).contains(&angle));
                assert_eq!(segment_at_pointer(angle, count).unwrap(), index);
            }
        }
    }

    #[test]
    fn test_alignment_lands_on_centre() {
        // 4 segments: segment 2 spans local [180, 270), centre 225
        let angle = alignment_angle(2, 4).unwrap();
        assert!((angle - 135.0).abs() < 1e-9);
        let local = WHEEL_CONVENTION.local_angle_at(POINTER_SCREEN_ANGLE_DEG, angle);
        assert!((local - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_screen_start_matches_pointer_lookup() {
        // The segment drawn starting just before the pointer is the one reported
        let count = 7;
        for rotation in [0.0, 13.0, 200.5, -77.0, 1234.5] {
            let at_pointer = segment_at_pointer(rotation, count).unwrap();
            let start = WHEEL_CONVENTION
                .segment_screen_start(at_pointer, rotation, count)
                .unwrap();
            let into = normalize_degrees(POINTER_SCREEN_ANGLE_DEG - start);
            assert!(into < angle_per_segment(count).unwrap());
        }
    }

    #[test]
    fn test_large_wheels_stay_inverse() {
        for count in [1001, 2048, 5000, 10_000] {
            for index in [0, 1, count / 3, count / 2, count - 2, count - 1] {
                let angle = alignment_angle(index, count).unwrap();
                assert_eq!(segment_at_pointer(angle, count).unwrap(), index);
            }
        }
        assert_eq!(segment_at_pointer(0.0, 1001).unwrap(), 0);
    }

    #[test]
    fn test_local_start_matches_lookup() {
        for count in [1, 3, 7, 360, 1500] {
            for index in 0..count {
                let start = segment_local_start(index, count).unwrap();
                assert_eq!(segment_at_pointer(-start, count).unwrap(), index);
            }
        }
        assert!(matches!(
            segment_local_start(3, 3),
            Err(WheelError::TargetOutOfRange { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            segment_at_pointer(0.0, 0),
            Err(WheelError::InvalidSegmentCount(0))
        ));
        assert!(matches!(
            alignment_angle(4, 4),
            Err(WheelError::TargetOutOfRange { index: 4, count: 4 })
        ));
        assert!(matches!(
            segment_at_pointer(f64::NAN, 4),
            Err(WheelError::NonFiniteRotation(_))
        ));
    }
}
