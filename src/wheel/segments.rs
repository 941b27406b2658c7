//! Wheel entries and their angular slices
//!
//! A slice is described in wheel-local degrees (clockwise from the pointer at
//! rotation 0):
//! - start: where the slice begins
//! - span: angular width, identical for every slice

use serde::{Deserialize, Serialize};

use super::convention::{angle_per_segment, segment_local_start};
use crate::consts::MAX_SEGMENTS;
use crate::error::{Result, WheelError};
use crate::normalize_degrees;

/// One equal slice of the wheel in local space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSlice {
    pub index: usize,
    /// Start angle (degrees, [0, 360))
    pub start_deg: f64,
    /// Angular width (degrees)
    pub span_deg: f64,
}

impl SegmentSlice {
    /// Exclusive end angle, may equal 360 for the last slice
    #[inline]
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.span_deg
    }

    /// Local angle of the slice centre
    #[inline]
    pub fn center_deg(&self) -> f64 {
        self.start_deg + self.span_deg / 2.0
    }

    /// Half-open containment: `[start, end)`
    pub fn contains_angle(&self, local_deg: f64) -> bool {
        let theta = normalize_degrees(local_deg);
        theta >= self.start_deg && theta < self.end_deg()
    }
}

/// Ordered wheel entries; insertion order is angular order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentSet {
    entries: Vec<String>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from a list of names, rejecting blank names and oversized wheels
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for entry in entries {
            set.push(entry)?;
        }
        Ok(set)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == name)
    }

    /// Append an entry at the end of the wheel
    pub fn push(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WheelError::BlankEntry);
        }
        if self.entries.len() >= MAX_SEGMENTS {
            return Err(WheelError::TooManyEntries(MAX_SEGMENTS));
        }
        self.entries.push(trimmed.to_string());
        Ok(())
    }

    /// Remove the first entry with this name, returning its former index
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let index = self
            .position(name)
            .ok_or_else(|| WheelError::EntryNotFound(name.to_string()))?;
        self.entries.remove(index);
        Ok(index)
    }

    /// Angle per segment for the current count (never cached)
    pub fn angle_per_segment(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(WheelError::EmptySegmentSet);
        }
        angle_per_segment(self.len())
    }

    /// Local slice occupied by `index`
    pub fn slice(&self, index: usize) -> Result<SegmentSlice> {
        let span_deg = self.angle_per_segment()?;
        Ok(SegmentSlice {
            index,
            start_deg: segment_local_start(index, self.len())?,
            span_deg,
        })
    }

    /// All slices in angular order
    pub fn slices(&self) -> Result<Vec<SegmentSlice>> {
        (0..self.len()).map(|i| self.slice(i)).collect()
    }
}
