//! Wheel state and controller
//!
//! One `WheelState` per wheel on screen. It owns the rotation, the entries
//! and the seeded RNG; nothing about a wheel lives in globals.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::convention::segment_at_pointer;
use super::easing::SpinAnimation;
use super::rotation::{SpinTurns, compute_target_rotation};
use super::segments::SegmentSet;
use crate::consts::FULL_TURN_DEG;
use crate::error::{Result, WheelError};
use crate::normalize_degrees;
use crate::settings::WheelSettings;

/// Accumulated wheel rotation
///
/// `current` is what future spins build on. Whole turns folded out of it are
/// counted in `folded_turns`, so `accumulated()` is the lifetime total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationState {
    current: f64,
    folded_turns: i64,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known rotation (restored widget, tests)
    pub fn with_rotation(rotation: f64) -> Result<Self> {
        if !rotation.is_finite() {
            return Err(WheelError::NonFiniteRotation(rotation));
        }
        Ok(Self {
            current: rotation,
            folded_turns: 0,
        })
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn folded_turns(&self) -> i64 {
        self.folded_turns
    }

    /// Never-reset total rotation over the wheel's lifetime
    pub fn accumulated(&self) -> f64 {
        self.folded_turns as f64 * FULL_TURN_DEG + self.current
    }

    /// Commit a finished spin's final rotation, folding whole turns out once
    /// `current` passes `threshold_deg`. The pointer segment is unchanged by
    /// the fold because only `current mod 360` matters.
    pub fn commit(&mut self, final_rotation: f64, threshold_deg: f64) {
        self.current = final_rotation;
        if self.current.abs() >= threshold_deg {
            self.renormalize();
        }
    }

    /// Fold `current` into [0, 360)
    pub fn renormalize(&mut self) {
        let normalized = normalize_degrees(self.current);
        let whole = ((self.current - normalized) / FULL_TURN_DEG).round() as i64;
        self.folded_turns += whole;
        self.current = normalized;
    }
}

/// Outcome of starting a spin, handed to the animation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Index the engine aimed for
    pub target_index: usize,
    /// Rotation the animation starts from
    pub start_rotation: f64,
    /// Rotation the animation must end on
    pub final_rotation: f64,
    /// Extra full turns included in the spin
    pub full_turns: u32,
}

/// Current phase of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpinPhase {
    /// At rest, ready for a spin
    Idle,
    /// Animating toward `result.final_rotation`
    Spinning {
        result: SpinResult,
        animation: SpinAnimation,
    },
}

/// Events for the UI layer (drained each frame)
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    SpinStarted(SpinResult),
    SpinFinished { winner_index: usize, name: String },
    SpinCancelled,
    EntriesChanged { count: usize },
}

/// RNG seed wrapper for reproducible wheels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// A single wheel: entries, rotation and the spin in flight
/// Events kept for a caller that never drains them
const MAX_PENDING_EVENTS: usize = 64;

#[derive(Debug, Clone)]
pub struct WheelState {
    /// Seed the wheel was created with
    pub rng_state: RngState,
    segments: SegmentSet,
    rotation: RotationState,
    phase: SpinPhase,
    settings: WheelSettings,
    turns: SpinTurns,
    rng: Pcg32,
    events: Vec<WheelEvent>,
}

impl WheelState {
    /// Create an empty wheel with default settings
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            rng: rng_state.to_rng(),
            rng_state,
            segments: SegmentSet::new(),
            rotation: RotationState::new(),
            phase: SpinPhase::Idle,
            settings: WheelSettings::default(),
            turns: SpinTurns::default(),
            events: Vec::new(),
        }
    }

    /// Create a wheel with entries and settings
    pub fn with_entries<I, S>(entries: I, settings: WheelSettings, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new(seed);
        state.apply_settings(settings)?;
        state.segments = SegmentSet::from_entries(entries)?;
        Ok(state)
    }

    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn settings(&self) -> &WheelSettings {
        &self.settings
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Replace settings; takes effect from the next spin
    pub fn apply_settings(&mut self, settings: WheelSettings) -> Result<()> {
        settings.validate()?;
        self.turns = settings.spin_turns()?;
        self.settings = settings;
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_spinning() {
            return Err(WheelError::SegmentsLocked);
        }
        Ok(())
    }

    fn entries_changed(&mut self) {
        self.push_event(WheelEvent::EntriesChanged {
            count: self.segments.len(),
        });
    }

    pub fn add_entry(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_idle()?;
        self.segments.push(name)?;
        self.entries_changed();
        Ok(())
    }

    pub fn remove_entry(&mut self, name: &str) -> Result<usize> {
        self.ensure_idle()?;
        let index = self.segments.remove(name)?;
        self.entries_changed();
        Ok(index)
    }

    pub fn set_entries<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_idle()?;
        self.segments = SegmentSet::from_entries(entries)?;
        self.entries_changed();
        Ok(())
    }

    /// Pick a uniformly random target from the seeded RNG
    pub fn pick_target(&mut self) -> Result<usize> {
        if self.segments.is_empty() {
            return Err(WheelError::EmptySegmentSet);
        }
        Ok(self.rng.random_range(0..self.segments.len()))
    }

    /// Start a spin that will land on `target`
    pub fn begin_spin(&mut self, target: usize) -> Result<SpinResult> {
        if self.is_spinning() {
            return Err(WheelError::SpinInProgress);
        }
        let count = self.segments.len();
        if count == 0 {
            return Err(WheelError::EmptySegmentSet);
        }

        let start = self.rotation.current();
        let end = compute_target_rotation(start, count, target, self.turns, &mut self.rng)?;
        let result = SpinResult {
            target_index: target,
            start_rotation: start,
            final_rotation: end,
            full_turns: ((end - start) / FULL_TURN_DEG).floor() as u32,
        };
        self.phase = SpinPhase::Spinning {
            result,
            animation: SpinAnimation::new(start, end, self.settings.effective_duration_secs()),
        };
        self.push_event(WheelEvent::SpinStarted(result));

        log::info!(
            "Spin started: target {} ({}) of {}, {:.2} -> {:.2}",
            target,
            self.segments.get(target).unwrap_or("?"),
            count,
            start,
            end
        );
        Ok(result)
    }

    /// Start a spin toward a randomly chosen entry
    pub fn begin_random_spin(&mut self) -> Result<SpinResult> {
        if self.is_spinning() {
            return Err(WheelError::SpinInProgress);
        }
        let target = self.pick_target()?;
        self.begin_spin(target)
    }

    /// Advance the in-flight animation; true once it has reached its end
    pub fn advance_animation(&mut self, dt: f64) -> bool {
        match &mut self.phase {
            SpinPhase::Spinning { animation, .. } => {
                animation.advance(dt);
                animation.is_finished()
            }
            SpinPhase::Idle => false,
        }
    }

    /// Finish the spin: commit its rotation and report the index now under
    /// the pointer. That recomputed index is the winner.
    pub fn complete_spin(&mut self) -> Result<usize> {
        let result = match self.phase {
            SpinPhase::Spinning { result, .. } => result,
            SpinPhase::Idle => return Err(WheelError::NoSpinInProgress),
        };

        let count = self.segments.len();
        let winner = segment_at_pointer(result.final_rotation, count)?;
        if winner != result.target_index {
            log::warn!(
                "Wheel stopped on {} but aimed for {} (rotation {:.6}, {} segments)",
                winner,
                result.target_index,
                result.final_rotation,
                count
            );
        }

        self.rotation
            .commit(result.final_rotation, self.settings.renormalize_threshold_deg());
        self.phase = SpinPhase::Idle;

        let name = self.segments.get(winner).unwrap_or_default().to_string();
        log::info!("Spin finished: winner {} ({})", winner, name);
        self.push_event(WheelEvent::SpinFinished {
            winner_index: winner,
            name,
        });
        Ok(winner)
    }

    /// Abandon the in-flight spin; the rotation stays where it was
    pub fn cancel_spin(&mut self) -> Result<()> {
        if !self.is_spinning() {
            return Err(WheelError::NoSpinInProgress);
        }
        self.phase = SpinPhase::Idle;
        self.push_event(WheelEvent::SpinCancelled);
        log::info!("Spin cancelled");
        Ok(())
    }

    /// Index currently under the pointer
    pub fn winner_index(&self) -> Result<usize> {
        if self.segments.is_empty() {
            return Err(WheelError::EmptySegmentSet);
        }
        segment_at_pointer(self.rotation.current(), self.segments.len())
    }

    /// Entry currently under the pointer
    pub fn winner_name(&self) -> Option<&str> {
        self.winner_index()
            .ok()
            .and_then(|i| self.segments.get(i))
    }

    /// Rotation in the wheel's working frame for this frame
    pub fn frame_rotation(&self) -> f64 {
        match &self.phase {
            SpinPhase::Spinning { animation, .. } => animation.sample(),
            SpinPhase::Idle => self.rotation.current(),
        }
    }

    /// Rotation to draw this frame, increasing across spins even after the
    /// stored value has been folded
    pub fn display_rotation(&self) -> f64 {
        self.rotation.folded_turns() as f64 * FULL_TURN_DEG + self.frame_rotation()
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue an event, dropping the oldest once the queue is full
    fn push_event(&mut self, event: WheelEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let dropped = self.events.remove(0);
            log::debug!("Event queue full, dropping {:?}", dropped);
        }
        self.events.push(event);
    }
}
