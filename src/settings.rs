//! Wheel settings and preferences
//!
//! Persisted in LocalStorage, separate from the winners history.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, WheelError};
use crate::wheel::SpinTurns;

/// Wheel settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    // === Spin ===
    /// Fewest extra full turns per spin
    pub min_full_spins: u32,
    /// Most extra full turns per spin
    pub max_full_spins: u32,
    /// Spin animation length (seconds)
    pub spin_duration_secs: f64,
    /// Fold the stored rotation back into [0, 360) once it passes this many
    /// turns (0 = after every spin)
    pub renormalize_after_turns: u32,

    // === Display ===
    /// Highlight the segment under the pointer once the wheel stops
    pub highlight_winner: bool,
    /// Number of recent winners to remember
    pub history_len: usize,

    // === Accessibility ===
    /// Reduced motion (short spin, fewest turns)
    pub reduced_motion: bool,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            min_full_spins: DEFAULT_MIN_FULL_SPINS,
            max_full_spins: DEFAULT_MAX_FULL_SPINS,
            spin_duration_secs: DEFAULT_SPIN_DURATION_SECS,
            renormalize_after_turns: 0,

            highlight_winner: true,
            history_len: 10,

            reduced_motion: false,
        }
    }
}

impl WheelSettings {
    /// Reject values the wheel cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.min_full_spins > self.max_full_spins {
            return Err(WheelError::InvalidSpinRange {
                min: self.min_full_spins,
                max: self.max_full_spins,
            });
        }
        if !self.spin_duration_secs.is_finite() || self.spin_duration_secs < 0.0 {
            return Err(WheelError::InvalidSettings(format!(
                "spin duration must be a non-negative number, got {}",
                self.spin_duration_secs
            )));
        }
        if self.history_len == 0 {
            return Err(WheelError::InvalidSettings(
                "history length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective turn range (respects reduced_motion)
    pub fn spin_turns(&self) -> Result<SpinTurns> {
        if self.reduced_motion {
            return Ok(SpinTurns::fixed(self.min_full_spins));
        }
        SpinTurns::new(self.min_full_spins, self.max_full_spins)
    }

    /// Effective animation length (respects reduced_motion)
    pub fn effective_duration_secs(&self) -> f64 {
        if self.reduced_motion {
            self.spin_duration_secs.min(REDUCED_MOTION_SPIN_DURATION_SECS)
        } else {
            self.spin_duration_secs
        }
    }

    /// Stored rotation above which it gets folded back into one turn
    pub fn renormalize_threshold_deg(&self) -> f64 {
        self.renormalize_after_turns as f64 * FULL_TURN_DEG
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "spin_wheel_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = WheelSettings::default();
        settings.validate().unwrap();
        let turns = settings.spin_turns().unwrap();
        assert_eq!((turns.min(), turns.max()), (3, 6));
    }

    #[test]
    fn test_invalid_spin_range() {
        let settings = WheelSettings {
            min_full_spins: 8,
            max_full_spins: 2,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(WheelError::InvalidSpinRange { min: 8, max: 2 })
        ));
    }

    #[test]
    fn test_reduced_motion() {
        let settings = WheelSettings {
            reduced_motion: true,
            ..Default::default()
        };
        assert_eq!(settings.spin_turns().unwrap(), SpinTurns::fixed(3));
        assert_eq!(
            settings.effective_duration_secs(),
            REDUCED_MOTION_SPIN_DURATION_SECS
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = WheelSettings::from_json(r#"{"max_full_spins": 9}"#).unwrap();
        assert_eq!(settings.max_full_spins, 9);
        assert_eq!(settings.min_full_spins, DEFAULT_MIN_FULL_SPINS);
        assert!(settings.highlight_winner);
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(
            WheelSettings::from_json("{not json"),
            Err(WheelError::Serialization(_))
        ));
        assert!(WheelSettings::from_json(r#"{"spin_duration_secs": -1.0}"#).is_err());
    }
}
