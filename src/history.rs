//! Recent winners log
//!
//! Persisted to LocalStorage, newest first, bounded length.

use serde::{Deserialize, Serialize};

/// Default number of winners to keep
pub const DEFAULT_HISTORY_LEN: usize = 10;

/// A single completed spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRecord {
    /// Index the wheel showed under the pointer
    pub winner_index: usize,
    /// Entry name at that index when the spin finished
    pub name: String,
    /// Rotation the wheel stopped at
    pub final_rotation: f64,
    /// Unix timestamp (ms) when the wheel stopped
    pub timestamp: f64,
}

/// Recent winners, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinHistory {
    pub entries: Vec<SpinRecord>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_LEN
}

impl Default for SpinHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl SpinHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "spin_wheel_history";

    /// Create an empty history holding at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the bound, dropping the oldest records if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }

    /// Record a finished spin
    pub fn record(
        &mut self,
        winner_index: usize,
        name: impl Into<String>,
        final_rotation: f64,
        timestamp: f64,
    ) {
        self.entries.insert(
            0,
            SpinRecord {
                winner_index,
                name: name.into(),
                final_rotation,
                timestamp,
            },
        );
        self.entries.truncate(self.capacity);
    }

    /// Most recent winner (if any)
    pub fn last(&self) -> Option<&SpinRecord> {
        self.entries.first()
    }

    /// How many remembered spins this name won
    pub fn count_for(&self, name: &str) -> usize {
        self.entries.iter().filter(|r| r.name == name).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Load history from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(capacity: usize) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(mut history) = serde_json::from_str::<SpinHistory>(&json) {
                    history.set_capacity(capacity);
                    log::info!("Loaded {} past spins", history.entries.len());
                    return history;
                }
            }
        }

        log::info!("No spin history found, starting fresh");
        Self::new(capacity)
    }

    /// Save history to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Spin history saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(capacity: usize) -> Self {
        Self::new(capacity)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
