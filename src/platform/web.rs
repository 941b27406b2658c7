//! JavaScript bindings
//!
//! The page owns the canvas and the animation frame loop; it calls `tick`
//! each frame and draws `vertices()`. Rotation and winners come from here.

use wasm_bindgen::prelude::*;

use crate::history::SpinHistory;
use crate::renderer::{Vertex, build_wheel};
use crate::settings::WheelSettings;
use crate::wheel::{TickInput, WheelEvent, WheelState, tick};

fn to_js(err: crate::WheelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the console logger and panic hook (idempotent)
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Spin wheel starting...");
    }
}

/// One wheel on the page
#[wasm_bindgen]
pub struct WheelHandle {
    state: WheelState,
    history: SpinHistory,
    input: TickInput,
    radius: f32,
}

#[wasm_bindgen]
impl WheelHandle {
    /// Create a wheel seeded from the clock with stored settings and history
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f32) -> Result<WheelHandle, JsValue> {
        let settings = WheelSettings::load();
        let history = SpinHistory::load(settings.history_len);
        let seed = crate::platform::now_ms() as u64;
        let state =
            WheelState::with_entries(Vec::<String>::new(), settings, seed).map_err(to_js)?;
        log::info!("Wheel created with seed: {}", seed);
        Ok(Self {
            state,
            history,
            input: TickInput::default(),
            radius,
        })
    }

    #[wasm_bindgen(js_name = setEntries)]
    pub fn set_entries(&mut self, names: Vec<String>) -> Result<(), JsValue> {
        self.state.set_entries(names).map_err(to_js)
    }

    #[wasm_bindgen(js_name = addEntry)]
    pub fn add_entry(&mut self, name: String) -> Result<(), JsValue> {
        self.state.add_entry(name).map_err(to_js)
    }

    #[wasm_bindgen(js_name = removeEntry)]
    pub fn remove_entry(&mut self, name: &str) -> Result<usize, JsValue> {
        self.state.remove_entry(name).map_err(to_js)
    }

    /// Queue a spin toward a random entry
    pub fn spin(&mut self) {
        self.input.spin = true;
    }

    /// Queue a spin toward a specific entry
    #[wasm_bindgen(js_name = spinTo)]
    pub fn spin_to(&mut self, index: usize) {
        self.input.spin_to = Some(index);
    }

    pub fn cancel(&mut self) {
        self.input.cancel = true;
    }

    #[wasm_bindgen(js_name = isSpinning)]
    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Advance by `dt` seconds; returns the winner index when a spin ends
    pub fn tick(&mut self, dt: f64) -> Result<Option<usize>, JsValue> {
        let input = std::mem::take(&mut self.input);
        let winner = tick(&mut self.state, &input, dt).map_err(to_js)?;

        for event in self.state.drain_events() {
            if let WheelEvent::SpinFinished { winner_index, name } = event {
                self.history.record(
                    winner_index,
                    name,
                    self.state.rotation().accumulated(),
                    crate::platform::now_ms(),
                );
                self.history.save();
            }
        }
        Ok(winner)
    }

    /// Rotation to draw this frame (degrees, clockwise)
    #[wasm_bindgen(js_name = displayRotation)]
    pub fn display_rotation(&self) -> f64 {
        self.state.display_rotation()
    }

    #[wasm_bindgen(js_name = winnerName)]
    pub fn winner_name(&self) -> Option<String> {
        self.state.winner_name().map(str::to_string)
    }

    #[wasm_bindgen(js_name = lastWinner)]
    pub fn last_winner(&self) -> Option<String> {
        self.history.last().map(|r| r.name.clone())
    }

    /// Interleaved `[x, y, r, g, b, a]` floats for the current frame
    pub fn vertices(&self) -> Result<Vec<f32>, JsValue> {
        let mesh = build_wheel(&self.state, self.radius).map_err(to_js)?;
        let vertices: Vec<Vertex> = mesh.vertices();
        Ok(bytemuck::cast_slice::<Vertex, f32>(&vertices).to_vec())
    }

    /// Apply settings JSON and persist them
    #[wasm_bindgen(js_name = applySettings)]
    pub fn apply_settings(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = WheelSettings::from_json(json).map_err(to_js)?;
        self.history.set_capacity(settings.history_len);
        self.state.apply_settings(settings.clone()).map_err(to_js)?;
        settings.save();
        Ok(())
    }

    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history.save();
    }
}
