//! Platform abstraction layer
//!
//! Browser bindings for embedding a wheel in a page:
//! - Logger and panic hook setup
//! - `WheelHandle` exported to JavaScript
//! - Wall-clock timestamps for the winners history

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Current time in ms since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current time in ms since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
