//! WebAssembly bindings for the map generation engine.
//!
//! This module exposes the engine to JavaScript through wasm-bindgen.
//! Values cross the boundary as JSON strings.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::Board;
#[cfg(feature = "wasm")]
use crate::config::GameConfig;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Generate a map from a JSON configuration, returning the map as JSON.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = generateMap)]
pub fn generate_map(config_json: &str) -> Result<String, JsValue> {
    let config: GameConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

    let board = crate::generator::generate(&config)
        .map_err(|e| JsValue::from_str(&format!("Generation failed: {}", e)))?;

    serde_json::to_string(&board).map_err(|e| JsValue::from_str(&format!("Serialization: {}", e)))
}

/// Compute statistics for a previously generated map (JSON in, JSON out).
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = mapStatistics)]
pub fn map_statistics(map_json: &str) -> Result<String, JsValue> {
    let board: Board = serde_json::from_str(map_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid map: {}", e)))?;

    let report = crate::stats::statistics(&board);
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&format!("Serialization: {}", e)))
}

/// Run validation checks on a previously generated map (JSON in, JSON out).
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = validateMap)]
pub fn validate_map(map_json: &str) -> Result<String, JsValue> {
    let board: Board = serde_json::from_str(map_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid map: {}", e)))?;

    let report = crate::stats::validate(&board);
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&format!("Serialization: {}", e)))
}
