// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen

use crate::detection::DetectionConfig;
use crate::io;
use crate::model::SegmentedModel;
use wasm_bindgen::prelude::*;

/// A parsed model kept on the wasm side between calls
#[wasm_bindgen]
pub struct WasmModel {
    inner: SegmentedModel,
}

#[wasm_bindgen]
impl WasmModel {
    /// Parse model JSON
    #[wasm_bindgen(constructor)]
    pub fn new(model_json: &str) -> Result<WasmModel, JsValue> {
        let inner = io::parse_model(model_json).map_err(|e| JsValue::from_str(&format!("Model error: {}", e)))?;
        Ok(WasmModel { inner })
    }

    pub fn segment_count(&self) -> usize {
        self.inner.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.inner.triangle_count()
    }

    /// Run detection and return the per-vertex pocket highlight attribute
    pub fn highlight(&self, adjacency_json: &str) -> Result<Vec<f32>, JsValue> {
        let (adjacency, _) = io::parse_adjacency(adjacency_json, self.inner.len())
            .map_err(|e| JsValue::from_str(&format!("Adjacency error: {}", e)))?;
        let report = crate::detect_pockets(&self.inner, &adjacency, wasm_config());
        Ok(io::pocket_highlight_attribute(&self.inner, &report.flags))
    }
}

/// Detect pockets and return the report as JSON
#[wasm_bindgen]
pub fn detect_pockets(model_json: &str, adjacency_json: &str) -> Result<String, JsValue> {
    crate::detect_pockets_json(model_json, adjacency_json, wasm_config())
        .map_err(|e| JsValue::from_str(&format!("Detection error: {}", e)))
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// No thread pool in the browser
fn wasm_config() -> DetectionConfig {
    DetectionConfig::default().parallel(false)
}
