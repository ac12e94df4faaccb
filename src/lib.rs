// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! pocketscan
//!
//! Pocket detection for segmented, triangulated 3D models. Triangles lying
//! inside concavities are found by multi-axis ray casting, the result is
//! propagated to whole segments through a segment adjacency graph, and
//! adjacent pocket segments are grouped into named pockets.

pub mod cli;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod io;
pub mod model;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use detection::{ClosureMode, DetectionConfig, DetectionReport, Pocket, PocketDetector, RayAxis, SegmentFlags};
pub use error::{IntegrityWarning, PocketError, PocketResult};
pub use geometry::{ModelBounds, Primitive, Triangle};
pub use io::{load_adjacency, load_model, pocket_highlight_attribute, ReportFile};
pub use model::{AdjacencyGraph, Segment, SegmentedModel};

/// Run one detection pass over a model
pub fn detect_pockets(model: &SegmentedModel, adjacency: &AdjacencyGraph, config: DetectionConfig) -> DetectionReport {
    PocketDetector::new(config).run(model, adjacency)
}

/// Detect pockets from model and adjacency JSON documents and return the
/// report as JSON
pub fn detect_pockets_json(model_json: &str, adjacency_json: &str, config: DetectionConfig) -> PocketResult<String> {
    let model = io::parse_model(model_json)?;
    let (adjacency, mut warnings) = io::parse_adjacency(adjacency_json, model.len())?;

    let mut report = detect_pockets(&model, &adjacency, config);
    warnings.append(&mut report.warnings);
    report.warnings = warnings;

    ReportFile::new(&model, &report).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle_json() {
        let model = r#"{"segments": [{"name": "Face_1", "positions": [0, 0, 0, 1, 0, 0, 0, 1, 0], "faces": [0, 1, 2]}]}"#;
        let json = detect_pockets_json(model, "{}", DetectionConfig::default().parallel(false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pockets"], serde_json::json!([]));
        assert_eq!(value["pocket_flags"], serde_json::json!([false]));
    }

    #[test]
    fn test_bad_adjacency_json() {
        let model = r#"{"segments": []}"#;
        let result = detect_pockets_json(model, r#"{"a": []}"#, DetectionConfig::default());
        assert!(matches!(result, Err(PocketError::InvalidOrdinal(_))));
    }
}
