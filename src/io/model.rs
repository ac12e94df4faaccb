// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Segmented model JSON

use crate::error::{PocketError, PocketResult};
use crate::model::{Segment, SegmentedModel};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk model layout: segments in load order with flat xyz buffers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelFile {
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub name: String,
    /// x, y, z per vertex
    pub positions: Vec<f64>,
    pub faces: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[f32; 3]>,
}

impl ModelFile {
    pub fn into_model(self) -> PocketResult<SegmentedModel> {
        let mut model = SegmentedModel::new();
        for (index, record) in self.segments.into_iter().enumerate() {
            if record.positions.len() % 3 != 0 {
                return Err(PocketError::MalformedPositions {
                    segment: index,
                    len: record.positions.len(),
                });
            }
            let positions = record
                .positions
                .chunks_exact(3)
                .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
                .collect();

            let mut segment = Segment::new(index, record.name, positions, record.faces);
            if let Some(color) = record.color {
                segment = segment.with_color(color);
            }
            model.push(segment);
        }
        Ok(model)
    }

    pub fn from_model(model: &SegmentedModel) -> Self {
        let segments = model
            .segments()
            .iter()
            .map(|segment| SegmentRecord {
                name: segment.name.clone(),
                positions: segment.positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect(),
                faces: segment.face_indices.clone(),
                color: segment.color,
            })
            .collect();
        Self { segments }
    }
}

pub fn parse_model(json: &str) -> PocketResult<SegmentedModel> {
    serde_json::from_str::<ModelFile>(json)?.into_model()
}

/// Read a model JSON file
pub fn load_model(path: impl AsRef<Path>) -> PocketResult<SegmentedModel> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| PocketError::io(path.display().to_string(), e))?;
    parse_model(&json)
}

/// Write a model as JSON
pub fn save_model(model: &SegmentedModel, path: impl AsRef<Path>) -> PocketResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&ModelFile::from_model(model))?;
    fs::write(path, json).map_err(|e| PocketError::io(path.display().to_string(), e))
}
