// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Segments and the segmented model

use crate::geometry::{BoundingBox, ModelBounds};
use nalgebra::Point3;

/// One named, independently buffered piece of the model's surface
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Load-order index, unique within a model
    pub index: usize,
    pub name: String,
    /// Segment-local vertex positions
    pub positions: Vec<Point3<f64>>,
    /// Flat triangle list indexing into `positions`
    pub face_indices: Vec<usize>,
    /// Display color, not used by detection
    pub color: Option<[f32; 3]>,
}

impl Segment {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        positions: Vec<Point3<f64>>,
        face_indices: Vec<usize>,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            positions,
            face_indices,
            color: None,
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = Some(color);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of whole triangles in the index buffer
    pub fn triangle_count(&self) -> usize {
        self.face_indices.len() / 3
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.positions)
    }
}

/// Ordered collection of segments; a segment's index is its position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedModel {
    segments: Vec<Segment>,
}

impl SegmentedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model, re-assigning each segment's index to its load order
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut model = Self::new();
        for segment in segments {
            model.push(segment);
        }
        model
    }

    /// Append a segment and return its index
    pub fn push(&mut self, mut segment: Segment) -> usize {
        let index = self.segments.len();
        segment.index = index;
        self.segments.push(segment);
        index
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.segments.iter().map(Segment::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.segments.iter().map(Segment::triangle_count).sum()
    }

    /// Union of the per-segment bounding boxes
    pub fn bounding_box(&self) -> BoundingBox {
        self.segments
            .iter()
            .fold(BoundingBox::empty(), |acc, segment| acc.union(&segment.bounding_box()))
    }

    pub fn bounds(&self) -> ModelBounds {
        ModelBounds::from_bbox(&self.bounding_box())
    }

    /// Offset of each segment's first vertex in the concatenated vertex buffer
    pub fn vertex_offsets(&self) -> Vec<usize> {
        self.segments
            .iter()
            .scan(0, |offset, segment| {
                let start = *offset;
                *offset += segment.vertex_count();
                Some(start)
            })
            .collect()
    }
}
