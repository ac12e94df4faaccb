// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end detection pass

use super::classifier::PocketClassifier;
use super::clustering::{cluster_pockets, Pocket};
use super::config::DetectionConfig;
use super::extract::{extract_triangles, filter_degenerate};
use super::flags::SegmentFlags;
use super::propagation::propagate;
use crate::error::IntegrityWarning;
use crate::geometry::ModelBounds;
use crate::model::{AdjacencyGraph, SegmentedModel};
use serde::Serialize;
use tracing::info;

/// Counts gathered while running a pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetectionStats {
    pub segments: usize,
    /// Triangles extracted from the segment buffers
    pub triangles: usize,
    pub degenerate_removed: usize,
    pub rays_cast: usize,
    /// Rays with enough hits to flag interior triangles
    pub rays_flagging: usize,
    pub triangles_flagged: usize,
    /// Segments flagged through their own triangles
    pub segments_from_triangles: usize,
    /// Segments flagged by the adjacency closure
    pub segments_from_closure: usize,
}

/// Everything one pass produced
#[derive(Debug, Clone, Default)]
pub struct DetectionReport {
    pub flags: SegmentFlags,
    pub pockets: Vec<Pocket>,
    pub bounds: ModelBounds,
    pub stats: DetectionStats,
    pub warnings: Vec<IntegrityWarning>,
}

impl DetectionReport {
    pub fn is_pocket(&self, segment: usize) -> bool {
        self.flags.is_pocket(segment)
    }

    pub fn pocket_flags(&self) -> &[bool] {
        self.flags.pocket_flags()
    }

    /// The pocket a segment was clustered into, if any
    pub fn pocket_of(&self, segment: usize) -> Option<&Pocket> {
        self.pockets.iter().find(|pocket| pocket.contains(segment))
    }
}

/// Runs extraction, filtering, classification, propagation and clustering
/// over a segmented model.
///
/// Each call to [`run`](Self::run) is an independent pass; the model and
/// graph are only read.
#[derive(Debug, Clone, Default)]
pub struct PocketDetector {
    config: DetectionConfig,
    bounds: Option<ModelBounds>,
}

impl PocketDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config, bounds: None }
    }

    /// Use precomputed model bounds instead of deriving them from the segments
    #[must_use]
    pub fn with_bounds(mut self, bounds: ModelBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn run(&self, model: &SegmentedModel, adjacency: &AdjacencyGraph) -> DetectionReport {
        let bounds = self.bounds.unwrap_or_else(|| model.bounds());

        let extraction = extract_triangles(model.segments());
        let extracted = extraction.triangles.len();
        let triangles = filter_degenerate(extraction.triangles, self.config.tolerances.degenerate_epsilon);

        let classification = PocketClassifier::new(&self.config, bounds).classify(&triangles);

        let mut flags = SegmentFlags::new(model.len());
        let (segments_from_triangles, segments_from_closure) = propagate(
            &triangles,
            &classification.flags,
            adjacency,
            self.config.closure,
            &mut flags,
        );
        let pockets = cluster_pockets(adjacency, &mut flags);

        let stats = DetectionStats {
            segments: model.len(),
            triangles: extracted,
            degenerate_removed: extracted - triangles.len(),
            rays_cast: classification.rays_cast,
            rays_flagging: classification.rays_flagging,
            triangles_flagged: classification.flagged_count(),
            segments_from_triangles,
            segments_from_closure,
        };

        info!(
            segments = stats.segments,
            pocket_segments = flags.pocket_count(),
            pockets = pockets.len(),
            "Pocket detection complete"
        );

        DetectionReport {
            flags,
            pockets,
            bounds,
            stats,
            warnings: extraction.warnings,
        }
    }
}
