// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! File-based detection runs

use crate::detection::{DetectionConfig, DetectionReport, PocketDetector};
use crate::error::IntegrityWarning;
use crate::io;
use crate::model::{AdjacencyGraph, SegmentedModel};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of a detection run over files on disk
pub struct DetectionRun {
    pub model: SegmentedModel,
    pub report: DetectionReport,
    pub duration: Duration,
}

/// Loads inputs, runs a detection pass and writes outputs
pub struct Runner {
    detector: PocketDetector,
}

impl Runner {
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            detector: PocketDetector::new(config),
        }
    }

    pub fn load_model(&self, path: &Path) -> Result<SegmentedModel> {
        io::load_model(path).with_context(|| format!("Failed to load model: {:?}", path))
    }

    /// Load the model and adjacency graph and detect pockets.
    ///
    /// Adjacency integrity warnings are placed ahead of the pipeline's own
    /// warnings in the report.
    pub fn detect(&self, model_path: &Path, adjacency_path: &Path) -> Result<DetectionRun> {
        let model = self.load_model(model_path)?;
        let (adjacency, adjacency_warnings) = io::load_adjacency(adjacency_path, model.len())
            .with_context(|| format!("Failed to load adjacency graph: {:?}", adjacency_path))?;

        let start = Instant::now();
        let report = self.run(&model, &adjacency, adjacency_warnings);
        let duration = start.elapsed();

        Ok(DetectionRun {
            model,
            report,
            duration,
        })
    }

    fn run(
        &self,
        model: &SegmentedModel,
        adjacency: &AdjacencyGraph,
        mut warnings: Vec<IntegrityWarning>,
    ) -> DetectionReport {
        let mut report = self.detector.run(model, adjacency);
        warnings.append(&mut report.warnings);
        report.warnings = warnings;
        report
    }

    pub fn write_report(&self, run: &DetectionRun, path: &Path) -> Result<()> {
        io::write_report(&run.model, &run.report, path).with_context(|| format!("Failed to write report: {:?}", path))
    }

    pub fn write_highlight(&self, run: &DetectionRun, path: &Path) -> Result<()> {
        io::write_highlight(&run.model, &run.report.flags, path)
            .with_context(|| format!("Failed to write highlight attribute: {:?}", path))
    }
}
