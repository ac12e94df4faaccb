// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Detection report and highlight attribute output

use crate::detection::{DetectionReport, DetectionStats, SegmentFlags};
use crate::error::{IntegrityWarning, PocketError, PocketResult};
use crate::model::SegmentedModel;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct PocketSummary {
    pub name: String,
    /// Segment indices in discovery order
    pub members: Vec<usize>,
    pub member_names: Vec<String>,
    /// Member names ordered for display
    pub display_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportFile {
    pub pockets: Vec<PocketSummary>,
    /// Pocket flag per segment, by index
    pub pocket_flags: Vec<bool>,
    pub stats: DetectionStats,
    pub warnings: Vec<IntegrityWarning>,
}

impl ReportFile {
    pub fn new(model: &SegmentedModel, report: &DetectionReport) -> Self {
        let name_of = |segment: usize| model.get(segment).map(|s| s.name.clone()).unwrap_or_default();

        let pockets = report
            .pockets
            .iter()
            .map(|pocket| PocketSummary {
                name: pocket.name.clone(),
                members: pocket.members.clone(),
                member_names: pocket.members.iter().map(|&m| name_of(m)).collect(),
                display_order: pocket
                    .members_by_name_suffix(model)
                    .into_iter()
                    .map(&name_of)
                    .collect(),
            })
            .collect();

        Self {
            pockets,
            pocket_flags: report.pocket_flags().to_vec(),
            stats: report.stats,
            warnings: report.warnings.clone(),
        }
    }

    pub fn to_json(&self) -> PocketResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One value per vertex across all segments in index order: `1.0` where the
/// owning segment is a pocket, `0.0` elsewhere
pub fn pocket_highlight_attribute(model: &SegmentedModel, flags: &SegmentFlags) -> Vec<f32> {
    let mut attribute = vec![0.0; model.vertex_count()];
    for (segment, offset) in model.segments().iter().zip(model.vertex_offsets()) {
        if flags.is_pocket(segment.index) {
            attribute[offset..offset + segment.vertex_count()].fill(1.0);
        }
    }
    attribute
}

pub fn write_report(model: &SegmentedModel, report: &DetectionReport, path: impl AsRef<Path>) -> PocketResult<()> {
    let path = path.as_ref();
    let json = ReportFile::new(model, report).to_json()?;
    fs::write(path, json).map_err(|e| PocketError::io(path.display().to_string(), e))
}

/// Write the highlight attribute as a JSON array
pub fn write_highlight(model: &SegmentedModel, flags: &SegmentFlags, path: impl AsRef<Path>) -> PocketResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(&pocket_highlight_attribute(model, flags))?;
    fs::write(path, json).map_err(|e| PocketError::io(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;
    use nalgebra::Point3;

    fn model() -> SegmentedModel {
        SegmentedModel::from_segments([
            Segment::new(0, "Face_3", vec![Point3::origin(); 2], Vec::new()),
            Segment::new(0, "Face_1", vec![Point3::origin(); 3], Vec::new()),
            Segment::new(0, "Face_2", vec![Point3::origin(); 1], Vec::new()),
        ])
    }

    #[test]
    fn test_highlight_attribute() {
        let mut flags = SegmentFlags::new(3);
        flags.mark_pocket(1);
        let attribute = pocket_highlight_attribute(&model(), &flags);
        assert_eq!(attribute, vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_highlight_without_pockets() {
        let attribute = pocket_highlight_attribute(&model(), &SegmentFlags::new(3));
        assert!(attribute.iter().all(|&v| v == 0.0));
        assert_eq!(attribute.len(), 6);
    }

    #[test]
    fn test_report_file_orders_members() {
        use crate::detection::cluster_pockets;
        use crate::model::AdjacencyGraph;

        let model = model();
        let graph = AdjacencyGraph::from_lists(vec![vec![1], vec![0, 2], vec![1]]);
        let mut flags = SegmentFlags::new(3);
        for segment in 0..3 {
            flags.mark_pocket(segment);
        }
        let pockets = cluster_pockets(&graph, &mut flags);
        let report = DetectionReport {
            flags,
            pockets,
            ..Default::default()
        };

        let file = ReportFile::new(&model, &report);
        assert_eq!(file.pockets.len(), 1);
        assert_eq!(file.pockets[0].member_names, vec!["Face_3", "Face_1", "Face_2"]);
        assert_eq!(file.pockets[0].display_order, vec!["Face_1", "Face_2", "Face_3"]);
        assert_eq!(file.pocket_flags, vec![true, true, true]);

        let json: serde_json::Value = serde_json::from_str(&file.to_json().unwrap()).unwrap();
        assert_eq!(json["pockets"][0]["name"], "Pocket_0");
        assert_eq!(json["pockets"][0]["members"], serde_json::json!([0, 1, 2]));
    }
}
