// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle extraction and degenerate filtering

use crate::error::IntegrityWarning;
use crate::geometry::Triangle;
use crate::model::Segment;
use tracing::{debug, warn};

/// Triangles pulled out of segment buffers plus any integrity problems found
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub triangles: Vec<Triangle>,
    pub warnings: Vec<IntegrityWarning>,
}

/// Flatten every segment's index buffer into owned triangles, in segment
/// order then face order.
///
/// A trailing partial triangle and faces referencing missing vertices are
/// dropped and reported; segments are never modified.
pub fn extract_triangles(segments: &[Segment]) -> Extraction {
    let mut extraction = Extraction {
        triangles: Vec::with_capacity(segments.iter().map(Segment::triangle_count).sum()),
        warnings: Vec::new(),
    };

    for segment in segments {
        let dangling = segment.face_indices.len() % 3;
        if dangling != 0 {
            extraction.warnings.push(IntegrityWarning::TruncatedFaceBuffer {
                segment: segment.index,
                dangling,
            });
        }

        let vertex_count = segment.positions.len();
        for (face, indices) in segment.face_indices.chunks_exact(3).enumerate() {
            if let Some(&vertex) = indices.iter().find(|&&i| i >= vertex_count) {
                extraction.warnings.push(IntegrityWarning::VertexIndexOutOfRange {
                    segment: segment.index,
                    face,
                    vertex,
                    vertex_count,
                });
                continue;
            }
            let vertices = [
                segment.positions[indices[0]],
                segment.positions[indices[1]],
                segment.positions[indices[2]],
            ];
            extraction.triangles.push(Triangle::new(vertices, segment.index));
        }
    }

    for warning in &extraction.warnings {
        warn!(%warning, "Malformed segment buffer");
    }

    extraction
}

/// Drop triangles with two vertices coinciding within `epsilon` on every
/// axis, keeping the relative order of the rest
pub fn filter_degenerate(triangles: Vec<Triangle>, epsilon: f64) -> Vec<Triangle> {
    let before = triangles.len();
    let kept: Vec<Triangle> = triangles
        .into_iter()
        .filter(|tri| !tri.is_degenerate(epsilon))
        .collect();

    debug!(before, after = kept.len(), "Removed degenerate triangles");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Point3;

    #[test]
    fn test_extract_tags_owner() {
        let segments = vec![
            Primitive::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)).to_segment(0, "a"),
            Primitive::cuboid(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0)).to_segment(1, "b"),
        ];
        let extraction = extract_triangles(&segments);
        assert!(extraction.warnings.is_empty());
        assert_eq!(extraction.triangles.len(), 24);
        assert!(extraction.triangles[..12].iter().all(|t| t.owner == 0));
        assert!(extraction.triangles[12..].iter().all(|t| t.owner == 1));
    }

    #[test]
    fn test_truncated_buffer_warns() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let segment = Segment::new(3, "partial", positions, vec![0, 1, 2, 0, 1]);
        let extraction = extract_triangles(&[segment]);
        assert_eq!(extraction.triangles.len(), 1);
        assert_eq!(
            extraction.warnings,
            vec![IntegrityWarning::TruncatedFaceBuffer {
                segment: 3,
                dangling: 2
            }]
        );
    }

    #[test]
    fn test_out_of_range_vertex_dropped() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let segment = Segment::new(0, "bad", positions, vec![0, 1, 5, 0, 1, 2]);
        let extraction = extract_triangles(&[segment]);
        assert_eq!(extraction.triangles.len(), 1);
        assert!(matches!(
            extraction.warnings[0],
            IntegrityWarning::VertexIndexOutOfRange { face: 0, vertex: 5, .. }
        ));
    }

    #[test]
    fn test_filter_removes_pole_triangles() {
        let sphere = Primitive::sphere(Point3::origin(), 1.0, 8).to_segment(0, "sphere");
        let triangles = extract_triangles(&[sphere]).triangles;
        let total = triangles.len();
        let filtered = filter_degenerate(triangles, 1e-6);
        // One degenerate triangle per slice at each pole
        assert_eq!(filtered.len(), total - 16);

        let again = filter_degenerate(filtered.clone(), 1e-6);
        assert_eq!(again, filtered);
    }
}
