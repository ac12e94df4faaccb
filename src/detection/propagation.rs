// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle-to-segment propagation and adjacency closure

use super::config::ClosureMode;
use super::flags::SegmentFlags;
use crate::geometry::Triangle;
use crate::model::AdjacencyGraph;
use tracing::debug;

/// Flag the owner of every flagged triangle.
///
/// `triangle_flags` is indexed like `triangles`. Returns the number of
/// segments newly flagged.
pub fn flag_owners(triangles: &[Triangle], triangle_flags: &[bool], flags: &mut SegmentFlags) -> usize {
    triangles
        .iter()
        .zip(triangle_flags)
        .filter(|(_, flagged)| **flagged)
        .filter(|(tri, _)| flags.mark_pocket(tri.owner))
        .count()
}

/// One sweep in segment index order: an unflagged segment whose neighbors
/// are all pockets (and which has at least one neighbor) becomes a pocket.
///
/// Flags set during the sweep are seen by segments visited later in it.
/// Returns the number of segments newly flagged.
pub fn close_over_adjacency(adjacency: &AdjacencyGraph, flags: &mut SegmentFlags) -> usize {
    let mut newly_flagged = 0;
    for segment in 0..flags.len() {
        if flags.is_pocket(segment) {
            continue;
        }
        let neighbors = adjacency.neighbors(segment);
        if neighbors.is_empty() {
            continue;
        }
        if neighbors.iter().all(|&n| flags.is_pocket(n)) && flags.mark_pocket(segment) {
            newly_flagged += 1;
        }
    }
    newly_flagged
}

/// Run both propagation steps. Returns the number of segments flagged by
/// triangles and by closure respectively.
pub fn propagate(
    triangles: &[Triangle],
    triangle_flags: &[bool],
    adjacency: &AdjacencyGraph,
    mode: ClosureMode,
    flags: &mut SegmentFlags,
) -> (usize, usize) {
    let from_triangles = flag_owners(triangles, triangle_flags, flags);

    let mut from_closure = close_over_adjacency(adjacency, flags);
    if mode == ClosureMode::FixedPoint {
        let mut sweeps = 1;
        loop {
            let added = close_over_adjacency(adjacency, flags);
            if added == 0 {
                break;
            }
            from_closure += added;
            sweeps += 1;
        }
        debug!(sweeps, "Adjacency closure reached a fixed point");
    }

    debug!(from_triangles, from_closure, "Segment propagation complete");
    (from_triangles, from_closure)
}
