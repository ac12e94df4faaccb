// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grouping of adjacent pocket segments

use super::flags::SegmentFlags;
use crate::model::{AdjacencyGraph, SegmentedModel};
use crate::utils::math::trailing_index;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A connected group of pocket segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pocket {
    /// `Pocket_N`, with N the 0-based discovery order
    pub name: String,
    /// Segment indices in discovery order, seed first
    pub members: Vec<usize>,
}

impl Pocket {
    fn new(ordinal: usize, members: Vec<usize>) -> Self {
        Self {
            name: format!("Pocket_{ordinal}"),
            members,
        }
    }

    pub fn contains(&self, segment: usize) -> bool {
        self.members.contains(&segment)
    }

    /// Members ordered by the number after the last `_` in their segment
    /// name, the order a pocket list is shown in. Members without such a
    /// number go last; ties keep discovery order.
    pub fn members_by_name_suffix(&self, model: &SegmentedModel) -> Vec<usize> {
        let mut members = self.members.clone();
        members.sort_by_key(|&segment| {
            let suffix = model.get(segment).and_then(|s| trailing_index(&s.name));
            (suffix.is_none(), suffix)
        });
        members
    }

    pub fn member_names<'m>(&self, model: &'m SegmentedModel) -> Vec<&'m str> {
        self.members
            .iter()
            .filter_map(|&segment| model.get(segment).map(|s| s.name.as_str()))
            .collect()
    }
}

/// Split the pocket segments into adjacency-connected components.
///
/// Seeds are taken in ascending segment index. Each component is walked
/// depth-first with an explicit stack, visiting neighbors in adjacency
/// order and marking segments as clustered on discovery, which yields the
/// same member order as a recursive pre-order walk. Self-loops are skipped.
pub fn cluster_pockets(adjacency: &AdjacencyGraph, flags: &mut SegmentFlags) -> Vec<Pocket> {
    let mut pockets = Vec::new();

    for seed in 0..flags.len() {
        if !flags.is_pocket(seed) || !flags.mark_clustered(seed) {
            continue;
        }

        let mut members = vec![seed];
        // (segment, position of the next neighbor to try)
        let mut stack: Vec<(usize, usize)> = vec![(seed, 0)];

        while let Some(frame) = stack.last_mut() {
            let (segment, cursor) = *frame;
            let Some(&next) = adjacency.neighbors(segment).get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if next != segment && flags.is_pocket(next) && flags.mark_clustered(next) {
                members.push(next);
                stack.push((next, 0));
            }
        }

        pockets.push(Pocket::new(pockets.len(), members));
    }

    debug!(pockets = pockets.len(), "Pocket clustering complete");
    pockets
}
