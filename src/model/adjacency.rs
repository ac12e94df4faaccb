// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Segment adjacency graph

use crate::error::IntegrityWarning;
use ahash::AHashSet;
use tracing::{debug, warn};

/// Which segments geometrically touch which, by 0-based segment index.
///
/// Neighbor lists keep the order they were supplied in, without duplicates
/// or self-loops. Segments with no entry have no neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Graph with no edges for `segment_count` segments
    pub fn empty(segment_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); segment_count],
        }
    }

    /// Ingest an adjacency mapping keyed by 1-based segment ordinals with
    /// 1-based neighbor ordinals, as shipped alongside the model.
    ///
    /// Entries that cannot be mapped onto a segment are dropped and reported.
    pub fn from_one_based<I, N>(segment_count: usize, entries: I) -> (Self, Vec<IntegrityWarning>)
    where
        I: IntoIterator<Item = (i64, N)>,
        N: IntoIterator<Item = i64>,
    {
        let mut graph = Self::empty(segment_count);
        let mut warnings = Vec::new();

        // Ordinal to 0-based index, if it names a segment
        let to_index = |ordinal: i64| {
            usize::try_from(ordinal)
                .ok()
                .and_then(|o| o.checked_sub(1))
                .filter(|&index| index < segment_count)
        };

        for (ordinal, neighbor_ordinals) in entries {
            let Some(segment) = to_index(ordinal) else {
                warnings.push(IntegrityWarning::AdjacencyKeyOutOfRange { ordinal });
                continue;
            };
            for neighbor_ordinal in neighbor_ordinals {
                match to_index(neighbor_ordinal) {
                    Some(neighbor) => graph.add_neighbor(segment, neighbor),
                    None => warnings.push(IntegrityWarning::AdjacencyOrdinalOutOfRange {
                        segment,
                        ordinal: neighbor_ordinal,
                    }),
                }
            }
        }

        for warning in &warnings {
            warn!(%warning, "Dropped adjacency entry");
        }
        debug!(
            segments = segment_count,
            edges = graph.directed_edge_count(),
            "Adjacency graph ingested"
        );

        (graph, warnings)
    }

    /// Build from 0-based lists, one per segment in index order.
    ///
    /// Out-of-range neighbors are ignored.
    pub fn from_lists(lists: Vec<Vec<usize>>) -> Self {
        let segment_count = lists.len();
        let mut graph = Self::empty(segment_count);
        for (segment, list) in lists.into_iter().enumerate() {
            for neighbor in list.into_iter().filter(|&n| n < segment_count) {
                graph.add_neighbor(segment, neighbor);
            }
        }
        graph
    }

    fn add_neighbor(&mut self, segment: usize, neighbor: usize) {
        if segment == neighbor {
            debug!(segment, "Ignoring adjacency self-loop");
            return;
        }
        let list = &mut self.neighbors[segment];
        if !list.contains(&neighbor) {
            list.push(neighbor);
        }
    }

    /// Neighbors of `segment`, empty when the segment has no entry
    pub fn neighbors(&self, segment: usize) -> &[usize] {
        self.neighbors.get(segment).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn directed_edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Every edge a -> b has a matching b -> a
    pub fn is_symmetric(&self) -> bool {
        let edges: AHashSet<(usize, usize)> = self
            .neighbors
            .iter()
            .enumerate()
            .flat_map(|(a, list)| list.iter().map(move |&b| (a, b)))
            .collect();
        edges.iter().all(|&(a, b)| edges.contains(&(b, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_normalized() {
        let (graph, warnings) =
            AdjacencyGraph::from_one_based(3, vec![(1, vec![2, 3]), (2, vec![1]), (3, vec![1])]);
        assert!(warnings.is_empty());
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.neighbors(2), &[0]);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_missing_entries_are_empty() {
        let (graph, _) = AdjacencyGraph::from_one_based(4, vec![(1, vec![2])]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert!(graph.neighbors(3).is_empty());
        assert!(graph.neighbors(99).is_empty());
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn test_self_loops_and_duplicates_dropped() {
        let (graph, warnings) = AdjacencyGraph::from_one_based(2, vec![(1, vec![1, 2, 2, 1])]);
        assert!(warnings.is_empty());
        assert_eq!(graph.neighbors(0), &[1]);
    }

    #[test]
    fn test_out_of_range_reported() {
        let (graph, warnings) =
            AdjacencyGraph::from_one_based(2, vec![(1, vec![0, 5, -1, 2]), (9, vec![1]), (-3, vec![1])]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(
            warnings,
            vec![
                IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, ordinal: 0 },
                IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, ordinal: 5 },
                IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, ordinal: -1 },
                IntegrityWarning::AdjacencyKeyOutOfRange { ordinal: 9 },
                IntegrityWarning::AdjacencyKeyOutOfRange { ordinal: -3 },
            ]
        );
    }

    #[test]
    fn test_from_lists() {
        let graph = AdjacencyGraph::from_lists(vec![vec![1, 0, 7], vec![0]]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.directed_edge_count(), 2);
    }
}
