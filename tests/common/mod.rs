// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shared fixtures for integration tests

#![allow(dead_code)]

use nalgebra::Point3;
use pocketscan::{AdjacencyGraph, Primitive, SegmentedModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn cuboid(min: [f64; 3], max: [f64; 3], name: &str) -> pocketscan::Segment {
    Primitive::cuboid(Point3::from(min), Point3::from(max)).to_segment(0, name)
}

/// A unit cube as a single segment
pub fn cube() -> SegmentedModel {
    SegmentedModel::from_segments([cuboid([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], "Cube_1")])
}

/// Two walls standing on a floor, forming a U-shaped channel along z.
///
/// The inner faces of both walls are crossed by +x rays between the outer
/// faces, and the floor is surrounded by the two walls in the adjacency
/// graph.
pub fn channel() -> (SegmentedModel, AdjacencyGraph) {
    let model = SegmentedModel::from_segments([
        cuboid([0.0, 1.0, 0.0], [1.0, 2.0, 1.0], "Wall_1"),
        cuboid([2.0, 1.0, 0.0], [3.0, 2.0, 1.0], "Wall_2"),
        cuboid([0.0, 0.0, 0.0], [3.0, 1.0, 1.0], "Floor_3"),
    ]);
    let adjacency = AdjacencyGraph::from_lists(vec![vec![2], vec![2], vec![0, 1]]);
    (model, adjacency)
}

/// The channel as model and adjacency JSON documents
pub fn channel_json() -> (String, String) {
    let (model, _) = channel();
    let model_json = serde_json::to_string(&pocketscan::io::ModelFile::from_model(&model)).unwrap();
    let adjacency_json = r#"{"1": [3], "2": ["3"], "3": [1, 2]}"#.to_string();
    (model_json, adjacency_json)
}

/// Columns of random height spaced along x, with a random symmetric
/// adjacency graph
pub fn random_columns(seed: u64, count: usize) -> (SegmentedModel, AdjacencyGraph) {
    let mut rng = StdRng::seed_from_u64(seed);

    let segments = (0..count).map(|i| {
        let x = i as f64 * 1.5;
        let height = rng.gen_range(1..=4) as f64;
        let depth = rng.gen_range(1..=2) as f64;
        cuboid([x, 0.0, 0.0], [x + 1.0, height, depth], &format!("Column_{}", i + 1))
    });
    let model = SegmentedModel::from_segments(segments.collect::<Vec<_>>());

    let mut lists = vec![Vec::new(); count];
    for a in 0..count {
        for b in (a + 1)..count {
            if rng.gen_bool(0.3) {
                lists[a].push(b);
                lists[b].push(a);
            }
        }
    }
    (model, AdjacencyGraph::from_lists(lists))
}
