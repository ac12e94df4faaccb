// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model module - segments and their adjacency

mod adjacency;
mod segment;

pub use adjacency::AdjacencyGraph;
pub use segment::{Segment, SegmentedModel};
