// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pocket detection pipeline
//!
//! Stages run in order: triangle extraction, degenerate filtering, ray-cast
//! classification, segment propagation and clustering. All per-pass state
//! lives in [`SegmentFlags`] and the classifier's triangle flags, so the
//! model itself is never mutated.

pub mod classifier;
pub mod clustering;
pub mod config;
pub mod extract;
pub mod flags;
pub mod pipeline;
pub mod propagation;

pub use classifier::{Classification, PocketClassifier, TriangleHit};
pub use clustering::{cluster_pockets, Pocket};
pub use config::{ClosureMode, DetectionConfig, RayAxis};
pub use extract::{extract_triangles, filter_degenerate, Extraction};
pub use flags::SegmentFlags;
pub use pipeline::{DetectionReport, DetectionStats, PocketDetector};
pub use propagation::{close_over_adjacency, flag_owners, propagate};
