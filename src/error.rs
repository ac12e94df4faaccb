// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error and warning types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fallible pocketscan operations.
pub type PocketResult<T> = Result<T, PocketError>;

/// Errors raised while reading or writing model data.
///
/// The detection pipeline itself never fails; these only come from the io
/// layer.
#[derive(Debug, Error)]
pub enum PocketError {
    /// Underlying file operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON could not be decoded or encoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A flat position buffer does not hold whole xyz triples.
    #[error("segment {segment} has {len} position values, which is not a multiple of 3")]
    MalformedPositions { segment: usize, len: usize },

    /// An adjacency key or value is not an integer.
    #[error("invalid adjacency ordinal: {0:?}")]
    InvalidOrdinal(String),
}

impl PocketError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Non-fatal input problem found while building or running a detection pass.
///
/// Offending data is dropped and the pass continues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
    /// Face index buffer length is not a multiple of 3; trailing indices were dropped.
    #[error("segment {segment}: {dangling} trailing face indices do not form a triangle")]
    TruncatedFaceBuffer { segment: usize, dangling: usize },

    /// A face references a vertex beyond the segment's position buffer.
    #[error("segment {segment}: face {face} references vertex {vertex} but only {vertex_count} exist")]
    VertexIndexOutOfRange {
        segment: usize,
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// A 1-based neighbor ordinal is below 1 or beyond the segment count.
    #[error("segment {segment}: neighbor ordinal {ordinal} is out of range")]
    AdjacencyOrdinalOutOfRange { segment: usize, ordinal: i64 },

    /// An adjacency entry exists for a segment that is not in the model.
    #[error("adjacency entry for ordinal {ordinal} has no matching segment")]
    AdjacencyKeyOutOfRange { ordinal: i64 },
}
