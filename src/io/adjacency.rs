// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Adjacency graph JSON
//!
//! The file maps 1-based segment ordinals to lists of 1-based neighbor
//! ordinals, e.g. `{"1": [2, 3], "2": ["1"]}`. Ordinals may be written as
//! numbers or numeric strings; integral floats such as `2.0` are accepted.
//! Ordinals that are integers but name no segment, negative ones included,
//! become integrity warnings rather than errors.

use crate::error::{IntegrityWarning, PocketError, PocketResult};
use crate::model::AdjacencyGraph;
use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Ordinal {
    Number(Number),
    Text(String),
}

impl Ordinal {
    fn resolve(self) -> PocketResult<i64> {
        match self {
            Ordinal::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().and_then(integral))
                .ok_or_else(|| PocketError::InvalidOrdinal(n.to_string())),
            Ordinal::Text(text) => parse_ordinal(&text),
        }
    }
}

/// `value` as an integer if it has no fractional part
fn integral(value: f64) -> Option<i64> {
    let in_range = value.is_finite() && value.abs() < i64::MAX as f64;
    (in_range && value.fract() == 0.0).then_some(value as i64)
}

fn parse_ordinal(text: &str) -> PocketResult<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        .ok_or_else(|| PocketError::InvalidOrdinal(text.to_string()))
}

/// Parse adjacency JSON for a model with `segment_count` segments.
///
/// Ordinals that do not name a segment are dropped and returned as warnings;
/// non-numeric ordinals are an error.
pub fn parse_adjacency(json: &str, segment_count: usize) -> PocketResult<(AdjacencyGraph, Vec<IntegrityWarning>)> {
    let raw: BTreeMap<String, Vec<Ordinal>> = serde_json::from_str(json)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, values) in raw {
        let ordinal = parse_ordinal(&key)?;
        let neighbors = values
            .into_iter()
            .map(Ordinal::resolve)
            .collect::<PocketResult<Vec<_>>>()?;
        entries.push((ordinal, neighbors));
    }
    // Keys sort as strings in the map; ingest in numeric order
    entries.sort_by_key(|(ordinal, _)| *ordinal);

    Ok(AdjacencyGraph::from_one_based(segment_count, entries))
}

/// Read an adjacency JSON file
pub fn load_adjacency(
    path: impl AsRef<Path>,
    segment_count: usize,
) -> PocketResult<(AdjacencyGraph, Vec<IntegrityWarning>)> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| PocketError::io(path.display().to_string(), e))?;
    parse_adjacency(&json, segment_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_ordinals() {
        let json = r#"{"1": [2, "3"], "2": ["1"], "3": [1]}"#;
        let (graph, warnings) = parse_adjacency(json, 3).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.neighbors(2), &[0]);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_missing_entries_are_empty() {
        let (graph, _) = parse_adjacency(r#"{"2": [1]}"#, 3).unwrap();
        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(2).is_empty());
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn test_out_of_range_ordinals_warn() {
        let (graph, warnings) = parse_adjacency(r#"{"1": [0, 2, 9], "7": [1]}"#, 2).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(
            warnings,
            vec![
                IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, ordinal: 0 },
                IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, ordinal: 9 },
                IntegrityWarning::AdjacencyKeyOutOfRange { ordinal: 7 },
            ]
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(matches!(
            parse_adjacency(r#"{"one": [2]}"#, 2),
            Err(PocketError::InvalidOrdinal(key)) if key == "one"
        ));
        assert!(matches!(
            parse_adjacency(r#"{"1": ["x"]}"#, 2),
            Err(PocketError::InvalidOrdinal(_))
        ));
    }

    #[test]
    fn test_negative_ordinals_warn() {
        let (graph, warnings) = parse_adjacency(r#"{"1": [-1, 2], "-2": [1]}"#, 2).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(
            warnings,
            vec![
                IntegrityWarning::AdjacencyKeyOutOfRange { ordinal: -2 },
                IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, ordinal: -1 },
            ]
        );
    }

    #[test]
    fn test_integral_floats_accepted() {
        let (graph, warnings) = parse_adjacency(r#"{"1": [2.0, "3.0"], "3.0": [1]}"#, 3).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(2), &[0]);
    }

    #[test]
    fn test_fractional_ordinals_rejected() {
        assert!(matches!(
            parse_adjacency(r#"{"1": [2.5]}"#, 3),
            Err(PocketError::InvalidOrdinal(value)) if value == "2.5"
        ));
        assert!(matches!(
            parse_adjacency(r#"{"1": ["1.5"]}"#, 3),
            Err(PocketError::InvalidOrdinal(_))
        ));
    }

    #[test]
    fn test_huge_ordinal_is_out_of_range() {
        let (_, warnings) = parse_adjacency(r#"{"1": [18446744073709551615]}"#, 2).unwrap();
        assert!(matches!(
            warnings[0],
            IntegrityWarning::AdjacencyOrdinalOutOfRange { segment: 0, .. }
        ));
    }

    #[test]
    fn test_numeric_key_order() {
        // "10" sorts before "2" as a string
        let json = r#"{"10": [1], "2": [1]}"#;
        let (graph, _) = parse_adjacency(json, 10).unwrap();
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.neighbors(9), &[0]);
    }
}
