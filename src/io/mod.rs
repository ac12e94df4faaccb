// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - model and adjacency loading, report output

mod adjacency;
mod model;
mod report;

pub use adjacency::{load_adjacency, parse_adjacency};
pub use model::{load_model, parse_model, save_model, ModelFile, SegmentRecord};
pub use report::{pocket_highlight_attribute, write_highlight, write_report, PocketSummary, ReportFile};
