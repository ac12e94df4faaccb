// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point3;

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Two points coincide when every coordinate pair is within `epsilon`
pub fn points_coincide(a: &Point3<f64>, b: &Point3<f64>, epsilon: f64) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon) && approx_eq(a.z, b.z, epsilon)
}

/// Integer parsed from the trailing `_N` of a name, e.g. `Face_12` -> 12
pub fn trailing_index(name: &str) -> Option<u64> {
    name.rsplit('_').next()?.trim().parse().ok()
}
