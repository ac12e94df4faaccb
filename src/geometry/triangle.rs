// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Owned triangles extracted from segment buffers

use crate::utils::math::points_coincide;
use nalgebra::Point3;

/// A single triangle tagged with the segment it was extracted from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in stored winding order
    pub vertices: [Point3<f64>; 3],
    /// Centroid of the three vertices
    pub center: Point3<f64>,
    /// Index of the owning segment
    pub owner: usize,
}

impl Triangle {
    pub fn new(vertices: [Point3<f64>; 3], owner: usize) -> Self {
        let [a, b, c] = vertices;
        let center = Point3::from((a.coords + b.coords + c.coords) / 3.0);
        Self {
            vertices,
            center,
            owner,
        }
    }

    /// Any two vertices coincide within `epsilon` on every axis
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        let [a, b, c] = &self.vertices;
        points_coincide(a, b, epsilon) || points_coincide(b, c, epsilon) || points_coincide(a, c, epsilon)
    }
}
