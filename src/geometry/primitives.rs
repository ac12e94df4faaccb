// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometric primitives generator
//!
//! Produces segment-local position and index buffers, used to build test
//! fixtures, benchmarks and synthetic models.

use crate::model::Segment;
use nalgebra::Point3;
use std::f64::consts::PI;

/// Geometric primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cuboid { min: Point3<f64>, max: Point3<f64> },
    Sphere { center: Point3<f64>, r: f64, fn_: u32 },
}

impl Primitive {
    pub fn cuboid(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self::Cuboid { min, max }
    }

    pub fn sphere(center: Point3<f64>, r: f64, fn_: u32) -> Self {
        let segments = if fn_ > 2 { fn_ } else { 32 };
        Self::Sphere {
            center,
            r,
            fn_: segments,
        }
    }

    /// Position and flat triangle index buffers
    pub fn to_buffers(&self) -> (Vec<Point3<f64>>, Vec<usize>) {
        match self {
            Self::Cuboid { min, max } => generate_cuboid(min, max),
            Self::Sphere { center, r, fn_ } => generate_sphere(center, *r, *fn_),
        }
    }

    pub fn to_segment(&self, index: usize, name: impl Into<String>) -> Segment {
        let (positions, face_indices) = self.to_buffers();
        Segment::new(index, name, positions, face_indices)
    }
}

/// 8 shared corners, 2 triangles per face.
///
/// Opposite faces use the same diagonal so that an axis-aligned ray through
/// a triangle centroid lands strictly inside a triangle on the opposite face.
fn generate_cuboid(min: &Point3<f64>, max: &Point3<f64>) -> (Vec<Point3<f64>>, Vec<usize>) {
    let mut positions = Vec::with_capacity(8);
    for bits in 0..8usize {
        positions.push(Point3::new(
            if bits & 1 == 0 { min.x } else { max.x },
            if bits & 2 == 0 { min.y } else { max.y },
            if bits & 4 == 0 { min.z } else { max.z },
        ));
    }

    let corner = |axis: usize, a: usize, u: usize, v: usize| -> usize {
        let u_axis = (axis + 1) % 3;
        let v_axis = (axis + 2) % 3;
        (a << axis) | (u << u_axis) | (v << v_axis)
    };

    let mut faces = Vec::with_capacity(36);
    for axis in 0..3 {
        for side in 0..2 {
            let p00 = corner(axis, side, 0, 0);
            let p10 = corner(axis, side, 1, 0);
            let p11 = corner(axis, side, 1, 1);
            let p01 = corner(axis, side, 0, 1);
            // cross(u, v) points along +axis, so the max side keeps this order
            if side == 1 {
                faces.extend_from_slice(&[p00, p10, p11, p00, p11, p01]);
            } else {
                faces.extend_from_slice(&[p00, p11, p10, p00, p01, p11]);
            }
        }
    }

    (positions, faces)
}

/// UV sphere; the pole rings repeat the pole position, so the first and last
/// stacks contain degenerate triangles.
fn generate_sphere(center: &Point3<f64>, radius: f64, segments: u32) -> (Vec<Point3<f64>>, Vec<usize>) {
    let stacks = segments as usize;
    let slices = segments as usize;
    let mut positions = Vec::with_capacity((stacks + 1) * (slices + 1));

    for i in 0..=stacks {
        let phi = PI * i as f64 / stacks as f64;
        let y = radius * phi.cos();
        let r = radius * phi.sin();

        for j in 0..=slices {
            let theta = 2.0 * PI * j as f64 / slices as f64;
            positions.push(Point3::new(
                center.x + r * theta.cos(),
                center.y + y,
                center.z + r * theta.sin(),
            ));
        }
    }

    let mut faces = Vec::with_capacity(stacks * slices * 6);
    for i in 0..stacks {
        for j in 0..slices {
            let first = i * (slices + 1) + j;
            let second = first + slices + 1;

            faces.extend_from_slice(&[first, second, first + 1]);
            faces.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    (positions, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_buffers() {
        let (positions, faces) =
            Primitive::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)).to_buffers();
        assert_eq!(positions.len(), 8);
        assert_eq!(faces.len(), 36);
        assert!(faces.iter().all(|&i| i < 8));
    }

    #[test]
    fn test_cuboid_normals_point_outward() {
        let min = Point3::new(0.0, 0.0, 0.0);
        let max = Point3::new(1.0, 1.0, 1.0);
        let (positions, faces) = Primitive::cuboid(min, max).to_buffers();
        let center = nalgebra::center(&min, &max);

        for tri in faces.chunks(3) {
            let (a, b, c) = (positions[tri[0]], positions[tri[1]], positions[tri[2]]);
            let normal = (b - a).cross(&(c - a));
            let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
            assert!(normal.dot(&(centroid - center)) > 0.0);
        }
    }

    #[test]
    fn test_sphere_buffers() {
        let (positions, faces) = Primitive::sphere(Point3::origin(), 5.0, 8).to_buffers();
        assert_eq!(positions.len(), 9 * 9);
        assert_eq!(faces.len(), 8 * 8 * 6);
        for p in &positions {
            assert!((p.coords.norm() - 5.0).abs() < 1e-9);
        }
    }
}
