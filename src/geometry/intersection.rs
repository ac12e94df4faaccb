// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Ray-triangle intersection and strict barycentric containment
//!
//! Both tests resolve every numerical edge case (parallel rays, grazing
//! angles, hits on or near an edge) to "no hit" instead of failing.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Numerical tolerances shared by the intersection tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Two vertices closer than this on every axis make a triangle degenerate
    pub degenerate_epsilon: f64,
    /// Determinant and minimum hit distance threshold for Möller–Trumbore
    pub intersection_epsilon: f64,
    /// Hits where |cos(normal, direction)| falls below this are rejected
    pub grazing_cosine: f64,
    /// Margin on the barycentric coordinates for strict containment
    pub containment_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            degenerate_epsilon: 1e-6,
            intersection_epsilon: 1e-6,
            grazing_cosine: 0.1,
            containment_epsilon: 0.005,
        }
    }
}

/// Half-line starting at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// Intersection of a ray with a triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Point3<f64>,
    /// Parametric distance along the ray
    pub distance: f64,
}

/// Möller–Trumbore ray-triangle intersection.
///
/// On top of the determinant check, triangles whose plane is within the
/// grazing cutoff of the ray direction are rejected, as are triangles whose
/// normal cannot be computed.
pub fn intersect_ray_triangle(
    ray: &Ray,
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
    tolerances: &Tolerances,
) -> Option<RayHit> {
    let eps = tolerances.intersection_epsilon;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let pvec = ray.direction.cross(&edge2);
    let det = edge1.dot(&pvec);
    if det.abs() < eps {
        return None;
    }

    let normal = edge1.cross(&edge2).try_normalize(f64::EPSILON)?;
    if normal.dot(&ray.direction).abs() < tolerances.grazing_cosine {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - v0;
    let u = inv_det * tvec.dot(&pvec);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = inv_det * ray.direction.dot(&qvec);
    if !(0.0..=1.0).contains(&v) {
        return None;
    }

    let t = inv_det * edge2.dot(&qvec);
    if t <= eps {
        return None;
    }

    Some(RayHit {
        point: ray.at(t),
        distance: t,
    })
}

/// Whether `p`, assumed to lie on the plane of `(a, b, c)`, is strictly
/// inside the triangle: `u > ε`, `v > ε` and `u + v < 1 - 2ε`.
///
/// `u` weighs the `a -> c` edge and `v` the `a -> b` edge. Points on or near
/// an edge or vertex are rejected.
pub fn point_strictly_inside(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    epsilon: f64,
) -> bool {
    let e0 = c - a;
    let e1 = b - a;
    let e2 = p - a;

    let dot00 = e0.dot(&e0);
    let dot01 = e0.dot(&e1);
    let dot02 = e0.dot(&e2);
    let dot11 = e1.dot(&e1);
    let dot12 = e1.dot(&e2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 || !denom.is_finite() {
        return false;
    }
    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u > epsilon && v > epsilon && u + v < 1.0 - 2.0 * epsilon
}
