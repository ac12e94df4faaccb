// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Ray-cast triangle classification
//!
//! For every triangle a ray is cast along each configured axis, starting
//! outside the model's bounding sphere and passing through the triangle's
//! center. Along a ray the farthest hit is the back of the solid and the
//! nearest is its front; every surface crossed in between lies inside a
//! concavity.

use super::config::{DetectionConfig, RayAxis};
use crate::geometry::{intersect_ray_triangle, point_strictly_inside, ModelBounds, Ray, Tolerances, Triangle};
use rayon::prelude::*;
use tracing::{debug, info};

/// Hits on fewer surfaces than this never bound a pocket
const MIN_BOUNDING_HITS: usize = 3;

/// A validated ray hit on one triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Index into the classified triangle list
    pub triangle: usize,
    pub distance: f64,
}

/// Per-triangle pocket flags from one classification run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// `true` for triangles inside a concavity, indexed like the input
    pub flags: Vec<bool>,
    pub rays_cast: usize,
    /// Rays that crossed enough surfaces to flag anything
    pub rays_flagging: usize,
}

impl Classification {
    pub fn flagged_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}

/// One ray per triangle along `axis`: the triangle center's coordinates on
/// the other two axes, and on `axis` a coordinate just outside the model's
/// bounding sphere
pub fn ray_origins(triangles: &[Triangle], bounds: &ModelBounds, axis: RayAxis, padding: f64) -> Vec<Ray> {
    let k = axis.index();
    let start = bounds.center[k] - bounds.radius - padding;
    let direction = axis.direction();

    triangles
        .iter()
        .map(|tri| {
            let mut origin = tri.center;
            origin[k] = start;
            Ray::new(origin, direction)
        })
        .collect()
}

/// Test `ray` against every triangle, keeping hits that are also strictly
/// inside the triangle. Hits are returned in triangle order.
pub fn cast_ray(ray: &Ray, triangles: &[Triangle], tolerances: &Tolerances) -> Vec<TriangleHit> {
    triangles
        .iter()
        .enumerate()
        .filter_map(|(index, tri)| {
            let [v0, v1, v2] = &tri.vertices;
            let hit = intersect_ray_triangle(ray, v0, v1, v2, tolerances)?;
            point_strictly_inside(&hit.point, v0, v1, v2, tolerances.containment_epsilon).then_some(TriangleHit {
                triangle: index,
                distance: hit.distance,
            })
        })
        .collect()
}

/// Hits strictly between the farthest and the nearest one.
///
/// Returns nothing when fewer than `min_hits` (at least 3) surfaces were
/// crossed. Equal distances keep their incoming order.
pub fn interior_hits(mut hits: Vec<TriangleHit>, min_hits: usize) -> Vec<TriangleHit> {
    if hits.len() < min_hits.max(MIN_BOUNDING_HITS) {
        return Vec::new();
    }
    hits.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    let last = hits.len() - 1;
    hits.drain(1..last).collect()
}

/// Flags triangles inside concavities by multi-axis ray casting
#[derive(Debug, Clone)]
pub struct PocketClassifier<'a> {
    config: &'a DetectionConfig,
    bounds: ModelBounds,
}

impl<'a> PocketClassifier<'a> {
    pub fn new(config: &'a DetectionConfig, bounds: ModelBounds) -> Self {
        Self { config, bounds }
    }

    /// Classify all triangles; the passes over each axis are OR-combined
    pub fn classify(&self, triangles: &[Triangle]) -> Classification {
        let mut classification = Classification {
            flags: vec![false; triangles.len()],
            ..Default::default()
        };

        for &axis in &self.config.axes {
            let rays = ray_origins(triangles, &self.bounds, axis, self.config.origin_padding);
            let per_ray = self.cast_all(&rays, triangles);

            let mut flagging = 0;
            for hits in &per_ray {
                if !hits.is_empty() {
                    flagging += 1;
                }
                for &triangle in hits {
                    classification.flags[triangle] = true;
                }
            }

            debug!(?axis, rays = rays.len(), flagging, "Ray pass complete");
            classification.rays_cast += rays.len();
            classification.rays_flagging += flagging;
        }

        info!(
            triangles = triangles.len(),
            flagged = classification.flagged_count(),
            "Triangle classification complete"
        );
        classification
    }

    /// The rays `classify` would cast, grouped per configured axis
    pub fn rays(&self, triangles: &[Triangle]) -> Vec<(RayAxis, Vec<Ray>)> {
        self.config
            .axes
            .iter()
            .map(|&axis| (axis, ray_origins(triangles, &self.bounds, axis, self.config.origin_padding)))
            .collect()
    }

    /// Interior-hit triangle indices for each ray, in ray order
    fn cast_all(&self, rays: &[Ray], triangles: &[Triangle]) -> Vec<Vec<usize>> {
        let tolerances = &self.config.tolerances;
        let min_hits = self.config.min_hits;
        let interior = |ray: &Ray| -> Vec<usize> {
            interior_hits(cast_ray(ray, triangles, tolerances), min_hits)
                .into_iter()
                .map(|hit| hit.triangle)
                .collect()
        };

        if self.config.parallel {
            rays.par_iter().map(interior).collect()
        } else {
            rays.iter().map(interior).collect()
        }
    }
}
