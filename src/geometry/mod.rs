// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - triangles, bounds and ray queries

mod bbox;
mod intersection;
mod primitives;
mod triangle;

pub use bbox::{BoundingBox, ModelBounds};
pub use intersection::{intersect_ray_triangle, point_strictly_inside, Ray, RayHit, Tolerances};
pub use primitives::Primitive;
pub use triangle::Triangle;
