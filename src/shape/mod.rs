//! Measurements on paths and multi-part shapes.
//!
//! A shape is a slice of path handles resolved through a
//! [`PathSource`](crate::path::PathSource). Parts may be outer rings or
//! holes; their winding decides which. The engines trust the winding and do
//! not repair it. Every function here is a pure function of its inputs.

mod area;
mod centroid;
mod containment;
mod distance;

pub use area::{
    max_area_part, planar_path_area, planar_shape_area, spherical_path_area,
    spherical_path_area_with, spherical_shape_area, spherical_shape_area_projected,
    spherical_shape_area_projected_with, spherical_shape_area_with,
};
pub use centroid::{average_vertex, path_centroid, shape_centroid};
pub use containment::{
    point_in_ring, point_in_shape, ray_intersection, ring_crossings, x_intercept, y_intercept,
    RayHit, RingCrossings,
};
pub use distance::{
    point_segment_distance_squared, point_to_path_distance, point_to_points_distance,
    point_to_shape_distance, signed_point_to_shape_distance,
};

use crate::primitives::Point2;

/// Calls `f` for every edge of the implicitly closed path, including the
/// closing edge from the last vertex back to the first. A single vertex
/// yields one zero-length edge; an empty path yields nothing.
#[inline]
pub(crate) fn for_each_edge<F, I, G>(points: I, mut f: G)
where
    F: Copy,
    I: IntoIterator<Item = Point2<F>>,
    G: FnMut(Point2<F>, Point2<F>),
{
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return;
    };
    let mut prev = first;
    for p in iter {
        f(prev, p);
        prev = p;
    }
    f(prev, first);
}
