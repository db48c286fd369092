//! Distances from a point to path boundaries.

use super::containment::point_in_shape;
use super::for_each_edge;
use crate::path::PathSource;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Squared distance from `p` to segment `ab`; point-to-point when `a == b`.
#[inline]
pub fn point_segment_distance_squared<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    Segment2::new(a, b).distance_squared_to_point(p)
}

/// Distance from `p` to the nearest edge of an implicitly closed path.
///
/// Returns infinity for an empty path and the point distance for a
/// single-vertex path.
pub fn point_to_points_distance<F, I>(p: Point2<F>, points: I) -> F
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let mut min_sq = F::infinity();
    for_each_edge(points, |a, b| {
        min_sq = min_sq.min(point_segment_distance_squared(p, a, b));
    });
    min_sq.sqrt()
}

/// [`point_to_points_distance`] over a path resolved through `source`.
pub fn point_to_path_distance<F, S>(p: Point2<F>, path: &S::Path, source: &S) -> F
where
    F: Float,
    S: PathSource<F>,
{
    point_to_points_distance(p, source.points(path))
}

/// Unsigned distance from `p` to the nearest boundary of any part.
///
/// The magnitude is the same inside and outside the shape; see
/// [`signed_point_to_shape_distance`] for a signed variant. Infinity for a
/// shape with no vertices.
pub fn point_to_shape_distance<F, S>(p: Point2<F>, shape: &[S::Path], source: &S) -> F
where
    F: Float,
    S: PathSource<F>,
{
    shape.iter().fold(F::infinity(), |min, path| {
        min.min(point_to_path_distance(p, path, source))
    })
}

/// [`point_to_shape_distance`] negated when [`point_in_shape`] holds.
pub fn signed_point_to_shape_distance<F, S>(p: Point2<F>, shape: &[S::Path], source: &S) -> F
where
    F: Float,
    S: PathSource<F>,
{
    let d = point_to_shape_distance(p, shape, source);
    if point_in_shape(p, shape, source) {
        -d
    } else {
        d
    }
}
