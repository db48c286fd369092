//! Point-in-ring and point-in-shape tests by ray casting.

use super::for_each_edge;
use crate::path::PathSource;
use crate::primitives::Point2;
use num_traits::Float;

/// Outcome of testing a ray against one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RayHit {
    /// The ray does not cross the segment.
    Miss,
    /// The ray crosses the segment.
    Hit,
    /// The query point lies on the segment. Reported for the vertices and
    /// the interior of sloped segments, except where the first rule of
    /// [`ray_intersection`] already rejects the point.
    Boundary,
}

/// `y` of the line through `a` and `b` at `x`. Undefined for vertical lines.
#[inline]
pub fn y_intercept<F: Float>(x: F, a: Point2<F>, b: Point2<F>) -> F {
    a.y + (x - a.x) * (b.y - a.y) / (b.x - a.x)
}

/// `x` of the line through `a` and `b` at `y`. Undefined for horizontal lines.
#[inline]
pub fn x_intercept<F: Float>(y: F, a: Point2<F>, b: Point2<F>) -> F {
    a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y)
}

/// Tests a ray cast from `p` towards increasing `y` against segment `ab`.
///
/// The cases are checked in this order:
///
/// 1. `p.x` outside the segment's x-range, or `p.y` at or above both
///    endpoints: `Miss`.
/// 2. `p.x == a.x`: `Boundary` if `p` is `a`; `Hit` if `b` lies to the
///    left and `p` is below `a`; otherwise `Miss`.
/// 3. `p.x == b.x`: the same with the endpoints swapped.
/// 4. `p.y` below both endpoints: `Hit`.
/// 5. Otherwise compare the segment's y at `p.x` with `p.y`: above is a
///    `Hit`, equal is `Boundary`, below is a `Miss`.
///
/// Counting a vertex only when the other endpoint lies to the left makes a
/// ray through a shared vertex count once where the ring crosses the ray's
/// column and an even number of times where it only touches it. Vertical
/// edges never count.
pub fn ray_intersection<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>) -> RayHit {
    if (p.x < a.x && p.x < b.x) || (p.x > a.x && p.x > b.x) || (p.y >= a.y && p.y >= b.y) {
        RayHit::Miss
    } else if p.x == a.x {
        vertex_hit(p, a, b)
    } else if p.x == b.x {
        vertex_hit(p, b, a)
    } else if p.y < a.y && p.y < b.y {
        RayHit::Hit
    } else {
        let y = y_intercept(p.x, a, b);
        if y > p.y {
            RayHit::Hit
        } else if y == p.y {
            RayHit::Boundary
        } else {
            RayHit::Miss
        }
    }
}

/// Ray test when `p` is in the same column as `vertex`.
#[inline]
fn vertex_hit<F: Float>(p: Point2<F>, vertex: Point2<F>, other: Point2<F>) -> RayHit {
    if p.y == vertex.y {
        RayHit::Boundary
    } else if other.x < p.x && p.y < vertex.y {
        RayHit::Hit
    } else {
        RayHit::Miss
    }
}

/// Ray-test tallies for one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingCrossings {
    /// Segments classified as [`RayHit::Hit`].
    pub hits: usize,
    /// Segments classified as [`RayHit::Boundary`].
    pub boundary: usize,
}

impl RingCrossings {
    /// Even-odd parity of the hits. Boundary touches do not count.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.hits % 2 == 1
    }

    /// Returns `true` if the ray test found the point on the ring.
    ///
    /// Detection covers vertices and sloped edges; points inside a
    /// horizontal or vertical edge are classified by parity only.
    #[inline]
    pub fn touches_boundary(&self) -> bool {
        self.boundary > 0
    }
}

/// Classifies every edge of an implicitly closed ring against a ray from `p`.
pub fn ring_crossings<F, I>(p: Point2<F>, points: I) -> RingCrossings
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let mut tally = RingCrossings::default();
    for_each_edge(points, |a, b| match ray_intersection(p, a, b) {
        RayHit::Hit => tally.hits += 1,
        RayHit::Boundary => tally.boundary += 1,
        RayHit::Miss => {}
    });
    tally
}

/// Even-odd point-in-ring test.
///
/// A point on the boundary gets whatever parity the non-boundary edges give
/// it. The result is deterministic but not a boundary classification; use
/// [`ring_crossings`] to detect touches.
pub fn point_in_ring<F, S>(p: Point2<F>, path: &S::Path, source: &S) -> bool
where
    F: Float,
    S: PathSource<F>,
{
    ring_crossings(p, source.points(path)).is_inside()
}

/// Even-odd composition over the parts of a shape: `p` is inside when an odd
/// number of rings contain it, so a point in a hole is outside.
pub fn point_in_shape<F, S>(p: Point2<F>, shape: &[S::Path], source: &S) -> bool
where
    F: Float,
    S: PathSource<F>,
{
    let rings = shape
        .iter()
        .filter(|&path| point_in_ring(p, path, source))
        .count();
    rings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{ArcCollection, RingSet};

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn ray(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> RayHit {
        ray_intersection(p(px, py), p(ax, ay), p(bx, by))
    }

    fn rect() -> (RingSet<f64>, crate::path::RingId) {
        let mut rings: RingSet<f64> = RingSet::new();
        let id = rings.push([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
        (rings, id)
    }

    #[test]
    fn test_ray_outside_column_or_above() {
        assert_eq!(ray(-1.0, 0.0, 0.0, 1.0, 2.0, 1.0), RayHit::Miss);
        assert_eq!(ray(3.0, 0.0, 0.0, 1.0, 2.0, 1.0), RayHit::Miss);
        assert_eq!(ray(1.0, 1.0, 0.0, 1.0, 2.0, 1.0), RayHit::Miss);
        assert_eq!(ray(1.0, 5.0, 0.0, 1.0, 2.0, 3.0), RayHit::Miss);
    }

    #[test]
    fn test_ray_crosses_below_segment() {
        assert_eq!(ray(1.0, 0.0, 0.0, 1.0, 2.0, 3.0), RayHit::Hit);
        assert_eq!(ray(1.0, 0.0, 2.0, 3.0, 0.0, 1.0), RayHit::Hit);
    }

    #[test]
    fn test_ray_against_sloped_segment() {
        // segment y = x from (0,0) to (4,4)
        assert_eq!(ray(2.0, 1.0, 0.0, 0.0, 4.0, 4.0), RayHit::Hit);
        assert_eq!(ray(2.0, 2.0, 0.0, 0.0, 4.0, 4.0), RayHit::Boundary);
        assert_eq!(ray(2.0, 3.0, 0.0, 0.0, 4.0, 4.0), RayHit::Miss);
    }

    #[test]
    fn test_ray_through_vertex() {
        assert_eq!(ray(0.0, 1.0, 0.0, 1.0, 2.0, 3.0), RayHit::Boundary);
        // the upper vertex is already excluded by the column/height check
        assert_eq!(ray(2.0, 3.0, 0.0, 1.0, 2.0, 3.0), RayHit::Miss);
        // vertex counts only when the other end lies to the left
        assert_eq!(ray(2.0, 0.0, 0.0, 1.0, 2.0, 3.0), RayHit::Hit);
        assert_eq!(ray(2.0, 0.0, 2.0, 3.0, 0.0, 1.0), RayHit::Hit);
        assert_eq!(ray(0.0, 0.0, 0.0, 1.0, 2.0, 3.0), RayHit::Miss);
        assert_eq!(ray(0.0, 0.0, 2.0, 3.0, 0.0, 1.0), RayHit::Miss);
    }

    #[test]
    fn test_ray_vertical_and_degenerate_segments() {
        assert_eq!(ray(1.0, 0.0, 1.0, 1.0, 1.0, 3.0), RayHit::Miss);
        assert_eq!(ray(1.0, 2.0, 1.0, 1.0, 1.0, 3.0), RayHit::Miss);
        assert_eq!(ray(1.0, 1.0, 1.0, 1.0, 1.0, 3.0), RayHit::Boundary);
        assert_eq!(ray(1.0, 1.0, 1.0, 1.0, 1.0, 1.0), RayHit::Miss);
        assert_eq!(ray(1.0, 0.0, 1.0, 1.0, 1.0, 1.0), RayHit::Miss);
    }

    #[test]
    fn test_ray_vertex_shared_by_two_edges_counts_once() {
        // apex of a roof: (0,0) -> (2,2) -> (4,0), ray straight up through x = 2
        let left = ray(2.0, 1.0, 0.0, 0.0, 2.0, 2.0);
        let right = ray(2.0, 1.0, 2.0, 2.0, 4.0, 0.0);
        assert_eq!((left, right), (RayHit::Hit, RayHit::Miss));
    }

    #[test]
    fn test_intercepts() {
        let a = p(0.0, 1.0);
        let b = p(4.0, 3.0);
        assert_eq!(y_intercept(2.0, a, b), 2.0);
        assert_eq!(x_intercept(2.0, a, b), 2.0);
        assert_eq!(y_intercept(4.0, a, b), 3.0);
    }

    #[test]
    fn test_point_in_rectangle() {
        let (rings, r) = rect();
        assert!(point_in_ring(p(2.0, 1.5), &r, &rings));
        assert!(!point_in_ring(p(5.0, 1.5), &r, &rings));
        assert!(!point_in_ring(p(2.0, 4.0), &r, &rings));
        assert!(!point_in_ring(p(2.0, -1.0), &r, &rings));
    }

    #[test]
    fn test_points_on_rectangle_edges_are_reproducible() {
        let (rings, r) = rect();
        // right and left vertical edges
        assert!(point_in_ring(p(4.0, 1.5), &r, &rings));
        assert!(!point_in_ring(p(0.0, 1.5), &r, &rings));
        // bottom and top horizontal edges
        assert!(point_in_ring(p(2.0, 0.0), &r, &rings));
        assert!(!point_in_ring(p(2.0, 3.0), &r, &rings));
        for _ in 0..3 {
            assert!(point_in_ring(p(4.0, 1.5), &r, &rings));
        }
    }

    #[test]
    fn test_boundary_touches_are_reported() {
        let (rings, r) = rect();
        let corner = ring_crossings(p(4.0, 0.0), rings.points(&r));
        assert!(corner.touches_boundary());
        assert_eq!(corner, RingCrossings { hits: 1, boundary: 1 });

        // upper corners sit at the top of every edge that meets them
        let top = ring_crossings(p(4.0, 3.0), rings.points(&r));
        assert_eq!(top, RingCrossings::default());

        let inside = ring_crossings(p(2.0, 1.5), rings.points(&r));
        assert_eq!(inside, RingCrossings { hits: 1, boundary: 0 });
        assert!(inside.is_inside());

        let mut tri: RingSet<f64> = RingSet::new();
        let t = tri.push([(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let on_slope = ring_crossings(p(2.0, 2.0), tri.points(&t));
        assert!(on_slope.touches_boundary());
        assert!(!on_slope.is_inside());
    }

    #[test]
    fn test_ray_through_vertex_of_diamond() {
        let mut rings: RingSet<f64> = RingSet::new();
        let d = rings.push([(2.0, 0.0), (4.0, 2.0), (2.0, 4.0), (0.0, 2.0)]);
        // ray from (2,1) passes through the top vertex (2,4)
        assert!(point_in_ring(p(2.0, 1.0), &d, &rings));
        // ray from below passes through both bottom and top vertices
        assert!(!point_in_ring(p(2.0, -1.0), &d, &rings));
        // ray from the left corner column
        assert!(!point_in_ring(p(0.0, 0.0), &d, &rings));
    }

    #[test]
    fn test_degenerate_rings() {
        let mut rings: RingSet<f64> = RingSet::new();
        let empty = rings.push(Vec::<(f64, f64)>::new());
        let single = rings.push([(1.0, 1.0)]);
        assert!(!point_in_ring(p(1.0, 0.0), &empty, &rings));
        assert!(!point_in_ring(p(1.0, 0.0), &single, &rings));
        assert_eq!(
            ring_crossings(p(1.0, 1.0), rings.points(&single)),
            RingCrossings::default()
        );
    }

    #[test]
    fn test_point_in_shape_with_hole() {
        let mut rings: RingSet<f64> = RingSet::new();
        let shape = rings.push_shape(vec![
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
            vec![(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)],
        ]);
        assert!(!point_in_shape(p(5.0, 5.0), &shape, &rings));
        assert!(point_in_shape(p(1.0, 5.0), &shape, &rings));
        assert!(point_in_shape(p(5.0, 8.5), &shape, &rings));
        assert!(!point_in_shape(p(11.0, 5.0), &shape, &rings));
        assert!(!point_in_shape::<f64, RingSet<f64>>(p(5.0, 5.0), &[], &rings));
    }

    #[test]
    fn test_point_in_multipolygon() {
        let mut rings: RingSet<f64> = RingSet::new();
        let shape = rings.push_shape(vec![
            vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)],
            vec![(5.0, 0.0), (7.0, 0.0), (7.0, 2.0), (5.0, 2.0)],
        ]);
        assert!(point_in_shape(p(1.0, 1.0), &shape, &rings));
        assert!(point_in_shape(p(6.0, 1.0), &shape, &rings));
        assert!(!point_in_shape(p(3.5, 1.0), &shape, &rings));
    }

    #[test]
    fn test_point_in_ring_from_arcs() {
        let arcs: ArcCollection<f64> = ArcCollection::from_arcs(vec![
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)],
            vec![(4.0, 3.0), (0.0, 3.0), (0.0, 0.0)],
        ]);
        let ring = arcs.path([0, 1]).unwrap();
        assert!(point_in_ring(p(2.0, 1.5), &ring, &arcs));
        assert!(point_in_ring(p(2.0, 1.5), &ring.reversed(), &arcs));
        assert!(!point_in_ring(p(-2.0, 1.5), &ring, &arcs));
    }

    fn count_inside<F, S>(points: &[Point2<F>], shape: &[S::Path], source: &S) -> usize
    where
        F: Float,
        S: PathSource<F>,
    {
        points.iter().filter(|&&q| point_in_shape(q, shape, source)).count()
    }

    #[test]
    fn test_point_in_shape_from_generic_caller() {
        let outer = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let hole = vec![(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)];
        let queries = [p(1.0, 5.0), p(5.0, 5.0), p(5.0, 8.5), p(11.0, 5.0)];

        let mut rings: RingSet<f64> = RingSet::new();
        let ring_shape = rings.push_shape(vec![outer.clone(), hole.clone()]);
        assert_eq!(count_inside(&queries, &ring_shape, &rings), 2);

        let arcs: ArcCollection<f64> = ArcCollection::from_arcs(vec![outer, hole]);
        let arc_shape = arcs.shape(vec![vec![0], vec![1]]).unwrap();
        assert_eq!(count_inside(&queries, &arc_shape, &arcs), 2);
        assert!(!point_in_shape(p(5.0, 5.0), &arc_shape, &arcs));
        assert!(point_in_shape(p(5.0, 8.5), &arc_shape, &arcs));
    }
}
