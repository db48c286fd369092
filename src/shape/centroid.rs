//! Area-weighted centroids.

use super::area::max_area_part;
use crate::path::PathSource;
use crate::primitives::Point2;
use num_traits::Float;

/// Running mean of path vertices where a closing vertex that repeats the
/// first one is counted once.
struct VertexMean<F> {
    first: Point2<F>,
    last: Point2<F>,
    sum_x: F,
    sum_y: F,
    count: usize,
}

impl<F: Float> VertexMean<F> {
    fn new(first: Point2<F>) -> Self {
        Self {
            first,
            last: first,
            sum_x: F::zero(),
            sum_y: F::zero(),
            count: 0,
        }
    }

    #[inline]
    fn push(&mut self, p: Point2<F>) {
        self.sum_x = self.sum_x + p.x;
        self.sum_y = self.sum_y + p.y;
        self.count += 1;
        self.last = p;
    }

    fn finish(self) -> Point2<F> {
        let (mut sum_x, mut sum_y, mut count) = (self.sum_x, self.sum_y, self.count);
        if count == 0 || self.last != self.first {
            sum_x = sum_x + self.first.x;
            sum_y = sum_y + self.first.y;
            count += 1;
        }
        let n = F::from(count).unwrap();
        Point2::new(sum_x / n, sum_y / n)
    }
}

/// Mean of the vertices of a path.
///
/// When the last vertex repeats the first (an explicitly closed ring) that
/// vertex is counted once. Returns `None` for an empty path.
pub fn average_vertex<F, I>(points: I) -> Option<Point2<F>>
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let mut iter = points.into_iter();
    let mut mean = VertexMean::new(iter.next()?);
    for p in iter {
        mean.push(p);
    }
    Some(mean.finish())
}

/// Centroid of the region enclosed by an implicitly closed path.
///
/// Uses the first-moment sums of the shoelace formula. When the enclosed
/// area is exactly zero (collinear vertices, fewer than three vertices) the
/// result falls back to [`average_vertex`]. Both are gathered in the same
/// pass, so the sequence is consumed once. Returns `None` for an empty
/// path.
pub fn path_centroid<F, I>(points: I) -> Option<Point2<F>>
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut mean = VertexMean::new(first);
    let (mut sum, mut sum_x, mut sum_y) = (F::zero(), F::zero(), F::zero());
    let mut moment = |a: Point2<F>, b: Point2<F>| {
        let cross = a.x * b.y - b.x * a.y;
        sum = sum + cross;
        sum_x = sum_x + cross * (a.x + b.x);
        sum_y = sum_y + cross * (a.y + b.y);
    };

    let mut prev = first;
    for p in iter {
        moment(prev, p);
        mean.push(p);
        prev = p;
    }
    moment(prev, first);

    let area = sum / F::from(2.0).unwrap();
    if area == F::zero() {
        return Some(mean.finish());
    }
    let k = F::from(6.0).unwrap() * area;
    Some(Point2::new(sum_x / k, sum_y / k))
}

/// Centroid of the part picked by [`max_area_part`].
///
/// Holes and secondary parts are ignored; the result represents the
/// shape's main ring. Returns `None` for a shape without parts or when the
/// picked part is empty.
pub fn shape_centroid<F, S>(shape: &[S::Path], source: &S) -> Option<Point2<F>>
where
    F: Float,
    S: PathSource<F>,
{
    let part = max_area_part(shape, source)?;
    path_centroid(source.points(part))
}
