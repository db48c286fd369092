//! Path edges.

use super::{Point2, Vec2};
use num_traits::Float;

/// One edge of a path, from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length_squared(self) -> F {
        self.direction().magnitude_squared()
    }

    /// Returns `true` when both endpoints coincide exactly.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Closest point on the segment to `p`, with its parameter `t` in `[0, 1]`.
    ///
    /// A zero-length segment returns `start` with `t = 0`, so the distance
    /// functions fall back to point-to-point distance.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq == F::zero() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.start.lerp(self.end, t), t)
    }

    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
