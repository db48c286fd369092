//! Mutable bounding-box accumulator.

use crate::primitives::Point2;
use num_traits::Float;

/// An axis-aligned bounding box that grows as points are merged into it.
///
/// A freshly created box is empty: it contains nothing and has zero area
/// until the first point is merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<F> {
    pub xmin: F,
    pub ymin: F,
    pub xmax: F,
    pub ymax: F,
}

impl<F: Float> Bounds<F> {
    /// Creates an empty box.
    #[inline]
    pub fn empty() -> Self {
        Self {
            xmin: F::infinity(),
            ymin: F::infinity(),
            xmax: F::neg_infinity(),
            ymax: F::neg_infinity(),
        }
    }

    /// Creates a box from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            xmin: a.x.min(b.x),
            ymin: a.y.min(b.y),
            xmax: a.x.max(b.x),
            ymax: a.y.max(b.y),
        }
    }

    /// Accumulates every point of an iterator. Returns an empty box for an
    /// empty iterator.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut bounds = Self::empty();
        for p in points {
            bounds.merge_point(p);
        }
        bounds
    }

    /// Returns `true` if no point has been merged yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.xmin <= self.xmax && self.ymin <= self.ymax)
    }

    /// Grows the box to include `p`.
    #[inline]
    pub fn merge_point(&mut self, p: Point2<F>) {
        self.xmin = self.xmin.min(p.x);
        self.ymin = self.ymin.min(p.y);
        self.xmax = self.xmax.max(p.x);
        self.ymax = self.ymax.max(p.y);
    }

    /// Grows the box to include `other`. Merging an empty box is a no-op.
    pub fn merge_bounds(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.xmin = self.xmin.min(other.xmin);
        self.ymin = self.ymin.min(other.ymin);
        self.xmax = self.xmax.max(other.xmax);
        self.ymax = self.ymax.max(other.ymax);
    }

    /// `xmax - xmin`, or zero for an empty box.
    #[inline]
    pub fn width(&self) -> F {
        if self.is_empty() {
            F::zero()
        } else {
            self.xmax - self.xmin
        }
    }

    /// `ymax - ymin`, or zero for an empty box.
    #[inline]
    pub fn height(&self) -> F {
        if self.is_empty() {
            F::zero()
        } else {
            self.ymax - self.ymin
        }
    }

    /// Width times height; zero for empty and degenerate (line or point) boxes.
    #[inline]
    pub fn area(&self) -> F {
        self.width() * self.height()
    }

    pub fn center(&self) -> Option<Point2<F>> {
        if self.is_empty() {
            return None;
        }
        Some(Point2::new(self.xmin, self.ymin).midpoint(Point2::new(self.xmax, self.ymax)))
    }

    /// Inclusive point test.
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Returns `true` if `other` lies inside this box. Every box contains an
    /// empty box.
    pub fn contains_bounds(&self, other: &Self) -> bool {
        other.is_empty()
            || (other.xmin >= self.xmin
                && other.ymin >= self.ymin
                && other.xmax <= self.xmax
                && other.ymax <= self.ymax)
    }
}

impl<F: Float> Default for Bounds<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bounding box of a flat point list.
pub fn path_bounds<F: Float>(points: &[Point2<F>]) -> Bounds<F> {
    Bounds::from_points(points.iter().copied())
}

/// Heuristic test for longitude/latitude data: the box must fit inside the
/// world extent `[-180, -90, 180, 90]` widened by `margin` degrees.
///
/// Empty bounds pass, since there is nothing to measure.
pub fn probably_decimal_degrees<F: Float>(bounds: &Bounds<F>, margin: F) -> bool {
    let lon = F::from(180.0).unwrap() + margin;
    let lat = F::from(90.0).unwrap() + margin;
    let world = Bounds {
        xmin: -lon,
        ymin: -lat,
        xmax: lon,
        ymax: lat,
    };
    world.contains_bounds(bounds)
}
