//! In-memory ring storage.

use super::PathSource;
use crate::bounds::Bounds;
use crate::primitives::Point2;
use num_traits::Float;
use std::iter::Copied;
use std::slice::Iter;

/// Handle of a ring stored in a [`RingSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingId(usize);

impl RingId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A collection of independent rings, each stored as its own vertex list.
///
/// Suited to callers that already hold materialized coordinates. A
/// [`RingId`] from a different set resolves to an empty ring when its index
/// is out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSet<F> {
    rings: Vec<Vec<Point2<F>>>,
    bounds: Bounds<F>,
}

impl<F: Float> RingSet<F> {
    pub fn new() -> Self {
        Self {
            rings: Vec::new(),
            bounds: Bounds::empty(),
        }
    }

    /// Stores a ring and returns its handle.
    pub fn push<I>(&mut self, ring: I) -> RingId
    where
        I: IntoIterator,
        I::Item: Into<Point2<F>>,
    {
        let ring: Vec<Point2<F>> = ring.into_iter().map(Into::into).collect();
        for &p in &ring {
            self.bounds.merge_point(p);
        }
        self.rings.push(ring);
        RingId(self.rings.len() - 1)
    }

    /// Stores several rings and returns their handles as one shape.
    pub fn push_shape<R, I>(&mut self, rings: R) -> Vec<RingId>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<Point2<F>>,
    {
        rings.into_iter().map(|ring| self.push(ring)).collect()
    }

    pub fn ring(&self, id: RingId) -> &[Point2<F>] {
        self.rings.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

impl<F: Float> Default for RingSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> PathSource<F> for RingSet<F> {
    type Path = RingId;
    type Points<'a>
        = Copied<Iter<'a, Point2<F>>>
    where
        Self: 'a;

    fn points<'a>(&'a self, path: &'a RingId) -> Self::Points<'a> {
        self.ring(*path).iter().copied()
    }

    fn bounds(&self) -> Bounds<F> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_resolve() {
        let mut set: RingSet<f64> = RingSet::new();
        let a = set.push([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let b = set.push([[10.0, 10.0], [11.0, 12.0]]);
        assert_eq!(set.len(), 2);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);

        let pts: Vec<_> = set.points(&b).collect();
        assert_eq!(pts, vec![Point2::new(10.0, 10.0), Point2::new(11.0, 12.0)]);
    }

    #[test]
    fn test_bounds_track_every_ring() {
        let mut set: RingSet<f64> = RingSet::new();
        assert!(set.bounds().is_empty());
        let ids = set.push_shape(vec![
            vec![(0.0, 0.0), (1.0, 1.0)],
            vec![(-2.0, 5.0), (3.0, 0.5)],
        ]);
        assert_eq!(ids.len(), 2);
        let b = set.bounds();
        assert_eq!((b.xmin, b.ymin, b.xmax, b.ymax), (-2.0, 0.0, 3.0, 5.0));
        let pb = set.path_bounds(&ids[0]);
        assert_eq!(pb.area(), 1.0);
    }

    #[test]
    fn test_foreign_id_is_empty() {
        let mut big: RingSet<f64> = RingSet::new();
        big.push([(0.0, 0.0)]);
        let id = big.push([(1.0, 1.0)]);
        let small: RingSet<f64> = RingSet::new();
        assert_eq!(small.points(&id).count(), 0);
    }
}
