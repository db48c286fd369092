//! The path-resolving collaborator consumed by the shape engines.

use crate::bounds::Bounds;
use crate::primitives::Point2;
use num_traits::Float;

/// Resolves path handles to fresh point sequences.
///
/// A shape is a slice of `Path` handles, one per part. Each call to
/// [`points`](PathSource::points) must start a new sequence from the first
/// vertex; the engines drain every sequence they request before asking for
/// the next one. Implementations that are `Sync` may be shared across threads,
/// since the engines only read through `&self`.
pub trait PathSource<F: Float> {
    /// Handle identifying one path (ring or open line) in this collection.
    type Path;

    /// Lazy sequence of the vertices of one path, in path order.
    type Points<'a>: Iterator<Item = Point2<F>>
    where
        Self: 'a;

    /// Returns a fresh sequence over the vertices of `path`.
    fn points<'a>(&'a self, path: &'a Self::Path) -> Self::Points<'a>;

    /// Bounds of the whole collection. Used to check that coordinates are
    /// plausibly decimal degrees before spherical measurements.
    fn bounds(&self) -> Bounds<F>;

    /// Bounds of a single path.
    fn path_bounds(&self, path: &Self::Path) -> Bounds<F> {
        Bounds::from_points(self.points(path))
    }
}
