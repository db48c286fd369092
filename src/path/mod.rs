//! Point sequences and the collections that produce them.
//!
//! Every measurement consumes a path as a lazy, single-pass
//! `Iterator<Item = Point2<F>>`. Paths are implicitly closed: the closing
//! edge from the last vertex back to the first is never emitted as an extra
//! point, the engines reconstruct it. Rings that already repeat their first
//! vertex at the end are handled too, since the reconstructed closing edge
//! then has zero length.

mod arcs;
mod flat;
mod project;
mod rings;
mod source;

pub use arcs::{reverse_arc_id, ArcCollection, ArcPath, ArcPoints};
pub use flat::{transpose_points, FlatPath, FlatPoints};
pub use project::{GallOrthographic, ProjectExt, Projected, Projection};
pub use rings::{RingId, RingSet};
pub use source::PathSource;
