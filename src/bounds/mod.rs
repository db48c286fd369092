//! Axis-aligned bounding boxes over path vertices.

mod rect;

pub use rect::{path_bounds, probably_decimal_degrees, Bounds};
