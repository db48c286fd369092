//! Error types for shape measurements.

use thiserror::Error;

/// Precondition failures raised by shape measurements.
///
/// Degenerate geometry (empty paths, zero area, coincident points) is never
/// an error; those cases have defined fallback values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Spherical measurement requested on coordinates that do not look like
    /// longitude/latitude in decimal degrees.
    #[error(
        "function requires decimal degree coordinates, got bounds \
         [{xmin}, {ymin}, {xmax}, {ymax}]"
    )]
    NotDecimalDegrees {
        /// Smallest x (longitude) in the collection.
        xmin: f64,
        /// Smallest y (latitude) in the collection.
        ymin: f64,
        /// Largest x (longitude) in the collection.
        xmax: f64,
        /// Largest y (latitude) in the collection.
        ymax: f64,
    },

    /// A coordinate range extends past the end of its arrays.
    #[error("out-of-bounds array index: range {start}..{start}+{len} exceeds {available} coordinates")]
    IndexOutOfBounds {
        /// First requested index.
        start: usize,
        /// Number of requested coordinates.
        len: usize,
        /// Length of the coordinate arrays.
        available: usize,
    },

    /// Parallel coordinate arrays have different lengths.
    #[error("coordinate arrays differ in length: {xs} x values, {ys} y values")]
    MismatchedCoordinates {
        /// Length of the x array.
        xs: usize,
        /// Length of the y array.
        ys: usize,
    },

    /// A path references an arc the collection does not contain.
    #[error("arc id {id} does not exist in a collection of {arcs} arcs")]
    UnknownArc {
        /// The offending signed arc id.
        id: i32,
        /// Number of arcs in the collection.
        arcs: usize,
    },
}

/// Result alias for fallible measurements.
pub type GeomResult<T> = Result<T, GeomError>;
