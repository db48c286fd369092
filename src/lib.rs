//! shapegeom - measurements on polygonal shapes
//!
//! Signed area (planar, spherical and equal-area projected), centroid,
//! point containment and boundary distance for paths and multi-ring shapes.
//! Paths are consumed as lazy point sequences resolved through a
//! [`PathSource`], so coordinates are never copied or transformed in bulk.
//!
//! ```
//! use shapegeom::path::RingSet;
//! use shapegeom::shape::{planar_shape_area, point_in_shape};
//! use shapegeom::Point2;
//!
//! let mut rings: RingSet<f64> = RingSet::new();
//! let shape = rings.push_shape(vec![
//!     vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
//!     vec![(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)], // hole
//! ]);
//!
//! assert_eq!(planar_shape_area(&shape, &rings), 84.0);
//! assert!(!point_in_shape(Point2::new(5.0, 5.0), &shape, &rings));
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod path;
pub mod primitives;
pub mod shape;

pub use bounds::Bounds;
pub use config::GeoConfig;
pub use error::{GeomError, GeomResult};
pub use path::PathSource;
pub use primitives::{Point2, Segment2, Vec2};
pub use shape::RayHit;
