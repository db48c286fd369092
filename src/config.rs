//! Parameters for geographic (decimal-degree) measurements.

use num_traits::Float;

/// Radius in meters of the sphere used for geographic areas.
pub const AUTHALIC_RADIUS: f64 = 6378137.0;

/// Slack in degrees allowed around the world extent before coordinates are
/// rejected as "not decimal degrees".
pub const DEGREE_MARGIN: f64 = 1.0;

/// Earth model and precondition tolerance used by the spherical area
/// functions and the equal-area projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoConfig<F> {
    /// Sphere radius in output length units (meters by default).
    pub radius: F,
    /// Degrees of slack around `[-180, -90, 180, 90]`.
    pub degree_margin: F,
}

impl<F: Float> GeoConfig<F> {
    /// Replaces the sphere radius.
    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    /// Replaces the slack, in degrees, around the world extent.
    pub fn with_degree_margin(mut self, margin: F) -> Self {
        self.degree_margin = margin;
        self
    }
}

impl<F: Float> Default for GeoConfig<F> {
    fn default() -> Self {
        Self {
            radius: F::from(AUTHALIC_RADIUS).unwrap(),
            degree_margin: F::from(DEGREE_MARGIN).unwrap(),
        }
    }
}
