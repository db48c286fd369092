//! Lazy coordinate transforms applied to point sequences.

use crate::config::GeoConfig;
use crate::primitives::Point2;
use num_traits::Float;

/// A point-wise coordinate transform.
pub trait Projection<F> {
    fn project(&self, p: Point2<F>) -> Point2<F>;
}

impl<F, P: Projection<F> + ?Sized> Projection<F> for &P {
    #[inline]
    fn project(&self, p: Point2<F>) -> Point2<F> {
        (**self).project(p)
    }
}

/// Gall orthographic (Gall-Peters) cylindrical equal-area projection of
/// longitude/latitude in decimal degrees onto a sphere of the configured
/// radius.
///
/// `x' = x * R * (pi / 180) / sqrt(2)`, `y' = R * sqrt(2) * sin(y * pi / 180)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallOrthographic<F> {
    kx: F,
    ky: F,
}

impl<F: Float> GallOrthographic<F> {
    /// Creates the projection for a sphere of `radius`.
    pub fn new(radius: F) -> Self {
        let sqrt2 = F::from(2.0).unwrap().sqrt();
        Self {
            kx: radius * F::from(std::f64::consts::PI / 180.0).unwrap() / sqrt2,
            ky: radius * sqrt2,
        }
    }

    /// Creates the projection for the radius in `config`.
    pub fn from_config(config: &GeoConfig<F>) -> Self {
        Self::new(config.radius)
    }
}

impl<F: Float> Default for GallOrthographic<F> {
    fn default() -> Self {
        Self::from_config(&GeoConfig::default())
    }
}

impl<F: Float> Projection<F> for GallOrthographic<F> {
    #[inline]
    fn project(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(p.x * self.kx, self.ky * p.y.to_radians().sin())
    }
}

/// Iterator adapter that projects each point as it is consumed.
#[derive(Debug, Clone)]
pub struct Projected<I, P> {
    inner: I,
    projection: P,
}

impl<F, I, P> Iterator for Projected<I, P>
where
    I: Iterator<Item = Point2<F>>,
    P: Projection<F>,
{
    type Item = Point2<F>;

    #[inline]
    fn next(&mut self) -> Option<Point2<F>> {
        self.inner.next().map(|p| self.projection.project(p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Adds [`projected`](ProjectExt::projected) to every point iterator.
pub trait ProjectExt<F>: Iterator<Item = Point2<F>> + Sized {
    /// Projects points lazily as they are pulled; nothing is materialized.
    fn projected<P: Projection<F>>(self, projection: P) -> Projected<Self, P> {
        Projected {
            inner: self,
            projection,
        }
    }
}

impl<F, I: Iterator<Item = Point2<F>>> ProjectExt<F> for I {}
