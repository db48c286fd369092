//! Vertex coordinates.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A vertex of a path, `(x, y)`.
///
/// For geographic data `x` is longitude and `y` is latitude, both in
/// decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self::new((self.x + other.x) / two, (self.y + other.y) / two)
    }

    /// Point at parameter `t` on the line from `self` to `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    #[inline]
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}
