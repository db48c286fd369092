//! Offset between two vertices.

use num_traits::Float;
use std::ops::{Add, Mul, Sub};

/// A 2D displacement, produced by subtracting one [`Point2`](super::Point2)
/// from another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    /// Offset along x.
    pub x: F,
    /// Offset along y.
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 3D cross product. Positive when `other` turns
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_cross() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_components() {
        let v: Vec2<f64> = Vec2::new(3.0, -4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, -4.0);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));
    }
}
