//! Paths stored as parallel coordinate arrays.

use crate::error::{GeomError, GeomResult};
use crate::primitives::Point2;
use num_traits::Float;

/// A range of vertices inside parallel `xs` / `ys` arrays.
///
/// Construction checks the range, so iteration never indexes out of bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPath<'a, F> {
    xs: &'a [F],
    ys: &'a [F],
}

impl<'a, F: Float> FlatPath<'a, F> {
    /// Selects `len` vertices starting at `start`. `None` selects everything
    /// from `start` to the end of the arrays.
    pub fn new(xs: &'a [F], ys: &'a [F], start: usize, len: Option<usize>) -> GeomResult<Self> {
        if xs.len() != ys.len() {
            return Err(GeomError::MismatchedCoordinates {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let available = xs.len();
        let len = len.unwrap_or_else(|| available.saturating_sub(start));
        match start.checked_add(len) {
            Some(end) if start <= available && end <= available => Ok(Self {
                xs: &xs[start..end],
                ys: &ys[start..end],
            }),
            _ => {
                tracing::warn!(start, len, available, "coordinate range out of bounds");
                Err(GeomError::IndexOutOfBounds {
                    start,
                    len,
                    available,
                })
            }
        }
    }

    /// The whole of both arrays.
    pub fn whole(xs: &'a [F], ys: &'a [F]) -> GeomResult<Self> {
        Self::new(xs, ys, 0, None)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> FlatPoints<'a, F> {
        FlatPoints {
            xs: self.xs,
            ys: self.ys,
            i: 0,
        }
    }
}

impl<'a, F: Float> IntoIterator for FlatPath<'a, F> {
    type Item = Point2<F>;
    type IntoIter = FlatPoints<'a, F>;

    fn into_iter(self) -> FlatPoints<'a, F> {
        self.points()
    }
}

/// Iterator over the vertices of a [`FlatPath`].
#[derive(Debug, Clone)]
pub struct FlatPoints<'a, F> {
    xs: &'a [F],
    ys: &'a [F],
    i: usize,
}

impl<F: Float> Iterator for FlatPoints<'_, F> {
    type Item = Point2<F>;

    #[inline]
    fn next(&mut self) -> Option<Point2<F>> {
        let p = Point2::new(*self.xs.get(self.i)?, *self.ys.get(self.i)?);
        self.i += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.xs.len() - self.i;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for FlatPoints<'_, F> {}

/// Splits a point list into parallel `xs` / `ys` arrays.
pub fn transpose_points<F: Float>(points: &[Point2<F>]) -> (Vec<F>, Vec<F>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}
