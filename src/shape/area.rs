//! Signed planar and spherical areas.
//!
//! All areas are positive for counter-clockwise rings (x to the right, y
//! up) and negative for clockwise rings, so outer rings and holes of
//! opposite winding cancel when summed over a shape.

use super::for_each_edge;
use crate::bounds::probably_decimal_degrees;
use crate::config::GeoConfig;
use crate::error::{GeomError, GeomResult};
use crate::path::{GallOrthographic, PathSource, ProjectExt};
use crate::primitives::Point2;
use num_traits::Float;

/// Signed area of an implicitly closed path (shoelace formula).
///
/// Empty and single-point paths have zero area.
pub fn planar_path_area<F, I>(points: I) -> F
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let mut sum = F::zero();
    for_each_edge(points, |a, b| {
        sum = sum + (a.x * b.y - b.x * a.y);
    });
    sum / F::from(2.0).unwrap()
}

/// Sum of [`planar_path_area`] over every part of a shape.
pub fn planar_shape_area<F, S>(shape: &[S::Path], source: &S) -> F
where
    F: Float,
    S: PathSource<F>,
{
    shape
        .iter()
        .fold(F::zero(), |area, path| area + planar_path_area(source.points(path)))
}

/// Signed area in square meters of a path in decimal-degree
/// longitude/latitude, on a sphere of the default authalic radius.
///
/// See [`spherical_path_area_with`].
pub fn spherical_path_area<F, I>(points: I) -> F
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    spherical_path_area_with(points, GeoConfig::default().radius)
}

/// Signed area of a longitude/latitude path on a sphere of `radius`.
///
/// Longitude is taken in radians and latitude through `sin`, then the
/// trapezoid form of the shoelace sum is applied in that space and scaled by
/// `radius²`. This is exact for edges of constant latitude or longitude and
/// an approximation otherwise, suited to paths of modest extent. The input
/// is not checked; use the shape-level functions for the decimal-degree
/// precondition.
///
/// The result is oriented like [`planar_path_area`]: positive for
/// counter-clockwise rings (increasing longitude to the right, increasing
/// latitude up), negative for clockwise rings.
pub fn spherical_path_area_with<F, I>(points: I, radius: F) -> F
where
    F: Float,
    I: IntoIterator<Item = Point2<F>>,
{
    let two = F::from(2.0).unwrap();
    let mut sum = F::zero();
    for_each_edge(
        points
            .into_iter()
            .map(|p| Point2::new(p.x.to_radians(), p.y.to_radians().sin())),
        |a, b| {
            sum = sum + (a.x - b.x) * (two + a.y + b.y);
        },
    );
    sum / two * radius * radius
}

fn check_decimal_degrees<F, S>(source: &S, config: &GeoConfig<F>) -> GeomResult<()>
where
    F: Float,
    S: PathSource<F>,
{
    let bounds = source.bounds();
    if probably_decimal_degrees(&bounds, config.degree_margin) {
        return Ok(());
    }
    let [xmin, ymin, xmax, ymax] = [bounds.xmin, bounds.ymin, bounds.xmax, bounds.ymax]
        .map(|v| v.to_f64().unwrap_or(f64::NAN));
    tracing::warn!(xmin, ymin, xmax, ymax, "spherical area requested on non-geographic bounds");
    Err(GeomError::NotDecimalDegrees {
        xmin,
        ymin,
        xmax,
        ymax,
    })
}

/// Spherical area of a shape in square meters, using the default
/// [`GeoConfig`].
///
/// Fails with [`GeomError::NotDecimalDegrees`] when the collection's bounds
/// are not plausible longitude/latitude bounds.
pub fn spherical_shape_area<F, S>(shape: &[S::Path], source: &S) -> GeomResult<F>
where
    F: Float,
    S: PathSource<F>,
{
    spherical_shape_area_with(shape, source, &GeoConfig::default())
}

/// [`spherical_shape_area`] with an explicit sphere radius and
/// decimal-degree margin.
pub fn spherical_shape_area_with<F, S>(
    shape: &[S::Path],
    source: &S,
    config: &GeoConfig<F>,
) -> GeomResult<F>
where
    F: Float,
    S: PathSource<F>,
{
    check_decimal_degrees(source, config)?;
    let area = shape.iter().fold(F::zero(), |area, path| {
        area + spherical_path_area_with(source.points(path), config.radius)
    });
    tracing::debug!(parts = shape.len(), area = ?area.to_f64(), "spherical shape area");
    Ok(area)
}

/// Spherical area of a shape computed as the planar area of its Gall
/// orthographic projection.
///
/// A cross-check for [`spherical_shape_area`]. The projection is equal-area
/// and maps edges the same way the spherical sum does, so both results
/// should agree to rounding; a disagreement points at corrupt input.
pub fn spherical_shape_area_projected<F, S>(shape: &[S::Path], source: &S) -> GeomResult<F>
where
    F: Float,
    S: PathSource<F>,
{
    spherical_shape_area_projected_with(shape, source, &GeoConfig::default())
}

/// [`spherical_shape_area_projected`] with an explicit sphere radius and
/// decimal-degree margin.
pub fn spherical_shape_area_projected_with<F, S>(
    shape: &[S::Path],
    source: &S,
    config: &GeoConfig<F>,
) -> GeomResult<F>
where
    F: Float,
    S: PathSource<F>,
{
    check_decimal_degrees(source, config)?;
    let gall = GallOrthographic::from_config(config);
    let area = shape.iter().fold(F::zero(), |area, path| {
        area + planar_path_area(source.points(path).projected(&gall))
    });
    tracing::debug!(parts = shape.len(), area = ?area.to_f64(), "projected shape area");
    Ok(area)
}

/// Returns the part whose *bounding box* has the largest area.
///
/// This is a cheap heuristic for picking the representative ring of a shape
/// (typically the outer boundary of a polygon with holes). It is not the
/// part with the largest path area: a long thin ring with a big box wins
/// over a compact ring with more enclosed area. Ties keep the earliest part.
/// Returns `None` only for a shape without parts.
pub fn max_area_part<'s, F, S>(shape: &'s [S::Path], source: &S) -> Option<&'s S::Path>
where
    F: Float,
    S: PathSource<F>,
{
    let mut best: Option<(&S::Path, F)> = None;
    for path in shape {
        let area = source.path_bounds(path).area();
        match best {
            Some((_, max)) if area <= max => {}
            _ => best = Some((path, area)),
        }
    }
    best.map(|(path, _)| path)
}
