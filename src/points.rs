//! Point and vector aliases, and validated ingestion of raw coordinate rows.

use cgmath::{Point2, Point3, Vector2, Vector3};

use crate::error::CurveError;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// A 3D point
pub type Point3d = Point3<f64>;

/// A 3D vector
pub type Vector3d = Vector3<f64>;

/// Converts rows of raw coordinates into 2D control points.
///
/// Every row must hold exactly two coordinates; the first row that does not
/// yields a [`CurveError::DimensionMismatch`]. This is the entry point for
/// untyped data (parsed files, FFI buffers) — once past it, the point types
/// themselves keep the dimensions consistent.
pub fn points2_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Point2d>, CurveError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            match *row {
                [x, y] => Ok(Point2d::new(x, y)),
                _ => Err(CurveError::DimensionMismatch {
                    index,
                    found: row.len(),
                    expected: 2,
                }),
            }
        })
        .collect()
}

/// Converts rows of raw coordinates into 3D control points.
///
/// The 3D counterpart of [`points2_from_rows`].
pub fn points3_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Point3d>, CurveError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            match *row {
                [x, y, z] => Ok(Point3d::new(x, y, z)),
                _ => Err(CurveError::DimensionMismatch {
                    index,
                    found: row.len(),
                    expected: 3,
                }),
            }
        })
        .collect()
}
