//! Piecewise cubic parametric curves.
//!
//! Builds cubic curves over a control polygon in one of four families —
//! Bezier, Catmull-Rom, uniform B-spline and Cardinal — and evaluates
//! positions, first-derivative tangents and curvature magnitudes at batches
//! of parameter values. An optional arc-length reparameterisation step remaps
//! the parameter values so that equal steps travel roughly equal distances
//! along the curve.
//!
//! ```
//! use cubic_curves::{CurveFamily, Point2d};
//!
//! let points = [
//!     Point2d::new(0.0, 0.0),
//!     Point2d::new(0.0, 1.0),
//!     Point2d::new(1.0, 1.0),
//!     Point2d::new(1.0, 0.0),
//! ];
//! let eval = CurveFamily::CatmullRom
//!     .evaluate(&points, &[0.0, 0.5, 1.0])
//!     .unwrap();
//! assert_eq!(eval.positions.len(), 3);
//! ```

pub use arclen::DEFAULT_OVERSAMPLE;
pub use cgmath;
pub use error::CurveError;
pub use evaluate::{CurveSample, Evaluation};
pub use family::{CurveFamily, SegmentAdvance};
pub use points::{points2_from_rows, points3_from_rows, Point2d, Point3d, Vector2d, Vector3d};
pub use util::Interval;

mod arclen;
mod basis;
mod error;
mod evaluate;
mod family;
mod points;
mod util;
