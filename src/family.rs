//! Curve families and their characteristic matrices.

use std::fmt;

use cgmath::Matrix4;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the four-point window moves from one cubic segment to the next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentAdvance {
    /// Each segment consumes three fresh control points, so consecutive
    /// windows share only their boundary point.
    NonOverlapping,
    /// The window slides forward by a single control point per segment.
    Sliding,
}

impl SegmentAdvance {
    /// Number of cubic segments a control polygon of `n` points produces.
    pub fn segment_count(self, n: usize) -> usize {
        match self {
            SegmentAdvance::NonOverlapping => n.saturating_sub(1) / 3,
            SegmentAdvance::Sliding => n.saturating_sub(3),
        }
    }

    /// Index of the first control point in segment `id`'s window.
    pub fn window_start(self, id: usize) -> usize {
        match self {
            SegmentAdvance::NonOverlapping => 3 * id,
            SegmentAdvance::Sliding => id,
        }
    }
}

/// A family of piecewise cubic curves.
///
/// A family is pure data: a 4×4 characteristic matrix describing how four
/// consecutive control points blend into one cubic segment, plus the
/// [`SegmentAdvance`] rule for walking the control polygon. The evaluation
/// algorithm itself is identical across families.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveFamily {
    /// Piecewise cubic Bezier; interpolates every third control point.
    Bezier,
    /// Catmull-Rom, the Cardinal family at tension 0.5; interpolates the
    /// interior control points.
    CatmullRom,
    /// Uniform cubic B-spline; approximates the control polygon.
    UniformBSpline,
    /// Tension-parameterised Cardinal family.
    Cardinal { tension: f64 },
}

impl CurveFamily {
    /// The characteristic matrix of the family.
    ///
    /// Stored one column per monomial, so `m * vec4(1, t, t², t³)` yields the
    /// four blending weights for a window's control points. Every family's
    /// weights sum to 1 for all `t`, which keeps the blend an affine
    /// combination of the window.
    pub fn characteristic_matrix(&self) -> Matrix4<f64> {
        #[rustfmt::skip]
        let matrix = match *self {
            CurveFamily::Bezier => Matrix4::new(
                1.0, 0.0, 0.0, 0.0,
                -3.0, 3.0, 0.0, 0.0,
                3.0, -6.0, 3.0, 0.0,
                -1.0, 3.0, -3.0, 1.0,
            ),
            CurveFamily::CatmullRom => cardinal_matrix(0.5),
            CurveFamily::UniformBSpline => Matrix4::new(
                1.0, 4.0, 1.0, 0.0,
                -3.0, 0.0, 3.0, 0.0,
                3.0, -6.0, 3.0, 0.0,
                -1.0, 3.0, -3.0, 1.0,
            ) / 6.0,
            CurveFamily::Cardinal { tension } => cardinal_matrix(tension),
        };
        matrix
    }

    /// The segment-advance rule of the family.
    pub fn advance(&self) -> SegmentAdvance {
        match self {
            CurveFamily::Bezier => SegmentAdvance::NonOverlapping,
            _ => SegmentAdvance::Sliding,
        }
    }

    /// Number of cubic segments this family draws through `n` control points.
    pub fn segment_count(&self, n: usize) -> usize {
        self.advance().segment_count(n)
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveFamily::Bezier => write!(f, "Bezier"),
            CurveFamily::CatmullRom => write!(f, "Catmull-Rom"),
            CurveFamily::UniformBSpline => write!(f, "Uniform B-spline"),
            CurveFamily::Cardinal { tension } => write!(f, "Cardinal(s={})", tension),
        }
    }
}

#[rustfmt::skip]
fn cardinal_matrix(s: f64) -> Matrix4<f64> {
    Matrix4::new(
        0.0, 1.0, 0.0, 0.0,
        -s, 0.0, s, 0.0,
        2.0 * s, s - 3.0, 3.0 - 2.0 * s, -s,
        -s, 2.0 - s, s - 2.0, s,
    )
}
