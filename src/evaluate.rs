//! The curve evaluation engine: segment selection and matrix-form blending.

use cgmath::prelude::*;
use cgmath::Vector4;
use log::trace;

use crate::error::CurveError;
use crate::family::CurveFamily;
use crate::util::UNIT;

/// One evaluated point of a curve.
#[derive(Copy, Clone)]
pub struct CurveSample<P: EuclideanSpace> {
    /// Position on the curve.
    pub position: P,
    /// First derivative with respect to the local mixing parameter.
    pub tangent: P::Diff,
    /// Norm of the second derivative with respect to the local mixing
    /// parameter.
    pub curvature: f64,
}

/// The result of evaluating a curve at a batch of parameter values.
///
/// The three arrays are parallel and ordered exactly as the input samples
/// were; each call allocates them fresh.
#[derive(Clone, Debug)]
pub struct Evaluation<P: EuclideanSpace> {
    pub positions: Vec<P>,
    pub tangents: Vec<P::Diff>,
    pub curvatures: Vec<f64>,
}

impl<P: EuclideanSpace> Evaluation<P> {
    /// Number of evaluated samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The `i`-th evaluated sample.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn sample(&self, i: usize) -> CurveSample<P> {
        CurveSample {
            position: self.positions[i],
            tangent: self.tangents[i],
            curvature: self.curvatures[i],
        }
    }
}

impl CurveFamily {
    /// Evaluates the curve at a batch of parameter values.
    ///
    /// Each `u` is normalised over the whole curve: `u * S` selects one of
    /// the `S` cubic segments and the fractional remainder is the local
    /// parameter within it. The control points are blended through the
    /// family's characteristic matrix, producing a position, a tangent and a
    /// curvature magnitude per sample, in input order. Duplicate samples
    /// produce identical outputs; a single sample is fine.
    ///
    /// # Errors
    /// * [`CurveError::DegenerateInput`] if fewer than four control points
    ///   are supplied.
    /// * [`CurveError::Domain`] if any `u` lies outside `[0, 1]`.
    pub fn evaluate<P>(
        &self,
        control_points: &[P],
        u_samples: &[f64],
    ) -> Result<Evaluation<P>, CurveError>
    where
        P: EuclideanSpace<Scalar = f64>,
        P::Diff: InnerSpace<Scalar = f64>,
    {
        let advance = self.advance();
        let segments = advance.segment_count(control_points.len());
        if segments == 0 {
            return Err(CurveError::DegenerateInput(
                "need at least 4 control points for one cubic segment",
            ));
        }
        trace!(
            "evaluating {} over {} segments at {} samples",
            self,
            segments,
            u_samples.len()
        );

        let matrix = self.characteristic_matrix();
        let mut positions = Vec::with_capacity(u_samples.len());
        let mut tangents = Vec::with_capacity(u_samples.len());
        let mut curvatures = Vec::with_capacity(u_samples.len());

        for &u in u_samples {
            let (id, t) = split_parameter(u, segments)?;
            let start = advance.window_start(id);
            let window = &control_points[start..start + 4];

            let weights = matrix * Vector4::new(1.0, t, t * t, t * t * t);
            positions.push(P::from_vec(blend(weights, window)));

            let d_weights = matrix * Vector4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t);
            tangents.push(blend(d_weights, window));

            let dd_weights = matrix * Vector4::new(0.0, 0.0, 2.0, 6.0 * t);
            curvatures.push(blend(dd_weights, window).magnitude());
        }

        Ok(Evaluation {
            positions,
            tangents,
            curvatures,
        })
    }

    /// Evaluates the curve at a single parameter value.
    pub fn evaluate_at<P>(&self, control_points: &[P], u: f64) -> Result<CurveSample<P>, CurveError>
    where
        P: EuclideanSpace<Scalar = f64>,
        P::Diff: InnerSpace<Scalar = f64>,
    {
        let eval = self.evaluate(control_points, &[u])?;
        Ok(eval.sample(0))
    }
}

/// Splits a whole-curve parameter into a segment id and local parameter.
///
/// `u == 1` computes a segment id one past the end; it is folded back into
/// the final segment at `t = 1` so the curve's endpoint is reachable. This is
/// the only place a parameter is adjusted rather than rejected.
fn split_parameter(u: f64, segments: usize) -> Result<(usize, f64), CurveError> {
    if !UNIT.contains(u) {
        return Err(CurveError::Domain(u));
    }
    let raw = u * segments as f64;
    let mut id = raw.floor() as usize;
    let mut t = raw - id as f64;
    if id == segments {
        id = segments - 1;
        t = 1.0;
    }
    Ok((id, t))
}

/// Weighted sum of a window's control points, as a vector.
///
/// With weights summing to 1 this is an affine combination (a position); with
/// derivative weights summing to 0 it is a displacement.
fn blend<P>(weights: Vector4<f64>, window: &[P]) -> P::Diff
where
    P: EuclideanSpace<Scalar = f64>,
{
    window[0].to_vec() * weights.x
        + window[1].to_vec() * weights.y
        + window[2].to_vec() * weights.z
        + window[3].to_vec() * weights.w
}
