use thiserror::Error;

/// Errors surfaced by curve evaluation and arc-length reparameterisation.
///
/// Evaluation is all-or-nothing: an error means no partial result was
/// produced, and retrying with the same inputs will fail the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Too few control points to form a single cubic segment, or a curve
    /// whose total arc length is zero.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// Raw coordinate rows do not all share the same dimension.
    #[error("control point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        found: usize,
        expected: usize,
    },

    /// A mixing-parameter sample outside the unit interval.
    ///
    /// Samples are rejected rather than clamped so that caller bugs surface
    /// early. The one exception is `u == 1` itself, which lands exactly on
    /// the end of the final segment and is folded into it.
    #[error("curve parameter {0} lies outside [0, 1]")]
    Domain(f64),
}
