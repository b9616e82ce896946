//! Basis-function weights, exported for diagnostics.

use cgmath::Vector4;

use crate::error::CurveError;
use crate::family::CurveFamily;
use crate::util::UNIT;

impl CurveFamily {
    /// The four basis-function weight sequences over local parameter samples.
    ///
    /// `weights[i][k]` is the influence of a window's `i`-th control point at
    /// `t_samples[k]` — the same weights `evaluate` applies internally, so
    /// plotting them shows exactly how each family mixes its window.
    ///
    /// # Errors
    /// [`CurveError::Domain`] if any `t` lies outside `[0, 1]`.
    pub fn basis_weights(&self, t_samples: &[f64]) -> Result<[Vec<f64>; 4], CurveError> {
        let matrix = self.characteristic_matrix();
        let mut weights: [Vec<f64>; 4] =
            std::array::from_fn(|_| Vec::with_capacity(t_samples.len()));
        for &t in t_samples {
            if !UNIT.contains(t) {
                return Err(CurveError::Domain(t));
            }
            let w = matrix * Vector4::new(1.0, t, t * t, t * t * t);
            weights[0].push(w.x);
            weights[1].push(w.y);
            weights[2].push(w.z);
            weights[3].push(w.w);
        }
        Ok(weights)
    }
}
