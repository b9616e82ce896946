//! Arc-length reparameterisation.
//!
//! The mixing parameter does not advance linearly with distance travelled
//! along the curve: equal parameter steps draw segments of unequal length
//! wherever the control points bunch up or spread out. This module builds an
//! inverse mapping from normalised arc-length fraction to raw parameter by
//! densely sampling the curve and prefix-summing the chord lengths.

use cgmath::prelude::*;
use itertools::Itertools;
use log::debug;

use crate::error::CurveError;
use crate::family::CurveFamily;
use crate::util::{Interval, UNIT};

/// Default oversampling factor for [`CurveFamily::reparameterize`].
pub const DEFAULT_OVERSAMPLE: usize = 10;

impl CurveFamily {
    /// Maps normalised arc-length fractions to raw parameter values.
    ///
    /// Each target in `u_targets` is a fraction of the curve's total length;
    /// the returned parameter, fed back into [`CurveFamily::evaluate`], lands
    /// at (approximately) that fraction of the distance along the curve. The
    /// approximation sharpens with `oversample`, which scales the density of
    /// the internal sweep; an `oversample` of zero disables reparameterisation
    /// and returns the targets unchanged.
    ///
    /// The cumulative length array is non-decreasing by construction. Ties
    /// from zero-length chords (coincident control points) resolve to the
    /// first matching grid point, which is accepted as part of the
    /// approximation.
    ///
    /// # Errors
    /// * [`CurveError::Domain`] if any target lies outside `[0, 1]`.
    /// * [`CurveError::DegenerateInput`] if the curve's total length is zero,
    ///   or the control polygon is too short to evaluate at all.
    pub fn reparameterize<P>(
        &self,
        control_points: &[P],
        u_targets: &[f64],
        oversample: usize,
    ) -> Result<Vec<f64>, CurveError>
    where
        P: EuclideanSpace<Scalar = f64>,
        P::Diff: InnerSpace<Scalar = f64>,
    {
        if oversample == 0 {
            return Ok(u_targets.to_vec());
        }
        for &target in u_targets {
            if !UNIT.contains(target) {
                return Err(CurveError::Domain(target));
            }
        }
        if u_targets.is_empty() {
            return Ok(Vec::new());
        }

        // Dense uniform sweep of the raw parameter. At least two samples, so
        // that a chord exists even for pathological oversample requests.
        let n = usize::max(oversample * u_targets.len(), 2);
        let grid: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let eval = self.evaluate(control_points, &grid)?;

        let mut cumulative = Vec::with_capacity(n);
        cumulative.push(0.0);
        let mut total = 0.0;
        for (a, b) in eval.positions.iter().tuple_windows() {
            total += (*b - *a).magnitude();
            cumulative.push(total);
        }
        if total == 0.0 {
            return Err(CurveError::DegenerateInput("curve has zero arc length"));
        }
        for length in &mut cumulative {
            *length /= total;
        }
        debug!(
            "reparameterised {} over {} dense samples, total length {}",
            self, n, total
        );

        Ok(u_targets
            .iter()
            .map(|&target| inverse_lookup(&cumulative, &grid, target))
            .collect())
    }
}

/// Linearly interpolates the raw parameter whose normalised arc length is
/// `target`, given the dense cumulative-length table.
fn inverse_lookup(cumulative: &[f64], grid: &[f64], target: f64) -> f64 {
    // First grid index whose cumulative length reaches the target. The table
    // ends at exactly 1.0 and targets are within [0, 1], so `hi` is in range.
    let hi = cumulative.partition_point(|&length| length < target);
    if hi == 0 {
        return grid[0];
    }
    let lo = hi - 1;
    let lengths = Interval::new(cumulative[lo], cumulative[hi]);
    if lengths.length() == 0.0 {
        return grid[hi];
    }
    Interval::new(grid[lo], grid[hi]).lerp(lengths.inv_lerp(target))
}
