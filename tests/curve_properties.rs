//! Property tests exercising the full evaluation pipeline.

use assert_approx_eq::assert_approx_eq;
use cgmath::prelude::*;
use cubic_curves::{CurveFamily, Point2d, Point3d, DEFAULT_OVERSAMPLE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FAMILIES: [CurveFamily; 4] = [
    CurveFamily::Bezier,
    CurveFamily::CatmullRom,
    CurveFamily::UniformBSpline,
    CurveFamily::Cardinal { tension: 0.25 },
];

fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point2d> {
    (0..n)
        .map(|_| Point2d::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect()
}

fn parameter_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

/// Basis weights sum to 1 for every t, so transforming the control points
/// affinely must transform the evaluated positions the same way.
#[test]
fn evaluation_is_affine_invariant() {
    let mut rng = StdRng::from_seed(*b"cubic curves need no seasoning..");
    let affine =
        |p: Point2d| Point2d::new(2.0 * p.x - 0.5 * p.y + 3.0, 0.75 * p.x + 1.5 * p.y - 7.0);

    for family in FAMILIES {
        // 10 points give 3 non-overlapping or 7 sliding segments.
        let points = random_points(&mut rng, 10);
        let transformed: Vec<Point2d> = points.iter().copied().map(affine).collect();
        let u = parameter_grid(33);

        let eval = family.evaluate(&points, &u).unwrap();
        let eval_t = family.evaluate(&transformed, &u).unwrap();
        for (p, q) in eval.positions.iter().zip(&eval_t.positions) {
            let expect = affine(*p);
            assert_approx_eq!(q.x, expect.x, 1e-9);
            assert_approx_eq!(q.y, expect.y, 1e-9);
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let mut rng = StdRng::from_seed(*b"cubic curves need no seasoning..");
    let points = random_points(&mut rng, 7);
    let u = parameter_grid(17);
    for family in FAMILIES {
        let a = family.evaluate(&points, &u).unwrap();
        let b = family.evaluate(&points, &u).unwrap();
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.tangents, b.tangents);
        assert_eq!(a.curvatures, b.curvatures);
    }
}

#[test]
fn duplicate_samples_give_identical_outputs() {
    let mut rng = StdRng::from_seed(*b"cubic curves need no seasoning..");
    let points = random_points(&mut rng, 8);
    let eval = CurveFamily::UniformBSpline
        .evaluate(&points, &[0.4, 0.4, 0.4])
        .unwrap();
    assert_eq!(eval.positions[0], eval.positions[1]);
    assert_eq!(eval.positions[1], eval.positions[2]);
    assert_eq!(eval.tangents[0], eval.tangents[2]);
    assert_eq!(eval.curvatures[0], eval.curvatures[2]);
}

/// Bezier is the one family here whose basis makes the curve pass through
/// window endpoints; u = 0 and u = 1 must hit the first and last control
/// point exactly. No such claim holds for the approximating families.
#[test]
fn bezier_hits_first_and_last_control_point() {
    let mut rng = StdRng::from_seed(*b"cubic curves need no seasoning..");
    // (N - 1) divisible by 3, so the final window ends on the last point.
    let points = random_points(&mut rng, 10);
    let eval = CurveFamily::Bezier.evaluate(&points, &[0.0, 1.0]).unwrap();
    assert_approx_eq!(eval.positions[0].x, points[0].x, 1e-12);
    assert_approx_eq!(eval.positions[0].y, points[0].y, 1e-12);
    assert_approx_eq!(eval.positions[1].x, points[9].x, 1e-12);
    assert_approx_eq!(eval.positions[1].y, points[9].y, 1e-12);
}

/// Reparameterised samples should travel near-equal distances per step, even
/// when the control points are spaced very unevenly.
#[test]
fn reparameterisation_equalises_step_lengths() {
    let points: Vec<Point2d> = [0.0, 0.05, 0.1, 2.0, 2.05, 4.0]
        .iter()
        .map(|&x| Point2d::new(x, 0.3 * x * x))
        .collect();
    let targets = parameter_grid(41);
    let family = CurveFamily::CatmullRom;

    let u = family
        .reparameterize(&points, &targets, DEFAULT_OVERSAMPLE * 4)
        .unwrap();
    let eval = family.evaluate(&points, &u).unwrap();

    let steps: Vec<f64> = eval
        .positions
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).magnitude())
        .collect();
    let mean = steps.iter().sum::<f64>() / steps.len() as f64;
    assert!(mean > 0.0);
    for step in steps {
        assert!(
            (step - mean).abs() < 0.25 * mean,
            "step {} strays too far from mean {}",
            step,
            mean
        );
    }
}

#[test]
fn reparameterised_curve_keeps_endpoints() {
    let points: Vec<Point2d> = (0..6).map(|i| Point2d::new(i as f64, (i * i) as f64)).collect();
    let family = CurveFamily::UniformBSpline;
    let u = family
        .reparameterize(&points, &[0.0, 1.0], DEFAULT_OVERSAMPLE)
        .unwrap();
    assert_approx_eq!(u[0], 0.0, 1e-12);
    assert_approx_eq!(u[1], 1.0, 1e-12);
}

#[test]
fn three_dimensional_pipeline() {
    let points: Vec<Point3d> = (0..8)
        .map(|i| {
            let t = i as f64 * 0.8;
            Point3d::new(t.cos(), t.sin(), 0.3 * t)
        })
        .collect();
    let targets = parameter_grid(21);
    for family in [CurveFamily::CatmullRom, CurveFamily::UniformBSpline] {
        let u = family
            .reparameterize(&points, &targets, DEFAULT_OVERSAMPLE)
            .unwrap();
        let eval = family.evaluate(&points, &u).unwrap();
        assert_eq!(eval.len(), targets.len());
        for i in 0..eval.len() {
            assert!(eval.positions[i].z.is_finite());
            assert!(eval.tangents[i].magnitude().is_finite());
            assert!(eval.curvatures[i] >= 0.0);
        }
    }
}
