use std::f64::consts::TAU;

use cubic_curves::{CurveFamily, Point2d, DEFAULT_OVERSAMPLE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Random control points on a ring: sorted angles, radii in [0.7, 1.0).
fn generate_points(rng: &mut impl Rng, n: usize) -> Vec<Point2d> {
    let mut angles: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..TAU)).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles
        .into_iter()
        .map(|angle| {
            let r = rng.gen_range(0.7..1.0);
            Point2d::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Samples every curve family over one random control polygon and prints the
/// results as JSON, for an external plotting tool to pick up.
///
/// Usage: `cubic-curves [num_points] [num_samples] [seed]`
fn main() {
    let mut args = std::env::args().skip(1);
    let num_points: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let num_samples: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(50)
        .max(2);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let mut rng = StdRng::seed_from_u64(seed);
    let control_points = generate_points(&mut rng, num_points);

    let u: Vec<f64> = (0..num_samples)
        .map(|i| i as f64 / (num_samples - 1) as f64)
        .collect();

    let families = [
        CurveFamily::Bezier,
        CurveFamily::CatmullRom,
        CurveFamily::UniformBSpline,
        CurveFamily::Cardinal { tension: 0.25 },
    ];

    let mut curves = Vec::new();
    for family in families {
        let u = family
            .reparameterize(&control_points, &u, DEFAULT_OVERSAMPLE)
            .unwrap();
        let eval = family.evaluate(&control_points, &u).unwrap();
        curves.push(json!({
            "family": family.to_string(),
            "u": u,
            "positions": eval.positions.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
            "tangents": eval.tangents.iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
            "curvatures": eval.curvatures,
        }));
    }

    let doc = json!({
        "control_points": control_points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        "curves": curves,
    });
    println!("{}", serde_json::to_string_pretty(&doc).unwrap());
}
