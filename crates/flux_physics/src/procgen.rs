use rand::Rng;

/// Generate `count` particles on a spherical shell around the origin.
///
/// Directions are uniform on the unit sphere (θ ~ U(0, 2π), φ = acos(2u − 1)),
/// radii are uniform in `radius.0..radius.1`. Each velocity component is drawn
/// from `-drift..drift`. Returns `(positions, velocities)`.
pub fn spherical_shell(
    count: usize,
    radius: (f32, f32),
    drift: f32,
    rng: &mut impl Rng,
) -> (Vec<[f32; 3]>, Vec<[f32; 3]>) {
    let mut positions = Vec::with_capacity(count);
    let mut velocities = Vec::with_capacity(count);

    for _ in 0..count {
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);
        let phi = (2.0 * rng.gen_range(0.0..1.0f32) - 1.0).acos();
        let r = rng.gen_range(radius.0..radius.1);

        positions.push([
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ]);
        velocities.push([
            drift_component(drift, rng),
            drift_component(drift, rng),
            drift_component(drift, rng),
        ]);
    }

    (positions, velocities)
}

fn drift_component(drift: f32, rng: &mut impl Rng) -> f32 {
    if drift > 0.0 {
        rng.gen_range(-drift..drift)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_radii_within_shell() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (positions, velocities) = spherical_shell(150, (3.0, 7.0), 0.01, &mut rng);
        assert_eq!(positions.len(), 150);
        assert_eq!(velocities.len(), 150);

        for p in &positions {
            let r = length(*p);
            // Trig round-off can nudge the reconstructed radius by an ulp
            assert!(r >= 3.0 - 1e-5 && r < 7.0 + 1e-5, "r = {}", r);
        }
        for v in &velocities {
            for c in v {
                assert!((-0.01..0.01).contains(c), "v = {}", c);
            }
        }
    }

    #[test]
    fn test_shell_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let (positions, _) = spherical_shell(150, (3.0, 7.0), 0.01, &mut rng);
        let n = positions.len() as f32;

        // Radius is uniform in [3, 7): mean magnitude ≈ 5
        let mean_r = positions.iter().map(|p| length(*p)).sum::<f32>() / n;
        assert!((mean_r - 5.0).abs() < 0.4, "mean radius = {}", mean_r);

        // Uniform directions: the centroid stays near the origin
        let mut centroid = [0.0f32; 3];
        for p in &positions {
            for i in 0..3 {
                centroid[i] += p[i] / n;
            }
        }
        assert!(length(centroid) < 1.2, "centroid = {:?}", centroid);
    }

    #[test]
    fn test_same_seed_same_shell() {
        let a = spherical_shell(20, (3.0, 7.0), 0.01, &mut ChaCha8Rng::seed_from_u64(3));
        let b = spherical_shell(20, (3.0, 7.0), 0.01, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_drift() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (_, velocities) = spherical_shell(10, (3.0, 7.0), 0.0, &mut rng);
        assert!(velocities.iter().all(|v| *v == [0.0; 3]));
    }
}
