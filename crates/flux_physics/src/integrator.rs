use flux_core::FieldConfig;

use crate::forces::{contain, oscillation, pointer_pull};

/// Force parameters consumed by [`integrate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorParams {
    pub oscillation_amplitude: f32,
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub containment_radius: f32,
}

impl From<&FieldConfig> for IntegratorParams {
    fn from(config: &FieldConfig) -> Self {
        Self {
            oscillation_amplitude: config.oscillation_amplitude,
            attraction_radius: config.attraction_radius,
            attraction_strength: config.attraction_strength,
            containment_radius: config.containment_radius,
        }
    }
}

impl Default for IntegratorParams {
    fn default() -> Self {
        Self::from(&FieldConfig::default())
    }
}

/// Advance every particle by one frame at time `time`.
///
/// Per particle, in order: drift + oscillation, pointer pull toward `target`
/// (world X/Y), then containment. Velocities are read only.
/// Returns the number of particles rescaled back onto the containment sphere.
pub fn integrate(
    positions: &mut [[f32; 3]],
    velocities: &[[f32; 3]],
    time: f32,
    target: [f32; 2],
    params: &IntegratorParams,
) -> usize {
    let mut contained = 0;

    for (i, (pos, vel)) in positions.iter_mut().zip(velocities).enumerate() {
        let wobble = oscillation(time, i, params.oscillation_amplitude);
        pos[0] += vel[0] + wobble[0];
        pos[1] += vel[1] + wobble[1];
        pos[2] += vel[2] + wobble[2];

        let pull = pointer_pull(
            *pos,
            target,
            params.attraction_radius,
            params.attraction_strength,
        );
        pos[0] += pull[0];
        pos[1] += pull[1];

        if contain(pos, params.containment_radius) {
            contained += 1;
        }
    }

    contained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_oscillation_only_far_from_pointer() {
        let mut positions = vec![[5.0, 0.0, 0.0], [0.0, -5.0, 0.0], [3.5, 3.5, 0.0]];
        let start = positions.clone();
        let velocities = vec![[0.0; 3]; 3];
        let params = IntegratorParams::default();

        integrate(&mut positions, &velocities, 1.25, [0.0, 0.0], &params);

        for (i, (p, s)) in positions.iter().zip(&start).enumerate() {
            let expected = oscillation(1.25, i, params.oscillation_amplitude);
            for axis in 0..3 {
                assert!(
                    ((p[axis] - s[axis]) - expected[axis]).abs() < 1e-6,
                    "particle {} axis {}",
                    i,
                    axis
                );
            }
        }
    }

    #[test]
    fn test_velocity_applied() {
        let mut positions = vec![[4.0, 4.0, 4.0]];
        let velocities = vec![[0.01, -0.01, 0.005]];
        let params = IntegratorParams {
            oscillation_amplitude: 0.0,
            ..IntegratorParams::default()
        };

        integrate(&mut positions, &velocities, 0.0, [-10.0, -10.0], &params);
        assert!((positions[0][0] - 4.01).abs() < 1e-6);
        assert!((positions[0][1] - 3.99).abs() < 1e-6);
        assert!((positions[0][2] - 4.005).abs() < 1e-6);
        assert_eq!(velocities[0], [0.01, -0.01, 0.005]);
    }

    #[test]
    fn test_pointer_pulls_near_particles() {
        let mut positions = vec![[1.0, 0.0, 2.0]];
        let velocities = vec![[0.0; 3]];
        let params = IntegratorParams {
            oscillation_amplitude: 0.0,
            ..IntegratorParams::default()
        };

        integrate(&mut positions, &velocities, 0.0, [0.0, 0.0], &params);
        // d = 1 → force = 2/3 * 0.3 = 0.2 → x += -1 * 0.2 * 0.01
        assert!((positions[0][0] - 0.998).abs() < 1e-6);
        assert_eq!(positions[0][1], 0.0);
        assert_eq!(positions[0][2], 2.0);
    }

    #[test]
    fn test_containment_counted() {
        let mut positions = vec![[10.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let velocities = vec![[0.0; 3]; 2];
        let params = IntegratorParams {
            oscillation_amplitude: 0.0,
            ..IntegratorParams::default()
        };

        let contained = integrate(&mut positions, &velocities, 0.0, [50.0, 50.0], &params);
        assert_eq!(contained, 1);
        assert!((length(positions[0]) - 8.0).abs() < 1e-5);
        assert!(positions[0][1].abs() < 1e-6 && positions[0][2].abs() < 1e-6);
    }
}
