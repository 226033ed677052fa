use flux_core::constants::{ATTRACTION_STEP, OSCILLATION_FREQUENCY};

/// Per-particle wobble for frame time `time`.
/// The particle index shifts the phase so neighbours don't move in sync.
pub fn oscillation(time: f32, index: usize, amplitude: f32) -> [f32; 3] {
    let phase = index as f32;
    [
        (time * OSCILLATION_FREQUENCY[0] + phase).sin() * amplitude,
        (time * OSCILLATION_FREQUENCY[1] + phase).cos() * amplitude,
        (time * OSCILLATION_FREQUENCY[2] + phase).sin() * amplitude,
    ]
}

/// Displacement pulling `pos` toward the pointer target in the X/Y plane.
/// Linear falloff from `strength` at the target to zero at `radius`; Z is
/// never touched. A particle sitting on the target gets no displacement.
pub fn pointer_pull(pos: [f32; 3], target: [f32; 2], radius: f32, strength: f32) -> [f32; 3] {
    let dx = target[0] - pos[0];
    let dy = target[1] - pos[1];
    let dist = (dx * dx + dy * dy).sqrt();

    if dist >= radius {
        return [0.0; 3];
    }

    let force = (radius - dist) / radius * strength;
    [dx * force * ATTRACTION_STEP, dy * force * ATTRACTION_STEP, 0.0]
}

/// Rescale `pos` onto the sphere of `radius` if it lies outside.
/// Returns true when the position was moved.
pub fn contain(pos: &mut [f32; 3], radius: f32) -> bool {
    let dist = (pos[0] * pos[0] + pos[1] * pos[1] + pos[2] * pos[2]).sqrt();
    if dist > radius {
        let scale = radius / dist;
        pos[0] *= scale;
        pos[1] *= scale;
        pos[2] *= scale;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillation_phase() {
        let o = oscillation(0.0, 0, 0.003);
        assert_eq!(o, [0.0, 0.003, 0.0]);

        let o = oscillation(2.0, 3, 1.0);
        assert!((o[0] - (1.0f32 + 3.0).sin()).abs() < 1e-6);
        assert!((o[1] - (0.6f32 + 3.0).cos()).abs() < 1e-6);
        assert!((o[2] - (0.8f32 + 3.0).sin()).abs() < 1e-6);
    }

    #[test]
    fn test_pull_outside_radius() {
        assert_eq!(pointer_pull([5.0, 0.0, 0.0], [0.0, 0.0], 3.0, 0.3), [0.0; 3]);
        // Exactly on the radius: no pull
        assert_eq!(pointer_pull([3.0, 0.0, 0.0], [0.0, 0.0], 3.0, 0.3), [0.0; 3]);
    }

    #[test]
    fn test_pull_toward_target() {
        // d = 1.5 → force = 0.5 * 0.3 = 0.15 → dx * 0.0015
        let d = pointer_pull([1.5, 0.0, 4.0], [0.0, 0.0], 3.0, 0.3);
        assert!((d[0] - (-1.5 * 0.15 * 0.01)).abs() < 1e-7);
        assert_eq!(d[1], 0.0);
        assert_eq!(d[2], 0.0);
    }

    #[test]
    fn test_pull_at_target_is_zero() {
        let d = pointer_pull([2.0, -1.0, 3.0], [2.0, -1.0], 3.0, 0.3);
        assert_eq!(d, [0.0; 3]);
        assert!(d.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_contain() {
        let mut p = [10.0, 0.0, 0.0];
        assert!(contain(&mut p, 8.0));
        assert!((p[0] - 8.0).abs() < 1e-6);

        let mut p = [0.0, 0.0, 0.0];
        assert!(!contain(&mut p, 8.0));
        assert_eq!(p, [0.0; 3]);

        let mut p = [1.0, 2.0, 2.0];
        assert!(!contain(&mut p, 8.0));
        assert_eq!(p, [1.0, 2.0, 2.0]);
    }
}
