use bevy::prelude::*;
use flux_sim::field::ParticleField;

use super::particles::field_quat;

/// Global opacity of connection lines
const LINE_OPACITY: f32 = 0.3;

/// Line color for a connection: white scaled by proximity
pub fn connection_color(alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::srgba(a, a, a, a * LINE_OPACITY)
}

/// Draw this frame's connections as immediate-mode lines
pub fn draw_connections(field: Res<ParticleField>, mut gizmos: Gizmos) {
    let rotation = field_quat(field.rotation());
    let positions = field.positions();

    for c in field.connections() {
        let a = rotation * Vec3::from_array(positions[c.a as usize]);
        let b = rotation * Vec3::from_array(positions[c.b as usize]);
        gizmos.line(a, b, connection_color(c.alpha));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scales_with_alpha() {
        let full = connection_color(1.0).to_srgba();
        assert_eq!(full.red, 1.0);
        assert!((full.alpha - LINE_OPACITY).abs() < 1e-6);

        let faint = connection_color(0.25).to_srgba();
        assert!((faint.green - 0.25).abs() < 1e-6);
        assert!((faint.alpha - 0.075).abs() < 1e-6);
    }
}
