use bevy::prelude::*;
use flux_core::FieldRotation;
use flux_sim::field::ParticleField;

/// Parent of every particle dot; carries the group rotation
#[derive(Component)]
pub struct FieldRoot;

/// Marker for particle dot entities
#[derive(Component)]
pub struct ParticlePoint {
    pub index: usize,
}

const POINT_RADIUS: f32 = 0.04;
const POINT_OPACITY: f32 = 0.8;

/// Group rotation as a quaternion: pitch around X, then yaw around the
/// rotated Y
pub fn field_quat(rotation: FieldRotation) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.pitch, rotation.yaw, 0.0)
}

/// Spawn the field root and one glowing dot per particle
pub fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    field: Res<ParticleField>,
) {
    let mesh = meshes.add(Sphere::new(POINT_RADIUS).mesh().ico(1).unwrap());
    let color = Color::srgba(1.0, 1.0, 1.0, POINT_OPACITY);
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive: LinearRgba::from(color) * 2.0,
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    let count = field.particle_count();
    commands
        .spawn((Transform::default(), Visibility::default(), FieldRoot))
        .with_children(|parent| {
            for (index, p) in field.positions().iter().enumerate() {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_xyz(p[0], p[1], p[2]),
                    ParticlePoint { index },
                ));
            }
        });

    info!("Spawned {} particle dots", count);
}

/// Copy simulated positions and the group rotation into the scene
pub fn update_particle_visuals(
    field: Res<ParticleField>,
    mut root_query: Query<&mut Transform, (With<FieldRoot>, Without<ParticlePoint>)>,
    mut point_query: Query<(&mut Transform, &ParticlePoint), Without<FieldRoot>>,
) {
    if let Ok(mut root) = root_query.get_single_mut() {
        root.rotation = field_quat(field.rotation());
    }

    let positions = field.positions();
    for (mut transform, point) in point_query.iter_mut() {
        let Some(p) = positions.get(point.index) else {
            continue;
        };
        transform.translation = Vec3::from_array(*p);
    }
}
