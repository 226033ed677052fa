use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use flux_sim::field::ParticleField;

/// Marker for the scene camera
#[derive(Component)]
pub struct FieldCamera;

/// Fog fades lines and dots toward the back of the sphere
const FOG_START: f32 = 10.0;
const FOG_END: f32 = 25.0;

/// Spawn the fixed perspective camera looking at the field center
pub fn spawn_camera(mut commands: Commands, field: Res<ParticleField>) {
    let config = field.config();
    let pos = Vec3::new(0.0, 0.0, config.camera_distance);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera_fov_degrees.to_radians(),
            ..default()
        }),
        IsDefaultUiCamera,
        Transform::from_translation(pos).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: Color::BLACK,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        FieldCamera,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.5,
    });

    info!(
        "Camera spawned at (0, 0, {:.0}), fov {:.0}°",
        pos.z, config.camera_fov_degrees
    );
}
