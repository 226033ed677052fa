use bevy::prelude::*;
use flux_sim::pipeline::FieldSet;

use super::camera;
use super::connections;
use super::cursor::{self, CursorFollower};
use super::dust;
use super::particles;
use super::ui;

/// Render plugin: field visuals plus the decorative overlay
pub struct FluxRenderPlugin;

impl Plugin for FluxRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<CursorFollower>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    particles::spawn_particle_visuals,
                    dust::spawn_dust,
                    ui::spawn_overlay,
                    cursor::spawn_cursor.after(ui::spawn_overlay),
                ),
            )
            .add_systems(
                Update,
                (
                    particles::update_particle_visuals,
                    connections::draw_connections,
                    ui::update_hud,
                )
                    .after(FieldSet::Tick),
            )
            .add_systems(
                Update,
                (
                    ui::regenerate_button_system.before(FieldSet::Input),
                    ui::animate_fade_in,
                    dust::animate_dust,
                    cursor::update_cursor,
                ),
            );
    }
}
