use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::field::ParticleField;
use super::input::InputSampler;

/// Pixels scrolled per wheel notch in line mode
const LINE_SCROLL_PIXELS: f32 = 100.0;

/// Ordering of the per-frame field work; render systems run after `Tick`
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSet {
    Input,
    Tick,
}

/// Bevy plugin for the simulation pipeline.
/// Expects `ParticleField` and `InputSampler` resources to be inserted.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (FieldSet::Input, FieldSet::Tick).chain())
            .add_systems(
                Update,
                (sample_input, sync_viewport, reset_on_key).in_set(FieldSet::Input),
            )
            .add_systems(Update, field_tick.in_set(FieldSet::Tick));
    }
}

/// Latest cursor position and accumulated wheel scroll
fn sample_input(
    mut sampler: ResMut<InputSampler>,
    mut wheel: EventReader<MouseWheel>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    for event in wheel.read() {
        sampler.scroll_by(wheel_scroll_pixels(event));
    }

    let Ok(window) = window_query.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    sampler.set_viewport_height(size.y);

    if let Some(cursor) = window.cursor_position() {
        sampler.sample_pointer(cursor, size);
    }
}

/// Page scroll for one wheel event, positive down the page
fn wheel_scroll_pixels(event: &MouseWheel) -> f32 {
    let pixels = match event.unit {
        MouseScrollUnit::Line => event.y * LINE_SCROLL_PIXELS,
        MouseScrollUnit::Pixel => event.y,
    };
    // Wheel up (positive y) moves back toward the top
    -pixels
}

/// Keep the pointer-to-world mapping in step with the window aspect
fn sync_viewport(mut field: ResMut<ParticleField>, mut resized: EventReader<WindowResized>) {
    let Some(event) = resized.read().last() else {
        return;
    };
    if event.height <= 0.0 {
        return;
    }

    let viewport = field.viewport_for_aspect(event.width / event.height);
    match field.set_viewport(viewport) {
        Ok(()) => info!(
            "Viewport: {:.2} x {:.2} world units",
            viewport.width, viewport.height
        ),
        Err(e) => warn!("Viewport not updated: {}", e),
    }
}

/// [R] regenerates the field from its seed
fn reset_on_key(keys: Res<ButtonInput<KeyCode>>, mut field: ResMut<ParticleField>) {
    if keys.just_pressed(KeyCode::KeyR) {
        field.reset();
    }
}

/// Main simulation tick: one integration step and a fresh connection list
fn field_tick(mut field: ResMut<ParticleField>, sampler: Res<InputSampler>, time: Res<Time>) {
    let elapsed = time.elapsed_secs();
    if let Err(e) = field.tick(elapsed, sampler.frame_input()) {
        warn!("Field tick skipped: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flux_core::FieldConfig;

    fn app() -> App {
        let config = FieldConfig::default();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<MouseWheel>()
            .add_event::<WindowResized>()
            .insert_resource(ParticleField::create(&config).unwrap())
            .insert_resource(InputSampler::from_config(&config))
            .add_plugins(SimulationPlugin);
        app
    }

    #[test]
    fn test_plugin_ticks_field() {
        let mut app = app();
        app.update();
        app.update();
        let field = app.world().resource::<ParticleField>();
        assert_eq!(field.frame(), 2);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1000.0,
            height: 500.0,
        });
        app.update();
        let field = app.world().resource::<ParticleField>();
        let vp = field.viewport();
        assert!((vp.width / vp.height - 2.0).abs() < 1e-5);
    }

    fn wheel(unit: MouseScrollUnit, y: f32) -> MouseWheel {
        MouseWheel {
            unit,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn test_wheel_scrolls_page() {
        let mut app = app();
        app.world_mut().send_event(wheel(MouseScrollUnit::Line, -1.0));
        app.update();
        assert_eq!(app.world().resource::<InputSampler>().scroll_offset(), 100.0);

        app.world_mut().send_event(wheel(MouseScrollUnit::Pixel, -30.0));
        app.update();
        assert_eq!(app.world().resource::<InputSampler>().scroll_offset(), 130.0);

        // Wheel up goes back toward the top and stops there
        app.world_mut().send_event(wheel(MouseScrollUnit::Line, 5.0));
        app.update();
        assert_eq!(app.world().resource::<InputSampler>().scroll_offset(), 0.0);
    }

    #[test]
    fn test_reset_key_restarts_field() {
        let mut app = app();
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<ParticleField>().frame(), 3);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();
        // Reset runs in the input set, then the same frame ticks once
        assert_eq!(app.world().resource::<ParticleField>().frame(), 1);
    }
}
