use bevy::prelude::*;
use flux_core::{FieldConfig, FieldError};
use flux_render::plugin::FluxRenderPlugin;
use flux_sim::field::ParticleField;
use flux_sim::input::InputSampler;
use flux_sim::pipeline::SimulationPlugin;

fn main() -> Result<(), FieldError> {
    let config = FieldConfig::default();
    let field = ParticleField::create(&config)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "LWL1.fr — Neural Flux".into(),
                resolution: (1920.0, 1080.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(InputSampler::from_config(&config))
        .insert_resource(field)
        .add_plugins(SimulationPlugin)
        .add_plugins(FluxRenderPlugin)
        .run();

    Ok(())
}
