use bevy::prelude::*;
use flux_sim::field::ParticleField;
use flux_sim::input::InputSampler;

use super::easing::{power2_out, power3_out};

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Button regenerating the field
#[derive(Component)]
pub struct RegenerateButton;

/// Rise-and-fade entrance for overlay text
#[derive(Component, Debug, Clone)]
pub struct FadeIn {
    /// Seconds before the entrance starts
    pub delay: f32,
    pub duration: f32,
    /// Starting offset below the resting position (px)
    pub rise: f32,
    /// Resting top position (px)
    pub top: f32,
    pub ease: fn(f32) -> f32,
}

impl FadeIn {
    /// Eased progress at `time`
    pub fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return if time >= self.delay { 1.0 } else { 0.0 };
        }
        (self.ease)((time - self.delay) / self.duration)
    }

    /// (top in px, opacity) at `time`
    pub fn sample(&self, time: f32) -> (f32, f32) {
        let p = self.progress(time);
        (self.top + self.rise * (1.0 - p), p)
    }
}

/// Per-character reveal: each glyph rises 20 px over 0.5 s, 0.02 s apart
const GLYPH_RISE: f32 = 20.0;
const GLYPH_DURATION: f32 = 0.5;
const GLYPH_STAGGER: f32 = 0.02;

const TAGLINE: &str = "Intelligence artificielle & conseil IT";

/// Staggered entrances for the characters of `text`, starting at `delay`.
/// Spaces become no-break spaces so single-glyph nodes keep their width.
pub fn text_reveal(text: &str, delay: f32) -> impl Iterator<Item = (char, FadeIn)> + '_ {
    text.chars().enumerate().map(move |(i, c)| {
        let glyph = if c == ' ' { '\u{00A0}' } else { c };
        let fade = FadeIn {
            delay: delay + i as f32 * GLYPH_STAGGER,
            duration: GLYPH_DURATION,
            rise: GLYPH_RISE,
            top: 0.0,
            ease: power2_out,
        };
        (glyph, fade)
    })
}

/// Spawn the hero title, tagline and HUD
pub fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new("LWL1.fr"),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(170.0),
            left: Val::Px(80.0),
            ..default()
        },
        FadeIn {
            delay: 0.0,
            duration: 1.0,
            rise: 50.0,
            top: 120.0,
            ease: power3_out,
        },
    ));

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(210.0),
            left: Val::Px(80.0),
            flex_direction: FlexDirection::Row,
            ..default()
        })
        .with_children(|parent| {
            for (glyph, fade) in text_reveal(TAGLINE, 0.3) {
                parent.spawn((
                    Text::new(glyph.to_string()),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
                    Node {
                        position_type: PositionType::Relative,
                        top: Val::Px(fade.rise),
                        ..default()
                    },
                    fade,
                ));
            }
        });

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                right: Val::Px(10.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.4)),
            BorderRadius::all(Val::Px(4.0)),
            BackgroundColor(Color::NONE),
            RegenerateButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Regenerate [R]"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn animate_fade_in(time: Res<Time>, mut query: Query<(&FadeIn, &mut Node, &mut TextColor)>) {
    let t = time.elapsed_secs();
    for (fade, mut node, mut color) in query.iter_mut() {
        let (top, opacity) = fade.sample(t);
        node.top = Val::Px(top);
        color.0 = color.0.with_alpha(opacity);
    }
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame
pub fn update_hud(
    field: Res<ParticleField>,
    sampler: Res<InputSampler>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let pointer = sampler.pointer();
    **text = format!(
        "Particles: {} | Connections: {} | Scroll: {:.0}%\n\
         Pointer: ({:+.2}, {:+.2}) | Frame: {}\n\
         [Scroll] Rotate  [R] Regenerate",
        field.particle_count(),
        field.connections().len(),
        sampler.scroll_progress() * 100.0,
        pointer[0],
        pointer[1],
        field.frame(),
    );
}

pub fn regenerate_button_system(
    mut field: ResMut<ParticleField>,
    mut query: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<RegenerateButton>)>,
) {
    for (interaction, mut bg) in query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                field.reset();
                bg.0 = Color::srgba(1.0, 1.0, 1.0, 0.2);
            }
            Interaction::Hovered => bg.0 = Color::srgba(1.0, 1.0, 1.0, 0.1),
            Interaction::None => bg.0 = Color::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> FadeIn {
        FadeIn {
            delay: 0.3,
            duration: 1.0,
            rise: 50.0,
            top: 100.0,
            ease: power3_out,
        }
    }

    #[test]
    fn test_starts_hidden_below() {
        let (top, opacity) = fade().sample(0.0);
        assert_eq!(top, 150.0);
        assert_eq!(opacity, 0.0);
    }

    #[test]
    fn test_settles_at_rest() {
        let (top, opacity) = fade().sample(5.0);
        assert_eq!(top, 100.0);
        assert_eq!(opacity, 1.0);
    }

    #[test]
    fn test_midway() {
        let (top, opacity) = fade().sample(0.8);
        assert!((opacity - 0.9375).abs() < 1e-5);
        assert!((top - (100.0 + 50.0 * 0.0625)).abs() < 1e-3);
    }

    #[test]
    fn test_zero_duration() {
        let f = FadeIn {
            duration: 0.0,
            ..fade()
        };
        assert_eq!(f.progress(0.1), 0.0);
        assert_eq!(f.progress(0.3), 1.0);
    }

    #[test]
    fn test_text_reveal_staggers_glyphs() {
        let glyphs: Vec<_> = text_reveal("IA 1", 0.3).collect();
        assert_eq!(glyphs.len(), 4);
        assert_eq!(glyphs[2].0, '\u{00A0}');
        assert!((glyphs[3].1.delay - 0.36).abs() < 1e-6);
        for (_, fade) in &glyphs {
            assert_eq!(fade.sample(0.0), (20.0, 0.0));
            assert_eq!(fade.sample(2.0), (0.0, 1.0));
        }
    }

    #[test]
    fn test_glyph_uses_cubic_ease() {
        let (_, fade) = text_reveal("A", 0.0).next().unwrap();
        // Halfway through 0.5 s: 1 - 0.5^3
        let (top, opacity) = fade.sample(0.25);
        assert!((opacity - 0.875).abs() < 1e-5);
        assert!((top - 20.0 * 0.125).abs() < 1e-4);
    }
}
