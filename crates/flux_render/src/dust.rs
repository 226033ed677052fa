//! Floating dust: small 2D dots drifting over the scene on a looping path.
//! Purely decorative, independent from the particle field.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::easing::ease_in_out;

/// Dots on screen
pub const DUST_COUNT: usize = 50;
const DUST_SEED: u64 = 7;

/// Opacity at the loop ends; the drift loop replaces each dot's own opacity
pub const DUST_REST_OPACITY: f32 = 0.3;
/// Opacity halfway through the loop
pub const DUST_PEAK_OPACITY: f32 = DUST_REST_OPACITY * 1.5;

/// One keyframe of the drift loop: offset in px and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustPose {
    pub offset: Vec2,
    pub scale: f32,
}

impl DustPose {
    const fn new(x: f32, y: f32, scale: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
            scale,
        }
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

/// Motion keyframes at 0%, 25%, 50%, 75%, 100% (screen y grows downward).
/// Opacity has its own track with keys at 0%, 50% and 100% only, see [`dust_opacity`].
const KEYFRAMES: [DustPose; 5] = [
    DustPose::new(0.0, 0.0, 1.0),
    DustPose::new(10.0, -20.0, 1.1),
    DustPose::new(-5.0, -40.0, 0.9),
    DustPose::new(15.0, -20.0, 1.05),
    DustPose::new(0.0, 0.0, 1.0),
];

/// Pose at `phase` in [0, 1) of the loop, eased between keyframes
pub fn dust_pose(phase: f32) -> DustPose {
    let phase = phase.rem_euclid(1.0);
    let segments = (KEYFRAMES.len() - 1) as f32;
    let scaled = phase * segments;
    let index = (scaled.floor() as usize).min(KEYFRAMES.len() - 2);
    let local = ease_in_out(scaled - index as f32);
    KEYFRAMES[index].lerp(KEYFRAMES[index + 1], local)
}

/// Loop opacity at `phase`, eased from rest to peak over the first half and back
pub fn dust_opacity(phase: f32) -> f32 {
    let half = phase.rem_euclid(1.0) * 2.0;
    if half < 1.0 {
        DUST_REST_OPACITY + (DUST_PEAK_OPACITY - DUST_REST_OPACITY) * ease_in_out(half)
    } else {
        DUST_PEAK_OPACITY + (DUST_REST_OPACITY - DUST_PEAK_OPACITY) * ease_in_out(half - 1.0)
    }
}

/// A dust dot with its randomized loop parameters
#[derive(Component, Debug, Clone)]
pub struct Dust {
    /// Anchor in percent of the window (0..100)
    pub anchor: Vec2,
    /// Diameter in px
    pub size: f32,
    /// Loop length in seconds
    pub duration: f32,
    /// Seconds before the loop starts
    pub delay: f32,
    /// Shown until the loop starts
    pub opacity: f32,
}

impl Dust {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            anchor: Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
            size: rng.gen_range(1.0..4.0),
            duration: rng.gen_range(10.0..30.0),
            delay: rng.gen_range(0.0..10.0),
            opacity: rng.gen_range(0.1..0.6),
        }
    }

    /// Loop phase at `time`; holds the first keyframe during the delay
    pub fn phase(&self, time: f32) -> f32 {
        if time < self.delay {
            0.0
        } else {
            ((time - self.delay) / self.duration).fract()
        }
    }

    /// Own opacity during the delay, then the loop's opacity track
    pub fn opacity_at(&self, time: f32) -> f32 {
        if time < self.delay {
            self.opacity
        } else {
            dust_opacity(self.phase(time))
        }
    }
}

pub fn spawn_dust(mut commands: Commands) {
    let mut rng = ChaCha8Rng::seed_from_u64(DUST_SEED);
    for _ in 0..DUST_COUNT {
        let dust = Dust::random(&mut rng);
        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(dust.anchor.x),
                top: Val::Percent(dust.anchor.y),
                width: Val::Px(dust.size),
                height: Val::Px(dust.size),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, dust.opacity)),
            BorderRadius::MAX,
            dust,
        ));
    }
    info!("Spawned {} dust dots", DUST_COUNT);
}

pub fn animate_dust(
    time: Res<Time>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&Dust, &mut Node, &mut BackgroundColor)>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let (w, h) = (window.width(), window.height());
    let t = time.elapsed_secs();

    for (dust, mut node, mut color) in query.iter_mut() {
        let pose = dust_pose(dust.phase(t));
        let opacity = dust.opacity_at(t);
        let size = dust.size * pose.scale;
        // Scale around the dot center
        let grow = (size - dust.size) * 0.5;
        node.left = Val::Px(dust.anchor.x * 0.01 * w + pose.offset.x - grow);
        node.top = Val::Px(dust.anchor.y * 0.01 * h + pose.offset.y - grow);
        node.width = Val::Px(size);
        node.height = Val::Px(size);
        color.0 = Color::srgba(1.0, 1.0, 1.0, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_hit_exactly() {
        assert_eq!(dust_pose(0.0), KEYFRAMES[0]);
        let p = dust_pose(0.5);
        assert!(p.offset.abs_diff_eq(Vec2::new(-5.0, -40.0), 1e-3));
        assert!((p.scale - 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_opacity_track_halves() {
        assert!((dust_opacity(0.0) - 0.3).abs() < 1e-6);
        assert!((dust_opacity(0.5) - 0.45).abs() < 1e-6);
        // Quarter points sit midway, eased across each half rather than per quarter
        assert!((dust_opacity(0.25) - 0.375).abs() < 1e-3);
        assert!((dust_opacity(0.75) - 0.375).abs() < 1e-3);
        assert!(dust_opacity(0.1) < 0.3 + 0.15 * 0.2);
    }

    #[test]
    fn test_loop_overrides_own_opacity() {
        let dust = Dust {
            anchor: Vec2::ZERO,
            size: 2.0,
            duration: 20.0,
            delay: 5.0,
            opacity: 0.55,
        };
        assert_eq!(dust.opacity_at(1.0), 0.55);
        assert!((dust.opacity_at(5.0) - 0.3).abs() < 1e-6);
        assert!((dust.opacity_at(15.0) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_loop_wraps() {
        let a = dust_pose(0.3);
        let b = dust_pose(1.3);
        assert!(a.offset.abs_diff_eq(b.offset, 1e-4));
        let end = dust_pose(0.999_99);
        assert!(end.offset.abs_diff_eq(Vec2::ZERO, 1e-2));
    }

    #[test]
    fn test_eased_between_keyframes() {
        // Midway between 0% and 25%: ease-in-out is at its halfway point
        let p = dust_pose(0.125);
        assert!(p.offset.abs_diff_eq(Vec2::new(5.0, -10.0), 1e-2));
    }

    #[test]
    fn test_delay_and_phase() {
        let dust = Dust {
            anchor: Vec2::ZERO,
            size: 2.0,
            duration: 20.0,
            delay: 5.0,
            opacity: 0.3,
        };
        assert_eq!(dust.phase(3.0), 0.0);
        assert!((dust.phase(10.0) - 0.25).abs() < 1e-6);
        assert!((dust.phase(30.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let d = Dust::random(&mut rng);
            assert!((0.0..100.0).contains(&d.anchor.x));
            assert!((1.0..4.0).contains(&d.size));
            assert!((10.0..30.0).contains(&d.duration));
            assert!((0.0..10.0).contains(&d.delay));
            assert!((0.1..0.6).contains(&d.opacity));
        }
    }
}
