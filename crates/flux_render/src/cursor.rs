use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Fraction of the remaining distance the ring covers each frame
const RING_LAG: f32 = 0.15;
const RING_SIZE: f32 = 40.0;
const DOT_SIZE: f32 = 6.0;
const HOVER_SCALE: f32 = 1.5;
/// Time for the ring to settle to its hover scale (seconds)
const SCALE_SETTLE: f32 = 0.2;

/// Pointer-follower state: a dot pinned to the pointer and a lagging ring
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CursorFollower {
    pub pointer: Vec2,
    pub ring: Vec2,
    pub scale: f32,
    pub hovering: bool,
    pub visible: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            ring: Vec2::ZERO,
            scale: 1.0,
            hovering: false,
            visible: false,
        }
    }
}

impl CursorFollower {
    /// Advance one frame. The ring eases toward the pointer by a fixed
    /// fraction per frame; the scale settles over `SCALE_SETTLE` seconds.
    pub fn step(&mut self, dt: f32) {
        self.ring += (self.pointer - self.ring) * RING_LAG;

        let target = if self.hovering { HOVER_SCALE } else { 1.0 };
        let k = (dt / SCALE_SETTLE).clamp(0.0, 1.0);
        self.scale += (target - self.scale) * k;
    }

    pub fn ring_size(&self) -> f32 {
        RING_SIZE * self.scale
    }
}

#[derive(Component)]
pub struct CursorRing;

#[derive(Component)]
pub struct CursorDot;

/// Hide the OS cursor and spawn the dot and ring overlays
pub fn spawn_cursor(
    mut commands: Commands,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.visible = false;
    }

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(RING_SIZE),
            height: Val::Px(RING_SIZE),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
        BorderRadius::MAX,
        GlobalZIndex(1000),
        Visibility::Hidden,
        CursorRing,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(DOT_SIZE),
            height: Val::Px(DOT_SIZE),
            ..default()
        },
        BackgroundColor(Color::WHITE),
        BorderRadius::MAX,
        GlobalZIndex(1001),
        Visibility::Hidden,
        CursorDot,
    ));
}

/// Sample the pointer and hover state, then move the overlays
pub fn update_cursor(
    mut follower: ResMut<CursorFollower>,
    time: Res<Time>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    interactions: Query<&Interaction>,
    mut ring_query: Query<(&mut Node, &mut Visibility), (With<CursorRing>, Without<CursorDot>)>,
    mut dot_query: Query<(&mut Node, &mut Visibility), (With<CursorDot>, Without<CursorRing>)>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    match window.cursor_position() {
        Some(cursor) => {
            if !follower.visible {
                // Snap the ring on (re)entry instead of sweeping from the old spot
                follower.ring = cursor;
            }
            follower.pointer = cursor;
            follower.visible = true;
        }
        None => follower.visible = false,
    }
    follower.hovering = interactions
        .iter()
        .any(|i| matches!(i, Interaction::Hovered | Interaction::Pressed));
    follower.step(time.delta_secs());

    let visibility = if follower.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    if let Ok((mut node, mut vis)) = ring_query.get_single_mut() {
        let size = follower.ring_size();
        node.width = Val::Px(size);
        node.height = Val::Px(size);
        node.left = Val::Px(follower.ring.x - size * 0.5);
        node.top = Val::Px(follower.ring.y - size * 0.5);
        *vis = visibility;
    }
    if let Ok((mut node, mut vis)) = dot_query.get_single_mut() {
        node.left = Val::Px(follower.pointer.x - DOT_SIZE * 0.5);
        node.top = Val::Px(follower.pointer.y - DOT_SIZE * 0.5);
        *vis = visibility;
    }
}
