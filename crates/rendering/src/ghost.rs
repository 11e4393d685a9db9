//! The ghost tile: the in-hand tile shown at the nearest legal board
//! position, rotated by the player, committed on click.
//!
//! Logical truth is the integer pending-rotation count in
//! [`GhostState`]; the tween only animates the visual. A new rotation
//! request while a tween is running first forces the old tween to its
//! end value, so the orientation never lands between quarter turns.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use engine::game::{Perpignan, TilePlaced};

use crate::assets::TileAssets;
use crate::board::{board_to_world, spawn_assembly};
use crate::tile_assembly::compile;

/// Seconds a quarter-turn tween takes.
pub const ROTATION_TWEEN_SECS: f32 = 0.15;

/// Seconds a status line stays on screen.
const STATUS_SECS: f32 = 2.5;

/// Marker for the ghost assembly root entity.
#[derive(Component)]
pub struct GhostTile;

#[derive(Resource)]
pub struct GhostState {
    /// Board position the ghost is snapped to.
    pub cursor: (i32, i32),
    /// Pending clockwise quarter turns, applied at commit.
    pub pending_rotations: u8,
    /// Resting visual heading in degrees (the last tween target).
    pub yaw_degrees: f32,
}

impl Default for GhostState {
    fn default() -> Self {
        Self {
            // One east of the starting tile; replaced by the first
            // pointer update.
            cursor: (43, 42),
            pending_rotations: 0,
            yaw_degrees: 0.0,
        }
    }
}

/// Deck size the current ghost entities were built for. A commit
/// shrinks the deck, which retires the old ghost and spawns the next.
#[derive(Resource, Default)]
pub struct SpawnedGhost {
    deck_len: Option<usize>,
}

/// Pointer position from the last frame that had one, so the ghost
/// holds still when the pointer leaves the window.
#[derive(Resource, Default)]
pub struct LastPointer(Option<Vec2>);

/// One-line player feedback, shown by the HUD while `timer` runs.
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timer = STATUS_SECS;
    }
}

/// Visual rotation interpolation, advanced once per frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub enum RotationTween {
    #[default]
    Idle,
    Interpolating {
        from: f32,
        to: f32,
        elapsed: f32,
    },
}

impl RotationTween {
    pub fn begin(&mut self, from: f32, to: f32) {
        *self = RotationTween::Interpolating {
            from,
            to,
            elapsed: 0.0,
        };
    }

    /// Jump a running tween to its end. Returns the end heading, or
    /// `None` when idle.
    pub fn force_complete(&mut self) -> Option<f32> {
        match *self {
            RotationTween::Interpolating { to, .. } => {
                *self = RotationTween::Idle;
                Some(to)
            }
            RotationTween::Idle => None,
        }
    }

    /// Advance by `dt` seconds and return the heading to show this
    /// frame, or `None` when idle. Goes idle after yielding the end
    /// value exactly once.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        let RotationTween::Interpolating { from, to, elapsed } = *self else {
            return None;
        };
        let elapsed = elapsed + dt;
        if elapsed >= ROTATION_TWEEN_SECS {
            *self = RotationTween::Idle;
            return Some(to);
        }
        *self = RotationTween::Interpolating { from, to, elapsed };
        Some(from + (to - from) * (elapsed / ROTATION_TWEEN_SECS))
    }
}

/// Nearest entry of `available` to `point` by squared distance; ties
/// go to the earliest entry in iteration order.
pub fn nearest_available(point: Vec2, available: &[(i32, i32)]) -> Option<(i32, i32)> {
    let mut best: Option<((i32, i32), f32)> = None;
    for &candidate in available {
        let delta = Vec2::new(candidate.0 as f32, candidate.1 as f32) - point;
        let dist_sq = delta.length_squared();
        match best {
            Some((_, best_sq)) if best_sq <= dist_sq => {}
            _ => best = Some((candidate, dist_sq)),
        }
    }
    best.map(|(position, _)| position)
}

/// Keep the ghost entities in sync with the tile in hand: despawn and
/// rebuild whenever the deck shrinks (and once at startup, as soon as
/// the model library is ready).
pub fn sync_ghost(
    mut commands: Commands,
    game: Option<Res<Perpignan>>,
    assets: Res<TileAssets>,
    mut spawned: ResMut<SpawnedGhost>,
    mut state: ResMut<GhostState>,
    mut tween: ResMut<RotationTween>,
    ghosts: Query<Entity, With<GhostTile>>,
) {
    if !assets.ready() {
        return;
    }
    let Some(game) = game else {
        return;
    };
    if spawned.deck_len == Some(game.deck.len()) {
        return;
    }

    for entity in &ghosts {
        commands.entity(entity).despawn_recursive();
    }
    state.pending_rotations = 0;
    state.yaw_degrees = 0.0;
    *tween = RotationTween::Idle;

    if let Some(hand) = game.hand() {
        match compile(hand) {
            Ok(assembly) => {
                let root = spawn_assembly(
                    &mut commands,
                    &assets,
                    &assembly,
                    board_to_world(state.cursor),
                );
                commands.entity(root).insert(GhostTile);
            }
            Err(e) => {
                error!("tile in hand failed to compile: {e}");
                panic!("corrupt tile library");
            }
        }
    } else {
        info!("draw pile exhausted, game over");
    }
    spawned.deck_len = Some(game.deck.len());
}

/// Project the pointer onto the board plane and snap the ghost to the
/// nearest available position.
pub fn update_ghost_cursor(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    game: Option<Res<Perpignan>>,
    mut state: ResMut<GhostState>,
    mut last: ResMut<LastPointer>,
    mut ghosts: Query<&mut Transform, With<GhostTile>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(game) = game else {
        return;
    };

    let Some(screen_pos) = window.cursor_position().or(last.0) else {
        return;
    };
    last.0 = Some(screen_pos);

    // Ray-plane intersection against the y=0 board plane.
    let Ok(ray) = camera.viewport_to_world(cam_transform, screen_pos) else {
        return;
    };
    if ray.direction.y.abs() < 0.001 {
        return;
    }
    let t = -ray.origin.y / ray.direction.y;
    if t <= 0.0 {
        return;
    }
    let hit = ray.origin + ray.direction * t;

    // World → board space: x stays, north is -z.
    let board_point = Vec2::new(hit.x, -hit.z);
    let Some(nearest) = nearest_available(board_point, game.available()) else {
        return;
    };
    state.cursor = nearest;

    for mut transform in &mut ghosts {
        transform.translation = board_to_world(nearest);
    }
}

/// Scroll wheel: accumulate a quarter turn per notch. Up is clockwise.
pub fn rotate_ghost(
    mut wheel: EventReader<MouseWheel>,
    mut state: ResMut<GhostState>,
    mut tween: ResMut<RotationTween>,
    mut ghosts: Query<&mut Transform, With<GhostTile>>,
) {
    for event in wheel.read() {
        if event.y == 0.0 {
            continue;
        }
        let clockwise = event.y > 0.0;
        state.pending_rotations = (state.pending_rotations + if clockwise { 1 } else { 3 }) % 4;

        // A tween still in flight is snapped to its end before the new
        // one starts, so headings never drift off the quarter grid.
        if let Some(end) = tween.force_complete() {
            for mut transform in &mut ghosts {
                transform.rotation = Quat::from_rotation_y(end.to_radians());
            }
        }
        let from = state.yaw_degrees;
        let to = from + if clockwise { -90.0 } else { 90.0 };
        state.yaw_degrees = to;
        tween.begin(from, to);
    }
}

/// Advance the visual rotation tween.
pub fn advance_rotation_tween(
    time: Res<Time>,
    mut tween: ResMut<RotationTween>,
    mut ghosts: Query<&mut Transform, With<GhostTile>>,
) {
    if let Some(heading) = tween.advance(time.delta_secs()) {
        for mut transform in &mut ghosts {
            transform.rotation = Quat::from_rotation_y(heading.to_radians());
        }
    }
}

/// Left click: commit the ghost. On an illegal target nothing mutates;
/// the player just gets told.
pub fn commit_ghost(
    buttons: Res<ButtonInput<MouseButton>>,
    game: Option<ResMut<Perpignan>>,
    mut state: ResMut<GhostState>,
    mut status: ResMut<StatusMessage>,
    mut placed: EventWriter<TilePlaced>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(mut game) = game else {
        return;
    };

    match game.try_place(state.pending_rotations, state.cursor) {
        Ok(position) => {
            state.pending_rotations = 0;
            placed.send(TilePlaced { position });
            status.set("Tile placed");
        }
        Err(e) => {
            status.set(format!("Cannot place there: {e}"));
        }
    }
}

/// Run the status-line timer down.
pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}
