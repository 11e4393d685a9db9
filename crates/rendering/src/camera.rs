//! Camera auto-fit.
//!
//! The camera orbits nothing and pans nowhere: it sits at a fixed
//! offset from the board's focus point and frames the whole board with
//! an orthographic projection. The focus is the running average of all
//! placed tile positions (seed tile counted as the first); the film
//! size follows the farthest placed tile plus a margin, widened on the
//! window's larger axis so nothing clips when the player resizes.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::WindowResized;

use engine::config::SEED_POSITION;
use engine::game::{Perpignan, TilePlaced};

use crate::board::board_to_world;

/// Board units added around the farthest tile.
const FIT_MARGIN: f32 = 3.0;

/// Extra breathing room on the framed square.
const FIT_ZOOM: f32 = 1.4;

/// Camera offset from the focus point: east, up, and a little south.
const CAMERA_OFFSET: Vec3 = Vec3::new(8.0, 12.0, 4.0);

#[derive(Resource)]
pub struct BoardCamera {
    /// Running average of placed tile positions (world space).
    pub focus: Vec3,
    /// Tiles in the average, the seed tile included.
    pub tiles_placed: u32,
    /// Distance from the focus to the farthest placed tile.
    pub radius: f32,
}

impl Default for BoardCamera {
    fn default() -> Self {
        Self {
            focus: board_to_world(SEED_POSITION),
            tiles_placed: 1,
            // Placeholder until the first refit; any small non-zero
            // value frames the seed tile alone.
            radius: 1.0,
        }
    }
}

/// Fold one more position into the running focus average over `n`
/// previous positions.
pub fn fold_focus(focus: Vec3, n: u32, position: Vec3) -> Vec3 {
    (focus * n as f32 + position) / (n as f32 + 1.0)
}

/// Greatest distance from `focus` to any occupied position; 0 when
/// nothing is occupied.
pub fn board_radius(focus: Vec3, occupied: impl Iterator<Item = Vec3>) -> f32 {
    occupied
        .map(|position| position.distance_squared(focus))
        .fold(0.0_f32, f32::max)
        .sqrt()
}

/// Orthographic film size framing `radius`, aspect-corrected: the
/// window's larger axis is widened so the framed square always fits.
pub fn view_extent(radius: f32, width: f32, height: f32) -> (f32, f32) {
    let mut fw = (radius + FIT_MARGIN) * FIT_ZOOM;
    let mut fh = fw;
    if width <= 0.0 || height <= 0.0 {
        return (fw, fh);
    }
    let aspect = width / height;
    if width > height {
        fw *= aspect;
    } else {
        fh /= aspect;
    }
    (fw, fh)
}

pub fn setup_camera(mut commands: Commands) {
    let camera = BoardCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: 1.0,
                height: 1.0,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(camera.focus + CAMERA_OFFSET)
            .looking_at(camera.focus, Vec3::Y),
    ));
    commands.insert_resource(camera);
}

/// Fold each placement into the focus average and recompute the
/// radius over the whole board.
pub fn refit_on_placement(
    mut camera: ResMut<BoardCamera>,
    game: Option<Res<Perpignan>>,
    mut placed: EventReader<TilePlaced>,
) {
    let Some(game) = game else {
        return;
    };
    for event in placed.read() {
        camera.focus = fold_focus(
            camera.focus,
            camera.tiles_placed,
            board_to_world(event.position),
        );
        camera.tiles_placed += 1;
        camera.radius = board_radius(
            camera.focus,
            game.grid().keys().map(|&position| board_to_world(position)),
        );
    }
}

/// Apply the fit whenever the board grows or the window changes shape.
pub fn apply_camera_fit(
    camera: Res<BoardCamera>,
    windows: Query<&Window>,
    mut resized: EventReader<WindowResized>,
    mut cameras: Query<(&mut Projection, &mut Transform), With<Camera3d>>,
) {
    let window_changed = !resized.is_empty();
    resized.clear();
    if !camera.is_changed() && !window_changed {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((mut projection, mut transform)) = cameras.get_single_mut() else {
        return;
    };

    let (width, height) = view_extent(camera.radius, window.width(), window.height());
    if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scaling_mode = ScalingMode::Fixed { width, height };
    }
    *transform =
        Transform::from_translation(camera.focus + CAMERA_OFFSET).looking_at(camera.focus, Vec3::Y);
}
