//! Scene lighting: cornflower sky, soft ambient, one low sun from the
//! north.

use bevy::prelude::*;

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ClearColor(Color::srgb(0.392, 0.584, 0.929)));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 0.9),
        brightness: 700.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::new(0.0, -1.0, -1.0).normalize(), Vec3::Y),
    ));
}
