use bevy::prelude::*;

/// Direction towards the light, before normalization.
const TOWARD_SUN: Vec3 = Vec3::new(1.0, 1.0, 0.0);

pub fn setup_sun_light(mut commands: Commands) {
    let toward_sun = TOWARD_SUN.normalize();

    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(-toward_sun, Vec3::Y),
    ));
}
