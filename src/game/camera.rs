use bevy::prelude::*;

#[derive(Component)]
pub struct Viewer;

#[derive(Clone, Debug)]
pub struct ViewerSettings {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(2.0, 2.0, 1.0),
            target: Vec3::ZERO,
            fov: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

pub fn setup_viewer(mut commands: Commands) {
    let settings = ViewerSettings::default();

    commands.spawn((
        Viewer,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov,
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Transform::from_translation(settings.eye).looking_at(settings.target, Vec3::Y),
    ));
}
