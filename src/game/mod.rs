pub mod camera;
pub mod lighting;

use bevy::prelude::*;

use terrain as terrain_crate;
use ui as ui_crate;

pub struct GamePlugin {
    pub terrain_config: terrain_crate::TerrainConfig,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(terrain_crate::TerrainPlugin {
            config: self.terrain_config.clone(),
        })
        .add_plugins(ui_crate::UiPlugin)
        .add_systems(Startup, (camera::setup_viewer, lighting::setup_sun_light));
    }
}
