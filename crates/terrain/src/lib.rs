pub mod assets;
pub mod error;
pub mod geometry;
pub mod heightfield;
pub mod mesh;
pub mod render;
pub mod types;

pub use error::TerrainError;
pub use geometry::{TerrainGeometry, generate, generate_with};
pub use types::*;

use bevy::prelude::*;

pub struct TerrainPlugin {
    pub config: types::TerrainConfig,
}

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<types::GenerationStatus>()
            .add_message::<types::GenerateTerrain>()
            .init_asset::<assets::TerrainConfigAsset>()
            .init_asset_loader::<assets::TerrainConfigAssetLoader>()
            .add_systems(Startup, render::setup_terrain_renderer)
            .add_systems(
                Update,
                (
                    render::finish_config_load,
                    render::handle_generate_requests,
                    render::spin_terrain,
                )
                    .chain(),
            );
    }
}
