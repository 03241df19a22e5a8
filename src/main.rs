use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod game;

use game::GamePlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 150.0,
            affects_lightmapped_meshes: false,
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Fault Terrain".into(),
                // Ignored on native; in the browser this binds to the page's canvas.
                canvas: Some("#terrain-canvas".into()),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(GamePlugin {
            terrain_config: terrain::TerrainConfig::default(),
        })
        .run();
}
