pub mod panel;

pub use panel::{TerrainPanelState, status_text};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainPanelState>()
            .add_systems(Update, panel::sync_panel_with_config)
            .add_systems(EguiPrimaryContextPass, panel::terrain_panel_system);
    }
}
