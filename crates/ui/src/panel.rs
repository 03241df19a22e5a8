use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use terrain::{GenerateTerrain, GenerationStatus, GridSettings, TerrainConfig};

/// Raw text of the control panel fields.
#[derive(Resource, Debug, Default, Clone)]
pub struct TerrainPanelState {
    pub gridsize: String,
    pub faults: String,
    /// Set once the user has typed into a field; config reloads stop overwriting it.
    pub edited: bool,
}

impl TerrainPanelState {
    pub fn from_config(config: &TerrainConfig) -> Self {
        Self {
            gridsize: config.gridsize.to_string(),
            faults: config.fault_count.to_string(),
            edited: false,
        }
    }

    pub fn settings(&self) -> Result<GridSettings, terrain::TerrainError> {
        GridSettings::parse(&self.gridsize, &self.faults)
    }
}

pub fn status_text(status: &GenerationStatus) -> String {
    match status {
        GenerationStatus::Idle => "Press Generate to build a terrain".to_string(),
        GenerationStatus::Ready {
            gridsize,
            fault_count,
            vertices,
            triangles,
        } => format!(
            "{gridsize}x{gridsize} grid, {fault_count} faults: {vertices} vertices, {triangles} triangles"
        ),
        GenerationStatus::Failed(reason) => format!("Error: {reason}"),
    }
}

pub(crate) fn sync_panel_with_config(
    config: Res<TerrainConfig>,
    mut panel: ResMut<TerrainPanelState>,
) {
    if !config.is_changed() || panel.edited {
        return;
    }
    *panel = TerrainPanelState::from_config(&config);
}

pub(crate) fn terrain_panel_system(
    mut contexts: EguiContexts,
    mut panel: ResMut<TerrainPanelState>,
    mut status: ResMut<GenerationStatus>,
    mut requests: MessageWriter<GenerateTerrain>,
) {
    let ctx = match contexts.ctx_mut() {
        Ok(ctx) => ctx,
        Err(_) => return,
    };

    let panel_width = 280.0;
    let margin = 10.0;
    let panel = &mut *panel;
    let mut submitted = false;

    egui::Area::new("terrain_controls".into())
        .fixed_pos(egui::pos2(margin, margin))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgb(35, 35, 35))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 90, 90)))
                .corner_radius(6)
                .show(ui, |ui| {
                    ui.set_min_width(panel_width);

                    egui::Grid::new("terrain_inputs")
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.label("Grid size");
                            if ui.text_edit_singleline(&mut panel.gridsize).changed() {
                                panel.edited = true;
                            }
                            ui.end_row();

                            ui.label("Faults");
                            if ui.text_edit_singleline(&mut panel.faults).changed() {
                                panel.edited = true;
                            }
                            ui.end_row();
                        });

                    submitted = ui.button("Generate").clicked();
                    ui.label(status_text(&status));
                });
        });

    if !submitted {
        return;
    }

    match panel.settings() {
        Ok(settings) => {
            requests.write(GenerateTerrain(settings));
        }
        Err(e) => {
            warn!("rejected terrain request: {e}");
            *status = GenerationStatus::Failed(e.to_string());
        }
    }
}
