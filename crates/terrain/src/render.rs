use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::TerrainConfigAsset;
use crate::geometry::{TerrainGeometry, generate_with};
use crate::types::{GenerateTerrain, GenerationStatus, GridSettings, TerrainConfig};

#[derive(Component)]
pub struct TerrainSurface;

/// Everything the renderer needs to show the current terrain.
#[derive(Resource)]
pub struct TerrainRenderContext {
    pub material: Handle<StandardMaterial>,
    pub surface: Option<Entity>,
}

/// Random source for fault draws.
#[derive(Resource)]
pub struct TerrainRng(pub StdRng);

impl TerrainRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

#[derive(Resource, Clone)]
pub struct TerrainConfigHandle(pub Handle<TerrainConfigAsset>);

pub fn setup_terrain_renderer(
    mut commands: Commands,
    config: Res<TerrainConfig>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(TerrainRng::from_seed(config.seed));
    commands.insert_resource(TerrainRenderContext {
        material: materials.add(surface_material(&config)),
        surface: None,
    });

    let handle: Handle<TerrainConfigAsset> = asset_server.load("terrain.ron");
    commands.insert_resource(TerrainConfigHandle(handle));
}

fn surface_material(config: &TerrainConfig) -> StandardMaterial {
    let (r, g, b) = config.surface_color_srgb;
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        perceptual_roughness: 0.6,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Swaps the built-in defaults for `terrain.ron` once it has loaded.
pub fn finish_config_load(
    mut commands: Commands,
    handle: Option<Res<TerrainConfigHandle>>,
    asset_server: Res<AssetServer>,
    assets: Res<Assets<TerrainConfigAsset>>,
    context: Res<TerrainRenderContext>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(handle) = handle else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(&handle.0) {
        warn!("terrain config not loaded, keeping defaults: {err}");
        commands.remove_resource::<TerrainConfigHandle>();
        return;
    }

    let Some(asset) = assets.get(&handle.0) else {
        return;
    };
    let config = asset.0.clone();

    commands.remove_resource::<TerrainConfigHandle>();

    info!(
        "loaded terrain config: {}x{} grid, {} faults, seed {:?}",
        config.gridsize, config.gridsize, config.fault_count, config.seed
    );

    if let Some(material) = materials.get_mut(&context.material) {
        *material = surface_material(&config);
    }
    commands.insert_resource(TerrainRng::from_seed(config.seed));
    commands.insert_resource(config);
}

pub fn handle_generate_requests(
    mut commands: Commands,
    mut requests: MessageReader<GenerateTerrain>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut context: ResMut<TerrainRenderContext>,
    mut rng: ResMut<TerrainRng>,
    mut status: ResMut<GenerationStatus>,
    config: Res<TerrainConfig>,
) {
    // Only the newest request matters; older ones would be replaced this frame anyway.
    let Some(GenerateTerrain(settings)) = requests.read().last().copied() else {
        return;
    };

    info!(
        "generating terrain with gridsize {} and {} faults",
        settings.gridsize(),
        settings.fault_count()
    );

    let geometry = match generate_with(settings, &config.generation, &mut rng.0) {
        Ok(geometry) => geometry,
        Err(e) => {
            warn!("terrain generation failed: {e}");
            *status = GenerationStatus::Failed(e.to_string());
            return;
        }
    };

    info!(
        "terrain ready: {} vertices, {} triangles",
        geometry.vertex_count(),
        geometry.triangle_count()
    );

    let mesh = meshes.add(mesh_from_geometry(&geometry));
    if let Some(old) = context.surface.take() {
        commands.entity(old).despawn();
    }
    let surface = commands
        .spawn((
            TerrainSurface,
            Mesh3d(mesh),
            MeshMaterial3d(context.material.clone()),
            Transform::default(),
        ))
        .id();
    context.surface = Some(surface);

    *status = ready_status(settings, &geometry);
}

fn ready_status(settings: GridSettings, geometry: &TerrainGeometry) -> GenerationStatus {
    GenerationStatus::Ready {
        gridsize: settings.gridsize(),
        fault_count: settings.fault_count(),
        vertices: geometry.vertex_count(),
        triangles: geometry.triangle_count(),
    }
}

pub fn spin_terrain(
    time: Res<Time>,
    config: Res<TerrainConfig>,
    mut q: Query<&mut Transform, With<TerrainSurface>>,
) {
    let angle = time.elapsed_secs() * config.spin_speed;
    for mut transform in &mut q {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

pub fn mesh_from_geometry(geometry: &TerrainGeometry) -> Mesh {
    let positions: Vec<[f32; 3]> = geometry
        .positions()
        .iter()
        .map(|p| [p[0], p[1], p[2]])
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, geometry.normals().to_vec());
    mesh.insert_indices(mesh_indices(geometry));
    mesh
}

/// 16-bit indices whenever every vertex is addressable with them.
pub fn mesh_indices(geometry: &TerrainGeometry) -> Indices {
    let indices = geometry.flat_indices();
    if geometry.vertex_count() <= u16::MAX as usize + 1 {
        Indices::U16(indices.iter().map(|&i| i as u16).collect())
    } else {
        Indices::U32(indices.to_vec())
    }
}
