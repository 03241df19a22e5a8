use bevy::log::debug;
use rand::Rng;

use crate::error::TerrainError;
use crate::heightfield::{Fault, build_heightfield};
use crate::mesh::{triangulate, vertex_normals};
use crate::types::{GenerationParams, GridSettings};

/// One generated terrain surface: index-aligned positions and normals plus triangles.
///
/// Immutable once built; a new request builds a new package.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGeometry {
    gridsize: usize,
    positions: Vec<[f32; 4]>,
    normals: Vec<[f32; 3]>,
    triangles: Vec<[u32; 3]>,
    height_range: Option<(f32, f32)>,
}

impl TerrainGeometry {
    pub fn gridsize(&self) -> usize {
        self.gridsize
    }

    pub fn positions(&self) -> &[[f32; 4]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of indices an indexed draw of this package consumes.
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Positions as one contiguous buffer, stride 4.
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as one contiguous buffer, stride 3.
    pub fn flat_normals(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn flat_indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Height range before normalization, `None` when the field stayed flat.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.height_range
    }
}

/// Generates terrain with the default fault parameters.
pub fn generate<R: Rng + ?Sized>(
    gridsize: usize,
    fault_count: usize,
    rng: &mut R,
) -> Result<TerrainGeometry, TerrainError> {
    let settings = GridSettings::new(gridsize, fault_count)?;
    generate_with(settings, &GenerationParams::default(), rng)
}

pub fn generate_with<R: Rng + ?Sized>(
    settings: GridSettings,
    params: &GenerationParams,
    rng: &mut R,
) -> Result<TerrainGeometry, TerrainError> {
    params.validate()?;

    let gridsize = settings.gridsize();
    let faults =
        std::iter::repeat_with(|| Fault::random(&mut *rng)).take(settings.fault_count());
    let (positions, height_range) = build_heightfield(gridsize, faults, params);
    let triangles = triangulate(gridsize);
    let normals = vertex_normals(&positions, &triangles);

    debug!(
        "terrain {}x{} with {} faults: raw height range {:?}",
        gridsize,
        gridsize,
        settings.fault_count(),
        height_range
    );

    Ok(TerrainGeometry {
        gridsize,
        positions,
        normals,
        triangles,
        height_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_smallest_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        let geom = generate(2, 0, &mut rng).unwrap();

        assert_eq!(
            geom.positions(),
            &[
                [-1.0, 0.0, -1.0, 1.0],
                [1.0, 0.0, -1.0, 1.0],
                [-1.0, 0.0, 1.0, 1.0],
                [1.0, 0.0, 1.0, 1.0],
            ]
        );
        assert_eq!(geom.triangles(), &[[0, 1, 2], [1, 3, 2]]);
        assert!(geom.normals().iter().all(|n| *n == [0.0, 1.0, 0.0]));
        assert_eq!(geom.index_count(), 6);
        assert_eq!(geom.height_range(), None);
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(1, 5, &mut rng),
            Err(TerrainError::GridTooSmall(1))
        ));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = GenerationParams {
            fault_radius: -1.0,
            ..Default::default()
        };
        let settings = GridSettings::new(4, 4).unwrap();
        assert!(matches!(
            generate_with(settings, &params, &mut rng),
            Err(TerrainError::InvalidParameter {
                name: "fault_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_flat_buffers_match_strides() {
        let mut rng = StdRng::seed_from_u64(3);
        let geom = generate(5, 10, &mut rng).unwrap();
        assert_eq!(geom.flat_positions().len(), geom.vertex_count() * 4);
        assert_eq!(geom.flat_normals().len(), geom.vertex_count() * 3);
        assert_eq!(geom.flat_indices().len(), geom.index_count());
        assert_eq!(&geom.flat_positions()[4..8], &geom.positions()[1]);
        assert_eq!(&geom.flat_indices()[3..6], &geom.triangles()[1]);
    }
}
