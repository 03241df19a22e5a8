use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use terrain::heightfield::grid_coord;
use terrain::{GenerationParams, GridSettings, TerrainError, generate, generate_with};

const EPS: f32 = 1e-5;

fn heights(geom: &terrain::TerrainGeometry) -> (f32, f32) {
    geom.positions()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[1]), hi.max(p[1]))
        })
}

#[test]
fn counts_match_grid() {
    let mut rng = StdRng::seed_from_u64(11);
    for gridsize in [2, 3, 4, 10, 31] {
        let geom = generate(gridsize, 25, &mut rng).unwrap();
        assert_eq!(geom.vertex_count(), gridsize * gridsize);
        assert_eq!(geom.normals().len(), gridsize * gridsize);
        assert_eq!(geom.triangle_count(), 2 * (gridsize - 1) * (gridsize - 1));
        assert_eq!(geom.index_count(), 3 * geom.triangle_count());
    }
}

#[test]
fn xz_follow_row_major_grid() {
    let mut rng = StdRng::seed_from_u64(12);
    let gridsize = 9;
    let geom = generate(gridsize, 40, &mut rng).unwrap();
    for i in 0..gridsize {
        for j in 0..gridsize {
            let p = geom.positions()[i * gridsize + j];
            assert_eq!(p[0], grid_coord(j, gridsize));
            assert_eq!(p[2], grid_coord(i, gridsize));
            assert_eq!(p[3], 1.0);
            assert!((-1.0..=1.0).contains(&p[0]));
            assert!((-1.0..=1.0).contains(&p[2]));
        }
    }
}

#[test]
fn zero_faults_leave_field_flat() {
    let mut rng = StdRng::seed_from_u64(13);
    let geom = generate(17, 0, &mut rng).unwrap();
    assert!(geom.positions().iter().all(|p| p[1] == 0.0));
    for n in geom.normals() {
        assert!(Vec3::from_array(*n).abs_diff_eq(Vec3::Y, EPS), "{n:?}");
    }
}

#[test]
fn heights_are_centered_and_scaled() {
    let mut rng = StdRng::seed_from_u64(14);
    let geom = generate(33, 200, &mut rng).unwrap();
    assert!(geom.height_range().is_some());

    let (lo, hi) = heights(&geom);
    assert!((hi + lo).abs() < EPS, "lo={lo} hi={hi}");
    assert!((hi - lo - 1.0).abs() < EPS, "lo={lo} hi={hi}");
}

#[test]
fn custom_height_scale_is_respected() {
    let mut rng = StdRng::seed_from_u64(15);
    let params = GenerationParams {
        height_scale: 0.4,
        ..Default::default()
    };
    let settings = GridSettings::new(20, 80).unwrap();
    let geom = generate_with(settings, &params, &mut rng).unwrap();

    let (lo, hi) = heights(&geom);
    assert!((hi + lo).abs() < EPS);
    assert!((hi - lo - 0.4).abs() < EPS);
}

#[test]
fn normals_are_unit_length() {
    let mut rng = StdRng::seed_from_u64(16);
    for (gridsize, faults) in [(2, 0), (2, 5), (5, 1), (24, 300)] {
        let geom = generate(gridsize, faults, &mut rng).unwrap();
        for n in geom.normals() {
            let len = Vec3::from_array(*n).length();
            assert!((len - 1.0).abs() < 1e-4, "normal {n:?} has length {len}");
        }
    }
}

#[test]
fn normals_point_upward() {
    // The y component of a face normal depends only on the triangle's xz footprint.
    let mut rng = StdRng::seed_from_u64(17);
    let geom = generate(16, 150, &mut rng).unwrap();
    assert!(geom.normals().iter().all(|n| n[1] > 0.0));
}

#[test]
fn same_seed_gives_identical_geometry() {
    let a = generate(21, 120, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate(21, 120, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);

    let c = generate(21, 120, &mut StdRng::seed_from_u64(43)).unwrap();
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn single_vertex_grid_is_rejected() {
    let mut rng = StdRng::seed_from_u64(18);
    let err = generate(1, 10, &mut rng).unwrap_err();
    assert!(matches!(err, TerrainError::GridTooSmall(1)));
}
