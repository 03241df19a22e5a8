use glam::Vec3;

/// Two triangles per grid cell, `(tl, tr, bl)` then `(tr, br, bl)`, in row-major cell order.
pub fn triangulate(gridsize: usize) -> Vec<[u32; 3]> {
    let cells = gridsize.saturating_sub(1);
    let mut triangles = Vec::with_capacity(2 * cells * cells);
    for i in 0..cells {
        for j in 0..cells {
            let top_left = (i * gridsize + j) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((i + 1) * gridsize + j) as u32;
            let bottom_right = bottom_left + 1;

            triangles.push([top_left, top_right, bottom_left]);
            triangles.push([top_right, bottom_right, bottom_left]);
        }
    }
    triangles
}

/// Face normal of `(a, b, c)`, left un-normalized so its length weights by area.
///
/// The cross product is negated: with the winding from [`triangulate`] that makes a
/// flat grid face +Y.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    -(b - a).cross(c - a)
}

/// Area-weighted smooth normals, one per position.
///
/// Vertices that end up with a zero sum (unreferenced, or only degenerate neighbours)
/// get `+Y`.
pub fn vertex_normals(positions: &[[f32; 4]], triangles: &[[u32; 3]]) -> Vec<[f32; 3]> {
    let mut accum = vec![Vec3::ZERO; positions.len()];
    let xyz = |idx: u32| {
        let p = positions[idx as usize];
        Vec3::new(p[0], p[1], p[2])
    };

    for &[a, b, c] in triangles {
        let n = face_normal(xyz(a), xyz(b), xyz(c));
        accum[a as usize] += n;
        accum[b as usize] += n;
        accum[c as usize] += n;
    }

    accum
        .into_iter()
        .map(|n| n.normalize_or(Vec3::Y).to_array())
        .collect()
}
