//! Fault-formation heightfield synthesis.
//!
//! A flat `gridsize × gridsize` grid over `[-1, 1]²` is repeatedly split by random
//! lines. Vertices near each line are pushed up on one side and down on the other with a
//! smooth falloff, and the accumulated heights are finally centered and rescaled.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::types::GenerationParams;

/// Coordinate of grid line `index` on `[-1, 1]`; the last line lands exactly on 1.
pub fn grid_coord(index: usize, gridsize: usize) -> f32 {
    -1.0 + 2.0 * index as f32 / (gridsize - 1) as f32
}

/// Flat grid of `(x, 0, z, 1)` positions in row-major order (`z` per row, `x` per column).
pub fn grid_positions(gridsize: usize) -> Vec<[f32; 4]> {
    let mut positions = Vec::with_capacity(gridsize * gridsize);
    for i in 0..gridsize {
        let z = grid_coord(i, gridsize);
        for j in 0..gridsize {
            positions.push([grid_coord(j, gridsize), 0.0, z, 1.0]);
        }
    }
    positions
}

/// A random line through the grid, given by a point on it and its unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fault {
    pub point: Vec2,
    pub direction: Vec2,
}

impl Fault {
    pub fn from_angle(point: Vec2, theta: f32) -> Self {
        Self {
            point,
            direction: Vec2::from_angle(theta),
        }
    }

    /// Draws a point uniformly on `[-1, 1]²` and an angle uniformly on `[0, 2π)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let px = rng.random_range(-1.0f32..=1.0);
        let pz = rng.random_range(-1.0f32..=1.0);
        let theta = rng.random_range(0.0f32..TAU);
        Self::from_angle(Vec2::new(px, pz), theta)
    }

    pub fn signed_distance(&self, x: f32, z: f32) -> f32 {
        (Vec2::new(x, z) - self.point).dot(self.direction)
    }
}

/// `(1 - (r/R)²)²` inside the radius, zero outside.
pub fn falloff(r: f32, radius: f32) -> f32 {
    if r < radius {
        let t = r / radius;
        let s = 1.0 - t * t;
        s * s
    } else {
        0.0
    }
}

pub fn apply_fault(positions: &mut [[f32; 4]], fault: &Fault, params: &GenerationParams) {
    for p in positions.iter_mut() {
        let d = fault.signed_distance(p[0], p[2]);
        let step = params.fault_displacement * falloff(d.abs(), params.fault_radius);
        if d >= 0.0 {
            p[1] += step;
        } else {
            p[1] -= step;
        }
    }
}

/// Centers heights on zero and scales their span to `scale`.
///
/// Returns the original `(min, max)` when rescaling happened, `None` for a flat field.
pub fn normalize_heights(positions: &mut [[f32; 4]], scale: f32) -> Option<(f32, f32)> {
    let (min_y, max_y) = positions
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[1]), hi.max(p[1]))
        });

    if positions.is_empty() || max_y == min_y {
        return None;
    }

    let mid = 0.5 * (max_y + min_y);
    let span = max_y - min_y;
    for p in positions.iter_mut() {
        p[1] = scale * (p[1] - mid) / span;
    }
    Some((min_y, max_y))
}

/// Builds the grid and applies `faults` in order, then normalizes.
///
/// Faults are consumed lazily, so a `repeat_with` over an RNG draws each one right
/// before it is applied.
pub fn build_heightfield<I>(
    gridsize: usize,
    faults: I,
    params: &GenerationParams,
) -> (Vec<[f32; 4]>, Option<(f32, f32)>)
where
    I: IntoIterator<Item = Fault>,
{
    let mut positions = grid_positions(gridsize);
    for fault in faults {
        apply_fault(&mut positions, &fault, params);
    }
    let range = normalize_heights(&mut positions, params.height_scale);
    (positions, range)
}
