use bevy::prelude::*;
use serde::Deserialize;

use crate::error::TerrainError;

// --- Grid ---

/// Validated grid resolution and fault count for one generation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSettings {
    gridsize: usize,
    fault_count: usize,
}

impl GridSettings {
    pub const MIN_GRIDSIZE: usize = 2;
    /// Upper bound on `gridsize²`; keeps every buffer well inside a 32-bit address space.
    pub const MAX_VERTICES: usize = 1 << 24;

    pub fn new(gridsize: usize, fault_count: usize) -> Result<Self, TerrainError> {
        if gridsize < Self::MIN_GRIDSIZE {
            return Err(TerrainError::GridTooSmall(gridsize));
        }
        let fits = gridsize
            .checked_mul(gridsize)
            .is_some_and(|count| count <= Self::MAX_VERTICES);
        if !fits {
            return Err(TerrainError::GridTooLarge(gridsize));
        }
        Ok(Self {
            gridsize,
            fault_count,
        })
    }

    /// Parses raw text input (e.g. from the control panel).
    pub fn parse(gridsize: &str, fault_count: &str) -> Result<Self, TerrainError> {
        let gridsize = parse_count("gridsize", gridsize)?;
        let fault_count = parse_count("faults", fault_count)?;
        Self::new(gridsize, fault_count)
    }

    pub fn gridsize(&self) -> usize {
        self.gridsize
    }

    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    pub fn vertex_count(&self) -> usize {
        self.gridsize * self.gridsize
    }

    pub fn triangle_count(&self) -> usize {
        2 * (self.gridsize - 1) * (self.gridsize - 1)
    }
}

fn parse_count(field: &'static str, text: &str) -> Result<usize, TerrainError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| TerrainError::NotAnInteger {
            field,
            value: text.to_string(),
        })
}

// --- Generation parameters ---

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Distance from a fault line beyond which it has no effect.
    pub fault_radius: f32,
    /// Height added on the positive side of a fault (and removed on the other).
    pub fault_displacement: f32,
    /// Total height span after normalization.
    pub height_scale: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            fault_radius: 0.5,
            fault_displacement: 0.01,
            height_scale: 1.0,
        }
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.fault_radius.is_finite() || self.fault_radius <= 0.0 {
            return Err(TerrainError::InvalidParameter {
                name: "fault_radius",
                value: self.fault_radius,
            });
        }
        if !self.fault_displacement.is_finite() {
            return Err(TerrainError::InvalidParameter {
                name: "fault_displacement",
                value: self.fault_displacement,
            });
        }
        if !self.height_scale.is_finite() || self.height_scale <= 0.0 {
            return Err(TerrainError::InvalidParameter {
                name: "height_scale",
                value: self.height_scale,
            });
        }
        Ok(())
    }
}

// --- Config ---

#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid size the control panel starts with.
    pub gridsize: usize,
    /// Fault count the control panel starts with.
    pub fault_count: usize,
    /// Fixed seed for reproducible terrain; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub generation: GenerationParams,
    pub surface_color_srgb: (f32, f32, f32),
    /// Turntable speed in radians per second.
    pub spin_speed: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            gridsize: 64,
            fault_count: 200,
            seed: None,
            generation: GenerationParams::default(),
            surface_color_srgb: (0.9, 0.8, 0.7),
            spin_speed: std::f32::consts::FRAC_PI_4,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<(), TerrainError> {
        GridSettings::new(self.gridsize, self.fault_count)?;
        self.generation.validate()?;
        let (r, g, b) = self.surface_color_srgb;
        for (name, value) in [
            ("surface_color_srgb.r", r),
            ("surface_color_srgb.g", g),
            ("surface_color_srgb.b", b),
        ] {
            if !value.is_finite() {
                return Err(TerrainError::InvalidParameter { name, value });
            }
        }
        if !self.spin_speed.is_finite() {
            return Err(TerrainError::InvalidParameter {
                name: "spin_speed",
                value: self.spin_speed,
            });
        }
        Ok(())
    }

    pub fn from_ron_str(text: &str) -> Result<Self, TerrainError> {
        let config: TerrainConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

// --- Messages / status ---

/// Request to replace the displayed terrain with a freshly generated one.
#[derive(Message, Clone, Copy, Debug)]
pub struct GenerateTerrain(pub GridSettings);

#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Ready {
        gridsize: usize,
        fault_count: usize,
        vertices: usize,
        triangles: usize,
    },
    Failed(String),
}
