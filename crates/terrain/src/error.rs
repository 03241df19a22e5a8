use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("grid size {0} is too large: at most 4096 is supported")]
    GridTooLarge(usize),
    #[error("{field} must be a non-negative integer, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },
    #[error("invalid generation parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("failed to read terrain config: {0}")]
    Io(#[from] std::io::Error),
    #[error("terrain config was not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("failed to parse terrain config ron: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
}
