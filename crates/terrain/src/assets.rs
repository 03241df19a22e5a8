use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;

use crate::error::TerrainError;
use crate::types::TerrainConfig;

#[derive(Asset, TypePath, Debug, Clone)]
pub struct TerrainConfigAsset(pub TerrainConfig);

#[derive(Default)]
pub struct TerrainConfigAssetLoader;

impl AssetLoader for TerrainConfigAssetLoader {
    type Asset = TerrainConfigAsset;
    type Settings = ();
    type Error = TerrainError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        let config = parse_config_bytes(&bytes)?;

        Ok(TerrainConfigAsset(config))
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}

pub fn parse_config_bytes(bytes: &[u8]) -> Result<TerrainConfig, TerrainError> {
    let text = std::str::from_utf8(bytes)?;
    TerrainConfig::from_ron_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_utf8() {
        let bytes = b"(gridsize: 8, fault_count: \xff)";
        assert!(matches!(
            parse_config_bytes(bytes),
            Err(TerrainError::Utf8(_))
        ));
    }

    #[test]
    fn test_parses_valid_bytes() {
        let config = parse_config_bytes(b"(gridsize: 8, fault_count: 3)").unwrap();
        assert_eq!(config.gridsize, 8);
        assert_eq!(config.fault_count, 3);
    }
}
