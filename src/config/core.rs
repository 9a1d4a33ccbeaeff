use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::picking::PickConfig;
use super::world::WorldConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub camera_start: Vec3,
    pub camera_speed: f32,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub picking: PickConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            camera_start: Vec3::new(8.0, 6.0, 20.0),
            camera_speed: 0.3,
            world: WorldConfig::default(),
            picking: PickConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reads the config file, writing defaults first if it does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        if !path.exists() {
            let config = Self::default();
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content).context("Failed to write default config")?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::picking::TieBreak;
    use glam::IVec3;

    #[test]
    fn test_default_roundtrips_through_toml() {
        let config = EngineConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&content).unwrap();

        assert_eq!(parsed.camera_start, config.camera_start);
        assert_eq!(parsed.camera_speed, config.camera_speed);
        assert_eq!(parsed.world.block_scale_divisor, 8);
        assert_eq!(parsed.world.initial_blocks.len(), 4);
        assert_eq!(parsed.picking.tie_break, TieBreak::PreferLargerX);
    }

    #[test]
    fn test_load_or_create_writes_defaults_then_reads_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("isovox.toml");

        let created = EngineConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.world.initial_blocks[3], IVec3::new(1, 0, 1));

        let loaded = EngineConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded.camera_start, created.camera_start);
    }
}
