use glam::IVec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Block screen size is min(viewport width, height) divided by this.
    pub block_scale_divisor: u32,
    /// Grid cells seeded at startup.
    pub initial_blocks: Vec<IVec3>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            block_scale_divisor: 8,
            initial_blocks: vec![
                IVec3::new(0, 0, 0),
                IVec3::new(1, 0, 0),
                IVec3::new(0, 0, 1),
                IVec3::new(1, 0, 1),
            ],
        }
    }
}
