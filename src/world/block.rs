use glam::IVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rendering::texture::TextureId;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Degenerate block size {0}: size must be positive")]
    DegenerateSize(f32),
}

/// A single cube in the world grid.
///
/// `x`/`z` span the horizontal plane, `y` is the vertical layer. Identity is
/// carried by the arena handle, never by the coordinates: two blocks may
/// occupy the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub position: IVec3,
    pub size: f32,
    pub texture: TextureId,
}

impl Block {
    /// Rejects non-positive sizes, which would project to zero-area faces.
    pub fn new(position: IVec3, size: f32, texture: TextureId) -> Result<Self, BlockError> {
        if size <= 0.0 {
            return Err(BlockError::DegenerateSize(size));
        }
        Ok(Self {
            position,
            size,
            texture,
        })
    }

    /// The cell directly above this block. Stacking always inserts here,
    /// never sideways.
    pub fn above(&self) -> IVec3 {
        self.position + IVec3::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::texture::TextureId;

    #[test]
    fn test_rejects_degenerate_size() {
        assert!(matches!(
            Block::new(IVec3::ZERO, 0.0, TextureId(0)),
            Err(BlockError::DegenerateSize(_))
        ));
        assert!(matches!(
            Block::new(IVec3::ZERO, -4.0, TextureId(0)),
            Err(BlockError::DegenerateSize(_))
        ));
        assert!(Block::new(IVec3::ZERO, 0.5, TextureId(0)).is_ok());
    }

    #[test]
    fn test_above_is_next_vertical_layer() {
        let block = Block::new(IVec3::new(3, 1, -2), 64.0, TextureId(0)).unwrap();
        assert_eq!(block.above(), IVec3::new(3, 2, -2));
    }
}
