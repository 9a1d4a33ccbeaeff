use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projection::ScreenGeometry;
use crate::world::arena::BlockHandle;
use crate::world::block::Block;

/// Policy for breaking exact-distance ties between overlapping candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Deterministic: the candidate with the strictly greater grid `x` wins.
    #[default]
    PreferLargerX,
    /// Keep whichever candidate was seen first.
    FirstFound,
}

/// Resolves a screen point to the best-matching projected block.
///
/// A block is a candidate iff the point lies inside its screen bounds; among
/// candidates, the one whose anchor is nearest wins. A miss is a normal
/// `None`, never an error.
pub struct PickingResolver {
    tie_break: TieBreak,
}

impl PickingResolver {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn pick(
        &self,
        candidates: &[(BlockHandle, Block, ScreenGeometry)],
        point: Vec2,
    ) -> Option<BlockHandle> {
        let mut best: Option<(BlockHandle, &Block, f32)> = None;
        for (handle, block, geometry) in candidates {
            if !geometry.bounds().contains(point) {
                continue;
            }
            let distance = geometry.distance_to(point);
            let wins = match best {
                None => true,
                Some((_, best_block, best_distance)) => {
                    distance < best_distance
                        || (self.tie_break == TieBreak::PreferLargerX
                            && distance == best_distance
                            && block.position.x > best_block.position.x)
                }
            };
            if wins {
                best = Some((*handle, block, distance));
            }
        }
        best.map(|(handle, _, _)| handle)
    }
}

impl Default for PickingResolver {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}
