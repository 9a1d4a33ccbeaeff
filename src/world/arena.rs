use std::collections::HashMap;

use glam::IVec3;
use parking_lot::RwLock;

use super::block::Block;

/// Stable identity of a block in the arena. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockHandle(u64);

struct Slot {
    block: Block,
    // Insertion sequence; defines the tie order of the stable depth sort.
    seq: u64,
}

#[derive(Default)]
struct ArenaInner {
    slots: HashMap<BlockHandle, Slot>,
    next_seq: u64,
}

/// Handle-indexed collection of the blocks forming the world.
///
/// Writers (the input context) and readers (the render context) may
/// interleave freely; a render pass works from `snapshot()`, so iteration
/// never observes a half-applied mutation. Duplicate coordinates are
/// permitted, matching the add-above behavior of repeated stacking.
pub struct BlockArena {
    inner: RwLock<ArenaInner>,
}

impl BlockArena {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ArenaInner::default()),
        }
    }

    pub fn insert(&self, block: Block) -> BlockHandle {
        let mut inner = self.inner.write();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let handle = BlockHandle(seq);
        inner.slots.insert(handle, Slot { block, seq });
        handle
    }

    pub fn remove(&self, handle: BlockHandle) -> Option<Block> {
        self.inner.write().slots.remove(&handle).map(|slot| slot.block)
    }

    pub fn get(&self, handle: BlockHandle) -> Option<Block> {
        self.inner.read().slots.get(&handle).map(|slot| slot.block)
    }

    pub fn len(&self) -> usize {
        self.inner.read().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consistent copy of the arena in insertion order.
    pub fn snapshot(&self) -> Vec<(BlockHandle, Block)> {
        let inner = self.inner.read();
        let mut entries: Vec<(BlockHandle, u64, Block)> = inner
            .slots
            .iter()
            .map(|(handle, slot)| (*handle, slot.seq, slot.block))
            .collect();
        entries.sort_by_key(|(_, seq, _)| *seq);
        entries
            .into_iter()
            .map(|(handle, _, block)| (handle, block))
            .collect()
    }

    /// Painter's algorithm sequence: ascending `x + y + z`, insertion order
    /// on equal keys. The key ignores camera-relative distance; that is the
    /// known limit of this approximation and is kept as-is.
    pub fn draw_order(&self) -> Vec<(BlockHandle, Block)> {
        let mut entries = self.snapshot();
        entries.sort_by_key(|(_, block)| depth_key(block.position));
        entries
    }
}

impl Default for BlockArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid-coordinate sum used as the draw-order key.
pub fn depth_key(position: IVec3) -> i32 {
    position.x + position.y + position.z
}
