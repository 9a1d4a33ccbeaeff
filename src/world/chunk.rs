pub const CHUNK_SIZE: usize = 16;
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

/// One vertical layer of voxel occupancy, `CHUNK_SIZE` cells on a side.
///
/// The grid is built once at startup; the mesher reads it as a batch. After
/// a `set`, callers regenerate the mesh explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    cells: [bool; CHUNK_AREA],
}

impl Chunk {
    pub fn new() -> Self {
        Self {
            cells: [false; CHUNK_AREA],
        }
    }

    /// Every cell solid, the startup state of the flat demo world.
    pub fn filled() -> Self {
        Self {
            cells: [true; CHUNK_AREA],
        }
    }

    fn index(x: usize, z: usize) -> usize {
        debug_assert!(x < CHUNK_SIZE && z < CHUNK_SIZE, "cell out of range");
        x + z * CHUNK_SIZE
    }

    pub fn set(&mut self, x: usize, z: usize, solid: bool) {
        self.cells[Self::index(x, z)] = solid;
    }

    pub fn is_solid(&self, x: usize, z: usize) -> bool {
        self.cells[Self::index(x, z)]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|solid| **solid).count()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chunk_is_empty() {
        let chunk = Chunk::new();
        assert_eq!(chunk.occupied_count(), 0);
        assert!(!chunk.is_solid(0, 0));
    }

    #[test]
    fn test_filled_chunk_occupies_every_cell() {
        let chunk = Chunk::filled();
        assert_eq!(chunk.occupied_count(), CHUNK_AREA);
        assert!(chunk.is_solid(CHUNK_SIZE - 1, CHUNK_SIZE - 1));
    }

    #[test]
    fn test_set_toggles_occupancy() {
        let mut chunk = Chunk::new();
        chunk.set(3, 7, true);
        assert!(chunk.is_solid(3, 7));
        assert_eq!(chunk.occupied_count(), 1);

        chunk.set(3, 7, false);
        assert!(!chunk.is_solid(3, 7));
        assert_eq!(chunk.occupied_count(), 0);
    }
}
