use bytemuck::{Pod, Zeroable};

use crate::world::chunk::{Chunk, CHUNK_SIZE};

pub const FLOATS_PER_VERTEX: usize = 5;
pub const VERTICES_PER_CELL: usize = 6;

/// Interleaved vertex record uploaded as-is: three position floats followed
/// by two texture coordinates, 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat triangle-list buffer for one chunk's top faces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkMesh {
    vertices: Vec<MeshVertex>,
}

impl ChunkMesh {
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Byte view for the buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Naive mesher: every occupied cell contributes its own top quad as two
/// triangles, six vertices, positions in grid units with y fixed one unit
/// above the layer. No hidden-face culling, no greedy merging.
///
/// Idempotent; call again after `Chunk::set` to get a fresh buffer.
pub fn build_mesh(chunk: &Chunk) -> ChunkMesh {
    let mut vertices = Vec::with_capacity(chunk.occupied_count() * VERTICES_PER_CELL);
    for x in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            if chunk.is_solid(x, z) {
                add_top_face(&mut vertices, x as f32, 0.0, z as f32);
            }
        }
    }
    ChunkMesh { vertices }
}

fn add_top_face(vertices: &mut Vec<MeshVertex>, x: f32, y: f32, z: f32) {
    let vertex = |px: f32, pz: f32, u: f32, v: f32| MeshVertex {
        position: [px, y + 1.0, pz],
        uv: [u, v],
    };
    vertices.push(vertex(x, z, 0.0, 0.0));
    vertices.push(vertex(x + 1.0, z, 1.0, 0.0));
    vertices.push(vertex(x + 1.0, z + 1.0, 1.0, 1.0));
    vertices.push(vertex(x, z, 0.0, 0.0));
    vertices.push(vertex(x + 1.0, z + 1.0, 1.0, 1.0));
    vertices.push(vertex(x, z + 1.0, 0.0, 1.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::chunk::CHUNK_AREA;
    use std::collections::HashSet;

    #[test]
    fn test_empty_chunk_yields_empty_mesh() {
        let mesh = build_mesh(&Chunk::new());
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_six_vertices_per_occupied_cell() {
        let mut chunk = Chunk::new();
        chunk.set(0, 0, true);
        chunk.set(5, 9, true);
        chunk.set(15, 15, true);

        let mesh = build_mesh(&chunk);
        assert_eq!(mesh.vertex_count(), 3 * VERTICES_PER_CELL);

        for vertex in mesh.vertices() {
            assert!(vertex.position.iter().all(|coord| coord.is_finite()));
            assert_eq!(vertex.position[1], 1.0);
            assert!(vertex.uv.iter().all(|t| *t == 0.0 || *t == 1.0));
        }
    }

    #[test]
    fn test_full_chunk_mesh_shape() {
        let mesh = build_mesh(&Chunk::filled());
        assert_eq!(mesh.vertex_count(), CHUNK_AREA * VERTICES_PER_CELL);
        assert_eq!(mesh.vertex_count(), 1536);

        // One distinct top-left corner per cell.
        let corners: HashSet<(u32, u32)> = mesh
            .vertices()
            .iter()
            .filter(|vertex| vertex.uv == [0.0, 0.0])
            .map(|vertex| (vertex.position[0] as u32, vertex.position[2] as u32))
            .collect();
        assert_eq!(corners.len(), CHUNK_AREA);

        let (mut min, mut max) = ([f32::MAX; 3], [f32::MIN; 3]);
        for vertex in mesh.vertices() {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex.position[axis]);
                max[axis] = max[axis].max(vertex.position[axis]);
            }
        }
        assert_eq!(min, [0.0, 1.0, 0.0]);
        assert_eq!(max, [16.0, 1.0, 16.0]);
    }

    #[test]
    fn test_rebuild_after_mutation() {
        let mut chunk = Chunk::filled();
        let first = build_mesh(&chunk);
        assert_eq!(first, build_mesh(&chunk));

        chunk.set(4, 4, false);
        let second = build_mesh(&chunk);
        assert_eq!(
            second.vertex_count(),
            chunk.occupied_count() * VERTICES_PER_CELL
        );
        assert_ne!(first, second);
    }

    #[test]
    fn test_byte_view_matches_vertex_stride() {
        let mut chunk = Chunk::new();
        chunk.set(2, 3, true);
        let mesh = build_mesh(&chunk);
        assert_eq!(
            mesh.as_bytes().len(),
            mesh.vertex_count() * FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }
}
