pub mod camera;
pub mod mesher;
pub mod picking;
pub mod projection;
pub mod texture;

pub use camera::{Camera, SharedCamera};
pub use mesher::{build_mesh, ChunkMesh, MeshVertex, FLOATS_PER_VERTEX, VERTICES_PER_CELL};
pub use picking::{PickingResolver, TieBreak};
pub use projection::{
    project, Face, FaceKind, FaceVertex, ScreenGeometry, ScreenRect, Viewport,
};
pub use texture::{TextureData, TextureError, TextureId, TextureRegistry};
