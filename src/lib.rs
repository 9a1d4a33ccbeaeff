pub mod config;
pub mod engine;
pub mod rendering;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::picking::PickConfig;
pub use config::world::WorldConfig;
pub use engine::{FrameOutput, IsoEngine};
pub use rendering::camera::{Camera, SharedCamera};
pub use rendering::mesher::{build_mesh, ChunkMesh, MeshVertex};
pub use rendering::picking::{PickingResolver, TieBreak};
pub use rendering::projection::{project, ScreenGeometry, Viewport};
pub use rendering::texture::{TextureError, TextureId, TextureRegistry};
pub use world::arena::{BlockArena, BlockHandle};
pub use world::block::{Block, BlockError};
pub use world::chunk::{Chunk, CHUNK_SIZE};
pub use world::command::{CommandSender, WorldCommand};
