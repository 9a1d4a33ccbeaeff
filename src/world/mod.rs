pub mod arena;
pub mod block;
pub mod chunk;
pub mod command;

pub use arena::{depth_key, BlockArena, BlockHandle};
pub use block::{Block, BlockError};
pub use chunk::{Chunk, CHUNK_AREA, CHUNK_SIZE};
pub use command::{CommandQueue, CommandSender, WorldCommand};
