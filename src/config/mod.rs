pub mod core;
pub mod picking;
pub mod world;

pub use self::core::EngineConfig;
pub use self::picking::PickConfig;
pub use self::world::WorldConfig;
