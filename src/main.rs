use anyhow::Result;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use isovox::{
    build_mesh, Camera, Chunk, EngineConfig, IsoEngine, TextureRegistry, Viewport, WorldCommand,
};

/// Headless demo driver: a windowed frontend would replace the loop body
/// with real input events and rasterize the frame output.
fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Starting isovox");

    let config = EngineConfig::load_or_create("config/isovox.toml")?;

    let mut textures = TextureRegistry::new();
    // Windowed frontends load real assets here via `TextureRegistry::load`;
    // a failure there aborts startup.
    let grass = textures.register_solid([96, 160, 64, 255]);

    let viewport = Viewport::new(800.0, 600.0);
    let engine = IsoEngine::new(&config, viewport, grass)?;

    let mut camera = Camera::new(config.camera_start, config.camera_speed);
    let input = engine.command_sender();

    input.send(WorldCommand::AddAboveCrosshair);
    input.send(WorldCommand::RemoveAtCrosshair);

    for frame_index in 0..3 {
        camera.move_forward();
        engine.camera().store(camera.position);

        let output = engine.frame(viewport);
        info!(
            "frame {}: {} blocks drawn, selected {:?}",
            frame_index,
            output.draw_list.len(),
            output.selected
        );
    }

    let chunk = Chunk::filled();
    let mesh = build_mesh(&chunk);
    info!(
        "chunk mesh: {} vertices, {} bytes ready for upload",
        mesh.vertex_count(),
        mesh.as_bytes().len()
    );

    Ok(())
}
