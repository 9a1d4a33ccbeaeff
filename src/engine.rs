use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use crate::{
    config::EngineConfig,
    rendering::{
        camera::SharedCamera,
        picking::PickingResolver,
        projection::{project, ScreenGeometry, Viewport},
        texture::TextureId,
    },
    world::{
        arena::{BlockArena, BlockHandle},
        block::{Block, BlockError},
        command::{CommandQueue, CommandSender, WorldCommand},
    },
};

const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Everything drawn in one frame, already in painter's order.
pub struct FrameOutput {
    pub draw_list: Vec<(BlockHandle, ScreenGeometry)>,
    /// Block under the crosshair, for the selection outline.
    pub selected: Option<BlockHandle>,
}

/// Ties the world, camera and picking together behind a per-frame contract:
/// drain queued commands, then hand back the depth-ordered projected scene.
///
/// Window creation, input wiring and the actual draw calls stay outside;
/// they feed commands in via `command_sender()` and consume `FrameOutput`.
pub struct IsoEngine {
    blocks: BlockArena,
    camera: SharedCamera,
    resolver: PickingResolver,
    commands: CommandQueue,
    paused: AtomicBool,
    scale_divisor: u32,
    block_texture: TextureId,
}

impl IsoEngine {
    /// Seeds the initial world from the config at a block size derived from
    /// the starting viewport.
    pub fn new(
        config: &EngineConfig,
        viewport: Viewport,
        texture: TextureId,
    ) -> Result<Self, BlockError> {
        let size = block_size_for(viewport, config.world.block_scale_divisor);
        let blocks = BlockArena::new();
        for cell in &config.world.initial_blocks {
            blocks.insert(Block::new(*cell, size, texture)?);
        }
        info!("World seeded with {} blocks at size {}", blocks.len(), size);

        Ok(Self {
            blocks,
            camera: SharedCamera::new(config.camera_start),
            resolver: PickingResolver::new(config.picking.tie_break),
            commands: CommandQueue::new(COMMAND_QUEUE_CAPACITY),
            paused: AtomicBool::new(false),
            scale_divisor: config.world.block_scale_divisor,
            block_texture: texture,
        })
    }

    pub fn command_sender(&self) -> CommandSender {
        self.commands.sender()
    }

    pub fn camera(&self) -> &SharedCamera {
        &self.camera
    }

    pub fn blocks(&self) -> &BlockArena {
        &self.blocks
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Runs one core frame: apply queued commands (picking at the viewport
    /// center), then project the world in draw order. While paused, commands
    /// are dropped and nothing is selected.
    pub fn frame(&self, viewport: Viewport) -> FrameOutput {
        let commands = self.commands.drain();
        if !self.is_paused() {
            for command in commands {
                self.apply(command, viewport);
            }
        }

        let camera = self.camera.load();
        let draw_list = self
            .blocks
            .draw_order()
            .into_iter()
            .map(|(handle, block)| (handle, project(&block, camera, viewport)))
            .collect();
        let selected = if self.is_paused() {
            None
        } else {
            self.pick_at_center(viewport)
        };

        FrameOutput {
            draw_list,
            selected,
        }
    }

    fn pick_at_center(&self, viewport: Viewport) -> Option<BlockHandle> {
        let camera = self.camera.load();
        let candidates: Vec<(BlockHandle, Block, ScreenGeometry)> = self
            .blocks
            .snapshot()
            .into_iter()
            .map(|(handle, block)| (handle, block, project(&block, camera, viewport)))
            .collect();
        self.resolver.pick(&candidates, viewport.center())
    }

    fn apply(&self, command: WorldCommand, viewport: Viewport) {
        let Some(handle) = self.pick_at_center(viewport) else {
            // A miss is a normal no-op, never a failure.
            return;
        };
        match command {
            WorldCommand::RemoveAtCrosshair => {
                self.blocks.remove(handle);
                debug!("Removed block {:?}", handle);
            }
            WorldCommand::AddAboveCrosshair => {
                let Some(base) = self.blocks.get(handle) else {
                    return;
                };
                let size = block_size_for(viewport, self.scale_divisor);
                match Block::new(base.above(), size, self.block_texture) {
                    Ok(block) => {
                        let added = self.blocks.insert(block);
                        debug!("Added block {:?} above {:?}", added, handle);
                    }
                    Err(error) => warn!("Skipping add above {:?}: {}", handle, error),
                }
            }
        }
    }
}

/// min(width, height) / divisor. New blocks track the viewport they were
/// added under; existing blocks keep their size across resizes.
fn block_size_for(viewport: Viewport, divisor: u32) -> f32 {
    viewport.width.min(viewport.height) / divisor as f32
}
