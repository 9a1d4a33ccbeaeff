use std::path::Path;

use image::ImageReader;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to open texture {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to decode texture {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
}

/// Opaque handle an external backend resolves to its own GPU object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Decoded RGBA8 pixels awaiting upload by the rendering backend.
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decoded textures by handle. A failed load aborts startup; there is no
/// fallback texture and no retry.
#[derive(Default)]
pub struct TextureRegistry {
    textures: Vec<TextureData>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<TextureId, TextureError> {
        let path = path.as_ref();
        let image = ImageReader::open(path)
            .map_err(|source| TextureError::Io {
                path: path.display().to_string(),
                source,
            })?
            .decode()
            .map_err(|source| TextureError::Decode {
                path: path.display().to_string(),
                source,
            })?
            .to_rgba8();

        let (width, height) = (image.width(), image.height());
        info!("Loaded texture {} ({}x{})", path.display(), width, height);
        Ok(self.push(TextureData {
            width,
            height,
            pixels: image.into_raw(),
        }))
    }

    /// Registers a 1x1 solid-color texture, for headless runs and tests.
    pub fn register_solid(&mut self, rgba: [u8; 4]) -> TextureId {
        self.push(TextureData {
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        })
    }

    fn push(&mut self, data: TextureData) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(data);
        id
    }

    pub fn get(&self, id: TextureId) -> Option<&TextureData> {
        self.textures.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
