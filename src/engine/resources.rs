use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::game::entity::Sprite;

/// Lookup key for a sprite image owned by the [`ResourceManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKey(u32);

impl SpriteKey {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load sprite `{name}` from {}", path.display())]
    Load {
        name: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite `{name}` has empty bounds")]
    EmptySprite { name: String },
}

/// Anything that can turn a sprite name into a drawable handle.
pub trait SpriteLoader {
    fn load_sprite(&mut self, name: &str) -> Result<Sprite, AssetError>;
}

/// Decoded RGBA8 pixels kept on the CPU until the renderer uploads them.
#[derive(Debug)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl SpriteImage {
    /// Rejects images with a zero-length side.
    pub fn from_rgba(name: &str, decoded: image::RgbaImage) -> Result<Self, AssetError> {
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::EmptySprite {
                name: name.to_string(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: decoded.into_raw(),
        })
    }
}

#[derive(Debug)]
pub struct ResourceManager {
    root: PathBuf,
    images: Vec<SpriteImage>,
    by_name: HashMap<String, Sprite>,
}

impl ResourceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            images: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn image(&self, key: SpriteKey) -> Option<&SpriteImage> {
        self.images.get(key.index() as usize)
    }

    pub fn sprite_count(&self) -> usize {
        self.images.len()
    }

    fn decode(&self, name: &str) -> Result<SpriteImage, AssetError> {
        let path = self.root.join(name);
        let decoded = image::open(&path)
            .map_err(|source| AssetError::Load {
                name: name.to_string(),
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        SpriteImage::from_rgba(name, decoded)
    }
}

impl SpriteLoader for ResourceManager {
    fn load_sprite(&mut self, name: &str) -> Result<Sprite, AssetError> {
        if let Some(sprite) = self.by_name.get(name) {
            return Ok(*sprite);
        }

        let image = self.decode(name)?;
        let key = SpriteKey::new(self.images.len() as u32);
        let sprite = Sprite::new(key, image.width, image.height);
        tracing::debug!(
            target: "engine",
            %name,
            key = key.index(),
            width = image.width,
            height = image.height,
            "sprite loaded"
        );
        self.images.push(image);
        self.by_name.insert(name.to_string(), sprite);
        Ok(sprite)
    }
}
