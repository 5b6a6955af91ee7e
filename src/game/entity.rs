use glam::Vec2;

use super::geometry::Rect;
use crate::engine::resources::SpriteKey;

/// Handle to a pooled sprite image together with its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    key: SpriteKey,
    width: u32,
    height: u32,
}

impl Sprite {
    pub const fn new(key: SpriteKey, width: u32, height: u32) -> Self {
        Self { key, width, height }
    }

    pub const fn key(&self) -> SpriteKey {
        self.key
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    /// Centre of the sprite in world coordinates.
    pub position: Vec2,
    pub sprite: Sprite,
}

impl Entity {
    pub fn new(id: EntityId, position: Vec2, sprite: Sprite) -> Self {
        Self {
            id,
            position,
            sprite,
        }
    }

    pub fn frame(&self) -> Rect {
        Rect::from_center(self.position, self.sprite.size())
    }
}
