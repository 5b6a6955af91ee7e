#![allow(dead_code)]

use std::collections::HashSet;

use arcade::engine::resources::{AssetError, SpriteKey, SpriteLoader};
use arcade::game::entity::Sprite;
use arcade::game::{GameLoop, GameSettings};
use glam::Vec2;

pub const BOUNDS: Vec2 = Vec2::new(1024.0, 768.0);

/// In-memory loader: every name maps to a fixed-size sprite unless it has
/// been marked as failing.
#[derive(Debug, Default)]
pub struct FakeLoader {
    names: Vec<String>,
    failing: HashSet<String>,
    pub calls: usize,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, name: &str) {
        self.failing.insert(name.to_string());
    }

    pub fn recover(&mut self, name: &str) {
        self.failing.remove(name);
    }

    pub fn key_of(&self, name: &str) -> Option<SpriteKey> {
        self.names
            .iter()
            .position(|known| known == name)
            .map(|index| SpriteKey::new(index as u32))
    }
}

impl SpriteLoader for FakeLoader {
    fn load_sprite(&mut self, name: &str) -> Result<Sprite, AssetError> {
        self.calls += 1;
        if self.failing.contains(name) {
            return Err(AssetError::EmptySprite {
                name: name.to_string(),
            });
        }

        let index = match self.names.iter().position(|known| known == name) {
            Some(index) => index,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        };
        let (width, height) = if name.starts_with("bullet") {
            (4, 12)
        } else {
            (32, 32)
        };
        Ok(Sprite::new(SpriteKey::new(index as u32), width, height))
    }
}

pub fn seeded_settings() -> GameSettings {
    GameSettings {
        seed: Some(42),
        ..GameSettings::default()
    }
}

pub fn new_game(settings: GameSettings, loader: &mut FakeLoader) -> GameLoop {
    GameLoop::new(settings, BOUNDS, loader).expect("player sprite loads")
}
