pub mod entity;
pub mod geometry;
pub mod state;

use glam::Vec2;
use serde::Deserialize;

use crate::engine::platform::FrameInput;
use crate::engine::renderer::Canvas;
use crate::engine::resources::{AssetError, SpriteLoader};
use entity::{Entity, EntityId};
use state::GameState;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player_sprite: String,
    pub enemy_sprite: String,
    pub bullet_sprite: String,
    pub starting_level: u32,
    /// Score needed per extra level; 0 keeps the level fixed.
    pub points_per_level: u32,
    /// Horizontal pixels per update at the crest of the drift wave.
    pub drift_amplitude: f32,
    /// Vertical pixels a bullet climbs per update.
    pub bullet_step: f32,
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_sprite: "player.png".to_string(),
            enemy_sprite: "enemy.png".to_string(),
            bullet_sprite: "bullet.png".to_string(),
            starting_level: 1,
            points_per_level: 0,
            drift_amplitude: 1.0,
            bullet_step: 10.0,
            seed: None,
        }
    }
}

/// Owns the game state and advances it one frame at a time.
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    settings: GameSettings,
    bounds: Vec2,
    rng: fastrand::Rng,
    next_id: u64,
}

impl GameLoop {
    /// Loads the player sprite and places the player in the middle of
    /// `bounds`. Failing to load the player is fatal to the caller.
    pub fn new(
        settings: GameSettings,
        bounds: Vec2,
        loader: &mut impl SpriteLoader,
    ) -> Result<Self, AssetError> {
        let sprite = loader.load_sprite(&settings.player_sprite)?;
        let player = Entity::new(EntityId(0), bounds * 0.5, sprite);
        let rng = match settings.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let level = settings.starting_level.max(1);

        tracing::info!(
            target: "game",
            width = bounds.x,
            height = bounds.y,
            level,
            "game loop ready"
        );

        Ok(Self {
            state: GameState::new(player, level),
            settings,
            bounds,
            rng,
            next_id: 1,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups; the loop's invariants are only
    /// maintained by [`GameLoop::update`].
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn update(
        &mut self,
        delta_seconds: f32,
        input: &FrameInput,
        loader: &mut impl SpriteLoader,
    ) {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.state.elapsed += f64::from(delta_seconds);
        }

        self.state.player.position = input.pointer;

        let drift = self.settings.drift_amplitude * self.state.elapsed.sin() as f32;
        for enemy in &mut self.state.enemies {
            enemy.position.x += drift;
        }

        // Fixed step per update, independent of delta_seconds.
        for bullet in &mut self.state.bullets {
            bullet.position.y += self.settings.bullet_step;
        }
        let ceiling = self.bounds.y;
        self.state.bullets.retain(|bullet| bullet.frame().min.y < ceiling);

        self.resolve_collisions();
        self.advance_level();
        self.spawn_pass(loader);

        if input.fire {
            self.fire(loader);
        }

        self.state.last_update = self.state.elapsed;
        tracing::trace!(
            target: "game",
            enemies = self.state.enemies.len(),
            bullets = self.state.bullets.len(),
            score = self.state.score,
            "frame updated"
        );
    }

    /// Player first, then enemies, then bullets; later draws paint over
    /// earlier ones.
    pub fn draw(&self, canvas: &mut impl Canvas, fps: u32) {
        let player = &self.state.player;
        canvas.draw_sprite(player.sprite, player.position);
        for enemy in &self.state.enemies {
            canvas.draw_sprite(enemy.sprite, enemy.position);
        }
        for bullet in &self.state.bullets {
            canvas.draw_sprite(bullet.sprite, bullet.position);
        }
        canvas.set_title(self.title(fps));
    }

    pub fn title(&self, fps: u32) -> String {
        format!(
            "FPS: {fps} | Score: {} | Level: {}",
            self.state.score, self.state.level
        )
    }

    /// Spawns one enemy when the enemy count is below the current level.
    pub fn spawn_pass(&mut self, loader: &mut impl SpriteLoader) -> Option<EntityId> {
        if self.state.enemies.len() < self.state.level as usize {
            self.spawn_enemy(loader)
        } else {
            None
        }
    }

    /// Adds an enemy at a random whole-pixel position inside the bounds.
    /// A sprite that fails to load skips the spawn.
    pub fn spawn_enemy(&mut self, loader: &mut impl SpriteLoader) -> Option<EntityId> {
        let sprite = match loader.load_sprite(&self.settings.enemy_sprite) {
            Ok(sprite) => sprite,
            Err(err) => {
                tracing::debug!(target: "game", %err, "enemy spawn skipped");
                return None;
            }
        };

        let x = self.rng.u32(0..(self.bounds.x as u32).max(1));
        let y = self.rng.u32(0..(self.bounds.y as u32).max(1));
        let id = self.allocate_id();
        self.state
            .enemies
            .push(Entity::new(id, Vec2::new(x as f32, y as f32), sprite));

        tracing::debug!(target: "game", enemy = id.0, x, y, "enemy spawned");
        Some(id)
    }

    /// Launches a bullet from the player's position.
    pub fn fire(&mut self, loader: &mut impl SpriteLoader) -> Option<EntityId> {
        let sprite = match loader.load_sprite(&self.settings.bullet_sprite) {
            Ok(sprite) => sprite,
            Err(err) => {
                tracing::debug!(target: "game", %err, "bullet skipped");
                return None;
            }
        };

        let id = self.allocate_id();
        let position = self.state.player.position;
        self.state.bullets.push(Entity::new(id, position, sprite));
        tracing::debug!(target: "game", bullet = id.0, "bullet fired");
        Some(id)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn resolve_collisions(&mut self) {
        let GameState {
            player,
            enemies,
            bullets,
            score,
            ..
        } = &mut self.state;
        let player_frame = player.frame();
        let mut spent: Vec<EntityId> = Vec::new();

        enemies.retain(|enemy| {
            let frame = enemy.frame();
            if frame.intersects(&player_frame) {
                *score += 1;
                tracing::debug!(target: "game", enemy = enemy.id.0, score = *score, "enemy caught");
                return false;
            }

            let hit = bullets
                .iter()
                .find(|bullet| !spent.contains(&bullet.id) && bullet.frame().intersects(&frame));
            if let Some(bullet) = hit {
                spent.push(bullet.id);
                *score += 1;
                tracing::debug!(
                    target: "game",
                    enemy = enemy.id.0,
                    bullet = bullet.id.0,
                    score = *score,
                    "enemy shot"
                );
                return false;
            }

            true
        });

        if !spent.is_empty() {
            bullets.retain(|bullet| !spent.contains(&bullet.id));
        }
    }

    fn advance_level(&mut self) {
        let per_level = self.settings.points_per_level;
        if per_level == 0 {
            return;
        }
        let earned = self.settings.starting_level.max(1) + self.state.score / per_level;
        if earned > self.state.level {
            self.state.level = earned;
            tracing::info!(target: "game", level = earned, score = self.state.score, "level up");
        }
    }
}
