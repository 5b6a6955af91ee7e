use super::entity::Entity;

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Entity,
    pub enemies: Vec<Entity>,
    pub bullets: Vec<Entity>,
    pub score: u32,
    pub level: u32,
    /// Game clock in seconds, accumulated from frame deltas.
    pub elapsed: f64,
    /// Game clock reading at the end of the last update.
    pub last_update: f64,
}

impl GameState {
    pub fn new(player: Entity, level: u32) -> Self {
        Self {
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            level,
            elapsed: 0.0,
            last_update: 0.0,
        }
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }
}
