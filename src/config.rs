use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::core::EngineConfig;
use crate::game::GameSettings;

pub const CONFIG_ENV: &str = "ARCADE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "arcade.ron";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameSettings,
}

impl AppConfig {
    pub fn from_ron(source: &str) -> Result<Self> {
        ron::from_str(source).context("invalid RON configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron(&source).with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Reads the file named by `ARCADE_CONFIG`, else `arcade.ron` when it
    /// exists, else falls back to defaults.
    pub fn discover() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::info!(target: "engine", path = %path.display(), "loading config");
            return Self::load(path);
        }
        if fallback.is_file() {
            tracing::info!(target: "engine", path = %fallback.display(), "loading config");
            return Self::load(fallback);
        }
        tracing::debug!(target: "engine", "no config file, using defaults");
        Ok(Self::default())
    }
}
