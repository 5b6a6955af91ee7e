use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
    pub target_fps: u32,
    pub clear_color: (f64, f64, f64),
    pub asset_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Real-Time Game Prototype Simulator".to_string(),
            window_width: 1024,
            window_height: 768,
            vsync: true,
            target_fps: 60,
            clear_color: (0.2, 0.2, 0.2),
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl EngineConfig {
    pub fn bounds(&self) -> glam::Vec2 {
        glam::Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window_width,
                self.window_height
            );
        }
        Ok(())
    }
}

/// Frames-per-second readout, refreshed once per full second of frame time.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: u32,
    window: Duration,
    fps: u32,
}

impl FpsCounter {
    pub fn new(initial_fps: u32) -> Self {
        Self {
            frames: 0,
            window: Duration::ZERO,
            fps: initial_fps,
        }
    }

    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.frames += 1;
        self.window += delta;
        if self.window >= Duration::from_secs(1) {
            let seconds = self.window.as_secs_f64();
            self.fps = (f64::from(self.frames) / seconds).round() as u32;
            self.frames = 0;
            self.window = Duration::ZERO;
            tracing::trace!(target: "engine", fps = self.fps, "fps window rolled");
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
