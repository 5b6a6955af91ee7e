pub mod core;
pub mod platform;
pub mod renderer;
pub mod resources;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use self::core::{EngineConfig, FpsCounter};
use glam::Vec2;
use platform::PlatformLayer;
use renderer::{DrawList, Renderer, RendererSettings};
use resources::ResourceManager;
use wgpu::SurfaceError;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use crate::config::AppConfig;
use crate::game::GameLoop;

/// What the loop does after a frame was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    Reconfigure,
    Retry,
    Fatal,
}

pub fn frame_outcome(result: &Result<(), SurfaceError>) -> FrameOutcome {
    match result {
        Ok(()) => FrameOutcome::Presented,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => FrameOutcome::Reconfigure,
        Err(SurfaceError::Timeout) => FrameOutcome::Retry,
        Err(SurfaceError::OutOfMemory) => FrameOutcome::Fatal,
    }
}

pub struct EngineApp {
    config: EngineConfig,
    platform: PlatformLayer,
    resources: ResourceManager,
    game: GameLoop,
    fps: FpsCounter,
    canvas: DrawList,
    last_title: String,
}

impl EngineApp {
    /// Builds the sprite pool and the game. A missing player sprite is fatal.
    pub fn new(config: AppConfig) -> Result<Self> {
        let AppConfig { engine, game } = config;
        engine.validate().context("invalid engine config")?;
        let bounds = engine.bounds();
        let mut resources = ResourceManager::new(engine.asset_dir.clone());
        let game = GameLoop::new(game, bounds, &mut resources)
            .context("failed to load the player sprite")?;
        tracing::info!(
            target: "engine",
            asset_dir = %resources.root().display(),
            sprites = resources.sprite_count(),
            "resources ready"
        );

        Ok(Self {
            platform: PlatformLayer::new(bounds),
            resources,
            game,
            fps: FpsCounter::new(engine.target_fps),
            canvas: DrawList::new(),
            last_title: engine.app_name.clone(),
            config: engine,
        })
    }

    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            width = self.config.window_width,
            height = self.config.window_height,
            vsync = self.config.vsync,
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut engine = self;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(engine.config.app_name.clone())
                .with_resizable(false)
                .with_inner_size(LogicalSize::new(
                    f64::from(engine.config.window_width),
                    f64::from(engine.config.window_height),
                ))
                .build(&event_loop)
                .context("failed to create window")?,
        );
        let settings = engine.renderer_settings();
        let fatal: Rc<RefCell<Option<anyhow::Error>>> = Rc::new(RefCell::new(None));
        let fatal_slot = fatal.clone();
        let mut renderer: Option<Renderer> = None;
        let mut last_frame = Instant::now();

        event_loop
            .run(move |event, target| match event {
                Event::Resumed => {
                    if renderer.is_none() {
                        match pollster::block_on(Renderer::new(window.clone(), settings)) {
                            Ok(new_renderer) => {
                                tracing::info!(target: "engine", "renderer initialized");
                                renderer = Some(new_renderer);
                                last_frame = Instant::now();
                            }
                            Err(err) => {
                                tracing::error!(target: "engine", %err, "failed to initialize renderer");
                                *fatal_slot.borrow_mut() = Some(err);
                                target.exit();
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if renderer.is_some() {
                        window.request_redraw();
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            tracing::info!(target: "engine", "window close requested");
                            target.exit();
                        }
                        WindowEvent::Resized(size) => {
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(size);
                            }
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            let new_size = window.inner_size();
                            let _ = inner_size_writer.request_inner_size(new_size);
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(new_size);
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            let size = window.inner_size();
                            engine.platform.cursor_moved(
                                Vec2::new(position.x as f32, position.y as f32),
                                Vec2::new(size.width as f32, size.height as f32),
                            );
                        }
                        WindowEvent::MouseInput {
                            state: ElementState::Pressed,
                            button: MouseButton::Left,
                            ..
                        } => {
                            engine.platform.fire_pressed();
                        }
                        WindowEvent::RedrawRequested => {
                            if let Some(renderer) = renderer.as_mut() {
                                let now = Instant::now();
                                let delta = now.duration_since(last_frame);
                                last_frame = now;

                                engine.tick(delta);
                                let result = renderer.render(&engine.canvas, &engine.resources);
                                match frame_outcome(&result) {
                                    FrameOutcome::Presented => {}
                                    FrameOutcome::Reconfigure => {
                                        renderer.resize(window.inner_size());
                                    }
                                    FrameOutcome::Fatal => {
                                        tracing::error!(target: "engine", "GPU out of memory, shutting down engine");
                                        *fatal_slot.borrow_mut() =
                                            Some(anyhow!("GPU out of memory while presenting"));
                                        target.exit();
                                    }
                                    FrameOutcome::Retry => {
                                        tracing::warn!(target: "engine", "surface timeout, retrying next frame");
                                    }
                                }
                                if let Some(title) = engine.pending_title() {
                                    window.set_title(&title);
                                }
                            }
                        }
                        _ => {}
                    }
                }
                Event::LoopExiting => {
                    tracing::info!(
                        target: "engine",
                        uptime_secs = engine.platform.uptime().as_secs_f64(),
                        score = engine.game.state().score,
                        level = engine.game.state().level,
                        "Engine shutdown complete"
                    );
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        let failure = fatal.borrow_mut().take();
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn renderer_settings(&self) -> RendererSettings {
        let (r, g, b) = self.config.clear_color;
        RendererSettings {
            world_size: self.config.bounds(),
            vsync: self.config.vsync,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        }
    }

    fn tick(&mut self, delta: Duration) {
        let fps = self.fps.tick(delta);
        let input = self.platform.take_input();
        tracing::trace!(
            target: "engine",
            frame_delta_ms = %delta.as_millis(),
            sprites = self.resources.sprite_count(),
            "frame tick"
        );

        self.game
            .update(delta.as_secs_f32(), &input, &mut self.resources);
        self.canvas.clear();
        self.game.draw(&mut self.canvas, fps);
    }

    /// Title requested by the last draw, if it differs from the window's.
    fn pending_title(&mut self) -> Option<String> {
        let title = self.canvas.title()?;
        if title == self.last_title {
            return None;
        }
        self.last_title = title.to_string();
        Some(self.last_title.clone())
    }
}
