use glam::Vec2;

/// Per-frame snapshot of the player's input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in world coordinates (origin bottom-left, y up).
    pub pointer: Vec2,
    /// A fire press happened since the previous frame.
    pub fire: bool,
}

#[derive(Debug)]
pub struct PlatformLayer {
    boot_timestamp: std::time::Instant,
    bounds: Vec2,
    pointer: Vec2,
    fire_pressed: bool,
}

impl PlatformLayer {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            boot_timestamp: std::time::Instant::now(),
            bounds,
            pointer: bounds * 0.5,
            fire_pressed: false,
        }
    }

    /// Records a cursor position given in physical pixels of a surface of
    /// `surface_size` physical pixels, top-left origin.
    pub fn cursor_moved(&mut self, physical: Vec2, surface_size: Vec2) {
        if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
            return;
        }
        let x = physical.x / surface_size.x * self.bounds.x;
        let y = self.bounds.y - physical.y / surface_size.y * self.bounds.y;
        self.pointer = Vec2::new(x, y);
    }

    pub fn fire_pressed(&mut self) {
        self.fire_pressed = true;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Returns this frame's input and clears the fire edge.
    pub fn take_input(&mut self) -> FrameInput {
        let input = FrameInput {
            pointer: self.pointer,
            fire: self.fire_pressed,
        };
        self.fire_pressed = false;
        input
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.boot_timestamp.elapsed()
    }
}
