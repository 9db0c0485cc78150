//! Single dot bouncing off the panel edges

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;

const EDGE: u8 = 15;

/// Bouncing dot effect
#[derive(Debug, Clone)]
pub struct BounceEffect {
    x: u8,
    y: u8,
    dx: i8,
    dy: i8,
}

impl Default for BounceEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceEffect {
    pub const fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            dx: 1,
            dy: 1,
        }
    }

    /// Current dot position
    pub const fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    /// Current velocity
    pub const fn velocity(&self) -> (i8, i8) {
        (self.dx, self.dy)
    }
}

impl Effect for BounceEffect {
    const NAME: &'static str = "bounce";

    fn init(&mut self, _seed: u64) {
        *self = Self::new();
    }

    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        frame.set_pixel(self.x, self.y, true);

        self.x = self.x.wrapping_add_signed(self.dx);
        self.y = self.y.wrapping_add_signed(self.dy);
        if self.x == 0 || self.x == EDGE {
            self.dx = -self.dx;
        }
        if self.y == 0 || self.y == EDGE {
            self.dy = -self.dy;
        }
    }
}
