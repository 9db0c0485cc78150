//! Vertical lines sliding sideways, one lit column in every four

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH};

const PERIOD_MASK: u8 = 3;

/// Scrolling lines effect
#[derive(Debug, Clone, Default)]
pub struct LinesEffect {
    offset: u8,
}

impl LinesEffect {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }
}

impl Effect for LinesEffect {
    const NAME: &'static str = "lines";

    fn init(&mut self, _seed: u64) {
        self.offset = 0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        for x in 0..MATRIX_WIDTH as u8 {
            if x.wrapping_add(self.offset) & PERIOD_MASK != 0 {
                continue;
            }
            for y in 0..MATRIX_HEIGHT as u8 {
                frame.set_pixel(x, y, true);
            }
        }
        self.offset = (self.offset + 1) & PERIOD_MASK;
    }
}
