//! Horizontal waves modulated by a weaker vertical wave

use libm::sinf;

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH};

const OFFSET_STEP: f32 = 0.15;
const OFFSET_WRAP: f32 = 100.0;
const THRESHOLD: f32 = 0.2;

/// Waves effect
#[derive(Debug, Clone, Default)]
pub struct WavesEffect {
    offset: f32,
}

impl WavesEffect {
    pub const fn new() -> Self {
        Self { offset: 0.0 }
    }

    pub const fn offset(&self) -> f32 {
        self.offset
    }
}

impl Effect for WavesEffect {
    const NAME: &'static str = "waves";

    fn init(&mut self, _seed: u64) {
        self.offset = 0.0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        for x in 0..MATRIX_WIDTH as u8 {
            let vertical = sinf((f32::from(x) + self.offset * 0.8) * 0.3);
            for y in 0..MATRIX_HEIGHT as u8 {
                let horizontal = sinf((f32::from(y) + self.offset) * 0.4);
                if horizontal + vertical * 0.5 > THRESHOLD {
                    frame.set_pixel(x, y, true);
                }
            }
        }

        self.offset += OFFSET_STEP;
        if self.offset > OFFSET_WRAP {
            self.offset = 0.0;
        }
    }
}
