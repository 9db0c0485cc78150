//! Rotating spiral arms, banded by distance minus twice the angle

use libm::{atan2f, fmodf, sqrtf};

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH};

const CENTER: f32 = 7.5;
const OFFSET_STEP: f32 = 0.1;
const OFFSET_WRAP: f32 = 20.0;
const ARM_TWIST: f32 = 2.0;
const BAND_PERIOD: f32 = 3.0;
const BAND_WIDTH: f32 = 1.5;
// Keeps the fmod argument positive
const BAND_BIAS: f32 = 10.0;

/// Spiral effect
#[derive(Debug, Clone, Default)]
pub struct SpiralEffect {
    offset: f32,
}

impl SpiralEffect {
    pub const fn new() -> Self {
        Self { offset: 0.0 }
    }

    pub const fn offset(&self) -> f32 {
        self.offset
    }

    fn is_lit(&self, x: u8, y: u8) -> bool {
        let dx = f32::from(x) - CENTER;
        let dy = f32::from(y) - CENTER;
        let distance = sqrtf(dx * dx + dy * dy);
        let angle = atan2f(dy, dx);
        let spiral = distance - angle * ARM_TWIST + self.offset;
        fmodf(spiral + BAND_BIAS, BAND_PERIOD) < BAND_WIDTH
    }
}

impl Effect for SpiralEffect {
    const NAME: &'static str = "spiral";

    fn init(&mut self, _seed: u64) {
        self.offset = 0.0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        for x in 0..MATRIX_WIDTH as u8 {
            for y in 0..MATRIX_HEIGHT as u8 {
                if self.is_lit(x, y) {
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
