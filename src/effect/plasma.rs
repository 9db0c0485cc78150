//! Plasma effect
//!
//! Four overlapping sine waves (horizontal, vertical, diagonal and radial
//! around the centre) summed, normalized from `[-4, 4]` to `[0, 1]` and
//! thresholded at the midpoint.

use core::f32::consts::PI;

use libm::{sinf, sqrtf};

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH};

const TIME_STEP: f32 = 0.08;
const TIME_WRAP: f32 = 2.0 * PI * 10.0;
const THRESHOLD: f32 = 0.5;
const CENTER: f32 = 8.0;

/// Plasma effect
#[derive(Debug, Clone, Default)]
pub struct PlasmaEffect {
    time: f32,
}

impl PlasmaEffect {
    pub const fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Current phase accumulator
    pub const fn time(&self) -> f32 {
        self.time
    }

    /// Field value at a pixel, normalized to `[0, 1]`
    pub fn sample(&self, x: u8, y: u8) -> f32 {
        let t = self.time;
        let (fx, fy) = (f32::from(x), f32::from(y));
        let (dx, dy) = (fx - CENTER, fy - CENTER);

        let value = sinf(fx * 0.3 + t)
            + sinf(fy * 0.3 + t * 0.8)
            + sinf((fx + fy) * 0.2 + t * 1.2)
            + sinf(sqrtf(dx * dx + dy * dy) * 0.4 + t * 0.6);

        (value + 4.0) / 8.0
    }
}

impl Effect for PlasmaEffect {
    const NAME: &'static str = "plasma";

    fn init(&mut self, _seed: u64) {
        self.time = 0.0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        for x in 0..MATRIX_WIDTH as u8 {
            for y in 0..MATRIX_HEIGHT as u8 {
                if self.sample(x, y) > THRESHOLD {
                    frame.set_pixel(x, y, true);
                }
            }
        }

        self.time += TIME_STEP;
        if self.time > TIME_WRAP {
            self.time = 0.0;
        }
    }
}
