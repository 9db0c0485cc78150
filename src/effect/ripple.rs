//! Ripple effect
//!
//! Circular waves spreading from three fixed centres with different phase
//! offsets. Wave amplitude fades with distance; the summed field is
//! thresholded.

use core::f32::consts::PI;

use libm::{sinf, sqrtf};

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH};

const TIME_STEP: f32 = 0.12;
const TIME_WRAP: f32 = 2.0 * PI * 10.0;
const THRESHOLD: f32 = 0.4;
const WAVE_NUMBER: f32 = 0.8;
const WAVE_SPEED: f32 = 3.0;
const ATTENUATION: f32 = 0.1;

/// Wave source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleCenter {
    pub x: u8,
    pub y: u8,
    pub phase: f32,
}

const CENTERS: [RippleCenter; 3] = [
    // Middle
    RippleCenter {
        x: 8,
        y: 8,
        phase: 0.0,
    },
    // Top left
    RippleCenter {
        x: 4,
        y: 4,
        phase: PI * 0.6,
    },
    // Bottom right
    RippleCenter {
        x: 12,
        y: 12,
        phase: PI * 1.3,
    },
];

/// Ripple effect
#[derive(Debug, Clone)]
pub struct RippleEffect {
    time: f32,
    centers: [RippleCenter; 3],
}

impl Default for RippleEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleEffect {
    pub const fn new() -> Self {
        Self {
            time: 0.0,
            centers: CENTERS,
        }
    }

    pub const fn time(&self) -> f32 {
        self.time
    }

    /// Summed wave height at a pixel
    pub fn sample(&self, x: u8, y: u8) -> f32 {
        self.centers
            .iter()
            .map(|center| {
                let dx = f32::from(x) - f32::from(center.x);
                let dy = f32::from(y) - f32::from(center.y);
                let distance = sqrtf(dx * dx + dy * dy);
                let wave = sinf(distance * WAVE_NUMBER - self.time * WAVE_SPEED + center.phase);
                wave / (1.0 + distance * ATTENUATION)
            })
            .sum()
    }
}

impl Effect for RippleEffect {
    const NAME: &'static str = "ripple";

    fn init(&mut self, _seed: u64) {
        *self = Self::new();
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
