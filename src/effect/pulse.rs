//! Whole panel blinking on a sine gate

use core::f32::consts::TAU;

use libm::sinf;

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;

const PHASE_STEP: f32 = 0.08;
const THRESHOLD: f32 = 0.3;

/// Pulse effect
#[derive(Debug, Clone, Default)]
pub struct PulseEffect {
    phase: f32,
}

impl PulseEffect {
    pub const fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }

    /// Gate intensity in `[0, 1]`
    pub fn intensity(&self) -> f32 {
        (sinf(self.phase) + 1.0) * 0.5
    }
}

impl Effect for PulseEffect {
    const NAME: &'static str = "pulse";

    fn init(&mut self, _seed: u64) {
        self.phase = 0.0;
    }

    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        if self.intensity() > THRESHOLD {
            frame.fill();
        }

        self.phase += PHASE_STEP;
        if self.phase > TAU {
            self.phase -= TAU;
        }
    }
}
