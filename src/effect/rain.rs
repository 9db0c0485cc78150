//! Rain drops falling from the top and re-entering after a random delay

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;

const MAX_DROPS: usize = 16;
const HEIGHT: i8 = 16;

/// A single falling drop; negative `y` is above the panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainDrop {
    pub x: u8,
    pub y: i8,
}

/// Rain effect
#[derive(Debug, Clone)]
pub struct RainEffect {
    drops: [RainDrop; MAX_DROPS],
    rng: SmallRng,
}

impl Default for RainEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl RainEffect {
    pub fn new() -> Self {
        let mut effect = Self {
            drops: [RainDrop::default(); MAX_DROPS],
            rng: SmallRng::seed_from_u64(0),
        };
        effect.init(0);
        effect
    }

    pub const fn drops(&self) -> &[RainDrop; MAX_DROPS] {
        &self.drops
    }
}

impl Effect for RainEffect {
    const NAME: &'static str = "rain";

    fn init(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        for drop in &mut self.drops {
            drop.x = self.rng.gen_range(0..16);
            drop.y = self.rng.gen_range(-HEIGHT..HEIGHT);
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        for drop in &mut self.drops {
            if (0..HEIGHT).contains(&drop.y) {
                frame.set_pixel(drop.x, drop.y as u8, true);
            }
            drop.y += 1;
            if drop.y >= HEIGHT {
                drop.x = self.rng.gen_range(0..16);
                drop.y = self.rng.gen_range(-8..0);
            }
        }
    }
}
