//! Twinkling stars
//!
//! Every star counts down its life, then flips between lit and dark and
//! jumps to a new random spot. Dark periods are allowed to last longer than
//! lit ones.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;

const MAX_STARS: usize = 20;
const LIT_LIFE_MIN: u8 = 5;
const LIT_LIFE_MAX: u8 = 20;
const DARK_LIFE_MIN: u8 = 5;
const DARK_LIFE_MAX: u8 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Star {
    pub x: u8,
    pub y: u8,
    pub life: u8,
    pub on: bool,
}

/// Stars effect
#[derive(Debug, Clone)]
pub struct StarsEffect {
    stars: [Star; MAX_STARS],
    rng: SmallRng,
}

impl Default for StarsEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl StarsEffect {
    pub fn new() -> Self {
        let mut effect = Self {
            stars: [Star::default(); MAX_STARS],
            rng: SmallRng::seed_from_u64(0),
        };
        effect.init(0);
        effect
    }

    pub const fn stars(&self) -> &[Star; MAX_STARS] {
        &self.stars
    }
}

impl Effect for StarsEffect {
    const NAME: &'static str = "stars";

    fn init(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        for star in &mut self.stars {
            star.x = self.rng.gen_range(0..16);
            star.y = self.rng.gen_range(0..16);
            star.life = self.rng.gen_range(LIT_LIFE_MIN..LIT_LIFE_MAX);
            star.on = self.rng.gen_bool(0.5);
        }
    }

    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        for star in &mut self.stars {
            if star.on {
                frame.set_pixel(star.x, star.y, true);
            }

            if star.life > 0 {
                star.life -= 1;
                continue;
            }

            star.on = !star.on;
            star.x = self.rng.gen_range(0..16);
            star.y = self.rng.gen_range(0..16);
            star.life = if star.on {
                self.rng.gen_range(LIT_LIFE_MIN..LIT_LIFE_MAX)
            } else {
                self.rng.gen_range(DARK_LIFE_MIN..DARK_LIFE_MAX)
            };
        }
    }
}
