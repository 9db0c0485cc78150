//! Fire effect
//!
//! A stochastic cellular automaton over a 16x16 heat field. Each tick the
//! field cools down, heat rises by one row while spreading sideways, and
//! the bottom row is randomly re-ignited. Hot cells are lit.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH};

/// Heat field, `heat[y][x]` with row 0 at the top
pub type HeatField = [[u8; MATRIX_WIDTH]; MATRIX_HEIGHT];

const COOLDOWN_MAX: u8 = 25; // exclusive
const IGNITION_CHANCE_PERCENT: u8 = 60;
const IGNITION_MIN: u8 = 160;
const IGNITION_MAX: u8 = 255; // exclusive
const LIT_THRESHOLD: u8 = 100;

const BOTTOM: usize = MATRIX_HEIGHT - 1;

/// Fire effect
#[derive(Debug, Clone)]
pub struct FireEffect {
    heat: HeatField,
    rng: SmallRng,
}

impl Default for FireEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl FireEffect {
    pub fn new() -> Self {
        Self {
            heat: [[0; MATRIX_WIDTH]; MATRIX_HEIGHT],
            rng: SmallRng::seed_from_u64(0),
        }
    }

    /// Current heat field
    pub const fn heat(&self) -> &HeatField {
        &self.heat
    }

    fn cool_down(&mut self) {
        // The bottom row is re-ignited instead
        for row in &mut self.heat[..BOTTOM] {
            for cell in row {
                let cooldown = self.rng.gen_range(0..COOLDOWN_MAX);
                *cell = cell.saturating_sub(cooldown);
            }
        }
    }

    /// Each row takes the heat of the row below, weighted 2:1:1 with its
    /// horizontal neighbours
    fn convect(&mut self) {
        for y in 1..MATRIX_HEIGHT {
            for x in 0..MATRIX_WIDTH {
                let below = &self.heat[y];
                let left = if x > 0 { u16::from(below[x - 1]) } else { 0 };
                let right = below.get(x + 1).copied().map_or(0, u16::from);
                let sum = 2 * u16::from(below[x]) + left + right;
                #[allow(clippy::cast_possible_truncation)]
                {
                    self.heat[y - 1][x] = (sum / 4) as u8;
                }
            }
        }
    }

    fn ignite(&mut self) {
        for cell in &mut self.heat[BOTTOM] {
            if self.rng.gen_range(0..100) < IGNITION_CHANCE_PERCENT {
                *cell = self.rng.gen_range(IGNITION_MIN..IGNITION_MAX);
            }
        }
    }
}

impl Effect for FireEffect {
    const NAME: &'static str = "fire";

    fn init(&mut self, seed: u64) {
        self.heat = [[0; MATRIX_WIDTH]; MATRIX_HEIGHT];
        self.rng = SmallRng::seed_from_u64(seed);
    }

    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        self.cool_down();
        self.convect();
        self.ignite();

        for (y, row) in self.heat.iter().enumerate() {
            for (x, &heat) in row.iter().enumerate() {
                if heat > LIT_THRESHOLD {
                    #[allow(clippy::cast_possible_truncation)]
                    frame.set_pixel(x as u8, y as u8, true);
                }
            }
        }
    }
}
