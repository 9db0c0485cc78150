//! Sand clock
//!
//! A digital clock whose disappearing pixels turn into grains of sand when
//! the displayed time changes. Every pixel that is lit in an old digit but
//! dark in its replacement is released as a grain, falls under gravity and
//! comes to rest on the bottom row before the effect returns to a plain
//! clock face.

use heapless::Vec;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::clock::{DIGIT_ORIGINS, draw_time};
use super::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph_pixel};
use super::{DrawContext, Effect};
use crate::clock::DisplayTime;
use crate::frame::FrameBuffer;

/// Upper bound of grains alive at once
pub const MAX_GRAINS: usize = 64;

const GRAVITY: f32 = 0.05;
const FLOOR_Y: f32 = 15.0;
const RIGHT_WALL_X: f32 = 15.0;
const FLOOR_FRICTION: f32 = 0.8;
/// Ticks on the floor after which a grain stops being simulated
const SETTLE_TICKS: u8 = 10;

/// A single grain of sand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grain {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub active: bool,
    pub settle_time: u8,
}

impl Grain {
    fn step(&mut self) {
        self.vy += GRAVITY;
        self.x += self.vx;
        self.y += self.vy;

        if self.y >= FLOOR_Y {
            self.y = FLOOR_Y;
            self.vy = 0.0;
            self.vx *= FLOOR_FRICTION;
            self.settle_time = self.settle_time.saturating_add(1);
            if self.settle_time > SETTLE_TICKS {
                self.active = false;
            }
        }

        if self.x <= 0.0 {
            self.x = 0.0;
            self.vx = 0.0;
        }
        if self.x >= RIGHT_WALL_X {
            self.x = RIGHT_WALL_X;
            self.vx = 0.0;
        }
    }

    /// Rounded matrix position
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel(&self) -> (u8, u8) {
        // Walls and gravity keep both coordinates non-negative
        ((self.x + 0.5) as u8, (self.y + 0.5) as u8)
    }
}

/// Animation phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SandState {
    #[default]
    Static,
    Falling,
}

/// Sand clock effect
#[derive(Debug, Clone)]
pub struct SandClockEffect {
    grains: Vec<Grain, MAX_GRAINS>,
    state: SandState,
    shown: Option<DisplayTime>,
    sand_enabled: bool,
    rng: SmallRng,
}

impl Default for SandClockEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SandClockEffect {
    pub fn new() -> Self {
        Self {
            grains: Vec::new(),
            state: SandState::Static,
            shown: None,
            sand_enabled: true,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    pub fn grains(&self) -> &[Grain] {
        &self.grains
    }

    pub const fn state(&self) -> SandState {
        self.state
    }

    /// Time rendered by the last frame
    pub const fn shown(&self) -> Option<DisplayTime> {
        self.shown
    }

    pub const fn sand_enabled(&self) -> bool {
        self.sand_enabled
    }

    /// Enable or disable the animation. Disabling drops grains in flight.
    pub fn set_sand_enabled(&mut self, enabled: bool) {
        self.sand_enabled = enabled;
        if !enabled {
            self.grains.clear();
            self.state = SandState::Static;
        }
    }

    /// Release grains for every digit that differs between two times
    pub fn begin_transition(&mut self, from: DisplayTime, to: DisplayTime) {
        self.grains.clear();
        let digits = from.digits().into_iter().zip(to.digits());
        for ((old, new), origin) in digits.zip(DIGIT_ORIGINS) {
            if old != new {
                self.release_grains(old, new, origin);
            }
        }
        self.state = SandState::Falling;
    }

    fn release_grains(&mut self, old: u8, new: u8, (x_offset, y_offset): (u8, u8)) {
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                if !glyph_pixel(old, x, y) || glyph_pixel(new, x, y) {
                    continue;
                }
                let grain = Grain {
                    x: f32::from(x + x_offset) + 0.5,
                    y: f32::from(y + y_offset) + 0.5,
                    vx: f32::from(self.rng.gen_range(-50i8..=50)) / 100.0,
                    vy: f32::from(self.rng.gen_range(0u8..100)) / 100.0,
                    active: true,
                    settle_time: 0,
                };
                if self.grains.push(grain).is_err() {
                    return;
                }
            }
        }
    }

    /// Advance all active grains by one tick
    pub fn update_physics(&mut self) {
        let any_active = self.grains.iter().any(|grain| grain.active);
        for grain in self.grains.iter_mut().filter(|grain| grain.active) {
            grain.step();
        }
        if !any_active {
            self.grains.clear();
            self.state = SandState::Static;
        }
    }
}

impl Effect for SandClockEffect {
    const NAME: &'static str = "sandclock";

    fn init(&mut self, seed: u64) {
        self.grains.clear();
        self.state = SandState::Static;
        self.shown = None;
        self.rng = SmallRng::seed_from_u64(seed);
    }

    fn draw(&mut self, ctx: &DrawContext, frame: &mut FrameBuffer) {
        let Ok(time) = ctx.display_time() else {
            // A blank frame leaves no digits to fall
            self.shown = None;
            self.grains.clear();
            self.state = SandState::Static;
            return;
        };

        if self.sand_enabled
            && self.state == SandState::Static
            && let Some(previous) = self.shown.filter(|&previous| previous != time)
        {
            self.begin_transition(previous, time);
        }
        self.shown = Some(time);

        if self.state == SandState::Falling {
            self.update_physics();
        }

        draw_time(frame, time);
        for grain in self.grains.iter().filter(|grain| grain.active) {
            let (x, y) = grain.pixel();
            frame.set_pixel(x, y, true);
        }
    }
}
