//! Digital clock: hours on the top half, minutes on the bottom half

use super::font::{GLYPH_HEIGHT, GLYPH_WIDTH, draw_digit};
use super::{DrawContext, Effect};
use crate::clock::DisplayTime;
use crate::frame::FrameBuffer;
use crate::pixel_map::MATRIX_WIDTH;

/// Empty columns between the two digits of a row
pub const DIGIT_SPACING: u8 = 2;

const ROW_WIDTH: u8 = GLYPH_WIDTH * 2 + DIGIT_SPACING;
#[allow(clippy::cast_possible_truncation)]
const START_X: u8 = (MATRIX_WIDTH as u8 - ROW_WIDTH) / 2;
const SECOND_COLUMN_X: u8 = START_X + GLYPH_WIDTH + DIGIT_SPACING;

/// Top left corner of each digit cell in [`DisplayTime::digits`] order
pub const DIGIT_ORIGINS: [(u8, u8); 4] = [
    (START_X, 0),
    (SECOND_COLUMN_X, 0),
    (START_X, GLYPH_HEIGHT),
    (SECOND_COLUMN_X, GLYPH_HEIGHT),
];

/// Render all four digits of a time
pub fn draw_time(frame: &mut FrameBuffer, time: DisplayTime) {
    for (digit, (x, y)) in time.digits().into_iter().zip(DIGIT_ORIGINS) {
        draw_digit(frame, digit, x, y);
    }
}

/// Clock effect
#[derive(Debug, Clone, Default)]
pub struct ClockEffect {
    shown: Option<DisplayTime>,
}

impl ClockEffect {
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// Time rendered by the last frame, `None` if the wall clock was invalid
    pub const fn shown(&self) -> Option<DisplayTime> {
        self.shown
    }
}

impl Effect for ClockEffect {
    const NAME: &'static str = "clock";

    fn init(&mut self, _seed: u64) {
        self.shown = None;
    }

    fn draw(&mut self, ctx: &DrawContext, frame: &mut FrameBuffer) {
        // An unsynchronized clock renders nothing rather than wrong digits
        self.shown = ctx.display_time().ok();
        if let Some(time) = self.shown {
            draw_time(frame, time);
        }
    }
}
