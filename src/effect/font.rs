//! 5x7 digit font
//!
//! Each glyph row is a byte, leftmost pixel in the most significant bit.

use crate::frame::FrameBuffer;

pub const GLYPH_WIDTH: u8 = 5;
pub const GLYPH_HEIGHT: u8 = 7;

#[rustfmt::skip]
const DIGITS: [[u8; GLYPH_HEIGHT as usize]; 10] = [
    [0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70], // 0
    [0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70], // 1
    [0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xF8], // 2
    [0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70], // 3
    [0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10], // 4
    [0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70], // 5
    [0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70], // 6
    [0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40], // 7
    [0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70], // 8
    [0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60], // 9
];

/// Glyph rows of a digit, `None` for anything above 9
pub const fn glyph(digit: u8) -> Option<&'static [u8; GLYPH_HEIGHT as usize]> {
    if digit < 10 {
        Some(&DIGITS[digit as usize])
    } else {
        None
    }
}

/// Check a single glyph pixel
pub const fn glyph_pixel(digit: u8, x: u8, y: u8) -> bool {
    if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
        return false;
    }
    match glyph(digit) {
        Some(rows) => rows[y as usize] & (0x80 >> x) != 0,
        None => false,
    }
}

/// Blit a digit with its top left corner at `(x_offset, y_offset)`
pub fn draw_digit(frame: &mut FrameBuffer, digit: u8, x_offset: u8, y_offset: u8) {
    for y in 0..GLYPH_HEIGHT {
        for x in 0..GLYPH_WIDTH {
            if glyph_pixel(digit, x, y) {
                frame.set_pixel(x.saturating_add(x_offset), y.saturating_add(y_offset), true);
            }
        }
    }
}
