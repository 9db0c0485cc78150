//! Bit-packed frame buffer
//!
//! One bit per LED, eight LEDs per byte, most significant bit first. The
//! byte order matches the order in which the shift register chain expects
//! data, so a frame can be sent to the panel as-is.

use crate::pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH, PIXEL_COUNT, PixelMap};

/// Size of a packed frame in bytes
pub const FRAME_BYTES: usize = PIXEL_COUNT / 8;

/// One full frame of the matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bits: [u8; FRAME_BYTES],
    map: &'static PixelMap,
}

impl FrameBuffer {
    /// Create a blank frame using the given wiring
    pub const fn new(map: &'static PixelMap) -> Self {
        Self {
            bits: [0; FRAME_BYTES],
            map,
        }
    }

    /// Wiring used to place pixels
    pub const fn pixel_map(&self) -> &'static PixelMap {
        self.map
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.bits.fill(0x00);
    }

    /// Turn every LED on
    pub fn fill(&mut self) {
        self.bits.fill(0xFF);
    }

    /// Set or unset a pixel.
    ///
    /// Coordinates outside the matrix are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        let Some(index) = self.map.physical_index(x, y) else {
            return;
        };
        let (byte, mask) = locate(index);
        if on {
            self.bits[byte] |= mask;
        } else {
            self.bits[byte] &= !mask;
        }
    }

    /// Read back a pixel, `false` outside the matrix
    #[inline]
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        let Some(index) = self.map.physical_index(x, y) else {
            return false;
        };
        let (byte, mask) = locate(index);
        self.bits[byte] & mask != 0
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> u32 {
        self.bits.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Check if no LED is lit
    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&byte| byte == 0)
    }

    /// Iterate over lit pixels as logical coordinates
    pub fn lit_pixels(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        #[allow(clippy::cast_possible_truncation)]
        (0..MATRIX_HEIGHT as u8)
            .flat_map(|y| (0..MATRIX_WIDTH as u8).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y))
    }

    /// Packed bytes in wire order
    pub const fn as_bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.bits
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(&PixelMap::SEGMENTED)
    }
}

/// Byte offset and bit mask of a physical index
#[inline]
const fn locate(index: u8) -> (usize, u8) {
    ((index >> 3) as usize, 0x80 >> (index & 7))
}
