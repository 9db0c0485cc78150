//! Fixed-length trail crawling through the panel in wiring-independent
//! linear order (`y * 16 + x`), wrapping from the last cell to the first

use heapless::Deque;

use super::{DrawContext, Effect};
use crate::frame::FrameBuffer;
use crate::pixel_map::{MATRIX_WIDTH, PIXEL_COUNT};

const LENGTH: usize = 8;

/// Snake effect
#[derive(Debug, Clone)]
pub struct SnakeEffect {
    /// Linear cell indices, tail first
    body: Deque<u16, LENGTH>,
}

impl Default for SnakeEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeEffect {
    pub fn new() -> Self {
        let mut effect = Self { body: Deque::new() };
        effect.reset_body();
        effect
    }

    fn reset_body(&mut self) {
        self.body.clear();
        #[allow(clippy::cast_possible_truncation)]
        for cell in 0..LENGTH as u16 {
            // Capacity equals LENGTH
            let _ = self.body.push_back(cell);
        }
    }

    /// Linear indices of the body, tail first
    pub fn body(&self) -> impl Iterator<Item = u16> + '_ {
        self.body.iter().copied()
    }

    /// Linear index of the head
    pub fn head(&self) -> Option<u16> {
        self.body.back().copied()
    }
}

impl Effect for SnakeEffect {
    const NAME: &'static str = "snake";

    fn init(&mut self, _seed: u64) {
        self.reset_body();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, _ctx: &DrawContext, frame: &mut FrameBuffer) {
        let width = MATRIX_WIDTH as u16;
        for &cell in self.body.iter() {
            frame.set_pixel((cell % width) as u8, (cell / width) as u8, true);
        }

        let Some(head) = self.head() else {
            return;
        };
        self.body.pop_front();
        let _ = self.body.push_back((head + 1) % PIXEL_COUNT as u16);
    }
}
