//! Logical to physical pixel mapping
//!
//! Effects draw on a plain Cartesian 16x16 grid. The panel itself is wired
//! as a chain of shift registers that does not follow that grid, so every
//! pixel goes through a [`PixelMap`] before it lands in the frame buffer.

use core::fmt;

/// Width of the matrix in pixels
pub const MATRIX_WIDTH: usize = 16;
/// Height of the matrix in pixels
pub const MATRIX_HEIGHT: usize = 16;
/// Total number of LEDs on the panel
pub const PIXEL_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Row-major table of physical indices, `table[y][x]`
pub type PixelTable = [[u8; MATRIX_WIDTH]; MATRIX_HEIGHT];

/// Error returned when a custom table is not a bijection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMapError {
    /// Physical index used by two logical positions
    Duplicate {
        index: u8,
        first: (u8, u8),
        second: (u8, u8),
    },
}

impl fmt::Display for PixelMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate {
                index,
                first,
                second,
            } => write!(
                f,
                "physical index {index} mapped by both {first:?} and {second:?}"
            ),
        }
    }
}

/// Static lookup from logical `(x, y)` to physical LED index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMap {
    table: PixelTable,
}

impl PixelMap {
    /// Panel split into a left and a right half.
    ///
    /// Each band of four rows holds 64 LEDs in chain order: left half of
    /// rows 0-1, right half of rows 0-1, right half of rows 2-3, left half
    /// of rows 2-3. Inside a half the first row runs left to right and the
    /// second one back.
    pub const SEGMENTED: Self = Self {
        table: [
            [0, 1, 2, 3, 4, 5, 6, 7, 16, 17, 18, 19, 20, 21, 22, 23],
            [15, 14, 13, 12, 11, 10, 9, 8, 31, 30, 29, 28, 27, 26, 25, 24],
            [48, 49, 50, 51, 52, 53, 54, 55, 32, 33, 34, 35, 36, 37, 38, 39],
            [63, 62, 61, 60, 59, 58, 57, 56, 47, 46, 45, 44, 43, 42, 41, 40],
            [64, 65, 66, 67, 68, 69, 70, 71, 80, 81, 82, 83, 84, 85, 86, 87],
            [79, 78, 77, 76, 75, 74, 73, 72, 95, 94, 93, 92, 91, 90, 89, 88],
            [112, 113, 114, 115, 116, 117, 118, 119, 96, 97, 98, 99, 100, 101, 102, 103],
            [127, 126, 125, 124, 123, 122, 121, 120, 111, 110, 109, 108, 107, 106, 105, 104],
            [128, 129, 130, 131, 132, 133, 134, 135, 144, 145, 146, 147, 148, 149, 150, 151],
            [143, 142, 141, 140, 139, 138, 137, 136, 159, 158, 157, 156, 155, 154, 153, 152],
            [176, 177, 178, 179, 180, 181, 182, 183, 160, 161, 162, 163, 164, 165, 166, 167],
            [191, 190, 189, 188, 187, 186, 185, 184, 175, 174, 173, 172, 171, 170, 169, 168],
            [192, 193, 194, 195, 196, 197, 198, 199, 208, 209, 210, 211, 212, 213, 214, 215],
            [207, 206, 205, 204, 203, 202, 201, 200, 223, 222, 221, 220, 219, 218, 217, 216],
            [240, 241, 242, 243, 244, 245, 246, 247, 224, 225, 226, 227, 228, 229, 230, 231],
            [255, 254, 253, 252, 251, 250, 249, 248, 239, 238, 237, 236, 235, 234, 233, 232],
        ],
    };

    /// Full-width serpentine: even rows left to right, odd rows reversed
    pub const SERPENTINE: Self = Self {
        table: serpentine_table(),
    };

    /// Build a map from a custom table, checking it is a bijection
    pub fn from_rows(table: PixelTable) -> Result<Self, PixelMapError> {
        let mut seen: [Option<(u8, u8)>; PIXEL_COUNT] = [None; PIXEL_COUNT];
        for (y, row) in table.iter().enumerate() {
            for (x, &index) in row.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let position = (x as u8, y as u8);
                if let Some(first) = seen[usize::from(index)] {
                    return Err(PixelMapError::Duplicate {
                        index,
                        first,
                        second: position,
                    });
                }
                seen[usize::from(index)] = Some(position);
            }
        }
        // 256 distinct u8 values cover the whole index space
        Ok(Self { table })
    }

    /// Physical index of a logical position, `None` outside the matrix
    #[inline]
    pub const fn physical_index(&self, x: u8, y: u8) -> Option<u8> {
        if x as usize >= MATRIX_WIDTH || y as usize >= MATRIX_HEIGHT {
            return None;
        }
        Some(self.table[y as usize][x as usize])
    }

    /// Logical position wired to a physical index
    pub fn logical_position(&self, index: u8) -> (u8, u8) {
        for (y, row) in self.table.iter().enumerate() {
            if let Some(x) = row.iter().position(|&i| i == index) {
                #[allow(clippy::cast_possible_truncation)]
                return (x as u8, y as u8);
            }
        }
        // Unreachable for a validated table
        (0, 0)
    }

    /// Raw table rows
    pub const fn rows(&self) -> &PixelTable {
        &self.table
    }
}

impl Default for PixelMap {
    fn default() -> Self {
        Self::SEGMENTED
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn serpentine_table() -> PixelTable {
    let mut table = [[0u8; MATRIX_WIDTH]; MATRIX_HEIGHT];
    let mut y = 0;
    while y < MATRIX_HEIGHT {
        let mut x = 0;
        while x < MATRIX_WIDTH {
            let column = if y % 2 == 0 { x } else { MATRIX_WIDTH - 1 - x };
            table[y][x] = (y * MATRIX_WIDTH + column) as u8;
            x += 1;
        }
        y += 1;
    }
    table
}
