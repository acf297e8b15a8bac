//! Braille glyph encoding of binary pixel grids.
//!
//! Each output character covers a 2-column by 4-row block of cells. The
//! crate-wide convention is "0 = dot present": the encoder raises a dot
//! where a cell is 0 (brighter than the threshold), and padding cells count
//! as 1 (background, no dot).

use crate::error::RendrError;
use crate::grid::BinaryGrid;

/// First codepoint of the Unicode braille block (the blank pattern).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Width of one braille cell in grid columns.
pub const CELL_WIDTH: u32 = 2;

/// Height of one braille cell in grid rows.
pub const CELL_HEIGHT: u32 = 4;

/// Sub-pixel position (column, row) feeding each glyph bit 0..=7.
///
/// Unicode numbers the dots 1-2-3-7 down the left column and 4-5-6-8 down
/// the right, so the bit order is not a plain row scan:
/// ```text
///  bit 0   bit 3
///  bit 1   bit 4
///  bit 2   bit 5
///  bit 6   bit 7
/// ```
/// Any other order still yields valid glyphs but visually scrambles the
/// image.
pub const DOT_POSITIONS: [(u32, u32); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (0, 3),
    (1, 3),
];

/// Glyph for one packed dot byte.
#[inline]
fn glyph(bits: u8) -> char {
    // 0x2800..=0x28FF are all valid scalar values
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or('\u{2800}')
}

/// Render a binary grid as lines of braille glyphs.
///
/// The output has `ceil(height / 4)` lines of `ceil(width / 2)` glyphs, and
/// every line ends with `\n`. Cells beyond the right/bottom grid edge (the
/// padding up to a whole 2x4 block) read as background, so padding only ever
/// appends blank dots and never drops real pixels.
///
/// # Arguments
/// * `bits` - Quantized grid; a cell of 0 raises the dot
///
/// # Errors
/// `EmptyImage` if either dimension is zero.
pub fn encode(bits: &BinaryGrid) -> Result<String, RendrError> {
    if bits.is_empty() {
        return Err(RendrError::EmptyImage {
            width: bits.width(),
            height: bits.height(),
        });
    }

    let glyph_cols = bits.width().div_ceil(CELL_WIDTH);
    let glyph_rows = bits.height().div_ceil(CELL_HEIGHT);
    // Braille glyphs are three bytes of UTF-8 each.
    let mut out = String::with_capacity((glyph_cols as usize * 3 + 1) * glyph_rows as usize);

    for cell_y in 0..glyph_rows {
        for cell_x in 0..glyph_cols {
            let mut bits_byte = 0u8;
            for (bit, &(dx, dy)) in DOT_POSITIONS.iter().enumerate() {
                let x = cell_x * CELL_WIDTH + dx;
                let y = cell_y * CELL_HEIGHT + dy;
                let cell = if x < bits.width() && y < bits.height() {
                    bits.get(x, y)
                } else {
                    1
                };
                if cell == 0 {
                    bits_byte |= 1 << bit;
                }
            }
            out.push(glyph(bits_byte));
        }
        out.push('\n');
    }

    Ok(out)
}
