//! 5x7 bitmap font
//!
//! Each glyph is seven rows; bit 4 of a row is the leftmost pixel.
//! Lower-case input is drawn with the upper-case glyph.

use glam::Vec2;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, in font pixels (glyph + 1 column gap)
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0; 7];

/// Look up the glyph for `c`. Unknown characters map to `None`.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let g: &'static Glyph = match c.to_ascii_uppercase() {
        'A' => &[0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => &[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => &[0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => &[0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => &[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => &[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => &[0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => &[0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => &[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => &[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => &[0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => &[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => &[0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => &[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => &[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => &[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => &[0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => &[0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => &[0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => &[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ':' => &[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => &[0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '(' => &[0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => &[0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '!' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '/' => &[0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '_' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        ' ' => &BLANK,
        _ => return None,
    };
    Some(g)
}

/// Is pixel (col, row) of the glyph lit?
#[inline]
pub fn lit(glyph: &Glyph, col: u32, row: u32) -> bool {
    glyph[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}

/// Bounding box of `text` drawn at `scale` screen pixels per font pixel
pub fn text_size(text: &str, scale: f32) -> Vec2 {
    let chars = text.chars().count() as f32;
    if chars == 0.0 {
        return Vec2::ZERO;
    }
    let width = (chars * GLYPH_ADVANCE as f32 - 1.0) * scale;
    Vec2::new(width, GLYPH_HEIGHT as f32 * scale)
}
