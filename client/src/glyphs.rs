//! Built-in block font for the score digits

use game_core::Rect;
use glam::IVec2;

pub const GLYPH_COLUMNS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

/// 3x5 bitmaps for '0'..='9', one row per entry, high bit = left column
const DIGITS: [[u8; GLYPH_ROWS as usize]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

/// Width in pixels of `text` laid out with one blank cell between glyphs
pub fn text_width(text: &str, cell: i32) -> i32 {
    let count = text.chars().filter(|c| c.is_ascii_digit()).count() as i32;
    if count == 0 {
        return 0;
    }
    (count * GLYPH_COLUMNS + (count - 1)) * cell
}

/// Filled cells for `text`, top-left at `origin`. Non-digits are skipped.
pub fn text_rects(text: &str, origin: IVec2, cell: i32) -> Vec<Rect> {
    let mut rects = Vec::new();
    let digits = text.chars().filter_map(|c| c.to_digit(10));

    for (index, digit) in digits.enumerate() {
        let glyph_x = origin.x + index as i32 * (GLYPH_COLUMNS + 1) * cell;
        for (row, bits) in DIGITS[digit as usize].iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                    rects.push(Rect::new(
                        glyph_x + col * cell,
                        origin.y + row as i32 * cell,
                        cell,
                        cell,
                    ));
                }
            }
        }
    }

    rects
}
