//! Built-in 7x16 bitmap font
//!
//! Each glyph is 7 columns by 16 rows, stored column-major in two 8-row
//! bands: bytes `0..7` hold rows 0-7 of columns 0-6, bytes `7..14` hold rows
//! 8-15. Bit 0 of each byte is the topmost row of its band, so pixel
//! `(col, row)` is set when `glyph[(row / 8) * 7 + col] & (1 << (row % 8)) != 0`.
//!
//! The table covers printable ASCII from `' '` to `'~'`.
//!
//! ```
//! use st7735s::font;
//!
//! assert!(font::glyph('A').is_some());
//! assert!(font::glyph('~').is_some());
//! assert!(font::glyph('\x7F').is_none());
//! ```

/// Glyph width in pixels
pub const GLYPH_WIDTH: u16 = 7;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: u16 = 16;

/// Blank columns between consecutive glyphs
pub const GLYPH_GAP: u16 = 1;

/// Bytes per glyph: one per column per 8-row band
pub const GLYPH_BYTES: usize = GLYPH_WIDTH as usize * GLYPH_HEIGHT.div_ceil(8) as usize;

/// First character in the table
pub const FIRST_CHAR: char = ' ';

/// Last character in the table
pub const LAST_CHAR: char = '~';

/// A single glyph bitmap
pub type Glyph = [u8; GLYPH_BYTES];

/// Look up the bitmap for `ch`
///
/// Returns `None` for characters outside `FIRST_CHAR..=LAST_CHAR`.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&ch) {
        return None;
    }
    GLYPHS.get(ch as usize - FIRST_CHAR as usize)
}

/// Whether `ch` has a glyph
pub fn is_supported(ch: char) -> bool {
    glyph(ch).is_some()
}

#[rustfmt::skip]
static GLYPHS: [Glyph; 95] = [
    // ' '
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '!'
    [
        0x00, 0x00, 0x00, 0xFE, 0xFE, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x67, 0x67, 0x00, 0x00,
    ],
    // '"'
    [
        0x00, 0x3E, 0x0E, 0x00, 0x3E, 0x0E, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '#'
    [
        0x20, 0x20, 0xFE, 0x20, 0x20, 0xFE, 0x20,
        0x04, 0x7F, 0x04, 0x04, 0x7F, 0x04, 0x04,
    ],
    // '$'
    [
        0x02, 0x0C, 0x30, 0xC0, 0x30, 0x0C, 0x02,
        0x02, 0x02, 0x02, 0x7F, 0x02, 0x02, 0x02,
    ],
    // '%'
    [
        0x3C, 0x42, 0x42, 0xBC, 0x60, 0x18, 0x06,
        0x60, 0x18, 0x06, 0x3D, 0x42, 0x42, 0x3C,
    ],
    // '&'
    [
        0x00, 0x3C, 0xC2, 0x22, 0x1C, 0x00, 0x00,
        0x1C, 0x23, 0x40, 0x47, 0x28, 0x30, 0x4E,
    ],
    // "'"
    [
        0x00, 0x00, 0x1C, 0xFE, 0x1C, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '('
    [
        0x00, 0x00, 0xE0, 0x18, 0x04, 0x02, 0x00,
        0x00, 0x00, 0x07, 0x18, 0x20, 0x40, 0x00,
    ],
    // ')'
    [
        0x00, 0x02, 0x04, 0x18, 0xE0, 0x00, 0x00,
        0x00, 0x40, 0x20, 0x18, 0x07, 0x00, 0x00,
    ],
    // '*'
    [
        0x40, 0x80, 0x00, 0xF8, 0x00, 0x80, 0x40,
        0x10, 0x0C, 0x03, 0x01, 0x03, 0x0C, 0x10,
    ],
    // '+'
    [
        0x80, 0x80, 0x80, 0xF8, 0x80, 0x80, 0x80,
        0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    ],
    // ','
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x58, 0x38, 0x00, 0x00, 0x00,
    ],
    // '-'
    [
        0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '.'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00,
    ],
    // '/'
    [
        0x00, 0x00, 0x00, 0x80, 0x60, 0x18, 0x06,
        0x60, 0x18, 0x06, 0x01, 0x00, 0x00, 0x00,
    ],
    // '0'
    [
        0x00, 0xFC, 0x02, 0x01, 0x01, 0x02, 0xFC,
        0x00, 0x03, 0x04, 0x08, 0x08, 0x04, 0x03,
    ],
    // '1'
    [
        0x00, 0x00, 0x04, 0x02, 0xFF, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00,
    ],
    // '2'
    [
        0x04, 0x02, 0x01, 0x81, 0x41, 0x22, 0x1C,
        0x0C, 0x0A, 0x09, 0x08, 0x08, 0x08, 0x08,
    ],
    // '3'
    [
        0x01, 0x11, 0x19, 0x25, 0x23, 0xC1, 0x00,
        0x04, 0x08, 0x08, 0x08, 0x04, 0x03, 0x00,
    ],
    // '4'
    [
        0x80, 0x60, 0x18, 0x06, 0xF1, 0x00, 0x00,
        0x01, 0x01, 0x01, 0x01, 0x0F, 0x01, 0x01,
    ],
    // '5'
    [
        0x00, 0x1F, 0x11, 0x11, 0x11, 0x21, 0xC1,
        0x00, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // '6'
    [
        0xE0, 0x58, 0x24, 0x22, 0x21, 0x40, 0x80,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // '7'
    [
        0x01, 0x01, 0x01, 0x81, 0x71, 0x0D, 0x03,
        0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    ],
    // '8'
    [
        0x8C, 0x52, 0x21, 0x21, 0x21, 0x52, 0x8C,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // '9'
    [
        0x1C, 0x22, 0x41, 0x41, 0x41, 0xA2, 0x7C,
        0x00, 0x00, 0x08, 0x04, 0x02, 0x01, 0x00,
    ],
    // ':'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x33, 0x33, 0x00, 0x00, 0x00,
    ],
    // ';'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0xB3, 0x73, 0x00, 0x00, 0x00,
    ],
    // '<'
    [
        0x80, 0x80, 0x40, 0x40, 0x20, 0x20, 0x10,
        0x00, 0x00, 0x01, 0x01, 0x02, 0x02, 0x04,
    ],
    // '='
    [
        0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x00, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02,
    ],
    // '>'
    [
        0x10, 0x20, 0x20, 0x40, 0x40, 0x80, 0x80,
        0x04, 0x02, 0x02, 0x01, 0x01, 0x00, 0x00,
    ],
    // '?'
    [
        0x18, 0x04, 0x02, 0x82, 0x82, 0x44, 0x38,
        0x00, 0x00, 0x67, 0x67, 0x00, 0x00, 0x00,
    ],
    // '@'
    [
        0xC4, 0x22, 0x22, 0xC2, 0x02, 0x04, 0xF8,
        0x1F, 0x20, 0x20, 0x1F, 0x20, 0x20, 0x1F,
    ],
    // 'A'
    [
        0x00, 0xE0, 0x9C, 0x82, 0x9C, 0xE0, 0x00,
        0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F,
    ],
    // 'B'
    [
        0x00, 0xFE, 0x42, 0x42, 0x42, 0xA2, 0x1C,
        0x00, 0x0F, 0x08, 0x08, 0x08, 0x08, 0x07,
    ],
    // 'C'
    [
        0xF8, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02,
    ],
    // 'D'
    [
        0x00, 0xFE, 0x02, 0x02, 0x02, 0x04, 0xF8,
        0x00, 0x0F, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'E'
    [
        0x00, 0xFE, 0x42, 0x42, 0x42, 0x42, 0x02,
        0x00, 0x0F, 0x08, 0x08, 0x08, 0x08, 0x08,
    ],
    // 'F'
    [
        0x00, 0xFE, 0x22, 0x22, 0x22, 0x22, 0x02,
        0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'G'
    [
        0xF8, 0x04, 0x02, 0x02, 0x42, 0x44, 0xC8,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x0F,
    ],
    // 'H'
    [
        0x00, 0xFE, 0x40, 0x40, 0x40, 0x40, 0xFE,
        0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x0F,
    ],
    // 'I'
    [
        0x00, 0x02, 0x02, 0xFE, 0x02, 0x02, 0x00,
        0x00, 0x08, 0x08, 0x0F, 0x08, 0x08, 0x00,
    ],
    // 'J'
    [
        0x00, 0x00, 0x02, 0x02, 0xFE, 0x02, 0x02,
        0x06, 0x08, 0x08, 0x08, 0x07, 0x00, 0x00,
    ],
    // 'K'
    [
        0x00, 0xFE, 0x40, 0xB0, 0x0C, 0x02, 0x00,
        0x00, 0x0F, 0x00, 0x01, 0x06, 0x08, 0x00,
    ],
    // 'L'
    [
        0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x08, 0x0F, 0x08, 0x08, 0x08, 0x0E, 0x00,
    ],
    // 'M'
    [
        0xFE, 0x0C, 0x70, 0x80, 0x70, 0x0C, 0xFE,
        0x0F, 0x00, 0x00, 0x01, 0x00, 0x00, 0x0F,
    ],
    // 'N'
    [
        0x00, 0xFE, 0x0C, 0x30, 0xC0, 0x00, 0xFE,
        0x00, 0x0F, 0x00, 0x00, 0x01, 0x06, 0x0F,
    ],
    // 'O'
    [
        0xF8, 0x04, 0x02, 0x02, 0x02, 0x04, 0xF8,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'P'
    [
        0x00, 0xFE, 0x42, 0x42, 0x42, 0x24, 0x18,
        0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Q'
    [
        0xF8, 0x04, 0x02, 0x02, 0x02, 0x04, 0xF8,
        0x03, 0x04, 0x08, 0x09, 0x0A, 0x04, 0x0B,
    ],
    // 'R'
    [
        0x00, 0xFE, 0x42, 0xC2, 0x42, 0x24, 0x18,
        0x00, 0x0F, 0x00, 0x00, 0x03, 0x04, 0x08,
    ],
    // 'S'
    [
        0x18, 0x24, 0x42, 0x42, 0x82, 0x84, 0x08,
        0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'T'
    [
        0x02, 0x02, 0x02, 0xFE, 0x02, 0x02, 0x02,
        0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    ],
    // 'U'
    [
        0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'V'
    [
        0x0E, 0x70, 0x80, 0x00, 0x80, 0x70, 0x0E,
        0x00, 0x00, 0x03, 0x0C, 0x03, 0x00, 0x00,
    ],
    // 'W'
    [
        0xFE, 0x00, 0xC0, 0x3C, 0xC0, 0x00, 0xFE,
        0x0F, 0x06, 0x01, 0x00, 0x01, 0x06, 0x0F,
    ],
    // 'X'
    [
        0x02, 0x0C, 0xB0, 0x40, 0xB0, 0x0C, 0x02,
        0x08, 0x06, 0x01, 0x00, 0x01, 0x06, 0x08,
    ],
    // 'Y'
    [
        0x06, 0x18, 0x60, 0x80, 0x60, 0x18, 0x06,
        0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    ],
    // 'Z'
    [
        0x02, 0x02, 0x02, 0xC2, 0x22, 0x1A, 0x06,
        0x08, 0x0C, 0x0B, 0x08, 0x08, 0x08, 0x08,
    ],
    // '['
    [
        0x00, 0x00, 0x00, 0xFE, 0x02, 0x02, 0x00,
        0x00, 0x00, 0x00, 0x7F, 0x40, 0x40, 0x00,
    ],
    // '\\'
    [
        0x06, 0x18, 0x60, 0x80, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x01, 0x06, 0x18, 0x60,
    ],
    // ']'
    [
        0x00, 0x02, 0x02, 0xFE, 0x00, 0x00, 0x00,
        0x00, 0x40, 0x40, 0x7F, 0x00, 0x00, 0x00,
    ],
    // '^'
    [
        0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '_'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    ],
    // '`'
    [
        0x00, 0x00, 0x00, 0x0E, 0x30, 0x40, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'a'
    [
        0x20, 0x90, 0x90, 0x90, 0x90, 0x10, 0xE0,
        0x07, 0x08, 0x08, 0x08, 0x08, 0x05, 0x0F,
    ],
    // 'b'
    [
        0x00, 0xFF, 0x20, 0x10, 0x10, 0x20, 0xC0,
        0x00, 0x0F, 0x04, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'c'
    [
        0xC0, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04,
    ],
    // 'd'
    [
        0xC0, 0x20, 0x10, 0x10, 0x20, 0xFF, 0x00,
        0x03, 0x04, 0x08, 0x08, 0x04, 0x0F, 0x00,
    ],
    // 'e'
    [
        0xC0, 0xA0, 0x90, 0x90, 0x90, 0xA0, 0xC0,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04,
    ],
    // 'f'
    [
        0x00, 0x40, 0x40, 0xFC, 0x42, 0x42, 0x0C,
        0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00,
    ],
    // 'g'
    [
        0x00, 0xE0, 0x10, 0x10, 0x20, 0xF0, 0x00,
        0x00, 0x23, 0x44, 0x44, 0x42, 0x3F, 0x00,
    ],
    // 'h'
    [
        0x00, 0xFF, 0x20, 0x10, 0x10, 0x10, 0xE0,
        0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x0F,
    ],
    // 'i'
    [
        0x00, 0x00, 0x00, 0xF3, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    ],
    // 'j'
    [
        0x00, 0x00, 0x00, 0x00, 0xF3, 0x00, 0x00,
        0x00, 0x20, 0x40, 0x40, 0x3F, 0x00, 0x00,
    ],
    // 'k'
    [
        0x00, 0xFE, 0x00, 0x80, 0x40, 0x20, 0x00,
        0x00, 0x0F, 0x01, 0x02, 0x04, 0x08, 0x00,
    ],
    // 'l'
    [
        0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x07, 0x08, 0x08, 0x04, 0x00,
    ],
    // 'm'
    [
        0xF0, 0x20, 0x10, 0xE0, 0x10, 0x10, 0xE0,
        0x0F, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x0F,
    ],
    // 'n'
    [
        0x00, 0xF0, 0x20, 0x10, 0x10, 0x10, 0xE0,
        0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x0F,
    ],
    // 'o'
    [
        0xC0, 0x20, 0x10, 0x10, 0x10, 0x20, 0xC0,
        0x03, 0x04, 0x08, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'p'
    [
        0x00, 0xF0, 0x20, 0x10, 0x10, 0x20, 0xC0,
        0x00, 0x7F, 0x04, 0x08, 0x08, 0x04, 0x03,
    ],
    // 'q'
    [
        0xC0, 0x20, 0x10, 0x10, 0x20, 0xF0, 0x00,
        0x03, 0x04, 0x08, 0x08, 0x04, 0x7F, 0x00,
    ],
    // 'r'
    [
        0x00, 0x00, 0x10, 0xE0, 0x10, 0x10, 0x20,
        0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    ],
    // 's'
    [
        0x00, 0x60, 0x90, 0x90, 0x10, 0x10, 0x20,
        0x00, 0x04, 0x08, 0x08, 0x09, 0x09, 0x06,
    ],
    // 't'
    [
        0x00, 0x10, 0x10, 0xFE, 0x10, 0x10, 0x00,
        0x00, 0x00, 0x00, 0x07, 0x08, 0x08, 0x04,
    ],
    // 'u'
    [
        0x00, 0xF0, 0x00, 0x00, 0x00, 0x00, 0xF0,
        0x00, 0x07, 0x08, 0x08, 0x08, 0x04, 0x0F,
    ],
    // 'v'
    [
        0x30, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x30,
        0x00, 0x00, 0x03, 0x0C, 0x03, 0x00, 0x00,
    ],
    // 'w'
    [
        0xF0, 0x00, 0x00, 0xE0, 0x00, 0x00, 0xF0,
        0x03, 0x0C, 0x03, 0x00, 0x03, 0x0C, 0x03,
    ],
    // 'x'
    [
        0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10,
        0x04, 0x02, 0x01, 0x00, 0x01, 0x02, 0x04,
    ],
    // 'y'
    [
        0x30, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0x30,
        0x20, 0x10, 0x0B, 0x04, 0x03, 0x00, 0x00,
    ],
    // 'z'
    [
        0x10, 0x10, 0x10, 0x10, 0x90, 0x50, 0x30,
        0x08, 0x0C, 0x0A, 0x09, 0x08, 0x08, 0x08,
    ],
    // '{'
    [
        0x00, 0x00, 0x80, 0x40, 0x3E, 0x01, 0x00,
        0x00, 0x00, 0x00, 0x01, 0x3E, 0x40, 0x00,
    ],
    // '|'
    [
        0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00,
    ],
    // '}'
    [
        0x00, 0x01, 0x3E, 0x40, 0x80, 0x00, 0x00,
        0x00, 0x40, 0x3E, 0x01, 0x00, 0x00, 0x00,
    ],
    // '~'
    [
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];
