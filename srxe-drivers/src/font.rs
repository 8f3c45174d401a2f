//! Built-in bitmap fonts
//!
//! Four fixed cell sizes are available. Widths are multiples of three so
//! every glyph starts and ends on a display byte boundary.
//!
//! | Size     | Cell  | Source                                      |
//! |----------|-------|---------------------------------------------|
//! | `Normal` | 9x8   | 8x8 table, one blank column                 |
//! | `Small`  | 6x8   | 5x7 table, one blank column                 |
//! | `Medium` | 12x16 | 10x16 table, two blank columns              |
//! | `Large`  | 15x16 | 15x16 table                                 |
//!
//! All tables cover ASCII 0x20..=0x7F. The 8x8 table is stored one scan
//! line per byte (bit 0 = leftmost pixel). The 5x7 table is stored one
//! column per byte (bit 0 = top row), i.e. each byte spans 8 rows. The two
//! 16-row tables are stored one two-byte column per entry (bit 0 = top
//! row); their strokes are drawn for the larger cell, with smoothed
//! diagonals, rather than being blown-up copies of the small fonts.

use crate::pixel;

/// First character in the tables
const FIRST_CHAR: u8 = 0x20;

/// Number of glyphs in each table
const GLYPH_COUNT: usize = 96;

/// Largest glyph in packed display bytes (15x16 → 5 bytes x 16 rows)
pub const MAX_GLYPH_BYTES: usize = 5 * 16;

/// Font size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FontSize {
    /// 9x8
    Normal = 0,
    /// 6x8
    Small = 1,
    /// 12x16
    Medium = 2,
    /// 15x16
    Large = 3,
}

impl FontSize {
    /// Convert from the numeric size used by the board API
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(FontSize::Normal),
            1 => Some(FontSize::Small),
            2 => Some(FontSize::Medium),
            3 => Some(FontSize::Large),
            _ => None,
        }
    }

    /// Cell width in pixels
    pub const fn width(self) -> u16 {
        match self {
            FontSize::Normal => 9,
            FontSize::Small => 6,
            FontSize::Medium => 12,
            FontSize::Large => 15,
        }
    }

    /// Cell height in pixels
    pub const fn height(self) -> u16 {
        match self {
            FontSize::Normal | FontSize::Small => 8,
            FontSize::Medium | FontSize::Large => 16,
        }
    }

    /// Display bytes per scan line of one glyph
    pub const fn row_bytes(self) -> usize {
        (self.width() / pixel::PIXELS_PER_BYTE) as usize
    }

    /// Display bytes for one whole glyph
    pub const fn glyph_bytes(self) -> usize {
        self.row_bytes() * self.height() as usize
    }
}

/// Table index for a character; anything outside the table renders as space
fn glyph_index(ch: char) -> usize {
    let code = ch as u32;
    if (FIRST_CHAR as u32..FIRST_CHAR as u32 + GLYPH_COUNT as u32).contains(&code) {
        (code - FIRST_CHAR as u32) as usize
    } else {
        0
    }
}

/// Whether pixel (`col`, `row`) of the glyph cell is set
pub fn glyph_pixel(size: FontSize, ch: char, col: u16, row: u16) -> bool {
    let idx = glyph_index(ch);
    match size {
        FontSize::Normal => {
            if col >= 8 || row >= 8 {
                return false;
            }
            FONT_8X8[idx][row as usize] & (1 << col) != 0
        }
        FontSize::Small => {
            if col >= 5 || row >= 8 {
                return false;
            }
            FONT_5X7[idx][col as usize] & (1 << row) != 0
        }
        FontSize::Medium => {
            if col >= 10 || row >= 16 {
                return false;
            }
            FONT_12X16[idx][col as usize] & (1 << row) != 0
        }
        FontSize::Large => {
            if col >= 15 || row >= 16 {
                return false;
            }
            FONT_15X16[idx][col as usize] & (1 << row) != 0
        }
    }
}

/// Render one glyph into packed display bytes, raster order
///
/// Set pixels take gray level `fg`, clear pixels `bg`. Returns the number of
/// bytes written to `out`; a buffer shorter than [`FontSize::glyph_bytes`]
/// gets a partial glyph.
pub fn render_glyph(size: FontSize, ch: char, fg: u8, bg: u8, out: &mut [u8]) -> usize {
    let row_bytes = size.row_bytes();
    let level = |col: u16, row: u16| {
        if glyph_pixel(size, ch, col, row) {
            fg
        } else {
            bg
        }
    };

    let mut n = 0;
    for row in 0..size.height() {
        for byte in 0..row_bytes as u16 {
            let col = byte * pixel::PIXELS_PER_BYTE;
            let Some(slot) = out.get_mut(n) else {
                return n;
            };
            *slot = pixel::pack(level(col, row), level(col + 1, row), level(col + 2, row));
            n += 1;
        }
    }
    n
}

/// 5x7 font, one byte per column, bit 0 = top
#[rustfmt::skip]
static FONT_5X7: [[u8; 5]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x56, 0x20, 0x50], // &
    [0x00, 0x08, 0x07, 0x03, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x80, 0x70, 0x30, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x60, 0x60, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x00, 0x14, 0x00, 0x00], // :
    [0x00, 0x40, 0x34, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x59, 0x09, 0x06], // ?
    [0x3E, 0x41, 0x5D, 0x59, 0x4E], // @
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x41, 0x3E], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x73], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x26, 0x49, 0x49, 0x49, 0x32], // S
    [0x03, 0x01, 0x7F, 0x01, 0x03], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x59, 0x49, 0x4D, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x41, 0x7F], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x03, 0x07, 0x08, 0x00], // `
    [0x20, 0x54, 0x54, 0x78, 0x40], // a
    [0x7F, 0x28, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x28], // c
    [0x38, 0x44, 0x44, 0x28, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x00, 0x08, 0x7E, 0x09, 0x02], // f
    [0x18, 0xA4, 0xA4, 0x9C, 0x78], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x40, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x78, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0xFC, 0x18, 0x24, 0x24, 0x18], // p
    [0x18, 0x24, 0x24, 0x18, 0xFC], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x24], // s
    [0x04, 0x04, 0x3F, 0x44, 0x24], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x4C, 0x90, 0x90, 0x90, 0x7C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x77, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
    [0x3C, 0x26, 0x23, 0x26, 0x3C], // DEL
];

/// 8x8 font, one byte per scan line, bit 0 = left
#[rustfmt::skip]
static FONT_8X8: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // #
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // $
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // %
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // (
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // *
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ,
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // .
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // /
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ;
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // <
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // =
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // >
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // ?
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // @
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // A
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // B
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // C
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // D
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // E
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // F
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // G
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // H
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // J
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // K
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // L
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // M
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // N
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // O
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // P
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // Q
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // R
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // S
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // Y
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // Z
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // [
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // \
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ]
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // a
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // b
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // c
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // d
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // e
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // f
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // g
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // h
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // j
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // k
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // l
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // m
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // n
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // o
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // p
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // q
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // r
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // s
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // v
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // w
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // y
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // z
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // }
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // DEL
];

/// 12x16 font, one 16-bit column per entry, bit 0 = top row
#[rustfmt::skip]
static FONT_12X16: [[u16; 10]; GLYPH_COUNT] = [
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // ' '
    [0x0000, 0x0000, 0x0000, 0x0000, 0x33FF, 0x33FF, 0x0000, 0x0000, 0x0000, 0x0000], // !
    [0x0000, 0x0000, 0x003F, 0x003F, 0x0000, 0x0000, 0x003F, 0x003F, 0x0000, 0x0000], // "
    [0x0330, 0x0738, 0x3FFF, 0x3FFF, 0x0330, 0x0330, 0x3FFF, 0x3FFF, 0x0738, 0x0330], // #
    [0x0C30, 0x0C78, 0x0CCC, 0x1CCE, 0x3FFF, 0x3FFF, 0x1CCE, 0x0CCC, 0x078C, 0x030C], // $
    [0x0C0F, 0x0E0F, 0x070F, 0x0387, 0x01C0, 0x00E0, 0x1870, 0x3C38, 0x3C1C, 0x3C0C], // %
    [0x0F3C, 0x161A, 0x38C3, 0x30C3, 0x333E, 0x333C, 0x0C00, 0x0C00, 0x3300, 0x3300], // &
    [0x0000, 0x0000, 0x00C0, 0x00E0, 0x007F, 0x003F, 0x001F, 0x0007, 0x0000, 0x0000], // '
    [0x0000, 0x0000, 0x03F0, 0x07F8, 0x0E1C, 0x1C0E, 0x3807, 0x3003, 0x0000, 0x0000], // (
    [0x0000, 0x0000, 0x3003, 0x3807, 0x1C0E, 0x0E1C, 0x07F8, 0x03F0, 0x0000, 0x0000], // )
    [0x0CCC, 0x0CCC, 0x01E0, 0x03F0, 0x3FFF, 0x3FFF, 0x03F0, 0x01E0, 0x0CCC, 0x0CCC], // *
    [0x00C0, 0x00C0, 0x00C0, 0x01E0, 0x0FFC, 0x0FFC, 0x01E0, 0x00C0, 0x00C0, 0x00C0], // +
    [0x0000, 0x0000, 0xC000, 0xE000, 0x7E00, 0x3F00, 0x1F00, 0x0600, 0x0000, 0x0000], // ,
    [0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0], // -
    [0x0000, 0x0000, 0x0000, 0x0000, 0x1800, 0x3C00, 0x3C00, 0x1800, 0x0000, 0x0000], // .
    [0x0C00, 0x0E00, 0x0700, 0x0380, 0x01C0, 0x00E0, 0x0070, 0x0038, 0x001C, 0x000C], // /
    [0x0FFC, 0x17FA, 0x3305, 0x3303, 0x31C3, 0x30E3, 0x3033, 0x3831, 0x17FA, 0x0FFC], // 0
    [0x0000, 0x0000, 0x300C, 0x381E, 0x3FFF, 0x3FFF, 0x3800, 0x3000, 0x0000, 0x0000], // 1
    [0x3F0C, 0x3E8E, 0x39C5, 0x30C3, 0x30C3, 0x30C3, 0x30C3, 0x30E5, 0x305A, 0x303C], // 2
    [0x0C03, 0x1C03, 0x3803, 0x3003, 0x30C3, 0x30E3, 0x30F3, 0x3973, 0x1697, 0x0F0F], // 3
    [0x03C0, 0x03A0, 0x0330, 0x0338, 0x030C, 0x078E, 0x3FFF, 0x3FFF, 0x0780, 0x0300], // 4
    [0x0C3F, 0x1C3F, 0x3833, 0x3033, 0x3033, 0x3033, 0x3033, 0x3873, 0x17A3, 0x0FC3], // 5
    [0x0FF0, 0x17E8, 0x39CC, 0x30CE, 0x30C5, 0x30C3, 0x30C3, 0x39C3, 0x1683, 0x0F03], // 6
    [0x3003, 0x3803, 0x1C03, 0x0E03, 0x0703, 0x0383, 0x01C3, 0x00E7, 0x005F, 0x003F], // 7
    [0x0F3C, 0x161A, 0x39E5, 0x30C3, 0x30C3, 0x30C3, 0x30C3, 0x39E5, 0x161A, 0x0F3C], // 8
    [0x303C, 0x305A, 0x30E5, 0x30C3, 0x30C3, 0x38C3, 0x1CC3, 0x0CE5, 0x05FA, 0x03FC], // 9
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0330, 0x0330, 0x0000, 0x0000, 0x0000, 0x0000], // :
    [0x0000, 0x0000, 0x3000, 0x3800, 0x1F30, 0x0F30, 0x0000, 0x0000, 0x0000, 0x0000], // ;
    [0x0000, 0x0000, 0x00C0, 0x01E0, 0x0330, 0x0738, 0x0E1C, 0x1C0E, 0x3805, 0x3003], // <
    [0x0330, 0x0330, 0x0330, 0x0330, 0x0330, 0x0330, 0x0330, 0x0330, 0x0330, 0x0330], // =
    [0x0000, 0x0000, 0x3003, 0x3807, 0x1C0E, 0x0E1C, 0x0738, 0x0330, 0x01E0, 0x00C0], // >
    [0x000C, 0x000E, 0x0005, 0x0003, 0x3383, 0x33C3, 0x01C3, 0x00E5, 0x005A, 0x003C], // ?
    [0x0FFC, 0x17FA, 0x3805, 0x3003, 0x31F3, 0x33F3, 0x33C3, 0x31C5, 0x31FA, 0x30FC], // @
    [0x3FF0, 0x1FE8, 0x079C, 0x030E, 0x0303, 0x0303, 0x030E, 0x079C, 0x1FE8, 0x3FF0], // A
    [0x3FFF, 0x3FFF, 0x39E7, 0x30C3, 0x30C3, 0x30C3, 0x30C3, 0x39E5, 0x161A, 0x0F3C], // B
    [0x0FFC, 0x17FA, 0x3805, 0x3003, 0x3003, 0x3003, 0x3003, 0x3805, 0x1C0E, 0x0C0C], // C
    [0x3FFF, 0x3FFF, 0x3807, 0x3003, 0x3003, 0x3003, 0x3003, 0x3805, 0x17FA, 0x0FFC], // D
    [0x3FFF, 0x3FFF, 0x39E7, 0x30C3, 0x30C3, 0x30C3, 0x30C3, 0x30C3, 0x3003, 0x3003], // E
    [0x3FFF, 0x1FFF, 0x01E7, 0x00C3, 0x00C3, 0x00C3, 0x00C3, 0x00C3, 0x0003, 0x0003], // F
    [0x0FFC, 0x17FA, 0x3805, 0x3003, 0x3003, 0x3003, 0x3303, 0x3307, 0x3F07, 0x3F0F], // G
    [0x3FFF, 0x1FFF, 0x01E0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x01E0, 0x1FFF, 0x3FFF], // H
    [0x0000, 0x0000, 0x3001, 0x3807, 0x3FFF, 0x3FFF, 0x3807, 0x3001, 0x0000, 0x0000], // I
    [0x0C00, 0x1C00, 0x3800, 0x3000, 0x3001, 0x3807, 0x1FFF, 0x0FFF, 0x0007, 0x0003], // J
    [0x3FFF, 0x1FFF, 0x00C0, 0x00C0, 0x0330, 0x0738, 0x0E1C, 0x1C0E, 0x3805, 0x3003], // K
    [0x3FFF, 0x3FFF, 0x3800, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000], // L
    [0x3FFF, 0x1FFF, 0x000E, 0x000C, 0x03F0, 0x03F0, 0x000C, 0x000E, 0x1FFF, 0x3FFF], // M
    [0x3FFF, 0x1FFF, 0x0038, 0x0030, 0x00E0, 0x01C0, 0x0300, 0x0700, 0x1FFF, 0x3FFF], // N
    [0x0FFC, 0x17FA, 0x3805, 0x3003, 0x3003, 0x3003, 0x3003, 0x3805, 0x17FA, 0x0FFC], // O
    [0x3FFF, 0x1FFF, 0x01E7, 0x00C3, 0x00C3, 0x00C3, 0x00C3, 0x00E5, 0x005A, 0x003C], // P
    [0x0FFC, 0x17FA, 0x3805, 0x3003, 0x3303, 0x3303, 0x0C03, 0x0C05, 0x31FA, 0x33FC], // Q
    [0x3FFF, 0x1FFF, 0x00E7, 0x00C3, 0x03C3, 0x07C3, 0x0CC3, 0x1CE5, 0x385A, 0x303C], // R
    [0x0C3C, 0x1C5A, 0x38E5, 0x30C3, 0x30C3, 0x30C3, 0x30C3, 0x39C5, 0x168E, 0x0F0C], // S
    [0x000F, 0x0007, 0x0003, 0x0003, 0x3FFF, 0x3FFF, 0x0003, 0x0003, 0x0007, 0x000F], // T
    [0x0FFF, 0x17FF, 0x3800, 0x3000, 0x3000, 0x3000, 0x3000, 0x3800, 0x17FF, 0x0FFF], // U
    [0x03FF, 0x05FF, 0x0E00, 0x1C00, 0x3000, 0x3000, 0x1C00, 0x0E00, 0x05FF, 0x03FF], // V
    [0x0FFF, 0x17FF, 0x3000, 0x3000, 0x0FC0, 0x0FC0, 0x3000, 0x3000, 0x17FF, 0x0FFF], // W
    [0x3C0F, 0x1A17, 0x0738, 0x0330, 0x00C0, 0x00C0, 0x0330, 0x0738, 0x1A17, 0x3C0F], // X
    [0x000F, 0x0017, 0x0038, 0x0070, 0x3FC0, 0x3FC0, 0x0070, 0x0038, 0x0017, 0x000F], // Y
    [0x3C03, 0x3A03, 0x3383, 0x33C3, 0x31C3, 0x30E3, 0x30F3, 0x3073, 0x3017, 0x300F], // Z
    [0x0000, 0x0000, 0x1FFF, 0x3FFF, 0x3807, 0x3003, 0x3003, 0x3003, 0x3003, 0x3003], // [
    [0x000C, 0x001C, 0x0038, 0x0070, 0x00E0, 0x01C0, 0x0380, 0x0700, 0x0E00, 0x0C00], // \
    [0x0000, 0x0000, 0x3001, 0x3003, 0x3003, 0x3003, 0x3003, 0x3807, 0x3FFF, 0x3FFF], // ]
    [0x0030, 0x0038, 0x001C, 0x000E, 0x0003, 0x0003, 0x000E, 0x001C, 0x0038, 0x0030], // ^
    [0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000], // _
    [0x0000, 0x0000, 0x0007, 0x001F, 0x003F, 0x007F, 0x00E0, 0x00C0, 0x0000, 0x0000], // `
    [0x0C00, 0x1E00, 0x3330, 0x3330, 0x3330, 0x3330, 0x3FE0, 0x3FC0, 0x3800, 0x3000], // a
    [0x3FFF, 0x1FFF, 0x0CC0, 0x0CC0, 0x3870, 0x3030, 0x3030, 0x3870, 0x17A0, 0x0FC0], // b
    [0x0FC0, 0x17A0, 0x3870, 0x3030, 0x3030, 0x3030, 0x3030, 0x3870, 0x1CE0, 0x0CC0], // c
    [0x0FC0, 0x17A0, 0x3870, 0x3030, 0x3030, 0x3870, 0x0CC0, 0x0CC0, 0x1FFF, 0x3FFF], // d
    [0x0FC0, 0x17A0, 0x3330, 0x3330, 0x3330, 0x3330, 0x3330, 0x3330, 0x03A0, 0x03C0], // e
    [0x0000, 0x0000, 0x00C0, 0x01E0, 0x3FFC, 0x3FFE, 0x01E3, 0x00C3, 0x000E, 0x000C], // f
    [0x03C0, 0x05A0, 0x8E70, 0xCC30, 0xCC30, 0xCE70, 0xC1F0, 0xA3E0, 0x5FE0, 0x3FC0], // g
    [0x3FFF, 0x1FFF, 0x01C0, 0x00C0, 0x0070, 0x0030, 0x0030, 0x0070, 0x1FA0, 0x3FC0], // h
    [0x0000, 0x0000, 0x3030, 0x3870, 0x3FF3, 0x3FE3, 0x3800, 0x3000, 0x0000, 0x0000], // i
    [0x0C00, 0x1C00, 0x3800, 0x3000, 0x3000, 0x3800, 0x1FF3, 0x0FF3, 0x0000, 0x0000], // j
    [0x3FFF, 0x1FFF, 0x0300, 0x0300, 0x0CC0, 0x1CE0, 0x3870, 0x3030, 0x0000, 0x0000], // k
    [0x0000, 0x0000, 0x3001, 0x3807, 0x3FFF, 0x3FFF, 0x3800, 0x3000, 0x0000, 0x0000], // l
    [0x3FF0, 0x1FF0, 0x0030, 0x0030, 0x3FC0, 0x3FC0, 0x0030, 0x0030, 0x1FA0, 0x3FC0], // m
    [0x3FF0, 0x1FE0, 0x01C0, 0x00C0, 0x0070, 0x0030, 0x0030, 0x0070, 0x1FA0, 0x3FC0], // n
    [0x0FC0, 0x17A0, 0x3870, 0x3030, 0x3030, 0x3030, 0x3030, 0x3870, 0x17A0, 0x0FC0], // o
    [0xFFF0, 0xFFE0, 0x03C0, 0x0180, 0x0E70, 0x0C30, 0x0C30, 0x0E70, 0x05A0, 0x03C0], // p
    [0x03C0, 0x05A0, 0x0E70, 0x0C30, 0x0C30, 0x0E70, 0x0180, 0x03C0, 0xFFE0, 0xFFF0], // q
    [0x3FF0, 0x1FE0, 0x01C0, 0x00C0, 0x0070, 0x0030, 0x0030, 0x0070, 0x00E0, 0x00C0], // r
    [0x30C0, 0x31E0, 0x3330, 0x3330, 0x3330, 0x3330, 0x3330, 0x3330, 0x1E30, 0x0C30], // s
    [0x0030, 0x0030, 0x0030, 0x0078, 0x0FFF, 0x1FFF, 0x3078, 0x3030, 0x1C30, 0x0C30], // t
    [0x0FF0, 0x17E0, 0x3800, 0x3000, 0x3000, 0x3800, 0x0C00, 0x0E00, 0x1FE0, 0x3FF0], // u
    [0x03F0, 0x05E0, 0x0E00, 0x1C00, 0x3000, 0x3000, 0x1C00, 0x0E00, 0x05E0, 0x03F0], // v
    [0x0FF0, 0x17E0, 0x3000, 0x3000, 0x0F00, 0x0F00, 0x3000, 0x3000, 0x17E0, 0x0FF0], // w
    [0x3030, 0x3870, 0x1CE0, 0x0CC0, 0x0300, 0x0300, 0x0CC0, 0x1CE0, 0x3870, 0x3030], // x
    [0x30F0, 0x7160, 0xA380, 0xC300, 0xC300, 0xC300, 0xC300, 0xA780, 0x5FE0, 0x3FF0], // y
    [0x3030, 0x3830, 0x3C30, 0x3E30, 0x3330, 0x3330, 0x31F0, 0x30F0, 0x3070, 0x3030], // z
    [0x0000, 0x0000, 0x00C0, 0x01E0, 0x0F3C, 0x1F3E, 0x3807, 0x3003, 0x0000, 0x0000], // {
    [0x0000, 0x0000, 0x0000, 0x0000, 0x3F3F, 0x3F3F, 0x0000, 0x0000, 0x0000, 0x0000], // |
    [0x0000, 0x0000, 0x3003, 0x3807, 0x1F3E, 0x0F3C, 0x01E0, 0x00C0, 0x0000, 0x0000], // }
    [0x000C, 0x000E, 0x0003, 0x0003, 0x000E, 0x001C, 0x0030, 0x0030, 0x001C, 0x000C], // ~
    [0x0FF0, 0x0FF8, 0x0E78, 0x0C1E, 0x0C0F, 0x0C0F, 0x0C1E, 0x0E78, 0x0FF8, 0x0FF0], // DEL
];

/// 15x16 font, one 16-bit column per entry, bit 0 = top row
#[rustfmt::skip]
static FONT_15X16: [[u16; 15]; GLYPH_COUNT] = [
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // ' '
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0018, 0x007E, 0x31FF, 0x33FF, 0x33FF, 0x31FF, 0x007E, 0x0018, 0x0000, 0x0000, 0x0000], // !
    [0x0000, 0x0000, 0x0007, 0x000F, 0x000F, 0x0007, 0x0000, 0x0000, 0x0007, 0x000F, 0x000F, 0x0007, 0x0000, 0x0000, 0x0000], // "
    [0x0330, 0x0738, 0x1FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0330, 0x0330, 0x1FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0738, 0x0330, 0x0000], // #
    [0x0C30, 0x0C78, 0x0C78, 0x1CFE, 0x1CCF, 0x3CCF, 0x3CCF, 0x1CCF, 0x1FCE, 0x078C, 0x078C, 0x030C, 0x0000, 0x0000, 0x0000], // $
    [0x303C, 0x383C, 0x383C, 0x1E18, 0x1E00, 0x0780, 0x0780, 0x01E0, 0x01E0, 0x0078, 0x1878, 0x3C1C, 0x3C1C, 0x180C, 0x0000], // %
    [0x0F00, 0x1F80, 0x1F8C, 0x3FCE, 0x38FF, 0x30FF, 0x31F3, 0x33F3, 0x073F, 0x0F1F, 0x1F8E, 0x3FCC, 0x39C0, 0x30C0, 0x0000], // &
    [0x0030, 0x0038, 0x003F, 0x001F, 0x001F, 0x0007, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // '
    [0x0000, 0x0000, 0x01E0, 0x07F8, 0x07F8, 0x1FFE, 0x1E1F, 0x3807, 0x3807, 0x3001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // (
    [0x0000, 0x0000, 0x3001, 0x3807, 0x3807, 0x1E1F, 0x1FFE, 0x07F8, 0x07F8, 0x01E0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // )
    [0x00C0, 0x00C0, 0x0CCC, 0x0CCC, 0x0FFC, 0x07F8, 0x07F8, 0x03F0, 0x03F0, 0x07F8, 0x07F8, 0x0FFC, 0x0CCC, 0x0CCC, 0x00C0], // *
    [0x00C0, 0x00C0, 0x00C0, 0x01E0, 0x07F8, 0x0FFC, 0x0FFC, 0x07F8, 0x01E0, 0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000], // +
    [0x0000, 0x0000, 0x8000, 0xE000, 0xF800, 0xFC00, 0x7C00, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // ,
    [0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000], // -
    [0x0000, 0x0000, 0x0000, 0x0000, 0x1800, 0x3C00, 0x3C00, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // .
    [0x3C00, 0x1E00, 0x1E00, 0x0780, 0x0780, 0x01E0, 0x01E0, 0x0078, 0x0078, 0x001E, 0x001F, 0x0007, 0x0007, 0x0001, 0x0000], // /
    [0x0FFC, 0x1FFE, 0x1FFF, 0x3FFF, 0x3F07, 0x3F03, 0x3383, 0x31E3, 0x30E3, 0x38F3, 0x3FFF, 0x1FFF, 0x1FFE, 0x07F8, 0x0000], // 0
    [0x3000, 0x3000, 0x300C, 0x381E, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3800, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000], // 1
    [0x3C0C, 0x3E0E, 0x3E0F, 0x3F87, 0x3387, 0x31C3, 0x31C3, 0x38E7, 0x38FF, 0x3C7F, 0x3C7E, 0x1818, 0x0000, 0x0000, 0x0000], // 2
    [0x0C0C, 0x1C0E, 0x1C0F, 0x3807, 0x38C7, 0x30C3, 0x30C3, 0x39E7, 0x3FFF, 0x1FFF, 0x1F3E, 0x0618, 0x0000, 0x0000, 0x0000], // 3
    [0x03C0, 0x03E0, 0x03E0, 0x03F8, 0x0338, 0x031E, 0x330F, 0x338F, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3380, 0x3300, 0x0000], // 4
    [0x0C3F, 0x1C3F, 0x1C3F, 0x383F, 0x3833, 0x3033, 0x3033, 0x3873, 0x3FF3, 0x1FE3, 0x1FE3, 0x0781, 0x0000, 0x0000, 0x0000], // 5
    [0x0FF0, 0x1FF8, 0x1FF8, 0x3FFE, 0x39CF, 0x30C7, 0x30C7, 0x39C3, 0x3FC3, 0x1F81, 0x1F80, 0x0600, 0x0000, 0x0000, 0x0000], // 6
    [0x000F, 0x000F, 0x000F, 0x0007, 0x1E07, 0x3F83, 0x3F83, 0x1FE7, 0x01FF, 0x007F, 0x007F, 0x001F, 0x0000, 0x0000, 0x0000], // 7
    [0x0F3C, 0x1F3E, 0x1FFF, 0x3FFF, 0x39E7, 0x30C3, 0x30C3, 0x39E7, 0x3FFF, 0x1FFF, 0x1F3E, 0x0618, 0x0000, 0x0000, 0x0000], // 8
    [0x003C, 0x007E, 0x307F, 0x30FF, 0x30E7, 0x38C3, 0x38C3, 0x1CE7, 0x1FFF, 0x07FF, 0x07FE, 0x01F8, 0x0000, 0x0000, 0x0000], // 9
    [0x0000, 0x0000, 0x0000, 0x0000, 0x1818, 0x3C3C, 0x3C3C, 0x1818, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // :
    [0x0000, 0x0000, 0x8000, 0xE000, 0xF818, 0xFC3C, 0x7C3C, 0x1818, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // ;
    [0x00C0, 0x01E0, 0x01E0, 0x07F8, 0x0738, 0x1E1E, 0x1E1F, 0x3807, 0x3807, 0x3001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // <
    [0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0C30, 0x0000, 0x0000, 0x0000], // =
    [0x0000, 0x0000, 0x3001, 0x3807, 0x3807, 0x1E1F, 0x1E1E, 0x0738, 0x07F8, 0x01E0, 0x01E0, 0x00C0, 0x0000, 0x0000, 0x0000], // >
    [0x000C, 0x000E, 0x000F, 0x0007, 0x3307, 0x3383, 0x3383, 0x31E7, 0x01FF, 0x007F, 0x007E, 0x0018, 0x0000, 0x0000, 0x0000], // ?
    [0x0FFC, 0x1FFE, 0x1FFF, 0x3FFF, 0x3807, 0x3003, 0x31E3, 0x33F3, 0x33F3, 0x33F3, 0x03FF, 0x03FF, 0x03FE, 0x01F8, 0x0000], // @
    [0x3FF0, 0x3FF8, 0x3FF8, 0x1FFE, 0x079F, 0x030F, 0x030F, 0x079F, 0x1FFE, 0x3FF8, 0x3FF8, 0x1FE0, 0x0000, 0x0000, 0x0000], // A
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x39E7, 0x30C3, 0x30C3, 0x39E7, 0x3FFF, 0x1FFF, 0x1F3E, 0x0618, 0x0000], // B
    [0x03F0, 0x07F8, 0x07F8, 0x1FFE, 0x1E1F, 0x3807, 0x3807, 0x3003, 0x3003, 0x3807, 0x3807, 0x1C0F, 0x1C0E, 0x0C0C, 0x0000], // C
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3003, 0x3003, 0x3807, 0x1E1F, 0x1FFE, 0x07F8, 0x07F8, 0x01E0, 0x0000], // D
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x38C7, 0x30C3, 0x33F3, 0x33F3, 0x3003, 0x3807, 0x3C0F, 0x1C0F, 0x0000], // E
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x38C7, 0x30C3, 0x03F3, 0x03F3, 0x0003, 0x0007, 0x000F, 0x000F, 0x0000], // F
    [0x03F0, 0x07F8, 0x07F8, 0x1FFE, 0x1E1F, 0x3807, 0x3807, 0x3003, 0x3303, 0x3307, 0x3F07, 0x3F0F, 0x3F0E, 0x1E0C, 0x0000], // G
    [0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x01E0, 0x00C0, 0x00C0, 0x01E0, 0x1FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0000, 0x0000, 0x0000], // H
    [0x0000, 0x0000, 0x3001, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3807, 0x3001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // I
    [0x0F00, 0x1F00, 0x1F00, 0x3E00, 0x3800, 0x3000, 0x3001, 0x3807, 0x3FFF, 0x1FFF, 0x1FFF, 0x07FF, 0x0007, 0x0001, 0x0000], // J
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x00C0, 0x00C0, 0x01E0, 0x07F8, 0x1F3F, 0x3E1F, 0x3E1F, 0x1807, 0x0000], // K
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3807, 0x3001, 0x3000, 0x3800, 0x3800, 0x3E00, 0x3F00, 0x1F00, 0x0000], // L
    [0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x00FE, 0x00F8, 0x03F0, 0x03F0, 0x00F8, 0x00FE, 0x1FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0000], // M
    [0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x003E, 0x0038, 0x0078, 0x01E0, 0x01C0, 0x07C0, 0x1FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0000], // N
    [0x03F0, 0x07F8, 0x07F8, 0x1FFE, 0x1E1F, 0x3807, 0x3003, 0x3003, 0x3807, 0x1E1F, 0x1FFE, 0x07F8, 0x07F8, 0x01E0, 0x0000], // O
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x39E7, 0x30C3, 0x00C3, 0x00E7, 0x00FF, 0x007F, 0x007E, 0x0018, 0x0000], // P
    [0x03FC, 0x07FE, 0x07FF, 0x0FFF, 0x0C07, 0x1C03, 0x1E03, 0x3F87, 0x3FFF, 0x3FFF, 0x33FE, 0x31F8, 0x0000, 0x0000, 0x0000], // Q
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x00E7, 0x00C3, 0x01C3, 0x07E7, 0x1FFF, 0x3FFF, 0x3E7E, 0x1818, 0x0000], // R
    [0x0C3C, 0x1C7E, 0x1C7F, 0x38FF, 0x38F3, 0x31E3, 0x31E3, 0x3387, 0x3F87, 0x1F0F, 0x1F0E, 0x060C, 0x0000, 0x0000, 0x0000], // S
    [0x000F, 0x0007, 0x3003, 0x3803, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3803, 0x3003, 0x000F, 0x000F, 0x0000, 0x0000, 0x0000], // T
    [0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3800, 0x3000, 0x3000, 0x3800, 0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0000, 0x0000, 0x0000], // U
    [0x03FF, 0x07FF, 0x07FF, 0x1FFF, 0x1E00, 0x3C00, 0x3C00, 0x1E00, 0x1FFF, 0x07FF, 0x07FF, 0x01FF, 0x0000, 0x0000, 0x0000], // V
    [0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x1F00, 0x0700, 0x03C0, 0x03C0, 0x0700, 0x1F00, 0x1FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0000], // W
    [0x300F, 0x381F, 0x381F, 0x1E7F, 0x1FF8, 0x07E0, 0x03C0, 0x03C0, 0x07E0, 0x1FF8, 0x1E7F, 0x381F, 0x381F, 0x3007, 0x0000], // X
    [0x003F, 0x007F, 0x307F, 0x39FF, 0x3FE0, 0x3FC0, 0x3FC0, 0x3FE0, 0x39FF, 0x307F, 0x007F, 0x001F, 0x0000, 0x0000, 0x0000], // Y
    [0x303F, 0x381F, 0x381F, 0x3E07, 0x3E07, 0x3F83, 0x3383, 0x31E3, 0x31E3, 0x3873, 0x387F, 0x3E1F, 0x3F1F, 0x1F07, 0x0000], // Z
    [0x0000, 0x0000, 0x1FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3807, 0x3003, 0x3003, 0x3001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // [
    [0x0003, 0x0007, 0x0007, 0x001F, 0x001E, 0x0078, 0x0078, 0x01E0, 0x01E0, 0x0780, 0x0780, 0x1E00, 0x3E00, 0x3800, 0x0000], // \
    [0x0000, 0x0000, 0x3001, 0x3003, 0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // ]
    [0x00C0, 0x00E0, 0x00E0, 0x0078, 0x0078, 0x001E, 0x000F, 0x000F, 0x001E, 0x0078, 0x0078, 0x00E0, 0x00E0, 0x00C0, 0x0000], // ^
    [0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000], // _
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0007, 0x001F, 0x001F, 0x003F, 0x0038, 0x0030, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // `
    [0x0C00, 0x1E00, 0x1E30, 0x3F30, 0x3330, 0x3330, 0x3330, 0x3330, 0x07F0, 0x0FE0, 0x1FE0, 0x3F80, 0x3800, 0x3000, 0x0000], // a
    [0x3003, 0x3807, 0x3FFF, 0x1FFF, 0x0FFF, 0x07FF, 0x39E0, 0x30C0, 0x30C0, 0x39C0, 0x3FC0, 0x1F80, 0x1F80, 0x0600, 0x0000], // b
    [0x0FC0, 0x1FE0, 0x1FE0, 0x3FF0, 0x3870, 0x3030, 0x3030, 0x3870, 0x3870, 0x1CE0, 0x1CE0, 0x0CC0, 0x0000, 0x0000, 0x0000], // c
    [0x0F00, 0x1F80, 0x1F80, 0x3FC0, 0x39C0, 0x30C0, 0x30C1, 0x39E7, 0x07FF, 0x0FFF, 0x1FFF, 0x3FFF, 0x3800, 0x3000, 0x0000], // d
    [0x0FC0, 0x1FE0, 0x1FE0, 0x3FF0, 0x3330, 0x3330, 0x3330, 0x3330, 0x33F0, 0x33E0, 0x03E0, 0x0180, 0x0000, 0x0000, 0x0000], // e
    [0x30C0, 0x39E0, 0x3FF8, 0x3FFE, 0x3FFF, 0x3FFF, 0x39E3, 0x30C3, 0x0007, 0x000F, 0x000E, 0x000C, 0x0000, 0x0000, 0x0000], // f
    [0xC3C0, 0xC7E0, 0xC7E0, 0xCFF0, 0xCE70, 0xCC30, 0xCC30, 0xCE70, 0xFF80, 0xFFC0, 0x7FE0, 0x1FF0, 0x0070, 0x0030, 0x0000], // g
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x01C0, 0x00C0, 0x0030, 0x0030, 0x1FF0, 0x3FE0, 0x3FE0, 0x1F80, 0x0000], // h
    [0x0000, 0x0000, 0x3030, 0x3870, 0x3FF1, 0x3FF3, 0x3FF3, 0x3FE1, 0x3800, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // i
    [0x3C00, 0x7C00, 0xFC00, 0xF800, 0xE000, 0xC000, 0xC000, 0xE000, 0xFFE1, 0xFFF3, 0x7FF3, 0x1FE1, 0x0000, 0x0000, 0x0000], // j
    [0x3003, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x1FFF, 0x0300, 0x0300, 0x0780, 0x1FE0, 0x1CE0, 0x3870, 0x3870, 0x3030, 0x0000], // k
    [0x0000, 0x0000, 0x3001, 0x3807, 0x3FFF, 0x3FFF, 0x3FFF, 0x3FFF, 0x3800, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // l
    [0x3FF0, 0x3FF0, 0x3FF0, 0x1FE0, 0x03E0, 0x03C0, 0x0FC0, 0x0FE0, 0x03E0, 0x03F0, 0x1FF0, 0x3FE0, 0x3FE0, 0x1F80, 0x0000], // m
    [0x3FF0, 0x3FF0, 0x3FF0, 0x1FF0, 0x0070, 0x0030, 0x0030, 0x0070, 0x1FF0, 0x3FE0, 0x3FE0, 0x1F80, 0x0000, 0x0000, 0x0000], // n
    [0x0FC0, 0x1FE0, 0x1FE0, 0x3FF0, 0x3870, 0x3030, 0x3030, 0x3870, 0x3FF0, 0x1FE0, 0x1FE0, 0x0780, 0x0000, 0x0000, 0x0000], // o
    [0xC030, 0xE070, 0xFFF0, 0xFFE0, 0xFFC0, 0xFF80, 0xCE70, 0x8C30, 0x0C30, 0x0E70, 0x0FF0, 0x07E0, 0x07E0, 0x0180, 0x0000], // p
    [0x03C0, 0x07E0, 0x07E0, 0x0FF0, 0x0E70, 0x0C30, 0x8C30, 0xCE70, 0xFF80, 0xFFC0, 0xFFE0, 0xFFF0, 0xE070, 0x8030, 0x0000], // q
    [0x3030, 0x3870, 0x3FF0, 0x3FE0, 0x3FC0, 0x3FC0, 0x39E0, 0x3070, 0x0030, 0x0030, 0x01F0, 0x03E0, 0x03E0, 0x0180, 0x0000], // r
    [0x30C0, 0x31E0, 0x31E0, 0x33F0, 0x3330, 0x3330, 0x3330, 0x3330, 0x3F30, 0x1E30, 0x1E30, 0x0C30, 0x0000, 0x0000, 0x0000], // s
    [0x0000, 0x0000, 0x0030, 0x0078, 0x07F8, 0x1FFE, 0x1FFF, 0x3FFF, 0x3078, 0x3030, 0x1C30, 0x0C30, 0x0000, 0x0000, 0x0000], // t
    [0x0FF0, 0x1FF0, 0x1FF0, 0x3FE0, 0x3800, 0x3000, 0x3000, 0x3800, 0x07E0, 0x0FF0, 0x1FF0, 0x3FE0, 0x3800, 0x3000, 0x0000], // u
    [0x03F0, 0x07F0, 0x07F0, 0x1FE0, 0x1E00, 0x3C00, 0x3C00, 0x1E00, 0x1FE0, 0x07F0, 0x07F0, 0x01E0, 0x0000, 0x0000, 0x0000], // v
    [0x0FF0, 0x1FF0, 0x1FF0, 0x3FE0, 0x3F00, 0x1F00, 0x0FC0, 0x0FC0, 0x1F00, 0x3F00, 0x3FE0, 0x1FF0, 0x1FF0, 0x07E0, 0x0000], // w
    [0x3030, 0x3870, 0x3870, 0x1CE0, 0x1FE0, 0x0780, 0x0300, 0x0300, 0x0780, 0x1FE0, 0x1CE0, 0x3870, 0x3870, 0x3030, 0x0000], // x
    [0xC3F0, 0xC7F0, 0xC7F0, 0xCFE0, 0xCE00, 0xCC00, 0xCC00, 0xCE00, 0xFFE0, 0xFFF0, 0x7FF0, 0x1FE0, 0x0000, 0x0000, 0x0000], // y
    [0x30F0, 0x3870, 0x3870, 0x3E30, 0x3E30, 0x3F30, 0x33F0, 0x31F0, 0x31F0, 0x3870, 0x3C70, 0x1C30, 0x0000, 0x0000, 0x0000], // z
    [0x00C0, 0x00C0, 0x00C0, 0x01E0, 0x07F8, 0x1FFE, 0x1F3F, 0x3E1F, 0x3807, 0x3003, 0x3003, 0x3001, 0x0000, 0x0000, 0x0000], // {
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E1F, 0x3F3F, 0x3F3F, 0x1E1F, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // |
    [0x3003, 0x3003, 0x3003, 0x3807, 0x3E1F, 0x1F3F, 0x1FFE, 0x07F8, 0x01E0, 0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000], // }
    [0x000C, 0x000E, 0x000F, 0x0007, 0x0003, 0x0003, 0x0007, 0x000F, 0x000C, 0x000C, 0x000F, 0x0007, 0x0007, 0x0001, 0x0000], // ~
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], // DEL
];
