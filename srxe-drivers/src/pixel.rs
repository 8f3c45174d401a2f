//! Pixel packing for the ST7586 display memory
//!
//! In 4-gray mode the controller stores three horizontally adjacent pixels
//! per byte:
//!
//! ```text
//!  bit  7   6   5   4   3   2   1   0
//!     ├───────────┼───────────┼───────┤
//!     │  pixel 0  │  pixel 1  │ pix 2 │
//! ```
//!
//! Pixels 0 and 1 have a 3-bit field, pixel 2 a 2-bit field. A gray level
//! `0..=3` (0 = off, 3 = fully on) is spread over the 3-bit fields so that
//! `0xFF` is three fully-on pixels and `0x00` three off pixels.

/// Horizontal pixels per memory byte
pub const PIXELS_PER_BYTE: u16 = 3;

/// Gray level of a fully-on pixel
pub const BLACK: u8 = 3;

/// Gray level of an off pixel
pub const WHITE: u8 = 0;

/// 3-bit field value for each gray level
const WIDE_FIELD: [u8; 4] = [0b000, 0b010, 0b101, 0b111];

/// Pack three gray levels into one memory byte
pub const fn pack(p0: u8, p1: u8, p2: u8) -> u8 {
    (WIDE_FIELD[(p0 & 3) as usize] << 5) | (WIDE_FIELD[(p1 & 3) as usize] << 2) | (p2 & 3)
}

/// A byte with all three pixels at `level`
pub const fn solid(level: u8) -> u8 {
    pack(level, level, level)
}

/// A byte with only pixel `slot` (0-2) at `level`, the others off
pub const fn single(slot: u16, level: u8) -> u8 {
    match slot {
        0 => pack(level, 0, 0),
        1 => pack(0, level, 0),
        _ => pack(0, 0, level),
    }
}

/// Gray level of pixel `slot` (0-2) in a memory byte
pub const fn level_at(byte: u8, slot: u16) -> u8 {
    match slot {
        0 => (byte >> 5) >> 1,
        1 => ((byte >> 2) & 0b111) >> 1,
        _ => byte & 0b11,
    }
}

/// Byte columns covering pixels `x .. x + cx`
///
/// Returns `(first column, column count)`. The origin rounds down and the
/// extent rounds up, so any pixel in the range is covered.
pub const fn byte_columns(x: u16, cx: u16) -> (u16, u16) {
    let start = x / PIXELS_PER_BYTE;
    let end = (x + cx + PIXELS_PER_BYTE - 1) / PIXELS_PER_BYTE;
    (start, end.saturating_sub(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_bytes() {
        assert_eq!(solid(BLACK), 0xFF);
        assert_eq!(solid(WHITE), 0x00);
    }

    #[test]
    fn test_pack_unpack_levels() {
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    let byte = pack(a, b, c);
                    assert_eq!(level_at(byte, 0), a);
                    assert_eq!(level_at(byte, 1), b);
                    assert_eq!(level_at(byte, 2), c);
                }
            }
        }
    }

    #[test]
    fn test_single_pixel() {
        assert_eq!(single(0, BLACK), 0xE0);
        assert_eq!(single(1, BLACK), 0x1C);
        assert_eq!(single(2, BLACK), 0x03);
    }

    #[test]
    fn test_byte_column_rounding() {
        // Aligned
        assert_eq!(byte_columns(0, 384), (0, 128));
        assert_eq!(byte_columns(3, 9), (1, 3));
        // Origin rounds down, extent rounds up
        assert_eq!(byte_columns(4, 1), (1, 1));
        assert_eq!(byte_columns(5, 2), (1, 2));
        assert_eq!(byte_columns(0, 0), (0, 0));
    }
}
