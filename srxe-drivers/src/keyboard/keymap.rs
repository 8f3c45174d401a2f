//! Key codes, layout tables and key map decoding
//!
//! Physical layout (row x column), as seen by the matrix scan:
//!
//! ```text
//!        0     1     2     3     4     5     6     7     8     9
//! r0     1     2     3     4     5     6     7     8     9     0
//! r1     q     w     e     r     t     y     u     i     o     p
//! r2     a     s     d     f     g     h     j     k     l    BKSP
//! r3   SHIFT   z     x     c     v     b     n     m     ,    ENTER
//! r4    SYM  MENU    .   SPACE   '   LEFT   UP  DOWN RIGHT  DEL
//! r5    F1    F2    F3    F4    F5    F6    F7    F8    F9   F10
//! ```
//!
//! Decoding is a pure function of the key map so it can be tested without
//! hardware.

use super::{KeyMap, COLS, ROWS};

pub const K_NONE: u8 = 0;
pub const K_MENU: u8 = 0x01;
pub const K_LEFT: u8 = 0x02;
pub const K_RIGHT: u8 = 0x03;
pub const K_UP: u8 = 0x04;
pub const K_DOWN: u8 = 0x05;
pub const K_DEL: u8 = 0x08;
pub const K_HOME: u8 = 0x0A;
pub const K_END: u8 = 0x0B;
pub const K_ENTER: u8 = 0x0D;
pub const K_PGUP: u8 = 0x0E;
pub const K_PGDOWN: u8 = 0x0F;
/// Same value as `'2'`; kept for compatibility with existing applications
pub const K_SPACE: u8 = 0x32;
pub const K_BACKSPACE: u8 = 0x7F;
pub const K_F1: u8 = 0xF0;
pub const K_F2: u8 = 0xF1;
pub const K_F3: u8 = 0xF2;
pub const K_F4: u8 = 0xF3;
pub const K_F5: u8 = 0xF4;
pub const K_F6: u8 = 0xF5;
pub const K_F7: u8 = 0xF6;
pub const K_F8: u8 = 0xF7;
pub const K_F9: u8 = 0xF8;
pub const K_F10: u8 = 0xF9;

pub const KEY_MENU: u8 = K_MENU;
pub const KEY_LEFT: u8 = K_LEFT;
pub const KEY_RIGHT: u8 = K_RIGHT;
pub const KEY_UP: u8 = K_UP;
pub const KEY_DOWN: u8 = K_DOWN;

/// Matrix position, `row * COLS + col`
pub type KeyIndex = u8;

pub const fn index(row: usize, col: usize) -> KeyIndex {
    (row * COLS + col) as KeyIndex
}

/// Shift modifier position
pub const SHIFT: KeyIndex = index(3, 0);

/// Sym modifier position
pub const SYM: KeyIndex = index(4, 0);

const KEY_COUNT: usize = ROWS * COLS;

/// Unmodified codes. Modifier positions hold `K_NONE`.
#[rustfmt::skip]
pub static BASE_KEYS: [u8; KEY_COUNT] = [
    b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0',
    b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p',
    b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', K_BACKSPACE,
    K_NONE, b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', K_ENTER,
    K_NONE, K_MENU, b'.', K_SPACE, b'\'', K_LEFT, K_UP, K_DOWN, K_RIGHT, K_DEL,
    K_F1, K_F2, K_F3, K_F4, K_F5, K_F6, K_F7, K_F8, K_F9, K_F10,
];

/// Codes with shift held
#[rustfmt::skip]
pub static SHIFT_KEYS: [u8; KEY_COUNT] = [
    b'!', b'@', b'#', b'$', b'%', b'^', b'&', b'*', b'(', b')',
    b'Q', b'W', b'E', b'R', b'T', b'Y', b'U', b'I', b'O', b'P',
    b'A', b'S', b'D', b'F', b'G', b'H', b'J', b'K', b'L', K_BACKSPACE,
    K_NONE, b'Z', b'X', b'C', b'V', b'B', b'N', b'M', b'<', K_ENTER,
    K_NONE, K_MENU, b'>', K_SPACE, b'"', K_HOME, K_PGUP, K_PGDOWN, K_END, K_DEL,
    K_F1, K_F2, K_F3, K_F4, K_F5, K_F6, K_F7, K_F8, K_F9, K_F10,
];

/// Codes with sym held
#[rustfmt::skip]
pub static SYM_KEYS: [u8; KEY_COUNT] = [
    b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0',
    b'[', b']', b'{', b'}', b'#', b'%', b'^', b'*', b'+', b'=',
    b'-', b'\\', b'|', b'~', b'<', b'>', b'$', b'&', b'"', K_BACKSPACE,
    K_NONE, b'_', b'`', b';', b':', b'?', b'!', b'@', b',', K_ENTER,
    K_NONE, K_MENU, b'.', K_SPACE, b'\'', K_LEFT, K_UP, K_DOWN, K_RIGHT, K_DEL,
    K_F1, K_F2, K_F3, K_F4, K_F5, K_F6, K_F7, K_F8, K_F9, K_F10,
];

/// Positions that bypass the character tables
#[rustfmt::skip]
const DIRECT: [KeyIndex; 19] = [
    index(2, 9), index(3, 9),
    index(4, 1), index(4, 3), index(4, 5), index(4, 6), index(4, 7), index(4, 8), index(4, 9),
    index(5, 0), index(5, 1), index(5, 2), index(5, 3), index(5, 4),
    index(5, 5), index(5, 6), index(5, 7), index(5, 8), index(5, 9),
];

const SCAN_LEN: usize = KEY_COUNT - 2;

const fn build_scan_order() -> [KeyIndex; SCAN_LEN] {
    let mut order = [0; SCAN_LEN];
    let mut n = 0;
    let mut col = 0;
    while col < COLS {
        let mut row = 0;
        while row < ROWS {
            let idx = index(row, col);
            if idx != SHIFT && idx != SYM {
                order[n] = idx;
                n += 1;
            }
            row += 1;
        }
        col += 1;
    }
    order
}

/// Decode priority: column by column, top row first, modifiers skipped
pub static SCAN_ORDER: [KeyIndex; SCAN_LEN] = build_scan_order();

/// Whether the key at `idx` is down in `map`
pub fn is_pressed(map: &KeyMap, idx: KeyIndex) -> bool {
    let (row, col) = (idx as usize / COLS, idx as usize % COLS);
    map[col] & (1 << row) != 0
}

/// Map a key map to a single key code
///
/// The first pressed key in [`SCAN_ORDER`] wins. Direct keys ignore sym;
/// with shift the arrows become Home/PgUp/PgDown/End. Character keys use
/// the sym table when sym is held (even with shift), else the shift table
/// when shift is held, else the base table. Returns [`K_NONE`] when only
/// modifiers, or nothing, are down.
pub fn decode(map: &KeyMap) -> u8 {
    let shift = is_pressed(map, SHIFT);
    let sym = is_pressed(map, SYM);

    let Some(&idx) = SCAN_ORDER.iter().find(|&&idx| is_pressed(map, idx)) else {
        return K_NONE;
    };
    let i = idx as usize;

    if DIRECT.contains(&idx) {
        return if shift { SHIFT_KEYS[i] } else { BASE_KEYS[i] };
    }
    if sym {
        SYM_KEYS[i]
    } else if shift {
        SHIFT_KEYS[i]
    } else {
        BASE_KEYS[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map_with(keys: &[(usize, usize)]) -> KeyMap {
        let mut map = [0u8; COLS];
        for &(row, col) in keys {
            map[col] |= 1 << row;
        }
        map
    }

    #[test]
    fn test_scan_order_skips_modifiers() {
        assert_eq!(SCAN_ORDER.len(), 58);
        assert!(!SCAN_ORDER.contains(&SHIFT));
        assert!(!SCAN_ORDER.contains(&SYM));
        assert_eq!(&SCAN_ORDER[..5], &[0, 10, 20, 50, 1]);
    }

    #[test]
    fn test_base_codes() {
        assert_eq!(decode(&map_with(&[(0, 0)])), b'1');
        assert_eq!(decode(&map_with(&[(1, 9)])), b'p');
        assert_eq!(decode(&map_with(&[(3, 8)])), b',');
        assert_eq!(decode(&map_with(&[(3, 9)])), K_ENTER);
        assert_eq!(decode(&map_with(&[(2, 9)])), K_BACKSPACE);
        assert_eq!(decode(&map_with(&[(4, 3)])), K_SPACE);
        assert_eq!(decode(&map_with(&[(5, 0)])), K_F1);
        assert_eq!(decode(&map_with(&[(5, 9)])), K_F10);
    }

    #[test]
    fn test_shift_codes() {
        assert_eq!(decode(&map_with(&[(3, 0), (2, 0)])), b'A');
        assert_eq!(decode(&map_with(&[(3, 0), (0, 1)])), b'@');
        assert_eq!(decode(&map_with(&[(3, 0), (4, 4)])), b'"');
        assert_eq!(decode(&map_with(&[(3, 0), (4, 2)])), b'>');
    }

    #[test]
    fn test_shifted_arrows_navigate() {
        assert_eq!(decode(&map_with(&[(3, 0), (4, 6)])), K_PGUP);
        assert_eq!(decode(&map_with(&[(3, 0), (4, 7)])), K_PGDOWN);
        assert_eq!(decode(&map_with(&[(3, 0), (4, 5)])), K_HOME);
        assert_eq!(decode(&map_with(&[(3, 0), (4, 8)])), K_END);
        // Plain arrows
        assert_eq!(decode(&map_with(&[(4, 6)])), KEY_UP);
        assert_eq!(decode(&map_with(&[(4, 5)])), KEY_LEFT);
    }

    #[test]
    fn test_sym_codes() {
        assert_eq!(decode(&map_with(&[(4, 0), (1, 0)])), b'[');
        assert_eq!(decode(&map_with(&[(4, 0), (2, 1)])), b'\\');
        assert_eq!(decode(&map_with(&[(4, 0), (3, 3)])), b';');
        // Digits are unchanged
        assert_eq!(decode(&map_with(&[(4, 0), (0, 4)])), b'5');
        // Sym wins over shift
        assert_eq!(decode(&map_with(&[(3, 0), (4, 0), (2, 0)])), b'-');
        // Direct keys ignore sym
        assert_eq!(decode(&map_with(&[(4, 0), (4, 1)])), K_MENU);
    }

    #[test]
    fn test_modifiers_alone() {
        assert_eq!(decode(&map_with(&[])), K_NONE);
        assert_eq!(decode(&map_with(&[(3, 0)])), K_NONE);
        assert_eq!(decode(&map_with(&[(3, 0), (4, 0)])), K_NONE);
    }

    #[test]
    fn test_priority_is_column_major() {
        // 'a' (column 0) beats 'w' (column 1)
        assert_eq!(decode(&map_with(&[(2, 0), (1, 1)])), b'a');
        // Within a column the top row wins
        assert_eq!(decode(&map_with(&[(5, 2), (1, 2)])), b'e');
    }

    proptest! {
        #[test]
        fn prop_decode_deterministic(map in proptest::array::uniform10(0u8..64)) {
            prop_assert_eq!(decode(&map), decode(&map));
        }

        #[test]
        fn prop_unmodified_codes_are_base(map in proptest::array::uniform10(0u8..64)) {
            let mut map = map;
            map[0] &= !((1 << 3) | (1 << 4));
            let code = decode(&map);
            match SCAN_ORDER.iter().find(|&&idx| is_pressed(&map, idx)) {
                Some(&idx) => prop_assert_eq!(code, BASE_KEYS[idx as usize]),
                None => prop_assert_eq!(code, K_NONE),
            }
        }
    }
}
