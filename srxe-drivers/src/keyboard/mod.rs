//! Keyboard matrix driver
//!
//! The keypad is a 6 row x 10 column matrix. Rows are inputs with pull-ups;
//! a column is selected by driving it low, which pulls the rows of its
//! pressed keys low:
//!
//! ```text
//!            col 0   col 1        col 9
//!              │       │            │
//!   row 0 ─────┼──[k]──┼── ... ─────┼───  (pull-up)
//!   row 1 ─────┼──[k]──┼── ... ─────┼───
//!     ...
//!   row 5 ─────┼──[k]──┼── ... ─────┼───
//! ```
//!
//! Unselected columns are left as inputs so they do not load the rows. The
//! power button has its own pin, also active low.

pub mod keymap;

pub use keymap::decode;

use srxe_hal::{Gpio, PinId, PinMode};

/// Matrix rows
pub const ROWS: usize = 6;

/// Matrix columns
pub const COLS: usize = 10;

/// One byte per column, bit `r` set when the key in row `r` is down
pub type KeyMap = [u8; COLS];

/// Pins of the key matrix and power button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardPins {
    pub rows: [PinId; ROWS],
    pub cols: [PinId; COLS],
    pub power: PinId,
}

impl KeyboardPins {
    /// Wiring of the SMART Response XE board
    pub const SRXE: Self = Self {
        rows: [
            PinId::from_encoded_const(0xE4),
            PinId::from_encoded_const(0xE5),
            PinId::from_encoded_const(0xE6),
            PinId::from_encoded_const(0xE7),
            PinId::from_encoded_const(0xD7),
            PinId::from_encoded_const(0xD6),
        ],
        cols: [
            PinId::from_encoded_const(0xF0),
            PinId::from_encoded_const(0xF1),
            PinId::from_encoded_const(0xF2),
            PinId::from_encoded_const(0xF3),
            PinId::from_encoded_const(0xF4),
            PinId::from_encoded_const(0xF5),
            PinId::from_encoded_const(0xF6),
            PinId::from_encoded_const(0xF7),
            PinId::from_encoded_const(0xD5),
            PinId::from_encoded_const(0xD4),
        ],
        power: PinId::from_encoded_const(0xD2),
    };
}

/// Turns a stream of decoded codes into press events
///
/// A code is reported once when it first appears; it is reported again only
/// after a different code (or no key) was seen in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEdge {
    last: u8,
}

impl KeyEdge {
    pub const fn new() -> Self {
        Self {
            last: keymap::K_NONE,
        }
    }

    pub fn update(&mut self, code: u8) -> Option<u8> {
        let previous = core::mem::replace(&mut self.last, code);
        if code != keymap::K_NONE && code != previous {
            Some(code)
        } else {
            None
        }
    }
}

/// Keyboard driver
pub struct Keyboard<IO> {
    io: IO,
    pins: KeyboardPins,
    map: KeyMap,
    edge: KeyEdge,
}

impl<IO: Gpio> Keyboard<IO> {
    /// Configure the matrix and power key pins
    pub fn new(mut io: IO, pins: KeyboardPins) -> Self {
        for &row in &pins.rows {
            io.set_pin_mode(row, PinMode::InputPullUp);
        }
        for &col in &pins.cols {
            io.set_pin_mode(col, PinMode::Input);
        }
        io.set_pin_mode(pins.power, PinMode::InputPullUp);

        Self {
            io,
            pins,
            map: [0; COLS],
            edge: KeyEdge::new(),
        }
    }

    pub fn release(self) -> IO {
        self.io
    }

    /// Sweep the matrix once and refresh the key map
    pub fn scan(&mut self) -> &KeyMap {
        for (col, &col_pin) in self.pins.cols.iter().enumerate() {
            self.io.set_pin_mode(col_pin, PinMode::Output);
            self.io.set_low(col_pin);

            let mut bits = 0u8;
            for (row, &row_pin) in self.pins.rows.iter().enumerate() {
                if !self.io.read_pin(row_pin) {
                    bits |= 1 << row;
                }
            }
            self.map[col] = bits;

            self.io.set_pin_mode(col_pin, PinMode::Input);
        }
        &self.map
    }

    /// Key map from the last scan
    pub fn key_map(&self) -> &KeyMap {
        &self.map
    }

    /// Scan and decode the key currently held, or `K_NONE`
    pub fn get_key(&mut self) -> u8 {
        self.scan();
        decode(&self.map)
    }

    /// Scan and report a key only when it is newly pressed
    pub fn poll(&mut self) -> Option<u8> {
        let code = self.get_key();
        self.edge.update(code)
    }

    /// Whether the power button is held
    pub fn power_key(&mut self) -> bool {
        !self.io.read_pin(self.pins.power)
    }
}
