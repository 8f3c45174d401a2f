//! Hardware drivers for the SMART Response XE
//!
//! This crate provides the three device-protocol drivers of the terminal,
//! written against the traits in `srxe-hal`:
//!
//! - [`display`] - ST7586 LCD: address window, block writes, RLE bitmaps,
//!   fixed-size text, lines/rectangles, scrolling, contrast
//! - [`keyboard`] - 6x10 key matrix scan and shift/sym aware decoding
//! - [`flash`] - SPI NOR sector erase, page program and read
//!
//! The drivers never call each other. Each one owns its state (scroll
//! offset, contrast, key map) so several instances can coexist, e.g. one per
//! simulated board in tests.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod flash;
pub mod font;
pub mod keyboard;
pub mod pixel;
pub mod rle;

#[cfg(test)]
pub(crate) mod mock;

pub use display::{Display, DisplayConfig, DisplayError, DisplayPins, LCD_HEIGHT, LCD_WIDTH};
pub use flash::{Flash, FlashConfig, FlashError, PAGE_SIZE, SECTOR_SIZE};
pub use font::FontSize;
pub use keyboard::{KeyMap, Keyboard, KeyboardPins, COLS, ROWS};
