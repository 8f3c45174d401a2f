//! Simulated SRXE board
//!
//! Routes the pin and bus traffic of the drivers to the peripheral models
//! the way the board wiring does: chip selects frame SPI traffic for the
//! LCD and the flash, the LCD's DC line splits commands from data, and the
//! key matrix pulls row pins low through pressed keys.

use core::convert::Infallible;

use srxe_drivers::display::DisplayPins;
use srxe_drivers::flash::FLASH_CS;
use srxe_drivers::keyboard::{KeyboardPins, COLS, ROWS};
use srxe_hal::{Gpio, PinId, PinMode, SpiBus};

use crate::lcd::LcdModel;
use crate::nor::NorModel;

/// Key matrix state
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    pressed: Vec<(usize, usize)>,
    power: bool,
}

impl Keypad {
    pub fn press(&mut self, row: usize, col: usize) {
        assert!(row < ROWS && col < COLS, "no key at row {row}, column {col}");
        if !self.is_pressed(row, col) {
            self.pressed.push((row, col));
        }
    }

    pub fn release(&mut self, row: usize, col: usize) {
        self.pressed.retain(|&k| k != (row, col));
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.power = false;
    }

    pub fn is_pressed(&self, row: usize, col: usize) -> bool {
        self.pressed.contains(&(row, col))
    }

    pub fn set_power(&mut self, down: bool) {
        self.power = down;
    }
}

/// Board model implementing the pin and bus traits
pub struct Board {
    levels: [bool; 256],
    modes: [PinMode; 256],
    display_pins: DisplayPins,
    keyboard_pins: KeyboardPins,
    flash_cs: PinId,
    pub lcd: LcdModel,
    pub nor: NorModel,
    pub keypad: Keypad,
    /// Bytes clocked with both chip selects active
    pub contention: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// SRXE wiring with a 128 KiB flash chip
    pub fn new() -> Self {
        Self::with_wiring(DisplayPins::SRXE, KeyboardPins::SRXE, FLASH_CS, 128 * 1024)
    }

    pub fn with_wiring(
        display_pins: DisplayPins,
        keyboard_pins: KeyboardPins,
        flash_cs: PinId,
        flash_capacity: usize,
    ) -> Self {
        Self {
            levels: [true; 256],
            modes: [PinMode::Input; 256],
            display_pins,
            keyboard_pins,
            flash_cs,
            lcd: LcdModel::new(),
            nor: NorModel::new(flash_capacity),
            keypad: Keypad::default(),
            contention: 0,
        }
    }

    pub fn level(&self, pin: PinId) -> bool {
        self.levels[pin.encoded() as usize]
    }

    pub fn mode(&self, pin: PinId) -> PinMode {
        self.modes[pin.encoded() as usize]
    }

    fn driven_low(&self, pin: PinId) -> bool {
        self.mode(pin) == PinMode::Output && !self.level(pin)
    }

    fn lcd_selected(&self) -> bool {
        !self.level(self.display_pins.cs)
    }

    fn flash_selected(&self) -> bool {
        !self.level(self.flash_cs)
    }

    fn clock_out(&mut self, byte: u8) {
        let lcd = self.lcd_selected();
        let flash = self.flash_selected();
        if lcd && flash {
            self.contention += 1;
        }
        if lcd {
            if self.level(self.display_pins.dc) {
                self.lcd.data(byte);
            } else {
                self.lcd.command(byte);
            }
        }
        if flash {
            self.nor.write_byte(byte);
        }
    }

    fn clock_in(&mut self) -> u8 {
        if self.flash_selected() {
            self.nor.read_byte()
        } else {
            0xFF
        }
    }
}

impl Gpio for Board {
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.modes[pin.encoded() as usize] = mode;
    }

    fn write_pin(&mut self, pin: PinId, high: bool) {
        let was = std::mem::replace(&mut self.levels[pin.encoded() as usize], high);
        if was == high {
            return;
        }
        if pin == self.flash_cs {
            if high {
                self.nor.deselect();
            } else {
                self.nor.select();
            }
        }
        if pin == self.display_pins.reset && !high {
            self.lcd.reset();
        }
    }

    fn read_pin(&mut self, pin: PinId) -> bool {
        if pin == self.keyboard_pins.power {
            return !self.keypad.power;
        }
        if let Some(row) = self.keyboard_pins.rows.iter().position(|&r| r == pin) {
            let pulled = self.keypad.pressed.iter().any(|&(r, c)| {
                r == row && self.driven_low(self.keyboard_pins.cols[c])
            });
            return !pulled;
        }
        self.level(pin)
    }
}

impl SpiBus for Board {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.clock_out(byte);
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        for byte in buf.iter_mut() {
            *byte = self.clock_in();
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        for byte in data.iter_mut() {
            let miso = self.clock_in();
            self.clock_out(*byte);
            *byte = miso;
        }
        Ok(())
    }
}
