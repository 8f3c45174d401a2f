//! ST7586 controller model
//!
//! Keeps the full 128 x 160 byte display memory and the registers the
//! drivers program. Commands and their parameters are decoded the way the
//! controller does: a command byte (DC low) selects the register, the
//! following data bytes (DC high) are its parameters, or pixel data after
//! WRITE RAM.

use srxe_drivers::pixel;

/// Byte columns of display memory
pub const RAM_COLUMNS: usize = 128;

/// Lines of display memory
pub const RAM_LINES: usize = 160;

/// Lines shown on the panel
pub const VISIBLE_LINES: usize = 136;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    col_start: usize,
    col_end: usize,
    row_start: usize,
    row_end: usize,
}

impl Window {
    const FULL: Self = Self {
        col_start: 0,
        col_end: RAM_COLUMNS - 1,
        row_start: 0,
        row_end: RAM_LINES - 1,
    };
}

/// Behavioural model of the LCD controller
#[derive(Debug, Clone)]
pub struct LcdModel {
    ram: Vec<u8>,
    window: Window,
    col: usize,
    row: usize,
    command: Option<u8>,
    params: Vec<u8>,
    scroll_area: (u8, u8, u8),
    scroll_start: u8,
    vop: u16,
    display_on: bool,
    sleeping: bool,
    gray: bool,
    /// Count of bytes the controller could not make sense of
    pub errors: usize,
}

impl Default for LcdModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LcdModel {
    pub fn new() -> Self {
        Self {
            ram: vec![0; RAM_COLUMNS * RAM_LINES],
            window: Window::FULL,
            col: 0,
            row: 0,
            command: None,
            params: Vec::new(),
            scroll_area: (0, RAM_LINES as u8, 0),
            scroll_start: 0,
            vop: 0,
            display_on: false,
            sleeping: true,
            gray: false,
            errors: 0,
        }
    }

    /// Hardware reset: registers return to power-on values, memory is kept
    pub fn reset(&mut self) {
        let ram = std::mem::take(&mut self.ram);
        let errors = self.errors;
        *self = Self::new();
        self.ram = ram;
        self.errors = errors;
    }

    /// Byte received with DC low
    pub fn command(&mut self, byte: u8) {
        self.command = Some(byte);
        self.params.clear();
        match byte {
            0x01 => self.reset(),
            0x10 => self.sleeping = true,
            0x11 => self.sleeping = false,
            0x28 => self.display_on = false,
            0x29 => self.display_on = true,
            0x38 => self.gray = true,
            0x39 => self.gray = false,
            0x2C => {
                self.col = self.window.col_start;
                self.row = self.window.row_start;
            }
            0xC1 => self.vop = (self.vop + 1).min(0x1FF),
            0xC2 => self.vop = self.vop.saturating_sub(1),
            _ if param_count(byte).is_some() => {}
            _ => self.errors += 1,
        }
    }

    /// Byte received with DC high
    pub fn data(&mut self, byte: u8) {
        match self.command {
            Some(0x2C) => self.write_ram(byte),
            Some(cmd) => match param_count(cmd) {
                Some(n) if self.params.len() < n => {
                    self.params.push(byte);
                    if self.params.len() == n {
                        self.apply(cmd);
                    }
                }
                _ => self.errors += 1,
            },
            None => self.errors += 1,
        }
    }

    fn apply(&mut self, cmd: u8) {
        let p = &self.params;
        match cmd {
            0x2A => {
                let start = u16::from_be_bytes([p[0], p[1]]) as usize;
                let end = u16::from_be_bytes([p[2], p[3]]) as usize;
                if start > end || end >= RAM_COLUMNS {
                    self.errors += 1;
                    return;
                }
                self.window.col_start = start;
                self.window.col_end = end;
            }
            0x2B => {
                let start = u16::from_be_bytes([p[0], p[1]]) as usize;
                let end = u16::from_be_bytes([p[2], p[3]]) as usize;
                if start > end || end >= RAM_LINES {
                    self.errors += 1;
                    return;
                }
                self.window.row_start = start;
                self.window.row_end = end;
            }
            0x33 => self.scroll_area = (p[0], p[1], p[2]),
            0x37 => self.scroll_start = p[0],
            0xC0 => self.vop = u16::from_le_bytes([p[0], p[1] & 0x01]),
            _ => {}
        }
    }

    fn write_ram(&mut self, byte: u8) {
        self.ram[self.row * RAM_COLUMNS + self.col] = byte;
        self.col += 1;
        if self.col > self.window.col_end {
            self.col = self.window.col_start;
            self.row += 1;
            if self.row > self.window.row_end {
                self.row = self.window.row_start;
            }
        }
    }

    /// Memory byte at (`col`, `line`)
    pub fn byte(&self, col: usize, line: usize) -> u8 {
        self.ram[line * RAM_COLUMNS + col]
    }

    /// Gray level of pixel (`x`, `y`) in display memory
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        pixel::level_at(self.byte(x / 3, y), (x % 3) as u16)
    }

    /// Visible lines of memory, row-major
    pub fn frame(&self) -> &[u8] {
        &self.ram[..RAM_COLUMNS * VISIBLE_LINES]
    }

    pub fn display_on(&self) -> bool {
        self.display_on && !self.sleeping
    }

    pub fn sleeping(&self) -> bool {
        self.sleeping
    }

    pub fn gray_mode(&self) -> bool {
        self.gray
    }

    pub fn vop(&self) -> u16 {
        self.vop
    }

    pub fn scroll_area(&self) -> (u8, u8, u8) {
        self.scroll_area
    }

    pub fn scroll_start(&self) -> u8 {
        self.scroll_start
    }
}

/// Parameter bytes taken by a command, `None` for unknown commands
fn param_count(cmd: u8) -> Option<usize> {
    match cmd {
        0x2A | 0x2B => Some(4),
        0x33 => Some(3),
        0xC0 => Some(2),
        0x37 | 0x3A | 0x36 | 0xB0 | 0xB1 | 0xB5 | 0xC3 | 0xC4 | 0xD0 => Some(1),
        0x01 | 0x10 | 0x11 | 0x20 | 0x21 | 0x28 | 0x29 | 0x2C | 0x38 | 0x39 | 0xC1 | 0xC2 => {
            Some(0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(lcd: &mut LcdModel, cmd: u8, params: &[u8]) {
        lcd.command(cmd);
        for &p in params {
            lcd.data(p);
        }
    }

    #[test]
    fn test_window_wraps_to_first_line() {
        let mut lcd = LcdModel::new();
        send(&mut lcd, 0x2A, &[0, 2, 0, 3]);
        send(&mut lcd, 0x2B, &[0, 10, 0, 11]);
        send(&mut lcd, 0x2C, &[1, 2, 3, 4, 5]);

        assert_eq!(lcd.byte(2, 10), 5);
        assert_eq!(lcd.byte(3, 10), 2);
        assert_eq!(lcd.byte(2, 11), 3);
        assert_eq!(lcd.byte(3, 11), 4);
        assert_eq!(lcd.errors, 0);
    }

    #[test]
    fn test_registers() {
        let mut lcd = LcdModel::new();
        send(&mut lcd, 0xC0, &[0x45, 0x01]);
        assert_eq!(lcd.vop(), 0x145);
        send(&mut lcd, 0xC1, &[]);
        assert_eq!(lcd.vop(), 0x146);
        send(&mut lcd, 0x33, &[8, 144, 8]);
        send(&mut lcd, 0x37, &[20]);
        assert_eq!(lcd.scroll_area(), (8, 144, 8));
        assert_eq!(lcd.scroll_start(), 20);

        send(&mut lcd, 0x11, &[]);
        send(&mut lcd, 0x29, &[]);
        assert!(lcd.display_on());
    }

    #[test]
    fn test_unknown_bytes_count_as_errors() {
        let mut lcd = LcdModel::new();
        lcd.data(0x00);
        lcd.command(0x77);
        send(&mut lcd, 0xB0, &[0x9F, 0x00]);
        assert_eq!(lcd.errors, 3);
    }

    #[test]
    fn test_pixel_levels() {
        let mut lcd = LcdModel::new();
        send(&mut lcd, 0x2C, &[0xE3]);
        assert_eq!(lcd.pixel(0, 0), 3);
        assert_eq!(lcd.pixel(1, 0), 0);
        assert_eq!(lcd.pixel(2, 0), 3);
    }
}
