//! ST7586 LCD driver
//!
//! Driver for the 384x136 4-gray LCD of the SMART Response XE, connected over
//! SPI with separate chip-select, data/command and reset lines.
//!
//! The controller has 128 byte columns x 160 lines of display memory; each
//! byte holds three horizontal pixels (see [`crate::pixel`]). Horizontal
//! coordinates in this API are pixels and are rounded to byte columns when
//! a window is programmed.
//!
//! Display memory is write-only from the driver's point of view: nothing is
//! read back, and the driver keeps no frame buffer.

mod draw;
mod scroll;

pub use scroll::{ScrollRegion, SCAN_LINES};

use embedded_hal::delay::DelayNs;
use srxe_hal::{Gpio, PinId, PinMode, SpiBus};

use crate::pixel;

/// Display width in pixels
pub const LCD_WIDTH: u16 = 384;

/// Display height in pixels
pub const LCD_HEIGHT: u16 = 136;

/// Byte columns across the display
pub const BYTE_COLUMNS: u16 = LCD_WIDTH / pixel::PIXELS_PER_BYTE;

/// Largest single block write (whole visible display)
pub const MAX_BLOCK_LEN: usize = BYTE_COLUMNS as usize * LCD_HEIGHT as usize;

/// Highest Vop register value (9 bits)
pub const VOP_MAX: u16 = 0x1FF;

/// ST7586 commands
mod cmd {
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_IN: u8 = 0x10;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const INVERSION_OFF: u8 = 0x20;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const ROW_ADDR: u8 = 0x2B;
    pub const WRITE_RAM: u8 = 0x2C;
    pub const SCROLL_AREA: u8 = 0x33;
    pub const SCAN_DIRECTION: u8 = 0x36;
    pub const SCROLL_START: u8 = 0x37;
    pub const GRAY_MODE: u8 = 0x38;
    pub const DDRAM_INTERFACE: u8 = 0x3A;
    pub const DUTY: u8 = 0xB0;
    pub const FIRST_COM: u8 = 0xB1;
    pub const N_LINE: u8 = 0xB5;
    pub const SET_VOP: u8 = 0xC0;
    pub const VOP_UP: u8 = 0xC1;
    pub const VOP_DOWN: u8 = 0xC2;
    pub const BIAS: u8 = 0xC3;
    pub const BOOSTER: u8 = 0xC4;
    pub const ANALOG_CONTROL: u8 = 0xD0;
}

/// Errors from the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Bus,
    /// Scroll partition does not cover exactly 160 lines, or has no
    /// scrolling band
    InvalidScrollArea,
    /// RLE stream shorter than its header declares
    MalformedBitmap,
    /// Vop limits inverted or past the 9-bit register
    InvalidConfig,
}

/// Control lines of the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPins {
    /// Chip select (active low)
    pub cs: PinId,
    /// Data (high) / command (low)
    pub dc: PinId,
    /// Reset (active low)
    pub reset: PinId,
}

impl DisplayPins {
    /// Wiring of the SMART Response XE board
    pub const SRXE: Self = Self {
        cs: PinId::from_encoded_const(0xB4),
        dc: PinId::from_encoded_const(0xB5),
        reset: PinId::from_encoded_const(0xB6),
    };
}

/// Display driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Vop written at init (contrast)
    pub vop: u16,
    /// Lowest Vop reachable with `decrease_vop`
    pub vop_min: u16,
    /// Highest Vop reachable with `increase_vop`
    pub vop_max: u16,
    /// Bias ratio register value
    pub bias: u8,
    /// Booster level register value
    pub booster: u8,
    /// Scan direction register value (0xC8 = COM/SEG mirrored for the SRXE panel)
    pub scan_direction: u8,
}

impl DisplayConfig {
    /// Check the Vop limits, returning the start Vop clamped into them
    pub fn start_vop(&self) -> Result<u16, DisplayError> {
        if self.vop_min > self.vop_max || self.vop_max > VOP_MAX {
            return Err(DisplayError::InvalidConfig);
        }
        Ok(self.vop.clamp(self.vop_min, self.vop_max))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            vop: 0x145,
            vop_min: 0,
            vop_max: VOP_MAX,
            bias: 0x00,
            booster: 0x07,
            scan_direction: 0xC8,
        }
    }
}

/// ST7586 driver
///
/// Owns the bus handle, the port bank handle and the device state that the
/// controller cannot report back: scroll partition, scroll offset and Vop.
pub struct Display<BUS, IO> {
    bus: BUS,
    io: IO,
    pins: DisplayPins,
    config: DisplayConfig,
    region: ScrollRegion,
    offset: i16,
    vop: u16,
}

impl<BUS, IO> Display<BUS, IO>
where
    BUS: SpiBus,
    IO: Gpio,
{
    /// Reset and configure the controller
    ///
    /// Must run before any other display call. An error here means the
    /// controller is unusable; the caller must not go on drawing.
    pub fn init<D: DelayNs>(
        bus: BUS,
        mut io: IO,
        pins: DisplayPins,
        config: DisplayConfig,
        delay: &mut D,
    ) -> Result<Self, DisplayError> {
        let vop = config.start_vop()?;

        for pin in [pins.cs, pins.dc, pins.reset] {
            io.set_pin_mode(pin, PinMode::Output);
        }
        io.set_high(pins.cs);
        io.set_high(pins.dc);

        // Hardware reset pulse
        io.set_low(pins.reset);
        delay.delay_ms(1);
        io.set_high(pins.reset);
        delay.delay_ms(120);

        let mut display = Self {
            bus,
            io,
            pins,
            config,
            region: ScrollRegion::FULL,
            offset: 0,
            vop,
        };

        display.command(cmd::SOFT_RESET)?;
        delay.delay_ms(120);
        display.command(cmd::SLEEP_OUT)?;
        delay.delay_ms(120);
        display.command(cmd::DISPLAY_OFF)?;
        delay.delay_ms(50);

        display.command_with(cmd::SET_VOP, &vop_bytes(vop))?;
        display.command_with(cmd::BIAS, &[config.bias])?;
        display.command_with(cmd::BOOSTER, &[config.booster])?;
        display.command_with(cmd::ANALOG_CONTROL, &[0x1D])?;
        display.command_with(cmd::N_LINE, &[0x00])?;
        display.command(cmd::GRAY_MODE)?;
        display.command_with(cmd::DDRAM_INTERFACE, &[0x02])?;
        display.command_with(cmd::SCAN_DIRECTION, &[config.scan_direction])?;
        display.command_with(cmd::DUTY, &[(SCAN_LINES - 1) as u8])?;
        display.command(cmd::INVERSION_OFF)?;
        display.command_with(
            cmd::COLUMN_ADDR,
            &[0, 0, 0, (BYTE_COLUMNS - 1) as u8],
        )?;
        display.command_with(cmd::ROW_ADDR, &[0, 0, 0, (SCAN_LINES - 1) as u8])?;
        display.command_with(cmd::FIRST_COM, &[0x00])?;
        display.command(cmd::DISPLAY_ON)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ST7586 initialized, vop={}", vop);

        Ok(display)
    }

    /// Release the bus and port handles
    pub fn release(self) -> (BUS, IO) {
        (self.bus, self.io)
    }

    /// Run `f` with chip select asserted, releasing it even on error
    fn selected<F>(&mut self, data: bool, f: F) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut BUS) -> Result<(), BUS::Error>,
    {
        self.io.write_pin(self.pins.dc, data);
        self.io.set_low(self.pins.cs);
        let result = f(&mut self.bus);
        self.io.set_high(self.pins.cs);
        result.map_err(|_| DisplayError::Bus)
    }

    fn command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.selected(false, |bus| bus.write(&[command]))
    }

    fn command_with(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.command(command)?;
        self.selected(true, |bus| bus.write(params))
    }

    /// Program the memory window and start a memory write
    ///
    /// `x`/`cx` are pixels and round outward to byte columns; `y`/`cy` are
    /// scan lines. The window must lie inside the display; this is not
    /// checked.
    pub fn set_position(&mut self, x: u16, y: u16, cx: u16, cy: u16) -> Result<(), DisplayError> {
        let (col, cols) = pixel::byte_columns(x, cx);
        let col_end = col + cols.max(1) - 1;
        let row_end = y + cy.max(1) - 1;

        let [col_hi, col_lo] = col.to_be_bytes();
        let [end_hi, end_lo] = col_end.to_be_bytes();
        self.command_with(cmd::COLUMN_ADDR, &[col_hi, col_lo, end_hi, end_lo])?;

        let [row_hi, row_lo] = y.to_be_bytes();
        let [end_hi, end_lo] = row_end.to_be_bytes();
        self.command_with(cmd::ROW_ADDR, &[row_hi, row_lo, end_hi, end_lo])?;

        self.command(cmd::WRITE_RAM)
    }

    /// Stream packed pixel bytes into the current window
    ///
    /// The controller advances through the window in raster order and wraps
    /// back to its first line after the last one. Lengths up to
    /// [`MAX_BLOCK_LEN`] cover the whole display.
    pub fn write_data_block(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }
        self.selected(true, |bus| bus.write(data))
    }

    /// Write `count` copies of `byte` into the current window
    pub(crate) fn write_repeated(&mut self, byte: u8, count: usize) -> Result<(), DisplayError> {
        let chunk = [byte; BYTE_COLUMNS as usize];
        let mut left = count;
        while left > 0 {
            let n = left.min(chunk.len());
            self.write_data_block(&chunk[..n])?;
            left -= n;
        }
        Ok(())
    }

    /// Fill the whole display with a byte pattern
    ///
    /// `0x00` turns every pixel off, `0xFF` every pixel fully on.
    pub fn fill(&mut self, pattern: u8) -> Result<(), DisplayError> {
        self.set_position(0, 0, LCD_WIDTH, LCD_HEIGHT)?;
        self.write_repeated(pattern, MAX_BLOCK_LEN)
    }

    /// Partition the scan lines into top fixed, scrolling and bottom fixed
    /// bands
    ///
    /// Rejects partitions that do not add up to 160 lines or have an empty
    /// scrolling band; the controller is left untouched in that case. The
    /// current offset is re-wrapped into the new band.
    pub fn scroll_area(&mut self, top: u8, scroll: u8, bottom: u8) -> Result<(), DisplayError> {
        let region = match ScrollRegion::new(top, scroll, bottom) {
            Ok(region) => region,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("scroll area {}+{}+{} rejected", top, scroll, bottom);
                return Err(e);
            }
        };

        self.command_with(cmd::SCROLL_AREA, &[top, scroll, bottom])?;
        self.region = region;
        self.offset = region.wrap(self.offset as i32);
        self.write_scroll_start()
    }

    /// Move the scroll offset by `delta` lines and return the new offset
    pub fn scroll(&mut self, delta: i16) -> Result<i16, DisplayError> {
        self.offset = self.region.wrap(self.offset as i32 + delta as i32);
        self.write_scroll_start()?;
        Ok(self.offset)
    }

    /// Return the scroll offset to zero
    pub fn scroll_reset(&mut self) -> Result<(), DisplayError> {
        self.offset = 0;
        self.write_scroll_start()
    }

    fn write_scroll_start(&mut self) -> Result<(), DisplayError> {
        let line = self.region.start_line(self.offset);
        self.command_with(cmd::SCROLL_START, &[line])
    }

    /// Current scroll offset within the scrolling band
    pub fn scroll_offset(&self) -> i16 {
        self.offset
    }

    /// Current scroll partition
    pub fn scroll_region(&self) -> ScrollRegion {
        self.region
    }

    /// Raise the LCD drive voltage one step (more contrast)
    ///
    /// Stops at the configured maximum; no command is sent there.
    pub fn increase_vop(&mut self) -> Result<u16, DisplayError> {
        if self.vop < self.config.vop_max {
            self.command(cmd::VOP_UP)?;
            self.vop += 1;
        }
        Ok(self.vop)
    }

    /// Lower the LCD drive voltage one step (less contrast)
    ///
    /// Stops at the configured minimum; no command is sent there.
    pub fn decrease_vop(&mut self) -> Result<u16, DisplayError> {
        if self.vop > self.config.vop_min {
            self.command(cmd::VOP_DOWN)?;
            self.vop -= 1;
        }
        Ok(self.vop)
    }

    /// Current Vop register value
    pub fn vop(&self) -> u16 {
        self.vop
    }

    /// Wake the panel and turn the display on
    pub fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.command(cmd::SLEEP_OUT)?;
        delay.delay_ms(120);
        self.command(cmd::DISPLAY_ON)
    }

    /// Turn the display off and put the panel to sleep
    ///
    /// Display memory is kept; `power_up` shows it again.
    pub fn power_down(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::DISPLAY_OFF)?;
        self.command(cmd::SLEEP_IN)
    }
}

/// Vop register payload: low 8 bits, then bit 8
fn vop_bytes(vop: u16) -> [u8; 2] {
    [(vop & 0xFF) as u8, ((vop >> 8) & 0x01) as u8]
}
