//! SPI NOR flash driver
//!
//! Raw access to the serial flash on the SRXE board: sector erase, page
//! program and continuous read. There is no filesystem and no wear
//! leveling; callers manage their own layout.
//!
//! Every erase or program first waits out any operation still running
//! (the chip drops commands while busy and keeps WEL set until it is done),
//! then issues WRITE ENABLE and checks the status register's WEL bit. A
//! chip that ignores WRITE ENABLE (write protect, missing chip) is reported
//! as [`FlashError::NotAcknowledged`] instead of silently doing nothing.
//!
//! Busy waits are bounded: the status register is polled every
//! [`FlashConfig::poll_interval_us`] at most a configured number of times.

mod nor;

use embedded_hal::delay::DelayNs;
use srxe_hal::{Gpio, PinId, PinMode, SpiBus};

/// Program unit in bytes
pub const PAGE_SIZE: usize = 256;

/// Erase unit in bytes
pub const SECTOR_SIZE: usize = 4096;

/// Chip select of the onboard flash
pub const FLASH_CS: PinId = PinId::from_encoded_const(0xD3);

/// SPI NOR commands
mod cmd {
    pub const PAGE_PROGRAM: u8 = 0x02;
    pub const READ: u8 = 0x03;
    pub const WRITE_DISABLE: u8 = 0x04;
    pub const READ_STATUS: u8 = 0x05;
    pub const WRITE_ENABLE: u8 = 0x06;
    pub const SECTOR_ERASE: u8 = 0x20;
    pub const JEDEC_ID: u8 = 0x9F;
}

/// Errors from the flash driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// SPI transfer failed
    Bus,
    /// Write enable latch did not set
    NotAcknowledged,
    /// Chip still busy after the poll limit
    Timeout,
    /// Address not aligned to the operation's unit
    Misaligned,
    /// Range extends past the end of the chip
    OutOfBounds,
}

/// Flash driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashConfig {
    /// Chip size in bytes
    pub capacity: u32,
    /// Delay between status polls (microseconds)
    pub poll_interval_us: u32,
    /// Status polls allowed for a sector erase
    pub erase_poll_limit: u32,
    /// Status polls allowed for a page program
    pub program_poll_limit: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            capacity: 128 * 1024,
            poll_interval_us: 100,
            erase_poll_limit: 1000, // 100 ms, worst case erase is ~60 ms
            program_poll_limit: 100, // 10 ms
        }
    }
}

/// Status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u8);

impl Status {
    const BUSY: u8 = 1 << 0;
    const WEL: u8 = 1 << 1;

    /// Erase or program in progress
    pub fn busy(self) -> bool {
        self.0 & Self::BUSY != 0
    }

    /// Write enable latch set
    pub fn write_enabled(self) -> bool {
        self.0 & Self::WEL != 0
    }
}

/// JEDEC identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JedecId {
    pub manufacturer: u8,
    pub memory_type: u8,
    pub capacity: u8,
}

/// SPI NOR flash driver
pub struct Flash<BUS, IO, D> {
    bus: BUS,
    io: IO,
    cs: PinId,
    delay: D,
    config: FlashConfig,
}

impl<BUS, IO, D> Flash<BUS, IO, D>
where
    BUS: SpiBus,
    IO: Gpio,
    D: DelayNs,
{
    pub fn new(bus: BUS, mut io: IO, cs: PinId, delay: D, config: FlashConfig) -> Self {
        io.set_pin_mode(cs, PinMode::Output);
        io.set_high(cs);
        Self {
            bus,
            io,
            cs,
            delay,
            config,
        }
    }

    pub fn release(self) -> (BUS, IO, D) {
        (self.bus, self.io, self.delay)
    }

    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// Chip size in bytes
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    /// Run one chip-select framed transaction
    fn with_selected<T, F>(&mut self, f: F) -> Result<T, FlashError>
    where
        F: FnOnce(&mut BUS) -> Result<T, BUS::Error>,
    {
        self.io.set_low(self.cs);
        let result = f(&mut self.bus);
        self.io.set_high(self.cs);
        result.map_err(|_| FlashError::Bus)
    }

    fn command(&mut self, command: u8) -> Result<(), FlashError> {
        self.with_selected(|bus| bus.write(&[command]))
    }

    pub fn read_status(&mut self) -> Result<Status, FlashError> {
        let mut status = [0u8];
        self.with_selected(|bus| {
            bus.write(&[cmd::READ_STATUS])?;
            bus.read(&mut status)
        })?;
        Ok(Status(status[0]))
    }

    /// Whether an erase or program is still running
    pub fn is_busy(&mut self) -> Result<bool, FlashError> {
        Ok(self.read_status()?.busy())
    }

    /// Poll until the chip is idle, at most `limit` times
    pub fn wait_ready(&mut self, limit: u32) -> Result<(), FlashError> {
        for _ in 0..limit.max(1) {
            if !self.is_busy()? {
                return Ok(());
            }
            self.delay.delay_us(self.config.poll_interval_us);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("flash busy after {} polls", limit);

        Err(FlashError::Timeout)
    }

    /// Wait for the chip to go idle, then set the write enable latch and
    /// confirm it took
    fn write_enable(&mut self) -> Result<(), FlashError> {
        // Covers an erase left running by `erase_sector(_, false)`
        self.wait_ready(self.config.erase_poll_limit)?;
        self.command(cmd::WRITE_ENABLE)?;
        if self.read_status()?.write_enabled() {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("flash ignored write enable");
            Err(FlashError::NotAcknowledged)
        }
    }

    /// Clear the write enable latch
    pub fn write_disable(&mut self) -> Result<(), FlashError> {
        self.command(cmd::WRITE_DISABLE)
    }

    fn check_range(&self, addr: u32, len: usize) -> Result<(), FlashError> {
        let end = addr as u64 + len as u64;
        if end > self.config.capacity as u64 {
            return Err(FlashError::OutOfBounds);
        }
        Ok(())
    }

    /// Erase the 4 KiB sector containing `addr`
    ///
    /// With `wait` the call returns once the erase has finished. Without it
    /// the call returns right after the command; the next erase or program
    /// waits for it, and [`Self::is_busy`] or [`Self::wait_ready`] tell
    /// other callers when it is done.
    pub fn erase_sector(&mut self, addr: u32, wait: bool) -> Result<(), FlashError> {
        let sector = addr & !(SECTOR_SIZE as u32 - 1);
        self.check_range(sector, SECTOR_SIZE)?;

        self.write_enable()?;
        let header = address_command(cmd::SECTOR_ERASE, sector);
        self.with_selected(|bus| bus.write(&header))?;

        if wait {
            self.wait_ready(self.config.erase_poll_limit)?;
        }
        Ok(())
    }

    /// Program one 256-byte page at `addr`
    ///
    /// Programming only clears bits; the page should be erased first. The
    /// call always waits for the program to finish.
    pub fn write_page(&mut self, addr: u32, data: &[u8; PAGE_SIZE]) -> Result<(), FlashError> {
        if addr as usize % PAGE_SIZE != 0 {
            return Err(FlashError::Misaligned);
        }
        self.check_range(addr, PAGE_SIZE)?;

        self.write_enable()?;
        let header = address_command(cmd::PAGE_PROGRAM, addr);
        self.with_selected(|bus| {
            bus.write(&header)?;
            bus.write(data)
        })?;

        self.wait_ready(self.config.program_poll_limit)
    }

    /// Read `buf.len()` bytes starting at `addr`
    ///
    /// No alignment requirement; returns the number of bytes read.
    pub fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<usize, FlashError> {
        self.check_range(addr, buf.len())?;
        if buf.is_empty() {
            return Ok(0);
        }

        let len = buf.len();
        let header = address_command(cmd::READ, addr);
        self.with_selected(|bus| {
            bus.write(&header)?;
            bus.read(buf)
        })?;
        Ok(len)
    }

    /// Read the manufacturer and device id
    pub fn read_jedec_id(&mut self) -> Result<JedecId, FlashError> {
        let mut id = [0u8; 3];
        self.with_selected(|bus| {
            bus.write(&[cmd::JEDEC_ID])?;
            bus.read(&mut id)
        })?;

        let id = JedecId {
            manufacturer: id[0],
            memory_type: id[1],
            capacity: id[2],
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("flash id {}", id);
        Ok(id)
    }
}

/// Command byte followed by a 24-bit big-endian address
fn address_command(command: u8, addr: u32) -> [u8; 4] {
    let [_, a2, a1, a0] = addr.to_be_bytes();
    [command, a2, a1, a0]
}
