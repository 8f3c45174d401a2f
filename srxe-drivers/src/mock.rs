//! Mock board for driver unit tests
//!
//! One object plays port bank and SPI bus so tests can see which control
//! lines were active when each byte went out. Drivers get it through
//! `srxe_hal::Shared` handles.

use std::collections::VecDeque;
use std::vec::Vec;

use srxe_hal::{Gpio, PinId, PinMode, SpiBus};

/// A byte on the wire, classified by the DC line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    Command(u8),
    Data(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockBoard {
    levels: [bool; 256],
    modes: [Option<PinMode>; 256],
    /// Chip-select pins watched for traffic (active low)
    chip_selects: Vec<PinId>,
    /// Data/command line, if any
    dc: Option<PinId>,
    /// Bytes sent while a watched chip select was low
    pub sent: Vec<(PinId, Wire)>,
    /// Bytes handed back on reads, 0x00 once empty
    pub replies: VecDeque<u8>,
    /// Pressed keys as (row pin, column pin)
    pub pressed: Vec<(PinId, PinId)>,
    /// Pins that read low regardless of the matrix
    pub grounded: Vec<PinId>,
    /// Fail every bus call
    pub fail: bool,
}

impl MockBoard {
    pub fn new(chip_selects: &[PinId], dc: Option<PinId>) -> Self {
        Self {
            levels: [true; 256],
            modes: [None; 256],
            chip_selects: chip_selects.to_vec(),
            dc,
            sent: Vec::new(),
            replies: VecDeque::new(),
            pressed: Vec::new(),
            grounded: Vec::new(),
            fail: false,
        }
    }

    pub fn level(&self, pin: PinId) -> bool {
        self.levels[pin.encoded() as usize]
    }

    pub fn mode(&self, pin: PinId) -> Option<PinMode> {
        self.modes[pin.encoded() as usize]
    }

    fn selected(&self) -> Option<PinId> {
        self.chip_selects
            .iter()
            .copied()
            .find(|&cs| !self.level(cs))
    }

    fn record(&mut self, byte: u8) {
        if let Some(cs) = self.selected() {
            let data = self.dc.map_or(true, |dc| self.level(dc));
            let wire = if data { Wire::Data(byte) } else { Wire::Command(byte) };
            self.sent.push((cs, wire));
        }
    }

    /// Everything sent, without the chip select
    pub fn wire(&self) -> Vec<Wire> {
        self.sent.iter().map(|&(_, w)| w).collect()
    }

    /// Raw bytes sent
    pub fn bytes(&self) -> Vec<u8> {
        self.sent
            .iter()
            .map(|&(_, w)| match w {
                Wire::Command(b) | Wire::Data(b) => b,
            })
            .collect()
    }

    /// Command bytes only
    pub fn commands(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter_map(|&(_, w)| match w {
                Wire::Command(b) => Some(b),
                Wire::Data(_) => None,
            })
            .collect()
    }

    /// Data bytes that followed the last occurrence of `cmd`
    pub fn params_of(&self, cmd: u8) -> Vec<u8> {
        let wire = self.wire();
        let Some(start) = wire.iter().rposition(|&w| w == Wire::Command(cmd)) else {
            return Vec::new();
        };
        wire[start + 1..]
            .iter()
            .map_while(|&w| match w {
                Wire::Data(b) => Some(b),
                Wire::Command(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl Gpio for MockBoard {
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.modes[pin.encoded() as usize] = Some(mode);
        if mode == PinMode::InputPullUp {
            self.levels[pin.encoded() as usize] = true;
        }
    }

    fn write_pin(&mut self, pin: PinId, high: bool) {
        self.levels[pin.encoded() as usize] = high;
    }

    fn read_pin(&mut self, pin: PinId) -> bool {
        if self.grounded.contains(&pin) {
            return false;
        }
        let pulled_low = self.pressed.iter().any(|&(row, col)| {
            row == pin && self.mode(col) == Some(PinMode::Output) && !self.level(col)
        });
        if pulled_low {
            return false;
        }
        self.level(pin)
    }
}

impl SpiBus for MockBoard {
    type Error = BusFault;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusFault);
        }
        for &b in data {
            self.record(b);
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusFault);
        }
        for b in buf.iter_mut() {
            *b = self.replies.pop_front().unwrap_or(0);
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusFault);
        }
        for b in data.iter_mut() {
            self.record(*b);
            *b = self.replies.pop_front().unwrap_or(0);
        }
        Ok(())
    }
}

/// Delay that only counts
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
