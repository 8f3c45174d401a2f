//! Host-side models of the SMART Response XE peripherals
//!
//! [`Board`] implements the `srxe-hal` traits on top of three behavioural
//! models:
//!
//! - [`lcd::LcdModel`] - ST7586 display memory and registers
//! - [`nor::NorModel`] - SPI NOR flash with write enable and busy timing
//! - [`board::Keypad`] - 6x10 key matrix and power button
//!
//! Wrap a board in a `RefCell` and hand `srxe_hal::Shared` handles to the
//! drivers to run them together against one simulated device.

pub mod board;
pub mod lcd;
pub mod nor;

#[cfg(test)]
mod conformance;

pub use board::{Board, Keypad};
pub use lcd::LcdModel;
pub use nor::NorModel;

/// Delay source that only accumulates the requested time
#[derive(Debug, Default, Clone, Copy)]
pub struct SimDelay {
    pub elapsed_ns: u64,
}

impl embedded_hal::delay::DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
