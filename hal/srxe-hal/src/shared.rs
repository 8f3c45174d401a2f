//! Shared access to one port bank or bus
//!
//! The display, keyboard and flash drivers all need the same port bank, and
//! the display and flash share the SPI bus. Each driver owns a [`Shared`]
//! handle; every trait call borrows the underlying `RefCell` for just that
//! call. Under the single-threaded main-loop model borrows never overlap.

use core::cell::RefCell;

use crate::gpio::{Gpio, PinId, PinMode};
use crate::spi::SpiBus;

/// Handle to a `RefCell`-held bus or port bank
#[derive(Debug)]
pub struct Shared<'a, T> {
    cell: &'a RefCell<T>,
}

impl<'a, T> Shared<'a, T> {
    pub fn new(cell: &'a RefCell<T>) -> Self {
        Self { cell }
    }
}

impl<T> Clone for Shared<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Shared<'_, T> {}

impl<T: Gpio> Gpio for Shared<'_, T> {
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.cell.borrow_mut().set_pin_mode(pin, mode)
    }

    fn write_pin(&mut self, pin: PinId, high: bool) {
        self.cell.borrow_mut().write_pin(pin, high)
    }

    fn read_pin(&mut self, pin: PinId) -> bool {
        self.cell.borrow_mut().read_pin(pin)
    }
}

impl<T: SpiBus> SpiBus for Shared<'_, T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.cell.borrow_mut().write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.cell.borrow_mut().read(buf)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        self.cell.borrow_mut().transfer_in_place(data)
    }
}
