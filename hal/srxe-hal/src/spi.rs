//! SPI bus abstractions
//!
//! The LCD controller and the NOR flash share one SPI master. Chip select is
//! an ordinary GPIO driven by each driver, so the bus trait only moves bytes.

/// SPI bus master
///
/// Every call must have finished shifting all bytes before it returns, so a
/// driver can release chip select right after it.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data, discarding whatever is clocked in
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data (clocks out zeros)
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Transfer data in place
    ///
    /// Writes data from buffer while reading into the same buffer.
    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, buf)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        T::transfer_in_place(self, data)
    }
}

/// Adapter from an `embedded-hal` 1.0 SPI bus
///
/// Flushes after every operation so the bytes are on the wire before the
/// caller touches chip select.
#[derive(Debug)]
pub struct EhSpi<S>(pub S);

impl<S> EhSpi<S> {
    pub fn new(spi: S) -> Self {
        Self(spi)
    }

    /// Give back the wrapped bus
    pub fn release(self) -> S {
        self.0
    }
}

impl<S: embedded_hal::spi::SpiBus<u8>> SpiBus for EhSpi<S> {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        self.0.flush()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(buf)?;
        self.0.flush()
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        self.0.transfer_in_place(data)?;
        self.0.flush()
    }
}
