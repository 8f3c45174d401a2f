//! `embedded-storage` NOR flash traits for [`Flash`]

use embedded_hal::delay::DelayNs;
use embedded_storage::nor_flash::{
    ErrorType, NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash,
};
use srxe_hal::{Gpio, SpiBus};

use super::{Flash, FlashError, PAGE_SIZE, SECTOR_SIZE};

impl NorFlashError for FlashError {
    fn kind(&self) -> NorFlashErrorKind {
        match self {
            FlashError::Misaligned => NorFlashErrorKind::NotAligned,
            FlashError::OutOfBounds => NorFlashErrorKind::OutOfBounds,
            _ => NorFlashErrorKind::Other,
        }
    }
}

impl<BUS, IO, D> ErrorType for Flash<BUS, IO, D>
where
    BUS: SpiBus,
    IO: Gpio,
    D: DelayNs,
{
    type Error = FlashError;
}

impl<BUS, IO, D> ReadNorFlash for Flash<BUS, IO, D>
where
    BUS: SpiBus,
    IO: Gpio,
    D: DelayNs,
{
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        Flash::read(self, offset, bytes).map(|_| ())
    }

    fn capacity(&self) -> usize {
        self.config.capacity as usize
    }
}

impl<BUS, IO, D> NorFlash for Flash<BUS, IO, D>
where
    BUS: SpiBus,
    IO: Gpio,
    D: DelayNs,
{
    const WRITE_SIZE: usize = PAGE_SIZE;
    const ERASE_SIZE: usize = SECTOR_SIZE;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        if from as usize % SECTOR_SIZE != 0 || to as usize % SECTOR_SIZE != 0 {
            return Err(FlashError::Misaligned);
        }
        if from > to || to > self.config.capacity {
            return Err(FlashError::OutOfBounds);
        }
        for sector in (from..to).step_by(SECTOR_SIZE) {
            self.erase_sector(sector, true)?;
        }
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        if offset as usize % PAGE_SIZE != 0 || bytes.len() % PAGE_SIZE != 0 {
            return Err(FlashError::Misaligned);
        }
        self.check_range(offset, bytes.len())?;

        let mut addr = offset;
        for chunk in bytes.chunks_exact(PAGE_SIZE) {
            let page: &[u8; PAGE_SIZE] = chunk.try_into().map_err(|_| FlashError::Misaligned)?;
            self.write_page(addr, page)?;
            addr += PAGE_SIZE as u32;
        }
        Ok(())
    }
}
