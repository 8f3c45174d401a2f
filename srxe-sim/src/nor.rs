//! SPI NOR flash model
//!
//! Commands are framed by chip select. Erase and program take effect when
//! chip select goes high, as on the real part, and then keep the chip busy
//! for a configurable number of status reads. The write enable latch stays
//! set until the operation completes, and commands other than READ STATUS
//! sent while busy are dropped.

/// Behavioural model of the serial flash
#[derive(Debug, Clone)]
pub struct NorModel {
    mem: Vec<u8>,
    frame: Vec<u8>,
    read_pos: usize,
    selected: bool,
    wel: bool,
    in_progress: bool,
    busy_reads: u32,
    /// Status reads an erase stays busy for
    pub erase_busy_reads: u32,
    /// Status reads a program stays busy for
    pub program_busy_reads: u32,
    /// Never finish an erase or program
    pub never_ready: bool,
    /// Ignore WRITE ENABLE
    pub write_protect: bool,
    /// JEDEC id bytes
    pub id: [u8; 3],
    /// Commands other than READ STATUS issued while busy
    pub busy_violations: usize,
}

impl NorModel {
    pub const PAGE: usize = 256;
    pub const SECTOR: usize = 4096;

    /// A blank (erased) chip of `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            mem: vec![0xFF; capacity],
            frame: Vec::new(),
            read_pos: 0,
            selected: false,
            wel: false,
            in_progress: false,
            busy_reads: 0,
            erase_busy_reads: 3,
            program_busy_reads: 1,
            never_ready: false,
            write_protect: false,
            id: [0xEF, 0x40, 0x11],
            busy_violations: 0,
        }
    }

    pub fn memory(&self) -> &[u8] {
        &self.mem
    }

    pub fn memory_mut(&mut self) -> &mut [u8] {
        &mut self.mem
    }

    pub fn write_enabled(&self) -> bool {
        self.wel
    }

    pub fn busy(&self) -> bool {
        self.never_ready || self.busy_reads > 0
    }

    pub fn select(&mut self) {
        self.selected = true;
        self.frame.clear();
        self.read_pos = 0;
    }

    pub fn deselect(&mut self) {
        if !self.selected {
            return;
        }
        self.selected = false;

        let Some(&cmd) = self.frame.first() else {
            return;
        };
        if cmd != 0x05 && self.busy() {
            self.busy_violations += 1;
            return;
        }
        match cmd {
            0x06 => self.wel = !self.write_protect,
            0x04 => self.wel = false,
            0x20 if self.wel && self.frame.len() == 4 => {
                let base = (self.address() / Self::SECTOR) * Self::SECTOR;
                if let Some(sector) = self.mem.get_mut(base..base + Self::SECTOR) {
                    sector.fill(0xFF);
                }
                self.start(self.erase_busy_reads);
            }
            0x02 if self.wel && self.frame.len() > 4 => {
                let addr = self.address();
                let page = (addr / Self::PAGE) * Self::PAGE;
                let data = self.frame[4..].to_vec();
                for (i, byte) in data.into_iter().enumerate() {
                    // Addresses wrap within the page
                    let at = page + (addr + i) % Self::PAGE;
                    if let Some(cell) = self.mem.get_mut(at) {
                        *cell &= byte;
                    }
                }
                self.start(self.program_busy_reads);
            }
            _ => {}
        }
    }

    fn start(&mut self, busy_reads: u32) {
        self.busy_reads = busy_reads;
        self.in_progress = true;
        self.settle();
    }

    /// Clear WEL once the running operation has finished
    fn settle(&mut self) {
        if self.in_progress && !self.busy() {
            self.in_progress = false;
            self.wel = false;
        }
    }

    fn address(&self) -> usize {
        let f = &self.frame;
        ((f[1] as usize) << 16) | ((f[2] as usize) << 8) | f[3] as usize
    }

    fn status(&mut self) -> u8 {
        let status = (self.busy() as u8) | ((self.wel as u8) << 1);
        if self.busy_reads > 0 {
            self.busy_reads -= 1;
        }
        self.settle();
        status
    }

    /// Byte shifted in from the driver
    pub fn write_byte(&mut self, byte: u8) {
        if self.selected {
            self.frame.push(byte);
        }
    }

    /// Byte shifted out to the driver
    pub fn read_byte(&mut self) -> u8 {
        if !self.selected {
            return 0xFF;
        }
        let out = match self.frame.first() {
            Some(0x05) => self.status(),
            Some(0x03) if self.frame.len() >= 4 && !self.busy() => {
                let at = self.address() + self.read_pos;
                self.mem.get(at).copied().unwrap_or(0xFF)
            }
            Some(0x9F) => self.id.get(self.read_pos).copied().unwrap_or(0x00),
            _ => 0xFF,
        };
        self.read_pos += 1;
        out
    }
}
