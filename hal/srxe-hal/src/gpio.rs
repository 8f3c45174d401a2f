//! GPIO pin abstractions
//!
//! The board wiring tables name pins with a one-byte code: the high nibble
//! selects the port (`0xB` = PORTB, `0xD` = PORTD, `0xE` = PORTE,
//! `0xF` = PORTF, `0xA` = PORTG) and the low bits select the bit. `0xB4` is
//! PORTB bit 4. [`PinId`] is the validated form of that code.

/// I/O port of the ATmega128RFA1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Port {
    B,
    D,
    E,
    F,
    G,
}

impl Port {
    /// Decode the high nibble of a pin code
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            0xA => Some(Port::G),
            0xB => Some(Port::B),
            0xD => Some(Port::D),
            0xE => Some(Port::E),
            0xF => Some(Port::F),
            _ => None,
        }
    }

    /// High nibble used for this port in pin codes
    pub const fn nibble(self) -> u8 {
        match self {
            Port::B => 0xB,
            Port::D => 0xD,
            Port::E => 0xE,
            Port::F => 0xF,
            Port::G => 0xA,
        }
    }
}

/// Errors when building a [`PinId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// High nibble does not name a port
    InvalidPort,
    /// Bit index outside 0-7
    InvalidBit,
}

/// A validated port + bit pin identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinId {
    port: Port,
    bit: u8,
}

impl PinId {
    /// Create a pin from its port and bit (0-7)
    pub const fn new(port: Port, bit: u8) -> Result<Self, PinError> {
        if bit > 7 {
            return Err(PinError::InvalidBit);
        }
        Ok(Self { port, bit })
    }

    /// Decode a one-byte pin code such as `0xB4`
    ///
    /// The whole low nibble is the bit number, so codes like `0xB8` are
    /// rejected with [`PinError::InvalidBit`] rather than masked to bit 0.
    /// This is stricter than the board's C headers, which only look at the
    /// bottom three bits.
    pub const fn from_encoded(code: u8) -> Result<Self, PinError> {
        let port = match Port::from_nibble(code >> 4) {
            Some(port) => port,
            None => return Err(PinError::InvalidPort),
        };
        Self::new(port, code & 0x0F)
    }

    /// Decode a pin code in a constant context
    ///
    /// Meant for board wiring tables: an invalid code fails const evaluation.
    pub const fn from_encoded_const(code: u8) -> Self {
        match Self::from_encoded(code) {
            Ok(pin) => pin,
            Err(_) => panic!("invalid pin code"),
        }
    }

    /// Encode back to the one-byte form
    pub const fn encoded(self) -> u8 {
        (self.port.nibble() << 4) | self.bit
    }

    pub const fn port(self) -> Port {
        self.port
    }

    pub const fn bit(self) -> u8 {
        self.bit
    }

    /// Bit mask within the port register
    pub const fn mask(self) -> u8 {
        1 << self.bit
    }
}

impl TryFrom<u8> for PinId {
    type Error = PinError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_encoded(code)
    }
}

/// Pin direction / pull configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// High-impedance input
    Input,
    /// Input with the internal pull-up enabled
    InputPullUp,
    /// Push-pull output
    Output,
}

/// Port bank giving access to every pin by [`PinId`]
///
/// Register pokes on the real board cannot fail, so these methods are
/// infallible. A pin that is not an output ignores `write_pin`.
pub trait Gpio {
    /// Configure the pin direction
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode);

    /// Drive an output pin high (`true`) or low (`false`)
    fn write_pin(&mut self, pin: PinId, high: bool);

    /// Read the pin level
    fn read_pin(&mut self, pin: PinId) -> bool;

    /// Drive the pin high
    fn set_high(&mut self, pin: PinId) {
        self.write_pin(pin, true);
    }

    /// Drive the pin low
    fn set_low(&mut self, pin: PinId) {
        self.write_pin(pin, false);
    }
}

impl<T: Gpio + ?Sized> Gpio for &mut T {
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        T::set_pin_mode(self, pin, mode)
    }

    fn write_pin(&mut self, pin: PinId, high: bool) {
        T::write_pin(self, pin, high)
    }

    fn read_pin(&mut self, pin: PinId) -> bool {
        T::read_pin(self, pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_board_codes() {
        let cs = PinId::from_encoded(0xB4).unwrap();
        assert_eq!(cs.port(), Port::B);
        assert_eq!(cs.bit(), 4);
        assert_eq!(cs.mask(), 0x10);

        let g = PinId::from_encoded(0xA2).unwrap();
        assert_eq!(g.port(), Port::G);
        assert_eq!(g.bit(), 2);
    }

    #[test]
    fn test_encode_roundtrip() {
        for code in [0xB4, 0xB5, 0xB6, 0xD2, 0xE7, 0xF0, 0xA5] {
            let pin = PinId::try_from(code).unwrap();
            assert_eq!(pin.encoded(), code);
        }
    }

    #[test]
    fn test_reject_bad_codes() {
        // PORTC does not exist on this part
        assert_eq!(PinId::from_encoded(0xC1), Err(PinError::InvalidPort));
        assert_eq!(PinId::from_encoded(0x04), Err(PinError::InvalidPort));
        // Bit 3 of the low nibble is not part of the bit index
        assert_eq!(PinId::from_encoded(0xB8), Err(PinError::InvalidBit));
        assert_eq!(PinId::new(Port::F, 9), Err(PinError::InvalidBit));
    }

    #[test]
    fn test_const_constructor() {
        const RESET: PinId = PinId::from_encoded_const(0xB6);
        assert_eq!(RESET.encoded(), 0xB6);
    }
}
