//! Vertical scroll partition
//!
//! The ST7586 scans 160 lines. They are split into a top fixed band, a
//! scrolling band and a bottom fixed band; only the scrolling band moves.

use super::DisplayError;

/// Scan lines of display memory
pub const SCAN_LINES: u16 = 160;

/// Split of the scan lines into fixed and scrolling bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRegion {
    /// Top fixed lines
    pub top: u8,
    /// Scrolling lines
    pub scroll: u8,
    /// Bottom fixed lines
    pub bottom: u8,
}

impl ScrollRegion {
    /// Power-on partition: everything scrolls
    pub const FULL: Self = Self {
        top: 0,
        scroll: SCAN_LINES as u8,
        bottom: 0,
    };

    pub fn new(top: u8, scroll: u8, bottom: u8) -> Result<Self, DisplayError> {
        let sum = top as u16 + scroll as u16 + bottom as u16;
        if sum != SCAN_LINES || scroll == 0 {
            return Err(DisplayError::InvalidScrollArea);
        }
        Ok(Self { top, scroll, bottom })
    }

    /// Wrap an offset into `0..scroll`
    pub fn wrap(&self, offset: i32) -> i16 {
        offset.rem_euclid(self.scroll as i32) as i16
    }

    /// Scroll start register value for a wrapped offset
    pub fn start_line(&self, offset: i16) -> u8 {
        (self.top as i16 + offset) as u8
    }
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_region() {
        assert_eq!(ScrollRegion::new(0, 160, 0), Ok(ScrollRegion::FULL));
        assert_eq!(ScrollRegion::default(), ScrollRegion::FULL);
    }

    #[test]
    fn test_rejects_bad_partitions() {
        assert!(ScrollRegion::new(0, 159, 0).is_err());
        assert!(ScrollRegion::new(100, 100, 0).is_err());
        assert!(ScrollRegion::new(80, 0, 80).is_err());
    }

    #[test]
    fn test_wrap_negative() {
        let region = ScrollRegion::new(8, 120, 32).unwrap();
        assert_eq!(region.wrap(-1), 119);
        assert_eq!(region.wrap(120), 0);
        assert_eq!(region.start_line(119), 127);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_in_band(top in 0u8..=80, bottom in 0u8..=79, deltas in proptest::collection::vec(any::<i16>(), 0..20)) {
            let scroll = (SCAN_LINES - top as u16 - bottom as u16) as u8;
            let region = ScrollRegion::new(top, scroll, bottom).unwrap();

            let mut offset = 0i16;
            let mut total = 0i64;
            for d in deltas {
                offset = region.wrap(offset as i32 + d as i32);
                total += d as i64;
                prop_assert!(offset >= 0 && (offset as u8) < scroll);
                prop_assert!(region.start_line(offset) >= top);
                prop_assert!((region.start_line(offset) as u16) < top as u16 + scroll as u16);
            }
            prop_assert_eq!(offset as i64, total.rem_euclid(scroll as i64));
        }
    }
}
