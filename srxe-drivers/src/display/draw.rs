//! Text, lines, rectangles and RLE bitmaps
//!
//! Everything here is built from `set_position` plus block writes; nothing
//! is read back from the controller.

use srxe_hal::{Gpio, SpiBus};

use super::{Display, DisplayError, LCD_WIDTH};
use crate::font::{self, FontSize, MAX_GLYPH_BYTES};
use crate::pixel;
use crate::rle::{self, RleError, RleHeader, Run};

impl<BUS, IO> Display<BUS, IO>
where
    BUS: SpiBus,
    IO: Gpio,
{
    /// Draw an RLE-compressed bitmap with its top-left corner at (`x`, `y`)
    ///
    /// Runs are streamed to the controller as they decode. A stream that
    /// ends early returns `MalformedBitmap`; what decoded before that point
    /// stays on screen.
    pub fn load_bitmap_rle(&mut self, x: u16, y: u16, stream: &[u8]) -> Result<(), DisplayError> {
        let Some((header, tokens)) = RleHeader::parse(stream) else {
            return Err(DisplayError::MalformedBitmap);
        };
        let total = header.byte_count();
        if total == 0 {
            return Ok(());
        }

        self.set_position(x, y, header.width, header.height)?;
        let result = rle::decode(tokens, total, |run| match run {
            Run::Repeat { value, count } => self.write_repeated(value, count),
            Run::Literal(bytes) => self.write_data_block(bytes),
        });

        match result {
            Ok(_) => Ok(()),
            Err(RleError::Sink(e)) => Err(e),
            Err(RleError::Truncated { produced: _produced }) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("bitmap truncated after {}/{} bytes", _produced, total);
                Err(DisplayError::MalformedBitmap)
            }
        }
    }

    /// Draw `text` starting at (`x`, `y`) and return the x after the last glyph
    ///
    /// `fg` and `bg` are gray levels (0-3). Characters outside ASCII
    /// 0x20..=0x7F render as spaces. Drawing stops at the first glyph that
    /// would cross the right edge.
    pub fn write_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        size: FontSize,
        fg: u8,
        bg: u8,
    ) -> Result<u16, DisplayError> {
        let width = size.width();
        let mut buf = [0u8; MAX_GLYPH_BYTES];
        let mut x = x;

        for ch in text.chars() {
            if x.saturating_add(width) > LCD_WIDTH {
                break;
            }
            let n = font::render_glyph(size, ch, fg, bg, &mut buf);
            self.set_position(x, y, width, size.height())?;
            self.write_data_block(&buf[..n])?;
            x += width;
        }

        Ok(x)
    }

    /// Draw a horizontal bar `len` pixels long and `thickness` lines tall
    ///
    /// The ends round outward to whole byte columns.
    pub fn horizontal_line(
        &mut self,
        x: u16,
        y: u16,
        len: u16,
        color: u8,
        thickness: u16,
    ) -> Result<(), DisplayError> {
        if len == 0 || thickness == 0 {
            return Ok(());
        }
        let (_, cols) = pixel::byte_columns(x, len);
        self.set_position(x, y, len, thickness)?;
        self.write_repeated(pixel::solid(color), cols as usize * thickness as usize)
    }

    /// Draw a one pixel wide vertical line
    ///
    /// The two other pixels sharing each byte with the line are cleared.
    pub fn vertical_line(&mut self, x: u16, y: u16, height: u16, color: u8) -> Result<(), DisplayError> {
        if height == 0 {
            return Ok(());
        }
        let byte = pixel::single(x % pixel::PIXELS_PER_BYTE, color);
        self.set_position(x, y, 1, height)?;
        self.write_repeated(byte, height as usize)
    }

    /// Draw a rectangle, outlined or filled
    ///
    /// The outline's left and right edges are whole byte columns.
    pub fn rectangle(
        &mut self,
        x: u16,
        y: u16,
        cx: u16,
        cy: u16,
        color: u8,
        filled: bool,
    ) -> Result<(), DisplayError> {
        if cx == 0 || cy == 0 {
            return Ok(());
        }
        if filled {
            return self.horizontal_line(x, y, cx, color, cy);
        }

        self.horizontal_line(x, y, cx, color, 1)?;
        self.horizontal_line(x, y + cy - 1, cx, color, 1)?;

        let solid = pixel::solid(color);
        for edge in [x, x + cx - 1] {
            self.set_position(edge, y, 1, cy)?;
            self.write_repeated(solid, cy as usize)?;
        }
        Ok(())
    }
}
