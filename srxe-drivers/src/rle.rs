//! Run-length encoded bitmaps
//!
//! Bitmap assets are stored as a small header followed by a token stream:
//!
//! ```text
//! ┌─────────┬──────────┬──────────────────────────────┐
//! │ WIDTH   │ HEIGHT   │ TOKENS ...                   │
//! │ u16 LE  │ u16 LE   │                              │
//! └─────────┴──────────┴──────────────────────────────┘
//! ```
//!
//! `WIDTH` is in pixels, `HEIGHT` in scan lines. The decoded payload is
//! `ceil(WIDTH / 3) * HEIGHT` packed display bytes in raster order.
//!
//! Each token starts with a control byte `t`:
//! - `t & 0x80 != 0`: repeat - the next byte appears `(t & 0x7F) + 1` times
//! - otherwise: literal - the next `t + 1` bytes are copied as-is

use heapless::Vec;

use crate::pixel;

/// Header size in bytes
pub const HEADER_LEN: usize = 4;

/// Longest run a single token can express
pub const MAX_RUN: usize = 128;

/// Control bit marking a repeat token
const REPEAT_FLAG: u8 = 0x80;

/// Errors from decoding a bitmap stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RleError<E> {
    /// Stream shorter than its header or ended before the declared size
    Truncated {
        /// Bytes produced before the stream ran out
        produced: usize,
    },
    /// The sink refused a run
    Sink(E),
}

/// Errors from encoding a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Pixel data length does not match the declared geometry
    LengthMismatch,
    /// Output buffer is full
    BufferFull,
}

/// Bitmap dimensions from the stream header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RleHeader {
    /// Width in pixels
    pub width: u16,
    /// Height in scan lines
    pub height: u16,
}

impl RleHeader {
    /// Split a stream into its header and token bytes
    pub fn parse(stream: &[u8]) -> Option<(Self, &[u8])> {
        if stream.len() < HEADER_LEN {
            return None;
        }
        let header = Self {
            width: u16::from_le_bytes([stream[0], stream[1]]),
            height: u16::from_le_bytes([stream[2], stream[3]]),
        };
        Some((header, &stream[HEADER_LEN..]))
    }

    /// Packed display bytes per scan line
    pub fn row_bytes(&self) -> usize {
        pixel::byte_columns(0, self.width).1 as usize
    }

    /// Total decoded byte count
    pub fn byte_count(&self) -> usize {
        self.row_bytes() * self.height as usize
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let w = self.width.to_le_bytes();
        let h = self.height.to_le_bytes();
        [w[0], w[1], h[0], h[1]]
    }
}

/// One decoded span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    /// `value` repeated `count` times
    Repeat { value: u8, count: usize },
    /// Bytes copied verbatim from the stream
    Literal(&'a [u8]),
}

impl Run<'_> {
    pub fn len(&self) -> usize {
        match self {
            Run::Repeat { count, .. } => *count,
            Run::Literal(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode `tokens` into exactly `total` bytes, handing each run to `sink`
///
/// Decoding is a single forward pass. A token that would overrun `total` is
/// cut to the remaining count, so the sink never sees more than `total`
/// bytes. Returns the number of token bytes consumed.
pub fn decode<'a, E, F>(tokens: &'a [u8], total: usize, mut sink: F) -> Result<usize, RleError<E>>
where
    F: FnMut(Run<'a>) -> Result<(), E>,
{
    let mut produced = 0;
    let mut pos = 0;

    while produced < total {
        let Some(&control) = tokens.get(pos) else {
            return Err(RleError::Truncated { produced });
        };
        let remaining = total - produced;

        let run = if control & REPEAT_FLAG != 0 {
            let count = (((control & !REPEAT_FLAG) as usize) + 1).min(remaining);
            let Some(&value) = tokens.get(pos + 1) else {
                return Err(RleError::Truncated { produced });
            };
            pos += 2;
            Run::Repeat { value, count }
        } else {
            let declared = control as usize + 1;
            let take = declared.min(remaining);
            let start = pos + 1;
            let Some(bytes) = tokens.get(start..start + take) else {
                return Err(RleError::Truncated { produced });
            };
            pos = (start + declared).min(tokens.len());
            Run::Literal(bytes)
        };

        produced += run.len();
        sink(run).map_err(RleError::Sink)?;
    }

    Ok(pos)
}

/// Length of the run of identical bytes at the start of `data`, capped
fn leading_run(data: &[u8]) -> usize {
    match data.first() {
        Some(&first) => data
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == first)
            .count(),
        None => 0,
    }
}

/// Encode packed display bytes into a header + token stream
///
/// Runs of three or more identical bytes become repeat tokens; everything
/// else is grouped into literal tokens of up to [`MAX_RUN`] bytes.
pub fn encode<const N: usize>(header: RleHeader, data: &[u8]) -> Result<Vec<u8, N>, EncodeError> {
    if data.len() != header.byte_count() {
        return Err(EncodeError::LengthMismatch);
    }

    let mut out: Vec<u8, N> = Vec::new();
    out.extend_from_slice(&header.to_bytes())
        .map_err(|_| EncodeError::BufferFull)?;

    let mut i = 0;
    while i < data.len() {
        let run = leading_run(&data[i..]);
        if run >= 3 {
            out.push(REPEAT_FLAG | (run - 1) as u8)
                .map_err(|_| EncodeError::BufferFull)?;
            out.push(data[i]).map_err(|_| EncodeError::BufferFull)?;
            i += run;
            continue;
        }

        let start = i;
        while i < data.len() && i - start < MAX_RUN && leading_run(&data[i..]) < 3 {
            i += 1;
        }
        out.push((i - start - 1) as u8)
            .map_err(|_| EncodeError::BufferFull)?;
        out.extend_from_slice(&data[start..i])
            .map_err(|_| EncodeError::BufferFull)?;
    }

    Ok(out)
}
