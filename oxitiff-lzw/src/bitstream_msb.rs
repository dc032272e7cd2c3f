//! MSB-first bit stream operations for TIFF LZW.
//!
//! TIFF LZW packs codes from the most significant bit down, across byte
//! boundaries, regardless of the current code width.

use crate::error::{LzwError, Result};

/// Widest code either side accepts.
const MAX_WIDTH: u8 = 16;

fn check_width(width: u8) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(LzwError::InvalidBitWidth(width));
    }
    Ok(())
}

/// MSB-first bit reader over a borrowed byte slice.
///
/// The reader keeps only a bit cursor; every code is cut out of the (at
/// most three) bytes it overlaps.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    data: &'a [u8],
    /// Bits consumed so far.
    cursor: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Read a `width`-bit code.
    ///
    /// Fails with [`LzwError::UnexpectedEof`] without consuming anything
    /// if fewer than `width` bits remain.
    pub fn read_bits(&mut self, width: u8) -> Result<u16> {
        check_width(width)?;

        let end = self.cursor + u64::from(width);
        if end > self.data.len() as u64 * 8 {
            return Err(LzwError::UnexpectedEof {
                position: self.cursor,
            });
        }

        let first = (self.cursor / 8) as usize;
        let window = (0..3).fold(0u32, |acc, i| {
            (acc << 8) | u32::from(self.data.get(first + i).copied().unwrap_or(0))
        });
        let shift = 24 - (self.cursor % 8) as u32 - u32::from(width);
        self.cursor = end;

        Ok(((window >> shift) & ((1u32 << width) - 1)) as u16)
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.cursor
    }
}

/// MSB-first bit writer, used to produce LZW streams for tests and benches.
#[derive(Debug)]
pub struct MsbBitWriter {
    output: Vec<u8>,
    /// Pending bits, left-aligned.
    pending: u64,
    /// Number of pending bits, always below 8 between writes.
    pending_bits: u32,
}

impl MsbBitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            pending: 0,
            pending_bits: 0,
        }
    }

    /// Append the low `width` bits of `value`.
    pub fn write_bits(&mut self, value: u16, width: u8) -> Result<()> {
        check_width(width)?;

        let width = u32::from(width);
        let value = u64::from(value) & ((1u64 << width) - 1);
        self.pending |= value << (64 - self.pending_bits - width);
        self.pending_bits += width;

        while self.pending_bits >= 8 {
            self.output.push((self.pending >> 56) as u8);
            self.pending <<= 8;
            self.pending_bits -= 8;
        }
        Ok(())
    }

    /// Emit the last partial byte, zero-padded.
    pub fn flush(&mut self) {
        if self.pending_bits > 0 {
            self.output.push((self.pending >> 56) as u8);
            self.pending = 0;
            self.pending_bits = 0;
        }
    }

    /// Flush and return the output data.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}

impl Default for MsbBitWriter {
    fn default() -> Self {
        Self::new()
    }
}
