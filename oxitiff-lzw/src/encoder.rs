//! LZW encoder (compression).
//!
//! Produces TIFF-compatible streams: CLEAR first, CLEAR again whenever the
//! table reaches `max_codes - 2` entries, END last. The encoder is one
//! dictionary entry ahead of the decoder, so it widens codes when its next
//! free code passes `2^bits - 1` while the decoder widens at `2^bits - 1`
//! live entries; both sides switch on the same code.

use crate::bitstream_msb::MsbBitWriter;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::Result;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Encode data with LZW compression.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let config = *self.dict.config();
        let clear_code = config.clear_code();
        let eoi_code = config.eoi_code();
        let reset_at = config.max_codes() - 2;

        self.dict.reset();
        let mut writer = MsbBitWriter::new();
        let mut bits = config.min_bits;

        writer.write_bits(clear_code, bits)?;

        let Some((&head, tail)) = input.split_first() else {
            writer.write_bits(eoi_code, bits)?;
            return Ok(writer.into_vec());
        };

        // Code for the longest match built so far.
        let mut current = head as u16;

        for &byte in tail {
            if let Some(code) = self.dict.find_code(current, byte) {
                current = code;
                continue;
            }

            writer.write_bits(current, bits)?;
            self.dict.add_indexed(current, byte)?;

            let free = self.dict.next_code() as usize;
            if free == reset_at {
                writer.write_bits(clear_code, bits)?;
                self.dict.reset();
                bits = config.min_bits;
            } else if bits < config.max_bits && free > (1usize << bits) - 1 {
                bits += 1;
            }

            current = byte as u16;
        }

        writer.write_bits(current, bits)?;

        // The decoder defines one more entry when it reads the final code.
        let free = self.dict.next_code() as usize + 1;
        if free == reset_at {
            writer.write_bits(clear_code, bits)?;
            bits = config.min_bits;
        } else if bits < config.max_bits && free > (1usize << bits) - 1 {
            bits += 1;
        }

        writer.write_bits(eoi_code, bits)?;
        Ok(writer.into_vec())
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
