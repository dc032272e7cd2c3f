//! # OxiTIFF-LZW: TIFF LZW Decompression
//!
//! A from-scratch decoder for the LZW variant used by TIFF (compression
//! scheme 5), written to run directly on untrusted strip bytes.
//!
//! ## TIFF LZW
//!
//! - **MSB-first bit order**: codes are packed from the most significant bit
//! - **9-12 bit codes**: width starts at 9 bits after every CLEAR
//! - **Early change**: width grows one code earlier than in GIF
//! - **Special codes**: 256 = CLEAR, 257 = END, dictionary codes from 258
//!
//! ## Bounded output
//!
//! Every decode takes a capacity. Output never exceeds it; if the stream
//! still had data when the capacity was reached the result is flagged as
//! truncated and the prefix is kept.
//!
//! ## Example
//!
//! ```rust
//! use oxitiff_lzw::{compress_tiff, decompress_tiff};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress_tiff(original).unwrap();
//!
//! let decoded = decompress_tiff(&compressed, original.len()).unwrap();
//! assert_eq!(decoded.data, original);
//! assert!(!decoded.truncated);
//!
//! let clipped = decompress_tiff(&compressed, 8).unwrap();
//! assert_eq!(clipped.data, b"TOBEORNO");
//! assert!(clipped.truncated);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_msb;
mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use config::{CLEAR_CODE, END_CODE, FIRST_CODE, LzwConfig, MAX_CODES};
pub use decoder::{Decoded, LzwDecoder};
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

/// Decompress LZW data into at most `capacity` bytes.
///
/// # Example
///
/// ```rust
/// use oxitiff_lzw::{compress, decompress, LzwConfig};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original, LzwConfig::TIFF).unwrap();
/// let decoded = decompress(&compressed, 1024, LzwConfig::TIFF).unwrap();
/// assert_eq!(decoded.data, original);
/// ```
pub fn decompress(data: &[u8], capacity: usize, config: LzwConfig) -> Result<Decoded> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(data, capacity)
}

/// Compress data with LZW using the given configuration.
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(config)?;
    encoder.encode(data)
}

/// Decompress TIFF LZW data (convenience function).
///
/// This is equivalent to `decompress(data, capacity, LzwConfig::TIFF)`.
pub fn decompress_tiff(data: &[u8], capacity: usize) -> Result<Decoded> {
    decompress(data, capacity, LzwConfig::TIFF)
}

/// Compress data with TIFF LZW (convenience function).
pub fn compress_tiff(data: &[u8]) -> Result<Vec<u8>> {
    compress(data, LzwConfig::TIFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_tiff() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress_tiff(original).unwrap();
        let decoded = decompress_tiff(&compressed, original.len()).unwrap();
        assert_eq!(decoded.data, original);
    }

    #[test]
    fn test_large_capacity_stops_at_end_code() {
        let original = b"This is a test of compression! ".repeat(10);
        let compressed = compress_tiff(&original).unwrap();
        let decoded = decompress_tiff(&compressed, 1 << 20).unwrap();
        assert_eq!(decoded.len(), 310);
        assert_eq!(decoded.data, original);
        assert!(!decoded.truncated);
    }

    #[test]
    fn test_zero_capacity() {
        let compressed = compress_tiff(b"abc").unwrap();
        let decoded = decompress_tiff(&compressed, 0).unwrap();
        assert!(decoded.is_empty());
        assert!(decoded.truncated);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            decompress(&[0x80, 0x00], 16, LzwConfig::new(8, 12)),
            Err(LzwError::InvalidBitWidth(8))
        ));
    }
}
