//! TIFF file header.
//!
//! ```text
//! offset 0  2 bytes  byte-order marker, "II" (little-endian)
//! offset 2  2 bytes  magic number 42
//! offset 4  4 bytes  offset of the first image file directory
//! ```

use oxitiff_core::bytes::{read_u16_le, read_u32_le};
use oxitiff_core::error::{Result, TiffError};

/// Little-endian byte-order marker (`II`).
pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;

/// Big-endian byte-order marker (`MM`).
pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

/// Magic number following the byte-order marker.
pub const TIFF_MAGIC: u16 = 42;

/// Size of the classic TIFF header in bytes.
pub const HEADER_LEN: usize = 8;

/// Parsed TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Offset of the first image file directory (0 if there is none).
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Validate the header at the start of `data`.
    ///
    /// Only the little-endian marker followed by magic 42 is accepted.
    /// Big-endian files are rejected with
    /// [`TiffError::UnsupportedByteOrder`] like any other marker.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(TiffError::invalid_header(format!(
                "need {} bytes, file has {}",
                HEADER_LEN,
                data.len()
            )));
        }

        let marker = read_u16_le(data, 0).unwrap_or_default();
        if marker != LITTLE_ENDIAN_MARKER {
            return Err(TiffError::UnsupportedByteOrder { marker });
        }

        let magic = read_u16_le(data, 2).unwrap_or_default();
        if magic != TIFF_MAGIC {
            return Err(TiffError::BadMagic { found: magic });
        }

        Ok(Self {
            first_ifd_offset: read_u32_le(data, 4).unwrap_or_default(),
        })
    }
}
