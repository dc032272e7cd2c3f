//! Error types for OxiTIFF operations.
//!
//! A single taxonomy covers the whole pipeline. Structural errors (header,
//! byte order, directory chain, I/O) mean the file is not well-formed and
//! abort a run; the remaining kinds are scoped to one entry or one strip and
//! are reported while processing continues.

use std::io;
use thiserror::Error;

/// The main error type for OxiTIFF operations.
#[derive(Debug, Error)]
pub enum TiffError {
    /// I/O error while opening or mapping the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The buffer is too short to hold a TIFF header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Byte-order marker is not the little-endian `II`.
    #[error("Unsupported byte order marker {marker:#06x}")]
    UnsupportedByteOrder {
        /// The two marker bytes as read little-endian.
        marker: u16,
    },

    /// Magic number following the byte-order marker is not 42.
    #[error("Bad magic number: expected 42, found {found}")]
    BadMagic {
        /// The value found instead.
        found: u16,
    },

    /// Directory table or chain pointer is out of bounds, or the chain cycles.
    #[error("Corrupt directory at offset {offset}: {message}")]
    CorruptDirectory {
        /// Offset of the directory being read.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// The entry's field type does not match the requested accessor.
    #[error("Unresolvable value for tag {tag}: {message}")]
    UnresolvableValue {
        /// Tag of the offending entry.
        tag: u16,
        /// Description of the mismatch.
        message: String,
    },

    /// Array index, value read, or strip slice outside its bounds.
    #[error("Out of range: {message}")]
    OutOfRange {
        /// Description of the violated bound.
        message: String,
    },

    /// Invalid LZW code or dictionary overflow.
    #[error("Corrupt LZW bitstream at bit {bit_position}: {message}")]
    BitstreamCorrupt {
        /// Bit position after the offending code.
        bit_position: u64,
        /// Description of the corruption.
        message: String,
    },

    /// LZW input exhausted in the middle of a code.
    #[error("Unexpected end of LZW data at bit position {bit_position}")]
    UnexpectedEnd {
        /// Bit position where the input ran out.
        bit_position: u64,
    },

    /// Decoding stopped at the output capacity; the prefix is still usable.
    #[error("Output truncated at {produced} bytes")]
    OutputTruncated {
        /// Number of bytes produced before stopping.
        produced: usize,
    },

    /// Compression scheme or predictor that this tool does not decode.
    #[error("Not supported: {feature}")]
    NotSupported {
        /// Description of the unsupported feature.
        feature: String,
    },
}

/// Result type alias for OxiTIFF operations.
pub type Result<T> = std::result::Result<T, TiffError>;

impl TiffError {
    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a corrupt directory error.
    pub fn corrupt_directory(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptDirectory {
            offset,
            message: message.into(),
        }
    }

    /// Create an unresolvable value error.
    pub fn unresolvable(tag: u16, message: impl Into<String>) -> Self {
        Self::UnresolvableValue {
            tag,
            message: message.into(),
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Create a corrupt bitstream error.
    pub fn bitstream_corrupt(bit_position: u64, message: impl Into<String>) -> Self {
        Self::BitstreamCorrupt {
            bit_position,
            message: message.into(),
        }
    }

    /// Create a not supported error.
    pub fn not_supported(feature: impl Into<String>) -> Self {
        Self::NotSupported {
            feature: feature.into(),
        }
    }

    /// Whether this error means the file itself is not well-formed.
    ///
    /// Structural errors abort processing of the whole file. Everything
    /// else is scoped to a single entry or strip.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::InvalidHeader { .. }
                | Self::UnsupportedByteOrder { .. }
                | Self::BadMagic { .. }
                | Self::CorruptDirectory { .. }
        )
    }
}
