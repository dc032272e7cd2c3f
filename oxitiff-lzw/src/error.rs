//! LZW-specific error types.

use oxitiff_core::TiffError;
use thiserror::Error;

/// LZW decoding errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// Code is neither defined nor the next free code.
    #[error("Invalid LZW code {code} (next free code {next_code}) at bit {position}")]
    InvalidCode {
        /// The offending code.
        code: u16,
        /// Next code the dictionary would assign.
        next_code: u16,
        /// Bit position after the code was read.
        position: u64,
    },

    /// Dictionary would grow past its maximum without a clear code.
    #[error("Code table full (max {max_codes} codes) at bit {position}")]
    TableFull {
        /// Maximum number of codes allowed.
        max_codes: usize,
        /// Bit position after the code that overflowed the table.
        position: u64,
    },

    /// Invalid bit width specified.
    #[error("Invalid bit width: {0} (must be 9-12)")]
    InvalidBitWidth(u8),

    /// Input exhausted in the middle of a code.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where EOF occurred.
        position: u64,
    },
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

impl From<LzwError> for TiffError {
    fn from(err: LzwError) -> Self {
        match &err {
            LzwError::InvalidCode { position, .. } | LzwError::TableFull { position, .. } => {
                TiffError::bitstream_corrupt(*position, err.to_string())
            }
            LzwError::UnexpectedEof { position } => TiffError::UnexpectedEnd {
                bit_position: *position,
            },
            LzwError::InvalidBitWidth(_) => TiffError::bitstream_corrupt(0, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_to_tiff_error() {
        let err: TiffError = LzwError::InvalidCode {
            code: 600,
            next_code: 300,
            position: 27,
        }
        .into();
        assert!(matches!(
            err,
            TiffError::BitstreamCorrupt {
                bit_position: 27,
                ..
            }
        ));

        let err: TiffError = LzwError::TableFull {
            max_codes: 4096,
            position: 90,
        }
        .into();
        assert!(matches!(err, TiffError::BitstreamCorrupt { .. }));

        let err: TiffError = LzwError::UnexpectedEof { position: 18 }.into();
        assert!(matches!(err, TiffError::UnexpectedEnd { bit_position: 18 }));
    }
}
