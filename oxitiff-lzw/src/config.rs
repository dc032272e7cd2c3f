//! TIFF LZW code layout and code-width rule.

/// Code that resets the dictionary.
pub const CLEAR_CODE: u16 = 256;

/// Code that terminates a strip.
pub const END_CODE: u16 = 257;

/// First code assigned to a multi-byte dictionary entry.
pub const FIRST_CODE: u16 = 258;

/// Total code space for 12-bit codes.
pub const MAX_CODES: usize = 4096;

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Code width right after a clear code (9 for 8-bit samples).
    pub min_bits: u8,
    /// Hard ceiling on the code width (12).
    pub max_bits: u8,
}

impl LzwConfig {
    /// Standard TIFF LZW configuration.
    ///
    /// - MSB-first bit order (handled by bitstream_msb module)
    /// - 9-12 bit codes
    /// - Early code change
    pub const TIFF: Self = Self {
        min_bits: 9,
        max_bits: 12,
    };

    /// Create a new LZW configuration.
    pub fn new(min_bits: u8, max_bits: u8) -> Self {
        Self { min_bits, max_bits }
    }

    /// Whether the widths describe a usable code space.
    pub fn is_valid(&self) -> bool {
        self.min_bits >= 9 && self.min_bits <= self.max_bits && self.max_bits <= 12
    }

    /// Get the clear code value (256 for 8-bit initial code size).
    pub fn clear_code(&self) -> u16 {
        1 << (self.min_bits - 1)
    }

    /// Get the end-of-information code value (clear_code + 1).
    pub fn eoi_code(&self) -> u16 {
        self.clear_code() + 1
    }

    /// Get the first available code for dictionary entries.
    pub fn first_code(&self) -> u16 {
        self.eoi_code() + 1
    }

    /// Number of codes addressable at the maximum width.
    pub fn max_codes(&self) -> usize {
        1 << self.max_bits
    }

    /// Width of the next code a decoder reads, given the live dictionary size.
    ///
    /// Early change: the width grows once the dictionary holds
    /// `2^bits - 1` entries, one code before the GIF convention. For the
    /// TIFF layout this gives 9 bits up to 510 entries, 10 up to 1022,
    /// 11 up to 2046 and 12 from 2047 on.
    pub fn code_width(&self, live: usize) -> u8 {
        let mut bits = self.min_bits;
        while bits < self.max_bits && live >= (1usize << bits) - 1 {
            bits += 1;
        }
        bits
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::TIFF
    }
}
