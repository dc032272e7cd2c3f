//! Image parameters gathered from one directory.
//!
//! Tags may appear in any order, so the descriptor is only meaningful once
//! every entry of the directory has been scanned. Entries that fail to
//! resolve are recorded as issues and otherwise ignored.

use crate::entry::DirectoryEntry;
use crate::ifd::Ifd;
use crate::tags;
use oxitiff_core::error::{Result, TiffError};
use std::fmt;

/// Compression scheme of a directory's strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Scheme 1, bytes stored as-is.
    Uncompressed,
    /// Scheme 5, TIFF LZW.
    Lzw,
    /// Any other scheme.
    Other(u32),
}

impl From<u32> for Compression {
    fn from(value: u32) -> Self {
        match value {
            tags::COMPRESSION_NONE => Self::Uncompressed,
            tags::COMPRESSION_LZW => Self::Lzw,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncompressed => write!(f, "uncompressed"),
            Self::Lzw => write!(f, "LZW"),
            Self::Other(code) => write!(f, "compression {}", code),
        }
    }
}

/// Predictor applied before compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predictor {
    /// Scheme 1.
    None,
    /// Scheme 2, horizontal differencing.
    HorizontalDifferencing,
    /// Any other scheme.
    Other(u32),
}

impl From<u32> for Predictor {
    fn from(value: u32) -> Self {
        match value {
            tags::PREDICTOR_NONE => Self::None,
            tags::PREDICTOR_HORIZONTAL => Self::HorizontalDifferencing,
            other => Self::Other(other),
        }
    }
}

/// A recoverable problem met while scanning a directory.
#[derive(Debug)]
pub struct EntryIssue {
    /// Tag of the entry that failed.
    pub tag: u16,
    /// Why it failed.
    pub error: TiffError,
}

/// Image parameters of one directory.
#[derive(Debug, Default)]
pub struct ImageDescriptor {
    /// ImageWidth.
    pub image_width: Option<u32>,
    /// ImageLength.
    pub image_height: Option<u32>,
    /// Compression, as stored.
    pub compression: Option<u32>,
    /// Predictor, as stored.
    pub predictor: Option<u32>,
    /// SamplesPerPixel, as stored.
    pub samples_per_pixel: Option<u32>,
    /// RowsPerStrip, as stored.
    pub rows_per_strip: Option<u32>,
    /// BitsPerSample, one value per sample.
    pub bits_per_sample: Option<Vec<u32>>,
    /// StripOffsets.
    pub strip_offsets: Option<Vec<u32>>,
    /// StripByteCounts.
    pub strip_byte_counts: Option<Vec<u32>>,
    /// Entries that could not be resolved.
    pub issues: Vec<EntryIssue>,
}

impl ImageDescriptor {
    /// Scan every entry of `ifd`.
    pub fn scan(ifd: &Ifd, data: &[u8]) -> Self {
        let mut descriptor = Self::default();
        for entry in &ifd.entries {
            if let Err(error) = descriptor.absorb(entry, data) {
                descriptor.issues.push(EntryIssue {
                    tag: entry.tag,
                    error,
                });
            }
        }
        descriptor
    }

    fn absorb(&mut self, entry: &DirectoryEntry, data: &[u8]) -> Result<()> {
        match entry.tag {
            tags::IMAGE_WIDTH => self.image_width = Some(entry.resolve_scalar()?),
            tags::IMAGE_LENGTH => self.image_height = Some(entry.resolve_scalar()?),
            tags::COMPRESSION => self.compression = Some(entry.resolve_scalar()?),
            tags::PREDICTOR => self.predictor = Some(entry.resolve_scalar()?),
            tags::SAMPLES_PER_PIXEL => self.samples_per_pixel = Some(entry.resolve_scalar()?),
            tags::ROWS_PER_STRIP => self.rows_per_strip = Some(entry.resolve_scalar()?),
            tags::BITS_PER_SAMPLE => self.bits_per_sample = Some(entry.resolve_array(data)?),
            tags::STRIP_OFFSETS => self.strip_offsets = Some(entry.resolve_array(data)?),
            tags::STRIP_BYTE_COUNTS => self.strip_byte_counts = Some(entry.resolve_array(data)?),
            _ => {}
        }
        Ok(())
    }

    /// Compression scheme, uncompressed when the tag is absent.
    pub fn compression(&self) -> Compression {
        Compression::from(self.compression.unwrap_or(tags::COMPRESSION_NONE))
    }

    /// Predictor, none when the tag is absent.
    pub fn predictor(&self) -> Predictor {
        Predictor::from(self.predictor.unwrap_or(tags::PREDICTOR_NONE))
    }

    /// Samples per pixel, 1 when the tag is absent.
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel.unwrap_or(1)
    }

    /// Number of strips, taken from StripOffsets.
    pub fn strip_count(&self) -> usize {
        self.strip_offsets.as_ref().map_or(0, Vec::len)
    }

    /// Whether BitsPerSample is absent or 8 for every sample.
    pub fn is_eight_bit(&self) -> bool {
        self.bits_per_sample
            .as_ref()
            .is_none_or(|bits| bits.iter().all(|&b| b == 8))
    }

    /// Bytes in one full row across all channels.
    ///
    /// Sample depths other than 8 bits are rounded up to whole bytes per row.
    /// `None` when the width is unknown or the product overflows.
    pub fn row_bytes(&self) -> Option<u64> {
        let width = u64::from(self.image_width?);
        let samples = u64::from(self.samples_per_pixel());
        let bits = self
            .bits_per_sample
            .as_ref()
            .and_then(|b| b.iter().copied().max())
            .map_or(8, u64::from);
        Some(width.checked_mul(samples)?.checked_mul(bits)?.div_ceil(8))
    }

    /// Rows held by strip `index`, when the image height is known.
    pub fn rows_in_strip(&self, index: usize) -> Option<u64> {
        let height = u64::from(self.image_height?);
        let per_strip = self
            .rows_per_strip
            .map_or(height, |rows| u64::from(rows).min(height));
        if per_strip == 0 {
            return None;
        }
        let start = per_strip.checked_mul(index as u64)?;
        Some(per_strip.min(height.saturating_sub(start)))
    }
}
