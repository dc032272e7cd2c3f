//! Strip decoding.
//!
//! Each strip is sliced out of the file with StripOffsets and
//! StripByteCounts, decompressed according to the directory's compression
//! scheme and, for LZW with horizontal differencing, run through predictor
//! reversal. Strips are decoded independently: one failing strip does not
//! stop the others.

use crate::descriptor::{Compression, ImageDescriptor, Predictor};
use crate::predictor;
use crate::tags;
use oxitiff_core::bytes::slice_at;
use oxitiff_core::error::{Result, TiffError};
use oxitiff_lzw::{LzwConfig, LzwDecoder};
use tracing::{debug, trace};

/// Default ceiling on the decoded size of one strip (16 MiB).
pub const DEFAULT_MAX_STRIP_BYTES: usize = 16 * 1024 * 1024;

/// Strip decoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    /// Upper bound on the decoded bytes of any one strip.
    pub max_strip_bytes: usize,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            max_strip_bytes: DEFAULT_MAX_STRIP_BYTES,
        }
    }
}

impl StripOptions {
    /// Set the per-strip ceiling.
    pub fn with_max_strip_bytes(mut self, max: usize) -> Self {
        self.max_strip_bytes = max;
        self
    }
}

/// One decoded strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// Strip index within the directory.
    pub index: usize,
    /// Offset of the stored bytes.
    pub offset: u32,
    /// Stored (compressed) length.
    pub length: u32,
    /// Decoded bytes.
    pub data: Vec<u8>,
    /// Decoding stopped at the capacity before the stream ended.
    pub truncated: bool,
}

impl Strip {
    /// The warning for a truncated strip, if any.
    pub fn truncation(&self) -> Option<TiffError> {
        self.truncated.then(|| TiffError::OutputTruncated {
            produced: self.data.len(),
        })
    }
}

/// Decodes the strips of one directory.
#[derive(Debug)]
pub struct StripDecoder<'a> {
    data: &'a [u8],
    descriptor: &'a ImageDescriptor,
    options: StripOptions,
}

impl<'a> StripDecoder<'a> {
    /// Create a decoder over the file buffer and a scanned directory.
    pub fn new(data: &'a [u8], descriptor: &'a ImageDescriptor, options: StripOptions) -> Self {
        Self {
            data,
            descriptor,
            options,
        }
    }

    /// Number of strips the directory declares.
    pub fn len(&self) -> usize {
        self.descriptor.strip_count()
    }

    /// Whether the directory declares no strips.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all strips in order.
    pub fn strips(&self) -> Strips<'_, 'a> {
        Strips {
            decoder: self,
            index: 0,
        }
    }

    /// Decode strip `index`.
    pub fn decode(&self, index: usize) -> Result<Strip> {
        let offsets = self.descriptor.strip_offsets.as_deref().ok_or_else(|| {
            TiffError::unresolvable(tags::STRIP_OFFSETS, "StripOffsets missing")
        })?;
        let counts = self.descriptor.strip_byte_counts.as_deref().ok_or_else(|| {
            TiffError::unresolvable(tags::STRIP_BYTE_COUNTS, "StripByteCounts missing")
        })?;

        let offset = *offsets.get(index).ok_or_else(|| {
            TiffError::out_of_range(format!(
                "strip {} of {} strips",
                index,
                offsets.len()
            ))
        })?;
        let length = *counts.get(index).ok_or_else(|| {
            TiffError::out_of_range(format!(
                "strip {} has no byte count ({} counts for {} offsets)",
                index,
                counts.len(),
                offsets.len()
            ))
        })?;

        let raw = slice_at(self.data, offset as usize, length as usize).ok_or_else(|| {
            TiffError::out_of_range(format!(
                "strip {} at {}+{} exceeds file of {} bytes",
                index,
                offset,
                length,
                self.data.len()
            ))
        })?;

        let (data, truncated) = match self.descriptor.compression() {
            Compression::Uncompressed => (raw.to_vec(), false),
            Compression::Lzw => self.decode_lzw(index, raw)?,
            Compression::Other(code) => {
                return Err(TiffError::not_supported(format!(
                    "compression scheme {}",
                    code
                )));
            }
        };

        debug!(index, offset, length, decoded = data.len(), truncated, "decoded strip");
        Ok(Strip {
            index,
            offset,
            length,
            data,
            truncated,
        })
    }

    fn decode_lzw(&self, index: usize, raw: &[u8]) -> Result<(Vec<u8>, bool)> {
        // Checked up front so an unusable predictor never costs a decode.
        let layout = match self.descriptor.predictor() {
            Predictor::None => None,
            Predictor::HorizontalDifferencing => Some(self.predictor_layout()?),
            Predictor::Other(code) => {
                return Err(TiffError::not_supported(format!("predictor {}", code)));
            }
        };

        let capacity = self.capacity(index);
        trace!(index, capacity, "lzw strip capacity");

        let mut decoder = LzwDecoder::new(LzwConfig::TIFF)?;
        let decoded = decoder.decode(raw, capacity)?;
        let mut data = decoded.data;

        if let Some((stride, samples)) = layout {
            predictor::reverse(&mut data, stride, samples);
        }
        Ok((data, decoded.truncated))
    }

    /// Row stride and channel count for predictor reversal.
    fn predictor_layout(&self) -> Result<(usize, usize)> {
        if !self.descriptor.is_eight_bit() {
            return Err(TiffError::not_supported(
                "horizontal differencing on samples other than 8 bits",
            ));
        }
        let width = self.descriptor.image_width.ok_or_else(|| {
            TiffError::unresolvable(tags::IMAGE_WIDTH, "ImageWidth required for the predictor")
        })?;
        let samples = self.descriptor.samples_per_pixel() as usize;
        let stride = (width as usize).checked_mul(samples).ok_or_else(|| {
            TiffError::out_of_range(format!("row of {} x {} samples", width, samples))
        })?;
        Ok((stride, samples))
    }

    /// Expected decoded size of strip `index`, capped by the options.
    fn capacity(&self, index: usize) -> usize {
        let max = self.options.max_strip_bytes;
        let expected = self
            .descriptor
            .row_bytes()
            .zip(self.descriptor.rows_in_strip(index))
            .and_then(|(row, rows)| row.checked_mul(rows));

        match expected {
            Some(bytes) if bytes > 0 => usize::try_from(bytes).map_or(max, |b| b.min(max)),
            _ => max,
        }
    }
}

/// Iterator over the strips of a [`StripDecoder`].
#[derive(Debug)]
pub struct Strips<'d, 'a> {
    decoder: &'d StripDecoder<'a>,
    index: usize,
}

impl Iterator for Strips<'_, '_> {
    type Item = Result<Strip>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.decoder.len() {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(self.decoder.decode(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.decoder.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Strips<'_, '_> {}
