//! Baseline tag numbers and well-known field values.

/// ImageWidth: pixel columns.
pub const IMAGE_WIDTH: u16 = 256;
/// ImageLength: pixel rows.
pub const IMAGE_LENGTH: u16 = 257;
/// BitsPerSample: one value per sample.
pub const BITS_PER_SAMPLE: u16 = 258;
/// Compression scheme.
pub const COMPRESSION: u16 = 259;
/// PhotometricInterpretation.
pub const PHOTOMETRIC_INTERPRETATION: u16 = 262;
/// StripOffsets: file offset of each strip.
pub const STRIP_OFFSETS: u16 = 273;
/// Orientation.
pub const ORIENTATION: u16 = 274;
/// SamplesPerPixel.
pub const SAMPLES_PER_PIXEL: u16 = 277;
/// RowsPerStrip.
pub const ROWS_PER_STRIP: u16 = 278;
/// StripByteCounts: compressed length of each strip.
pub const STRIP_BYTE_COUNTS: u16 = 279;
/// XResolution.
pub const X_RESOLUTION: u16 = 282;
/// YResolution.
pub const Y_RESOLUTION: u16 = 283;
/// PlanarConfiguration.
pub const PLANAR_CONFIGURATION: u16 = 284;
/// PageName.
pub const PAGE_NAME: u16 = 285;
/// ResolutionUnit.
pub const RESOLUTION_UNIT: u16 = 296;
/// Predictor applied before compression.
pub const PREDICTOR: u16 = 317;
/// SampleFormat.
pub const SAMPLE_FORMAT: u16 = 339;

/// Compression value: no compression.
pub const COMPRESSION_NONE: u32 = 1;
/// Compression value: LZW.
pub const COMPRESSION_LZW: u32 = 5;

/// Predictor value: none.
pub const PREDICTOR_NONE: u32 = 1;
/// Predictor value: horizontal differencing.
pub const PREDICTOR_HORIZONTAL: u32 = 2;
