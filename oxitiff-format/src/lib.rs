//! # OxiTIFF Format
//!
//! Classic little-endian TIFF container support for OxiTIFF.
//!
//! - [`header`]: the 8-byte header (byte order, magic 42, first directory)
//! - [`ifd`]: image file directories and the cycle-safe chain walker
//! - [`entry`]: directory entries and the typed value resolver
//! - [`descriptor`]: image parameters scanned from one directory
//! - [`strip`]: per-strip slicing, LZW decoding and predictor reversal
//! - [`predictor`]: horizontal differencing
//!
//! ## Example
//!
//! ```rust
//! use oxitiff_format::{StripOptions, TiffReader};
//!
//! // Header, then one directory at offset 8 holding ImageWidth = 4.
//! let mut data = b"II*\0\x08\0\0\0".to_vec();
//! data.extend_from_slice(&[1, 0]);
//! data.extend_from_slice(&[0x00, 0x01, 3, 0, 1, 0, 0, 0, 4, 0, 0, 0]);
//! data.extend_from_slice(&[0, 0, 0, 0]);
//!
//! let reader = TiffReader::new(&data).unwrap();
//! let ifd = &reader.directories()[0];
//! let descriptor = reader.descriptor(ifd);
//! assert_eq!(descriptor.image_width, Some(4));
//!
//! let strips = reader.strip_decoder(&descriptor, StripOptions::default());
//! assert!(strips.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod descriptor;
pub mod entry;
pub mod field;
pub mod header;
pub mod ifd;
pub mod predictor;
pub mod reader;
pub mod strip;
pub mod tags;

// Re-exports
pub use descriptor::{Compression, EntryIssue, ImageDescriptor, Predictor};
pub use entry::{DirectoryEntry, Rational, Value};
pub use field::FieldType;
pub use header::TiffHeader;
pub use ifd::{Ifd, IfdWalker};
pub use reader::{TiffReader, parse};
pub use strip::{DEFAULT_MAX_STRIP_BYTES, Strip, StripDecoder, StripOptions, Strips};
