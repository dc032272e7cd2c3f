//! # OxiTIFF Core
//!
//! Core components for the OxiTIFF inspection library.
//!
//! - [`error`]: the error taxonomy shared by every layer
//! - [`bytes`]: bounds-checked little-endian reads over an untrusted buffer
//! - [`mmap`]: read-only memory-mapped input (feature `mmap`)
//!
//! ## Architecture
//!
//! OxiTIFF is layered like a protocol stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Front end                                           │
//! │     oxitiff CLI, text/JSON rendering, tag names        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Container                                           │
//! │     header, IFD chain, value resolver, strips          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     TIFF LZW (MSB-first, early change)                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Foundation (this crate)                             │
//! │     TiffError, LE reads, memory mapping                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxitiff_core::bytes::{read_u16_le, read_u32_le};
//!
//! let header = [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
//! assert_eq!(read_u16_le(&header, 2), Some(42));
//! assert_eq!(read_u32_le(&header, 4), Some(8));
//! assert_eq!(read_u32_le(&header, 6), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bytes;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap;

// Re-exports for convenience
pub use error::{Result, TiffError};
#[cfg(feature = "mmap")]
pub use mmap::MappedFile;
