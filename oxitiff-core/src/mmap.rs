//! Memory-mapped input files.
//!
//! The whole TIFF file is exposed as one immutable byte slice; every
//! directory, value and strip offset is resolved against it. The operating
//! system pages data in on demand, so large files with few strips read
//! only what is touched.
//!
//! # Example
//!
//! ```no_run
//! use oxitiff_core::mmap::MappedFile;
//!
//! let file = MappedFile::open("image.tif")?;
//! if file.is_empty() {
//!     println!("the file is empty");
//! }
//! let header = &file.as_slice()[..8];
//! # Ok::<(), oxitiff_core::error::TiffError>(())
//! ```
//!
//! # Safety
//!
//! Memory-mapped files can change underneath the mapping if another process
//! modifies them. The mapping is read-only and all reads through it are
//! bounds-checked, so such a change can produce wrong values but not
//! out-of-bounds access.

use crate::error::Result;
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// A read-only view of a whole file.
#[derive(Debug)]
pub struct MappedFile {
    inner: Backing,
}

#[derive(Debug)]
enum Backing {
    Mapped(Mmap),
    // Zero-length files cannot be mapped on every platform.
    Empty,
}

impl MappedFile {
    /// Open a file and map its contents read-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TiffError::Io`] if the file cannot be opened,
    /// its metadata cannot be read, or mapping fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_file(&file)
    }

    /// Map an already-open file.
    pub fn from_file(file: &File) -> Result<Self> {
        if file.metadata()?.len() == 0 {
            return Ok(Self {
                inner: Backing::Empty,
            });
        }

        // SAFETY: the mapping is read-only and only ever accessed through
        // bounds-checked slice operations.
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self {
            inner: Backing::Mapped(mmap),
        })
    }

    /// Total length of the file in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the file has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The file contents.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match &self.inner {
            Backing::Mapped(mmap) => mmap,
            Backing::Empty => &[],
        }
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for MappedFile {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
