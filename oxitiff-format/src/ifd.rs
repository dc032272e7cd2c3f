//! Image file directories and the chain walker.
//!
//! ```text
//! offset o        u16          entry count n
//! offset o+2      12 * n       entries
//! offset o+2+12n  u32          next directory offset (0 ends the chain)
//! ```

use crate::entry::{DirectoryEntry, ENTRY_LEN, Value};
use oxitiff_core::bytes::{read_u16_le, read_u32_le};
use oxitiff_core::error::{Result, TiffError};
use std::collections::HashSet;
use tracing::debug;

/// One image file directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ifd {
    /// Offset of this directory in the file.
    pub offset: u32,
    /// Entries in file order.
    pub entries: Vec<DirectoryEntry>,
    /// Offset of the next directory, `None` at the end of the chain.
    pub next_offset: Option<u32>,
}

impl Ifd {
    /// Read the directory at `offset`.
    pub fn read(data: &[u8], offset: u32) -> Result<Self> {
        let start = offset as usize;
        let count = read_u16_le(data, start).ok_or_else(|| {
            TiffError::corrupt_directory(
                u64::from(offset),
                format!("entry count lies outside file of {} bytes", data.len()),
            )
        })?;

        let table_start = start + 2;
        let table_len = usize::from(count) * ENTRY_LEN;
        let next_at = table_start.checked_add(table_len);

        let next = next_at
            .and_then(|at| read_u32_le(data, at))
            .ok_or_else(|| {
                TiffError::corrupt_directory(
                    u64::from(offset),
                    format!(
                        "{} entries plus chain pointer run past end of file ({} bytes)",
                        count,
                        data.len()
                    ),
                )
            })?;

        // The table is in bounds once the trailing pointer is.
        let entries = (0..usize::from(count))
            .filter_map(|i| DirectoryEntry::read(data, table_start + i * ENTRY_LEN))
            .collect();

        Ok(Self {
            offset,
            entries,
            next_offset: (next != 0).then_some(next),
        })
    }

    /// Find the first entry with `tag`.
    pub fn entry(&self, tag: u16) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every entry in file order.
    pub fn values<'a>(
        &'a self,
        data: &'a [u8],
    ) -> impl Iterator<Item = (&'a DirectoryEntry, Result<Value>)> + 'a {
        self.entries.iter().map(move |e| (e, e.resolve(data)))
    }
}

/// Iterator over the directory chain.
///
/// The walker never revisits an offset: a chain pointer back to a
/// directory already seen yields [`TiffError::CorruptDirectory`]. After
/// any error the walker is fused.
#[derive(Debug)]
pub struct IfdWalker<'a> {
    data: &'a [u8],
    next: Option<u32>,
    visited: HashSet<u32>,
}

impl<'a> IfdWalker<'a> {
    /// Start walking at `first_offset` (0 yields nothing).
    pub fn new(data: &'a [u8], first_offset: u32) -> Self {
        Self {
            data,
            next: (first_offset != 0).then_some(first_offset),
            visited: HashSet::new(),
        }
    }
}

impl Iterator for IfdWalker<'_> {
    type Item = Result<Ifd>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.next.take()?;

        if !self.visited.insert(offset) {
            return Some(Err(TiffError::corrupt_directory(
                u64::from(offset),
                "directory chain loops back to a visited directory",
            )));
        }

        match Ifd::read(self.data, offset) {
            Ok(ifd) => {
                debug!(
                    offset,
                    entries = ifd.len(),
                    next = ?ifd.next_offset,
                    "read image file directory"
                );
                self.next = ifd.next_offset;
                Some(Ok(ifd))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for IfdWalker<'_> {}
