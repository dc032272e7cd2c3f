//! Whole-file entry point.

use crate::descriptor::ImageDescriptor;
use crate::header::TiffHeader;
use crate::ifd::{Ifd, IfdWalker};
use crate::strip::{StripDecoder, StripOptions};
use oxitiff_core::error::Result;

/// A parsed TIFF file over a borrowed buffer.
///
/// Construction validates the header and reads the entire directory
/// chain, so any structural error surfaces before the caller sees a
/// single directory.
#[derive(Debug)]
pub struct TiffReader<'a> {
    data: &'a [u8],
    header: TiffHeader,
    directories: Vec<Ifd>,
}

impl<'a> TiffReader<'a> {
    /// Parse the header and directory chain of `data`.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let header = TiffHeader::parse(data)?;
        let directories = IfdWalker::new(data, header.first_ifd_offset).collect::<Result<_>>()?;
        Ok(Self {
            data,
            header,
            directories,
        })
    }

    /// The file header.
    pub fn header(&self) -> &TiffHeader {
        &self.header
    }

    /// Directories in chain order.
    pub fn directories(&self) -> &[Ifd] {
        &self.directories
    }

    /// The underlying buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Scan a directory's image parameters.
    pub fn descriptor(&self, ifd: &Ifd) -> ImageDescriptor {
        ImageDescriptor::scan(ifd, self.data)
    }

    /// Strip decoder for a scanned directory.
    pub fn strip_decoder<'d>(
        &self,
        descriptor: &'d ImageDescriptor,
        options: StripOptions,
    ) -> StripDecoder<'d>
    where
        'a: 'd,
    {
        StripDecoder::new(self.data, descriptor, options)
    }
}

/// Parse `data` into a [`TiffReader`].
pub fn parse(data: &[u8]) -> Result<TiffReader<'_>> {
    TiffReader::new(data)
}
