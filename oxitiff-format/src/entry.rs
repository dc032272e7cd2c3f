//! Directory entries and their value resolver.
//!
//! An entry is 12 bytes: tag, field type, count and a 4-byte value field.
//! When `count * element_size` fits in those 4 bytes the value is stored
//! inline; otherwise the field holds the file offset of the value bytes.
//! That size rule alone decides inline versus indirect, never the tag.
//!
//! All accessors are pure reads over the file buffer and return a typed
//! error instead of a default when the entry does not fit the request.

use crate::field::{FieldType, INLINE_CAPACITY};
use oxitiff_core::bytes::{read_u16_le, read_u32_le, slice_at};
use oxitiff_core::error::{Result, TiffError};
use std::fmt;

/// Size of one directory entry on disk.
pub const ENTRY_LEN: usize = 12;

/// A raw directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tag number.
    pub tag: u16,
    /// Field type.
    pub field_type: FieldType,
    /// Number of elements (not bytes).
    pub count: u32,
    /// The value field, either the value itself or an offset.
    pub raw: [u8; 4],
}

/// Unsigned rational number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    /// Numerator.
    pub numerator: u32,
    /// Denominator.
    pub denominator: u32,
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// A decoded entry value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single unsigned integer.
    Scalar(u32),
    /// Several unsigned integers.
    Array(Vec<u32>),
    /// Rational number.
    Rational(Rational),
    /// ASCII bytes without the trailing NUL.
    Ascii(Vec<u8>),
}

impl DirectoryEntry {
    /// Decode an entry from its 12 on-disk bytes.
    ///
    /// Returns `None` if fewer than 12 bytes are available at `offset`.
    pub fn read(data: &[u8], offset: usize) -> Option<Self> {
        let bytes = slice_at(data, offset, ENTRY_LEN)?;
        Some(Self {
            tag: read_u16_le(bytes, 0)?,
            field_type: FieldType::from_u16(read_u16_le(bytes, 2)?),
            count: read_u32_le(bytes, 4)?,
            raw: [bytes[8], bytes[9], bytes[10], bytes[11]],
        })
    }

    /// The value field read as a little-endian offset.
    pub fn value_offset(&self) -> u32 {
        u32::from_le_bytes(self.raw)
    }

    /// Total size of the value in bytes, `None` for unknown types.
    pub fn value_len(&self) -> Option<u64> {
        self.field_type
            .element_size()
            .map(|size| size * u64::from(self.count))
    }

    /// Whether the value is stored in the entry itself.
    pub fn is_inline(&self) -> bool {
        self.value_len().is_some_and(|len| len <= INLINE_CAPACITY)
    }

    /// Borrow the raw value bytes, inline or from the buffer.
    pub fn value_bytes<'a>(&'a self, data: &'a [u8]) -> Result<&'a [u8]> {
        let len = self.value_len().ok_or_else(|| {
            TiffError::unresolvable(
                self.tag,
                format!("field type {} has no known size", self.field_type.as_u16()),
            )
        })?;

        if len <= INLINE_CAPACITY {
            return Ok(&self.raw[..len as usize]);
        }

        let offset = self.value_offset();
        usize::try_from(len)
            .ok()
            .and_then(|len| slice_at(data, offset as usize, len))
            .ok_or_else(|| {
                TiffError::out_of_range(format!(
                    "tag {}: {} value bytes at offset {} exceed file of {} bytes",
                    self.tag,
                    len,
                    offset,
                    data.len()
                ))
            })
    }

    /// Resolve a single-valued unsigned integer entry.
    ///
    /// Valid for Byte, Short and Long with a count of 1; the value is read
    /// from the start of the inline field at the type's width.
    pub fn resolve_scalar(&self) -> Result<u32> {
        self.require_integer()?;
        if self.count != 1 {
            return Err(TiffError::unresolvable(
                self.tag,
                format!("expected a single value, entry has {}", self.count),
            ));
        }
        Ok(self.element_at(&self.raw, 0))
    }

    /// Resolve element `index` of an unsigned integer entry.
    pub fn resolve_array_element(&self, data: &[u8], index: u32) -> Result<u32> {
        if self.count == 1 {
            if index != 0 {
                return Err(self.index_error(index));
            }
            return self.resolve_scalar();
        }

        self.require_integer()?;
        if index >= self.count {
            return Err(self.index_error(index));
        }
        let bytes = self.value_bytes(data)?;
        Ok(self.element_at(bytes, index as usize))
    }

    /// Resolve every element of an unsigned integer entry.
    pub fn resolve_array(&self, data: &[u8]) -> Result<Vec<u32>> {
        self.require_integer()?;
        let bytes = self.value_bytes(data)?;
        Ok((0..self.count as usize)
            .map(|i| self.element_at(bytes, i))
            .collect())
    }

    /// Resolve a Rational entry (its first element if there are several).
    pub fn resolve_rational(&self, data: &[u8]) -> Result<Rational> {
        if self.field_type != FieldType::Rational {
            return Err(self.type_error("RATIONAL"));
        }
        if self.count == 0 {
            return Err(TiffError::unresolvable(self.tag, "rational with count 0"));
        }
        let bytes = self.value_bytes(data)?;
        Ok(Rational {
            numerator: read_u32_le(bytes, 0).unwrap_or_default(),
            denominator: read_u32_le(bytes, 4).unwrap_or_default(),
        })
    }

    /// Resolve an ASCII entry, dropping the trailing NUL terminator(s).
    pub fn resolve_ascii(&self, data: &[u8]) -> Result<Vec<u8>> {
        if self.field_type != FieldType::Ascii {
            return Err(self.type_error("ASCII"));
        }
        let bytes = self.value_bytes(data)?;
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(bytes[..end].to_vec())
    }

    /// Resolve the entry to its natural [`Value`].
    pub fn resolve(&self, data: &[u8]) -> Result<Value> {
        match self.field_type {
            FieldType::Byte | FieldType::Short | FieldType::Long => {
                if self.count == 1 {
                    self.resolve_scalar().map(Value::Scalar)
                } else {
                    self.resolve_array(data).map(Value::Array)
                }
            }
            FieldType::Rational => self.resolve_rational(data).map(Value::Rational),
            FieldType::Ascii => self.resolve_ascii(data).map(Value::Ascii),
            other => Err(TiffError::unresolvable(
                self.tag,
                format!("field type {} is not decoded", other.name()),
            )),
        }
    }

    fn require_integer(&self) -> Result<()> {
        if self.field_type.is_unsigned_integer() {
            Ok(())
        } else {
            Err(self.type_error("BYTE, SHORT or LONG"))
        }
    }

    /// Read element `index` from `bytes`, already bounds-checked by the caller.
    fn element_at(&self, bytes: &[u8], index: usize) -> u32 {
        match self.field_type {
            FieldType::Byte => bytes.get(index).copied().map_or(0, u32::from),
            FieldType::Short => read_u16_le(bytes, index * 2).map_or(0, u32::from),
            _ => read_u32_le(bytes, index * 4).unwrap_or_default(),
        }
    }

    fn type_error(&self, expected: &str) -> TiffError {
        TiffError::unresolvable(
            self.tag,
            format!("expected {}, entry is {}", expected, self.field_type.name()),
        )
    }

    fn index_error(&self, index: u32) -> TiffError {
        TiffError::out_of_range(format!(
            "tag {}: index {} with count {}",
            self.tag, index, self.count
        ))
    }
}
