//! TIFF field types.
//!
//! The field type fixes the width of one element, which together with the
//! entry's count decides whether the value lives inline in the entry or
//! at an offset elsewhere in the file.

/// Maximum bytes stored inline in a classic TIFF directory entry.
pub const INLINE_CAPACITY: u64 = 4;

/// TIFF 6.0 field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Unsigned 8-bit integer.
    Byte,
    /// NUL-terminated 7-bit ASCII.
    Ascii,
    /// Unsigned 16-bit integer.
    Short,
    /// Unsigned 32-bit integer.
    Long,
    /// Two `Long`s: numerator, denominator.
    Rational,
    /// Signed 8-bit integer.
    SByte,
    /// Opaque bytes.
    Undefined,
    /// Signed 16-bit integer.
    SShort,
    /// Signed 32-bit integer.
    SLong,
    /// Two `SLong`s.
    SRational,
    /// IEEE single precision.
    Float,
    /// IEEE double precision.
    Double,
    /// Type code outside TIFF 6.0.
    Unknown(u16),
}

impl FieldType {
    /// Map a raw type code.
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => Self::Byte,
            2 => Self::Ascii,
            3 => Self::Short,
            4 => Self::Long,
            5 => Self::Rational,
            6 => Self::SByte,
            7 => Self::Undefined,
            8 => Self::SShort,
            9 => Self::SLong,
            10 => Self::SRational,
            11 => Self::Float,
            12 => Self::Double,
            other => Self::Unknown(other),
        }
    }

    /// The raw type code.
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Byte => 1,
            Self::Ascii => 2,
            Self::Short => 3,
            Self::Long => 4,
            Self::Rational => 5,
            Self::SByte => 6,
            Self::Undefined => 7,
            Self::SShort => 8,
            Self::SLong => 9,
            Self::SRational => 10,
            Self::Float => 11,
            Self::Double => 12,
            Self::Unknown(code) => code,
        }
    }

    /// Size of one element in bytes, `None` for unknown types.
    pub fn element_size(self) -> Option<u64> {
        match self {
            Self::Byte | Self::Ascii | Self::SByte | Self::Undefined => Some(1),
            Self::Short | Self::SShort => Some(2),
            Self::Long | Self::SLong | Self::Float => Some(4),
            Self::Rational | Self::SRational | Self::Double => Some(8),
            Self::Unknown(_) => None,
        }
    }

    /// Whether this is one of the unsigned integer types.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Long)
    }

    /// Display name of the type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "BYTE",
            Self::Ascii => "ASCII",
            Self::Short => "SHORT",
            Self::Long => "LONG",
            Self::Rational => "RATIONAL",
            Self::SByte => "SBYTE",
            Self::Undefined => "UNDEFINED",
            Self::SShort => "SSHORT",
            Self::SLong => "SLONG",
            Self::SRational => "SRATIONAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}
