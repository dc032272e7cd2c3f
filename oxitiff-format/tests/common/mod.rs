//! In-memory builder for little-endian TIFF files.

#![allow(dead_code)]

/// One field of a directory under construction.
#[derive(Debug, Clone)]
pub enum Field {
    Byte(u16, Vec<u8>),
    Ascii(u16, &'static str),
    Short(u16, Vec<u16>),
    Long(u16, Vec<u32>),
    Rational(u16, u32, u32),
}

impl Field {
    fn tag(&self) -> u16 {
        match self {
            Field::Byte(tag, _)
            | Field::Ascii(tag, _)
            | Field::Short(tag, _)
            | Field::Long(tag, _)
            | Field::Rational(tag, _, _) => *tag,
        }
    }

    /// (tag, type code, count, value bytes)
    fn encode(&self) -> (u16, u16, u32, Vec<u8>) {
        match self {
            Field::Byte(tag, v) => (*tag, 1, v.len() as u32, v.clone()),
            Field::Ascii(tag, s) => {
                let mut bytes = s.as_bytes().to_vec();
                bytes.push(0);
                (*tag, 2, bytes.len() as u32, bytes)
            }
            Field::Short(tag, v) => (
                *tag,
                3,
                v.len() as u32,
                v.iter().flat_map(|x| x.to_le_bytes()).collect(),
            ),
            Field::Long(tag, v) => (
                *tag,
                4,
                v.len() as u32,
                v.iter().flat_map(|x| x.to_le_bytes()).collect(),
            ),
            Field::Rational(tag, n, d) => {
                let mut bytes = n.to_le_bytes().to_vec();
                bytes.extend_from_slice(&d.to_le_bytes());
                (*tag, 5, 1, bytes)
            }
        }
    }
}

/// A directory: its fields and the stored bytes of each strip.
///
/// StripOffsets and StripByteCounts are added automatically when there
/// are strips.
#[derive(Debug, Clone, Default)]
pub struct IfdSpec {
    pub fields: Vec<Field>,
    pub strips: Vec<Vec<u8>>,
}

/// Lay out a complete file: header, then per directory its strips,
/// out-of-line values and the entry table.
pub fn build_tiff(ifds: &[IfdSpec]) -> Vec<u8> {
    let mut buf = b"II*\0\0\0\0\0".to_vec();
    let mut pointer_at = 4usize;

    for ifd in ifds {
        let mut offsets = Vec::new();
        let mut counts = Vec::new();
        for strip in &ifd.strips {
            offsets.push(buf.len() as u32);
            counts.push(strip.len() as u32);
            buf.extend_from_slice(strip);
        }

        let mut fields = ifd.fields.clone();
        if !ifd.strips.is_empty() {
            fields.push(Field::Long(273, offsets));
            fields.push(Field::Long(279, counts));
        }
        fields.sort_by_key(Field::tag);

        let mut entries = Vec::new();
        for field in &fields {
            let (tag, type_code, count, bytes) = field.encode();
            let mut raw = [0u8; 4];
            if bytes.len() <= 4 {
                raw[..bytes.len()].copy_from_slice(&bytes);
            } else {
                if buf.len() % 2 == 1 {
                    buf.push(0);
                }
                raw = (buf.len() as u32).to_le_bytes();
                buf.extend_from_slice(&bytes);
            }
            entries.push((tag, type_code, count, raw));
        }

        if buf.len() % 2 == 1 {
            buf.push(0);
        }
        let ifd_offset = buf.len() as u32;
        buf[pointer_at..pointer_at + 4].copy_from_slice(&ifd_offset.to_le_bytes());

        buf.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        for (tag, type_code, count, raw) in entries {
            buf.extend_from_slice(&tag.to_le_bytes());
            buf.extend_from_slice(&type_code.to_le_bytes());
            buf.extend_from_slice(&count.to_le_bytes());
            buf.extend_from_slice(&raw);
        }
        pointer_at = buf.len();
        buf.extend_from_slice(&[0; 4]);
    }

    buf
}

/// Offsets of every directory in a built file, in chain order.
pub fn directory_offsets(data: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut next = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
    while next != 0 {
        offsets.push(next);
        let count = u16::from_le_bytes([data[next], data[next + 1]]) as usize;
        let at = next + 2 + count * 12;
        next = u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]) as usize;
    }
    offsets
}
