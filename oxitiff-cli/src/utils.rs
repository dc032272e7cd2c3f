//! Utility functions for the CLI.

use oxitiff_format::{Value, tags};
use std::fmt::Write;

/// Hex dump: a `XXXX: ` offset, then up to 16 bytes in 2-byte groups.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (line, chunk) in data.chunks(16).enumerate() {
        let _ = write!(out, "{:04X}: ", line * 16);
        for (i, pair) in chunk.chunks(2).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            for byte in pair {
                let _ = write!(out, "{:02X}", byte);
            }
        }
        out.push('\n');
    }
    out
}

/// Join numbers with commas.
pub fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a decoded value the way the text report shows it.
///
/// Strip arrays are bracketed, per-sample arrays parenthesized; a tag
/// that is always a list keeps its brackets even with one element.
pub fn render_value(tag: u16, value: &Value) -> String {
    let list = match value {
        Value::Scalar(v) => std::slice::from_ref(v),
        Value::Array(values) => values.as_slice(),
        Value::Rational(r) => return r.to_string(),
        Value::Ascii(bytes) => return String::from_utf8_lossy(bytes).into_owned(),
    };

    match tag {
        tags::STRIP_OFFSETS | tags::STRIP_BYTE_COUNTS => format!("[{}]", join(list)),
        tags::BITS_PER_SAMPLE | tags::SAMPLE_FORMAT => format!("({})", join(list)),
        _ => match list {
            [v] => crate::labels::value_label(tag, *v)
                .map_or_else(|| v.to_string(), str::to_string),
            _ => format!("({})", join(list)),
        },
    }
}
