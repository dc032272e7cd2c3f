//! Inspect command implementation.

use crate::labels::{tag_name, value_label};
use crate::utils::{hex_dump, render_value};
use oxitiff_core::{MappedFile, TiffError};
use oxitiff_format::header::BIG_ENDIAN_MARKER;
use oxitiff_format::{
    DirectoryEntry, Ifd, ImageDescriptor, Strip, StripOptions, TiffHeader, TiffReader, Value,
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Options for inspecting a file.
pub struct InspectOptions {
    pub strips: bool,
    pub json: bool,
    pub strip_options: StripOptions,
}

/// JSON form of one directory entry.
#[derive(Debug, Serialize)]
struct EntryJson {
    tag: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    field_type: &'static str,
    count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON form of one strip.
#[derive(Debug, Serialize)]
struct StripJson {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded_length: Option<usize>,
    truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON form of one directory.
#[derive(Debug, Serialize)]
struct DirectoryJson {
    offset: u32,
    entries: Vec<EntryJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strips: Option<Vec<StripJson>>,
}

/// JSON report for a whole file.
#[derive(Debug, Serialize)]
struct FileJson {
    file: String,
    size: usize,
    byte_order: &'static str,
    directories: Vec<DirectoryJson>,
}

/// Byte order named by the header, if the header gets that far.
fn byte_order(data: &[u8]) -> Option<&'static str> {
    match TiffHeader::parse(data) {
        Ok(_) => Some("little-endian"),
        Err(TiffError::UnsupportedByteOrder {
            marker: BIG_ENDIAN_MARKER,
        }) => Some("big-endian"),
        Err(_) => None,
    }
}

pub fn cmd_inspect(path: &Path, options: &InspectOptions) -> Result<(), Box<dyn std::error::Error>> {
    let file = MappedFile::open(path)?;
    if file.is_empty() {
        println!("the file is empty");
        return Ok(());
    }

    let data = file.as_slice();
    // Printed ahead of the directory walk, which rejects big-endian files.
    if let (false, Some(order)) = (options.json, byte_order(data)) {
        println!("byte order: {}", order);
    }

    let reader = TiffReader::new(data)?;
    info!(
        path = %path.display(),
        size = data.len(),
        directories = reader.directories().len(),
        "parsed directory chain"
    );

    if options.json {
        let report = FileJson {
            file: path.display().to_string(),
            size: data.len(),
            byte_order: "little-endian",
            directories: reader
                .directories()
                .iter()
                .map(|ifd| directory_json(&reader, ifd, options))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for ifd in reader.directories() {
        print_directory(&reader, ifd, options);
    }

    Ok(())
}

fn print_directory(reader: &TiffReader<'_>, ifd: &Ifd, options: &InspectOptions) {
    println!("image file directory:");
    for (entry, value) in ifd.values(reader.data()) {
        println!("  {}", entry_line(entry, value));
    }
    if let Some(next) = ifd.next_offset {
        println!("next ifd is at {}", next);
    }

    if !options.strips {
        return;
    }

    let descriptor = scan(reader, ifd);
    let decoder = reader.strip_decoder(&descriptor, options.strip_options);
    for (index, result) in decoder.strips().enumerate() {
        println!();
        println!("Strip {}", index);
        if let Some(strip) = checked_strip(ifd, index, result) {
            print!("{}", hex_dump(&strip.data));
        }
    }
}

fn directory_json(reader: &TiffReader<'_>, ifd: &Ifd, options: &InspectOptions) -> DirectoryJson {
    let entries = ifd
        .values(reader.data())
        .map(|(entry, value)| entry_json(entry, value))
        .collect();

    let strips = options.strips.then(|| {
        let descriptor = scan(reader, ifd);
        let decoder = reader.strip_decoder(&descriptor, options.strip_options);
        decoder
            .strips()
            .enumerate()
            .map(|(index, result)| {
                let error = result.as_ref().err().map(ToString::to_string);
                match checked_strip(ifd, index, result) {
                    Some(strip) => StripJson {
                        index,
                        offset: Some(strip.offset),
                        length: Some(strip.length),
                        decoded_length: Some(strip.data.len()),
                        truncated: strip.truncated,
                        error: None,
                    },
                    None => StripJson {
                        index,
                        offset: descriptor
                            .strip_offsets
                            .as_ref()
                            .and_then(|o| o.get(index).copied()),
                        length: descriptor
                            .strip_byte_counts
                            .as_ref()
                            .and_then(|c| c.get(index).copied()),
                        decoded_length: None,
                        truncated: false,
                        error,
                    },
                }
            })
            .collect()
    });

    DirectoryJson {
        offset: ifd.offset,
        entries,
        next_offset: ifd.next_offset,
        strips,
    }
}

/// Scan a directory and log every entry it could not use.
fn scan(reader: &TiffReader<'_>, ifd: &Ifd) -> ImageDescriptor {
    let descriptor = reader.descriptor(ifd);
    for issue in &descriptor.issues {
        warn!(directory = ifd.offset, tag = issue.tag, "{}", issue.error);
    }
    descriptor
}

/// Log a failed or truncated strip; keep whatever is usable.
fn checked_strip(
    ifd: &Ifd,
    index: usize,
    result: oxitiff_core::Result<Strip>,
) -> Option<Strip> {
    match result {
        Ok(strip) => {
            if let Some(warning) = strip.truncation() {
                warn!(directory = ifd.offset, strip = index, "{}", warning);
            }
            Some(strip)
        }
        Err(e) => {
            warn!(directory = ifd.offset, strip = index, "{}", e);
            None
        }
    }
}

fn entry_line(entry: &DirectoryEntry, value: oxitiff_core::Result<Value>) -> String {
    let raw = || {
        format!(
            "(tag:{} type:{} count:{} value:{})",
            entry.tag,
            entry.field_type.as_u16(),
            entry.count,
            entry.value_offset()
        )
    };

    let Some(name) = tag_name(entry.tag) else {
        return raw();
    };
    match value {
        Ok(value) => format!("{}:{}", name, render_value(entry.tag, &value)),
        Err(e) => {
            warn!(tag = entry.tag, "{}", e);
            raw()
        }
    }
}

fn entry_json(entry: &DirectoryEntry, value: oxitiff_core::Result<Value>) -> EntryJson {
    let mut json = EntryJson {
        tag: entry.tag,
        name: tag_name(entry.tag),
        field_type: entry.field_type.name(),
        count: entry.count,
        value: None,
        label: None,
        error: None,
    };

    match value {
        Ok(value) => {
            if let Value::Scalar(v) = &value {
                json.label = value_label(entry.tag, *v);
            }
            json.value = Some(value_json(&value));
        }
        // Unknown tags are expected to carry types this tool does not decode.
        Err(_) if json.name.is_none() => {
            json.value = Some(serde_json::json!({ "raw": entry.value_offset() }));
        }
        Err(e) => json.error = Some(e.to_string()),
    }
    json
}

fn value_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Scalar(v) => serde_json::json!(v),
        Value::Array(values) => serde_json::json!(values),
        Value::Rational(r) => serde_json::json!({
            "numerator": r.numerator,
            "denominator": r.denominator,
        }),
        Value::Ascii(bytes) => serde_json::json!(String::from_utf8_lossy(bytes)),
    }
}
