//! Display names for tags and labels for enumerated tag values.

use oxitiff_format::tags;

/// Display name of a baseline tag.
pub fn tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        tags::IMAGE_WIDTH => "ImageWidth",
        tags::IMAGE_LENGTH => "ImageHeight",
        tags::BITS_PER_SAMPLE => "BitsPerSample",
        tags::COMPRESSION => "Compression",
        tags::PHOTOMETRIC_INTERPRETATION => "PhotometricInterpretation",
        tags::STRIP_OFFSETS => "StripOffsets",
        tags::ORIENTATION => "Orientation",
        tags::SAMPLES_PER_PIXEL => "SamplesPerPixel",
        tags::ROWS_PER_STRIP => "RowsPerStrip",
        tags::STRIP_BYTE_COUNTS => "StripByteCounts",
        tags::X_RESOLUTION => "XResolution",
        tags::Y_RESOLUTION => "YResolution",
        tags::PLANAR_CONFIGURATION => "PlanarConfiguration",
        tags::PAGE_NAME => "PageName",
        tags::RESOLUTION_UNIT => "ResolutionUnit",
        tags::PREDICTOR => "Predictor",
        tags::SAMPLE_FORMAT => "SampleFormat",
        _ => return None,
    })
}

/// Label for an enumerated value of `tag`, if the tag has a table and
/// the value is in it.
pub fn value_label(tag: u16, value: u32) -> Option<&'static str> {
    match tag {
        tags::COMPRESSION => compression_label(value),
        tags::PHOTOMETRIC_INTERPRETATION => photometric_label(value),
        tags::ORIENTATION => orientation_label(value),
        tags::RESOLUTION_UNIT => resolution_unit_label(value),
        tags::PLANAR_CONFIGURATION => planar_label(value),
        tags::PREDICTOR => predictor_label(value),
        _ => None,
    }
}

fn compression_label(value: u32) -> Option<&'static str> {
    Some(match value {
        1 => "Uncompressed",
        2 => "CCITT 1D",
        3 => "Group 3 Fax",
        4 => "Group 4 Fax",
        5 => "LZW",
        6 => "JPEG",
        32773 => "PackBits",
        _ => return None,
    })
}

fn photometric_label(value: u32) -> Option<&'static str> {
    Some(match value {
        0 => "WhiteIsZero",
        1 => "BlackIsZero",
        2 => "RGB",
        3 => "RGB Palette",
        4 => "Transparency mask",
        5 => "CMYK",
        6 => "YCbCr",
        8 => "CIELab",
        _ => return None,
    })
}

fn orientation_label(value: u32) -> Option<&'static str> {
    Some(match value {
        1 => "top-left",
        2 => "top-right",
        3 => "bottom-right",
        4 => "bottom-left",
        5 => "left-top",
        6 => "right-top",
        7 => "right-bottom",
        8 => "left-bottom",
        _ => return None,
    })
}

fn resolution_unit_label(value: u32) -> Option<&'static str> {
    Some(match value {
        1 => "None",
        2 => "Inch",
        3 => "Centimeter",
        _ => return None,
    })
}

fn planar_label(value: u32) -> Option<&'static str> {
    Some(match value {
        1 => "Chunky",
        2 => "Planar",
        _ => return None,
    })
}

fn predictor_label(value: u32) -> Option<&'static str> {
    Some(match value {
        1 => "None",
        2 => "Horizontal differencing",
        _ => return None,
    })
}
