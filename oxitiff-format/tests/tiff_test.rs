//! End-to-end tests over synthesized TIFF files.

mod common;

use common::{Field, IfdSpec, build_tiff, directory_offsets};
use oxitiff_core::TiffError;
use oxitiff_format::{
    Compression, IfdWalker, Predictor, StripOptions, TiffHeader, TiffReader, Value, tags,
};

/// Pack `(code, width)` pairs MSB-first.
fn pack(codes: &[(u16, u8)]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    for &(code, width) in codes {
        acc = (acc << width) | code as u32;
        bits += width;
        while bits >= 8 {
            out.push((acc >> (bits - 8)) as u8);
            bits -= 8;
        }
    }
    if bits > 0 {
        out.push((acc << (8 - bits)) as u8);
    }
    out
}

fn gray_lzw_ifd(width: u16, height: u16, predictor: u16, strips: Vec<Vec<u8>>) -> IfdSpec {
    IfdSpec {
        fields: vec![
            Field::Short(tags::IMAGE_WIDTH, vec![width]),
            Field::Short(tags::IMAGE_LENGTH, vec![height]),
            Field::Short(tags::BITS_PER_SAMPLE, vec![8]),
            Field::Short(tags::COMPRESSION, vec![5]),
            Field::Short(tags::SAMPLES_PER_PIXEL, vec![1]),
            Field::Short(tags::PREDICTOR, vec![predictor]),
        ],
        strips,
    }
}

#[test]
fn test_scenario_lzw_with_predictor() {
    let stream = oxitiff_lzw::compress_tiff(&[10, 3, 3, 3]).unwrap();
    let data = build_tiff(&[gray_lzw_ifd(4, 1, 2, vec![stream])]);

    let reader = TiffReader::new(&data).unwrap();
    assert_eq!(reader.directories().len(), 1);

    let descriptor = reader.descriptor(&reader.directories()[0]);
    assert_eq!(descriptor.compression(), Compression::Lzw);
    assert_eq!(descriptor.predictor(), Predictor::HorizontalDifferencing);

    let decoder = reader.strip_decoder(&descriptor, StripOptions::default());
    let strips: Vec<_> = decoder.strips().collect();
    assert_eq!(strips.len(), 1);
    let strip = strips[0].as_ref().unwrap();
    assert_eq!(strip.data, vec![10, 13, 16, 19]);
    assert!(!strip.truncated);
}

#[test]
fn test_scenario_uncompressed_ignores_predictor() {
    let payload: Vec<u8> = (0..37).map(|i| (i * 7) as u8).collect();
    let data = build_tiff(&[IfdSpec {
        fields: vec![
            Field::Short(tags::IMAGE_WIDTH, vec![37]),
            Field::Short(tags::IMAGE_LENGTH, vec![1]),
            Field::Short(tags::COMPRESSION, vec![1]),
            Field::Short(tags::PREDICTOR, vec![2]),
        ],
        strips: vec![payload.clone()],
    }]);

    let reader = TiffReader::new(&data).unwrap();
    let descriptor = reader.descriptor(&reader.directories()[0]);
    let decoder = reader.strip_decoder(&descriptor, StripOptions::default());
    let strip = decoder.decode(0).unwrap();
    assert_eq!(strip.length as usize, payload.len());
    assert_eq!(strip.data, payload);
}

#[test]
fn test_scenario_corrupt_code_fails_only_its_strip() {
    let good = oxitiff_lzw::compress_tiff(&[1, 1, 1, 1]).unwrap();
    // CLEAR, 'x', then 400 while only 258 is defined.
    let bad = pack(&[(256, 9), (120, 9), (400, 9), (257, 9)]);
    let data = build_tiff(&[IfdSpec {
        fields: vec![
            Field::Short(tags::IMAGE_WIDTH, vec![4]),
            Field::Short(tags::IMAGE_LENGTH, vec![3]),
            Field::Short(tags::ROWS_PER_STRIP, vec![1]),
            Field::Short(tags::COMPRESSION, vec![5]),
        ],
        strips: vec![good.clone(), bad, good],
    }]);

    let reader = TiffReader::new(&data).unwrap();
    let descriptor = reader.descriptor(&reader.directories()[0]);
    let decoder = reader.strip_decoder(&descriptor, StripOptions::default());
    let results: Vec<_> = decoder.strips().collect();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().data, vec![1, 1, 1, 1]);
    assert!(matches!(results[1], Err(TiffError::BitstreamCorrupt { .. })));
    assert_eq!(results[2].as_ref().unwrap().data, vec![1, 1, 1, 1]);
}

#[test]
fn test_truncated_strip_keeps_prefix() {
    // Twice the declared row is stored; only the first row fits.
    let stream = oxitiff_lzw::compress_tiff(&[5, 1, 1, 1, 9, 9, 9, 9]).unwrap();
    let data = build_tiff(&[gray_lzw_ifd(4, 1, 2, vec![stream])]);

    let reader = TiffReader::new(&data).unwrap();
    let descriptor = reader.descriptor(&reader.directories()[0]);
    let decoder = reader.strip_decoder(&descriptor, StripOptions::default());
    let strip = decoder.decode(0).unwrap();

    assert!(strip.truncated);
    assert_eq!(strip.data, vec![5, 6, 7, 8]);
    assert!(matches!(
        strip.truncation(),
        Some(TiffError::OutputTruncated { produced: 4 })
    ));
}

#[test]
fn test_rgb_strips_with_predictor() {
    let (width, rows_per_strip, height) = (5usize, 2usize, 5usize);
    let image: Vec<u8> = (0..width * 3 * height).map(|i| (i * 13 % 251) as u8).collect();
    let stride = width * 3;

    let strips: Vec<Vec<u8>> = image
        .chunks(stride * rows_per_strip)
        .map(|chunk| {
            let mut diffed = chunk.to_vec();
            oxitiff_format::predictor::apply(&mut diffed, stride, 3);
            oxitiff_lzw::compress_tiff(&diffed).unwrap()
        })
        .collect();
    assert_eq!(strips.len(), 3);

    let data = build_tiff(&[IfdSpec {
        fields: vec![
            Field::Short(tags::IMAGE_WIDTH, vec![width as u16]),
            Field::Short(tags::IMAGE_LENGTH, vec![height as u16]),
            Field::Short(tags::BITS_PER_SAMPLE, vec![8, 8, 8]),
            Field::Short(tags::COMPRESSION, vec![5]),
            Field::Short(tags::PHOTOMETRIC_INTERPRETATION, vec![2]),
            Field::Short(tags::SAMPLES_PER_PIXEL, vec![3]),
            Field::Short(tags::ROWS_PER_STRIP, vec![rows_per_strip as u16]),
            Field::Short(tags::PREDICTOR, vec![2]),
        ],
        strips,
    }]);

    let reader = TiffReader::new(&data).unwrap();
    let descriptor = reader.descriptor(&reader.directories()[0]);
    assert!(descriptor.issues.is_empty());
    let decoder = reader.strip_decoder(&descriptor, StripOptions::default());

    let decoded: Vec<u8> = decoder
        .strips()
        .map(|s| s.unwrap())
        .flat_map(|s| s.data)
        .collect();
    assert_eq!(decoded, image);
}

#[test]
fn test_chain_of_n_directories() {
    for n in [1usize, 2, 5, 12] {
        let ifds: Vec<IfdSpec> = (0..n)
            .map(|i| IfdSpec {
                fields: vec![Field::Long(tags::IMAGE_WIDTH, vec![i as u32 + 1])],
                strips: Vec::new(),
            })
            .collect();
        let data = build_tiff(&ifds);
        let header = TiffHeader::parse(&data).unwrap();

        let dirs: Vec<_> = IfdWalker::new(&data, header.first_ifd_offset)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(dirs.len(), n);
        for (i, ifd) in dirs.iter().enumerate() {
            let width = ifd.entry(tags::IMAGE_WIDTH).unwrap().resolve_scalar().unwrap();
            assert_eq!(width, i as u32 + 1);
        }
        assert_eq!(dirs.last().unwrap().next_offset, None);
    }
}

#[test]
fn test_cycle_is_rejected() {
    let ifds = vec![IfdSpec::default(), IfdSpec::default(), IfdSpec::default()];
    let mut data = build_tiff(&ifds);
    let offsets = directory_offsets(&data);
    assert_eq!(offsets.len(), 3);

    // Point the last directory back at the second one.
    let pointer_at = offsets[2] + 2;
    data[pointer_at..pointer_at + 4].copy_from_slice(&(offsets[1] as u32).to_le_bytes());

    let results: Vec<_> = IfdWalker::new(&data, offsets[0] as u32).collect();
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(Result::is_ok));
    assert!(matches!(results[3], Err(TiffError::CorruptDirectory { .. })));

    let err = TiffReader::new(&data).unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_short_scalar_and_array_resolution() {
    let data = build_tiff(&[IfdSpec {
        fields: vec![
            Field::Short(tags::IMAGE_WIDTH, vec![0x1234]),
            Field::Short(tags::BITS_PER_SAMPLE, vec![8, 16, 32]),
        ],
        strips: Vec::new(),
    }]);
    let reader = TiffReader::new(&data).unwrap();
    let ifd = &reader.directories()[0];

    let width = ifd.entry(tags::IMAGE_WIDTH).unwrap();
    assert!(width.is_inline());
    assert_eq!(width.resolve_scalar().unwrap(), 0x1234);

    let bits = ifd.entry(tags::BITS_PER_SAMPLE).unwrap();
    assert!(!bits.is_inline());
    assert_eq!(bits.resolve_array(&data).unwrap(), vec![8, 16, 32]);
    assert_eq!(bits.resolve_array_element(&data, 2).unwrap(), 32);
    assert!(matches!(
        bits.resolve_array_element(&data, 3),
        Err(TiffError::OutOfRange { .. })
    ));
}

#[test]
fn test_values_in_file_order() {
    let data = build_tiff(&[IfdSpec {
        fields: vec![
            Field::Long(tags::IMAGE_WIDTH, vec![640]),
            Field::Long(tags::IMAGE_LENGTH, vec![480]),
            Field::Rational(tags::X_RESOLUTION, 72, 1),
            Field::Ascii(tags::PAGE_NAME, "cover page"),
            Field::Byte(40000, vec![1, 2, 3, 4, 5]),
        ],
        strips: Vec::new(),
    }]);
    let reader = TiffReader::new(&data).unwrap();
    let ifd = &reader.directories()[0];

    let values: Vec<_> = ifd
        .values(reader.data())
        .map(|(e, v)| (e.tag, v.unwrap()))
        .collect();
    assert_eq!(values.len(), 5);
    assert_eq!(values[0], (tags::IMAGE_WIDTH, Value::Scalar(640)));
    assert_eq!(values[1], (tags::IMAGE_LENGTH, Value::Scalar(480)));
    assert!(matches!(values[2].1, Value::Rational(r) if r.numerator == 72 && r.denominator == 1));
    assert_eq!(values[3].1, Value::Ascii(b"cover page".to_vec()));
    assert_eq!(values[4].1, Value::Array(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_structural_header_errors() {
    assert!(matches!(
        TiffReader::new(b"II*"),
        Err(TiffError::InvalidHeader { .. })
    ));
    assert!(matches!(
        TiffReader::new(b"MM\0*\0\0\0\x08"),
        Err(TiffError::UnsupportedByteOrder { .. })
    ));
    assert!(matches!(
        TiffReader::new(b"II+\0\x08\0\0\0"),
        Err(TiffError::BadMagic { found: 43 })
    ));
}
