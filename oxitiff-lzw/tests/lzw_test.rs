//! LZW integration tests.

use oxitiff_lzw::{
    LzwConfig, LzwDecoder, LzwEncoder, LzwError, compress_tiff, decompress_tiff,
};

/// Pseudo-random bytes that compress poorly, so nearly every byte costs a code.
fn noise(len: usize) -> Vec<u8> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..len)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect()
}

fn roundtrip(original: &[u8]) {
    let compressed = compress_tiff(original).expect("compression failed");
    let decoded = decompress_tiff(&compressed, original.len()).expect("decompression failed");
    assert_eq!(decoded.len(), original.len());
    assert_eq!(decoded.data, original);
    assert!(!decoded.truncated);
}

#[test]
fn test_lzw_roundtrip_simple() {
    roundtrip(b"TOBEORNOTTOBEORTOBEORNOT");
}

#[test]
fn test_lzw_roundtrip_across_every_width() {
    // ~2100 codes: crosses the 511, 1023 and 2047 switch points without a reset.
    roundtrip(&noise(2200));
}

#[test]
fn test_lzw_roundtrip_forces_clear() {
    // Far more than 4094 codes, so the table is reset several times.
    roundtrip(&noise(20_000));
}

#[test]
fn test_lzw_roundtrip_large_repetitive() {
    roundtrip(&b"The quick brown fox jumps over the lazy dog. ".repeat(2_000));
}

#[test]
fn test_lzw_roundtrip_gradient_image() {
    let (width, height) = (512usize, 512usize);
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    roundtrip(&data);
}

#[test]
fn test_lzw_multiple_sizes() {
    for size in [1, 10, 50, 255, 256, 257, 500, 1000, 4095, 4096, 4097, 70_000] {
        roundtrip(&vec![b'A'; size]);
    }
}

#[test]
fn test_lzw_all_zeros_compresses() {
    let original = vec![0u8; 1000];
    let compressed = compress_tiff(&original).expect("compression failed");
    assert!(compressed.len() < original.len() / 5);
    roundtrip(&original);
}

#[test]
fn test_decodes_weezl_streams() {
    // An independent TIFF-LZW encoder must agree on widths and codes.
    for original in [
        b"TOBEORNOTTOBEORTOBEORNOT".to_vec(),
        noise(2200),
        b"This is a test of compression! ".repeat(10),
    ] {
        let compressed = weezl::encode::Encoder::with_tiff_size_switch(weezl::BitOrder::Msb, 8)
            .encode(&original)
            .expect("weezl encoding failed");
        let decoded = decompress_tiff(&compressed, original.len()).expect("decoding failed");
        assert_eq!(decoded.data, original);
    }
}

#[test]
fn test_weezl_decodes_our_streams() {
    let original = noise(2200);
    let compressed = compress_tiff(&original).expect("compression failed");
    let decoded = weezl::decode::Decoder::with_tiff_size_switch(weezl::BitOrder::Msb, 8)
        .decode(&compressed)
        .expect("weezl decoding failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_truncated_input_reports_eof() {
    let original = noise(600);
    let compressed = compress_tiff(&original).expect("compression failed");
    let cut = &compressed[..compressed.len() / 2];

    let mut decoder = LzwDecoder::new(LzwConfig::TIFF).unwrap();
    assert!(matches!(
        decoder.decode(cut, original.len()),
        Err(LzwError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_capacity_bounds_output() {
    let original = vec![b'Z'; 10_000];
    let compressed = compress_tiff(&original).expect("compression failed");

    for capacity in [1, 99, 1000, 9_999] {
        let decoded = decompress_tiff(&compressed, capacity).expect("decoding failed");
        assert_eq!(decoded.len(), capacity);
        assert!(decoded.truncated);
        assert!(decoded.data.iter().all(|&b| b == b'Z'));
    }
}

#[test]
fn test_encoder_and_decoder_are_reusable() {
    let mut encoder = LzwEncoder::new(LzwConfig::TIFF).unwrap();
    let mut decoder = LzwDecoder::new(LzwConfig::TIFF).unwrap();

    for original in [noise(5000), noise(300), b"ABABABABAB".to_vec()] {
        let compressed = encoder.encode(&original).unwrap();
        let decoded = decoder.decode(&compressed, original.len()).unwrap();
        assert_eq!(decoded.data, original);
    }
}
