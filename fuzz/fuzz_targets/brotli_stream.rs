#![no_main]
use libfuzzer_sys::fuzz_target;

use brotli_decode_stream::{read::BrotliDecoder, DecodeStatus, DecoderOptions};
use std::io::{Read, Write};

fuzz_target!(|input: (Vec<Vec<u8>>, u8, u8)| {
    let (data, window, read_size) = input;
    let expected: Vec<u8> = data.iter().flatten().copied().collect();

    let mut compressed = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 1, 22);
        for chunk in &data {
            writer.write_all(chunk).unwrap();
        }
    }

    let options = DecoderOptions::new().buffer_capacity(usize::from(window) + 1);
    let mut decoder = BrotliDecoder::with_options(&compressed[..], options).unwrap();
    let mut decoded = Vec::new();
    let mut buf = vec![0; usize::from(read_size) + 1];
    loop {
        match decoder.read(&mut buf).unwrap() {
            0 => break,
            len => decoded.extend_from_slice(&buf[..len]),
        }
    }

    assert_eq!(decoder.status(), DecodeStatus::Success);
    assert_eq!(expected, decoded);
});
