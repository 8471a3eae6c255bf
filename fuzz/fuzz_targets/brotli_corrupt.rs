#![no_main]
use libfuzzer_sys::fuzz_target;

use brotli_decode_stream::{read::BrotliDecoder, DecodeStatus};
use std::io::Read;

// Arbitrary input must end in success, an error, or a starved short read; never a panic or hang.
fuzz_target!(|data: &[u8]| {
    let mut decoder = BrotliDecoder::new(data);
    let mut buf = [0u8; 512];
    loop {
        match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(_) => continue,
            Err(_) => {
                assert_eq!(decoder.status(), DecodeStatus::Error);
                break;
            }
        }
    }
    assert_eq!(decoder.read(&mut buf).is_ok(), decoder.status() != DecodeStatus::Error);
});
