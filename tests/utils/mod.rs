#![allow(unused)] // Different tests use a different subset of functions

mod input_stream;
mod track_dropped;

pub use self::{
    input_stream::{ChunkedReader, InputStream},
    track_dropped::TrackDropped,
};
pub use brotli_decode_stream::{
    read::BrotliDecoder, DecodeStatus, DecoderOptions, Error, DEFAULT_BUFFER_CAPACITY,
};
pub use std::iter::FromIterator;

use std::io::{Read, Write};

pub fn compress(bytes: &[u8]) -> Vec<u8> {
    let mut compressed = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 5, 22);
        writer.write_all(bytes).unwrap();
    }
    compressed
}

/// Random bytes, incompressible enough that the compressed stream is longer than the input.
pub fn random_bytes(len: usize) -> Vec<u8> {
    Vec::from_iter((0..len).map(|_| rand::random()))
}

/// Reads `read` to its end using destination buffers of `chunk_size` bytes.
pub fn read_chunked(mut read: impl Read, chunk_size: usize) -> Vec<u8> {
    let mut output = Vec::new();
    let mut chunk = vec![0; chunk_size];
    loop {
        match read.read(&mut chunk).unwrap() {
            0 => break,
            len => output.extend_from_slice(&chunk[..len]),
        }
    }
    output
}

/// Reads until the decoder reports the end of the stream, retrying short reads caused by a
/// momentarily dry source.
pub fn read_until_success<R: Read>(decoder: &mut BrotliDecoder<R>, chunk_size: usize) -> Vec<u8> {
    let mut output = Vec::new();
    let mut chunk = vec![0; chunk_size];
    let mut idle = 0;
    while decoder.status() != DecodeStatus::Success {
        match decoder.read(&mut chunk).unwrap() {
            0 => {
                idle += 1;
                assert!(idle < 1_000, "decoder made no progress");
            }
            len => {
                idle = 0;
                output.extend_from_slice(&chunk[..len]);
            }
        }
    }
    output
}

/// A valid header for an uncompressed-window stream followed by a metadata block with its
/// reserved bit set.
pub const CORRUPT: &[u8] = &[0x1c, 0x00, 0x00, 0x00];
