mod utils;

use brotli_decode_stream::Mode;
use std::io::{self, Read, Seek, SeekFrom, Write};
use utils::{compress, BrotliDecoder, DecoderOptions, Error, TrackDropped};

#[test]
fn close_releases_reader() {
    let compressed = compress(b"hello world");
    let (reader, dropped) = TrackDropped::new(&compressed[..]);
    let mut decoder = BrotliDecoder::new(reader);

    assert!(decoder.can_read());
    decoder.close();
    assert!(dropped.get());
    assert!(!decoder.can_read());

    decoder.close();
    drop(decoder);
}

#[test]
fn close_can_leave_reader_open() {
    let compressed = compress(b"hello world");
    let (reader, dropped) = TrackDropped::new(&compressed[..]);
    let options = DecoderOptions::new().leave_open(true);
    let mut decoder = BrotliDecoder::with_options(reader, options).unwrap();

    let mut buf = [0u8; 5];
    assert_eq!(decoder.read(&mut buf).unwrap(), 5);
    decoder.close();

    assert!(!dropped.get());
    assert!(!decoder.can_read());
    assert!(decoder.get_ref().is_some());

    let reader = decoder.into_inner().unwrap();
    assert!(!dropped.get());
    drop(reader);
    assert!(dropped.get());
}

#[test]
fn drop_without_close_releases_reader() {
    let compressed = compress(b"hello world");
    let (reader, dropped) = TrackDropped::new(&compressed[..]);
    let mut decoder = BrotliDecoder::new(reader);

    assert_eq!(decoder.read(&mut [0u8; 3]).unwrap(), 3);
    drop(decoder);
    assert!(dropped.get());
}

#[test]
fn read_after_close_fails() {
    let compressed = compress(b"hello world");
    let mut decoder = BrotliDecoder::new(&compressed[..]);
    decoder.close();

    assert!(matches!(
        decoder.read_into(&mut [0u8; 4], 0, 4),
        Err(Error::Disposed)
    ));
    assert!(decoder.read(&mut [0u8; 4]).is_err());
    assert!(decoder.flush().is_err());
}

#[test]
fn invalid_region() {
    let compressed = compress(b"hello world");
    let mut decoder = BrotliDecoder::new(&compressed[..]);
    let mut buf = [0u8; 8];

    assert!(matches!(
        decoder.read_into(&mut buf, 4, 5),
        Err(Error::Argument { .. })
    ));
    assert_eq!(decoder.total_in(), 0);

    assert_eq!(decoder.read_into(&mut buf, 4, 4).unwrap(), 4);
    assert_eq!(&buf[4..], b"hell");
}

#[test]
fn unsupported_surface_regardless_of_state() {
    let compressed = compress(b"hello world");
    let mut decoder = BrotliDecoder::new(&compressed[..]);

    let check = |decoder: &mut BrotliDecoder<&[u8]>| {
        assert!(!decoder.can_seek());
        assert!(!decoder.can_write());
        assert!(matches!(decoder.len(), Err(Error::Unsupported(_))));
        assert!(matches!(decoder.set_len(0), Err(Error::Unsupported(_))));
        assert!(matches!(decoder.position(), Err(Error::Unsupported(_))));
        assert!(matches!(
            decoder.set_position(3),
            Err(Error::Unsupported(_))
        ));
        assert_eq!(
            decoder.seek(SeekFrom::Current(0)).unwrap_err().kind(),
            io::ErrorKind::Unsupported
        );
        assert_eq!(
            decoder.write(b"data").unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    };

    check(&mut decoder);
    decoder.flush().unwrap();

    decoder.read_to_end(&mut Vec::new()).unwrap();
    check(&mut decoder);

    decoder.close();
    check(&mut decoder);
}

#[test]
fn compression_mode_is_rejected() {
    let options = DecoderOptions::new().mode(Mode::Compress);
    let result = BrotliDecoder::with_options(&b""[..], options);

    assert!(matches!(result, Err(Error::Unsupported(_))));
}
