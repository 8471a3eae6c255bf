use std::io;

/// Errors raised by a [`Decoder`](crate::read::Decoder).
///
/// ```text
///   Error
///   ├── Argument          ← offset/count outside the destination buffer
///   ├── Unsupported       ← seek, length or position access
///   ├── InvalidOperation  ← writing to a decoder
///   ├── Disposed          ← any operation after `close()`
///   ├── InvalidData       ← the engine rejected the compressed stream
///   ├── BufferOverflow    ← the source returned more bytes than it was offered
///   ├── Truncated         ← source exhausted before the stream finished (opt-in)
///   └── Io                ← from the underlying source
/// ```
///
/// Every variant converts into [`std::io::Error`] so the decoder can be used through the standard
/// IO traits.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `offset`/`count` pair does not describe a region of the destination buffer.
    #[error("invalid read region: offset {offset} + count {count} exceeds buffer length {len}")]
    Argument {
        /// Requested start of the region.
        offset: usize,
        /// Requested length of the region.
        count: usize,
        /// Length of the destination buffer.
        len: usize,
    },

    /// The operation is never available on a decoder.
    #[error("{0} is not supported by a decompression stream")]
    Unsupported(&'static str),

    /// The operation is not available in the decoder's mode.
    #[error("{0} is not valid on a decompression stream")]
    InvalidOperation(&'static str),

    /// The decoder has been closed.
    #[error("decoder has been closed")]
    Disposed,

    /// The engine reported a failure while decoding.
    #[error("compressed stream is corrupt (engine error code {code})")]
    InvalidData {
        /// Engine-defined error code.
        code: i32,
    },

    /// A read from the source claimed more bytes than the input window could hold.
    #[error("source returned {read} bytes into an input window with {capacity} bytes free")]
    BufferOverflow {
        /// Bytes the source claimed to have read.
        read: usize,
        /// Bytes that were available in the input window.
        capacity: usize,
    },

    /// The source was exhausted before the compressed stream finished.
    #[error("compressed stream ended before the decoder finished")]
    Truncated,

    /// Failure reading from the underlying source.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A specialized [`Result`](std::result::Result) for decoder operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::Io(inner) => return inner,
            Error::Argument { .. } | Error::InvalidOperation(_) => io::ErrorKind::InvalidInput,
            Error::Unsupported(_) => io::ErrorKind::Unsupported,
            Error::Disposed => io::ErrorKind::Other,
            Error::InvalidData { .. } | Error::BufferOverflow { .. } => io::ErrorKind::InvalidData,
            Error::Truncated => io::ErrorKind::UnexpectedEof,
        };

        io::Error::new(kind, err)
    }
}
