//! Types which decode compressed data pulled from a blocking [`Read`](std::io::Read) source.

#[macro_use]
mod macros;
mod generic;

pub use self::generic::Decoder;

#[cfg(feature = "brotli")]
mod brotli;

#[cfg(feature = "brotli")]
pub use self::brotli::BrotliDecoder;
