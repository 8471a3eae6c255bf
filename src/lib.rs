//! Adaptor between step-driven decompression engines and Rust's blocking [`Read`](std::io::Read)
//! trait.
//!
//! A [`read::Decoder`] owns a fixed-capacity window of compressed bytes, refills it from the
//! wrapped reader on demand and drives a [`DecoderEngine`] one step at a time until the caller's
//! buffer is full, the compressed stream ends, or the reader runs dry.
//!
//! A read that returns fewer bytes than requested, or zero, is not necessarily the end of the
//! stream. [`Decoder::status`](read::Decoder::status) reports [`DecodeStatus::Success`] only once
//! the engine has decoded the end of the compressed stream; a reader that ran out of data first
//! leaves it at [`DecodeStatus::NeedsMoreInput`]. Callers that prefer an error in that case can
//! enable [`DecoderOptions::fail_on_truncation`].
//!
//! # Feature Organization
//!
//! The generic [`read::Decoder`] accepts any [`DecoderEngine`]. Engines for specific formats are
//! selected via Cargo features:
//!
//!  Feature | Types
//! ---------|------
#![cfg_attr(
    feature = "brotli",
    doc = "`brotli` | [`BrotliDecoder`](crate::read::BrotliDecoder), [`BrotliEngine`](crate::codec::BrotliEngine)"
)]
#![cfg_attr(
    not(feature = "brotli"),
    doc = "`brotli` (*inactive*) | `BrotliDecoder`, `BrotliEngine`"
)]
//!
//! Only decompression is provided; requesting [`Mode::Compress`] fails at construction.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations
)]

mod buffer;
pub mod codec;
mod error;
mod options;
pub mod read;
mod util;

pub use crate::{
    codec::{DecodeStatus, DecoderEngine, StepResult},
    error::{Error, Result},
    options::{DecoderOptions, Mode, DEFAULT_BUFFER_CAPACITY},
};
