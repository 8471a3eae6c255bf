//! The stepping interface between a [`Decoder`](crate::read::Decoder) and a decompression engine.

#[cfg(feature = "brotli")]
mod brotli;

#[cfg(feature = "brotli")]
pub use self::brotli::BrotliEngine;

/// Progress of a decompression stream.
///
/// The status only moves forward: `NeedsMoreInput` may become `Success` or `Error`, and both of
/// those are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The stream is not finished; the engine needs more input or more output space.
    NeedsMoreInput,
    /// The end of the compressed stream has been decoded.
    Success,
    /// The engine rejected the compressed stream.
    Error,
}

impl DecodeStatus {
    /// Whether no further engine interaction can happen in this status.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::NeedsMoreInput)
    }
}

/// Outcome of a single [`DecoderEngine::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Status reported by the engine after this step.
    pub status: DecodeStatus,
    /// Number of bytes taken from the front of the input slice.
    pub consumed: usize,
    /// Number of bytes written to the front of the output slice.
    pub produced: usize,
}

/// A resumable decompression engine driven one step at a time.
///
/// Constructing an engine creates and initializes its session; dropping it releases the session.
pub trait DecoderEngine {
    /// Decode as much of `input` into `output` as possible in one atomic step.
    ///
    /// `consumed` must not exceed `input.len()` and `produced` must not exceed `output.len()`.
    /// Engines that distinguish "needs more output" from "needs more input" report both as
    /// [`DecodeStatus::NeedsMoreInput`].
    fn step(&mut self, input: &[u8], output: &mut [u8]) -> StepResult;

    /// Engine-defined code describing the last failure, meaningful once a step has returned
    /// [`DecodeStatus::Error`].
    fn error_code(&self) -> i32;
}

impl<E: DecoderEngine + ?Sized> DecoderEngine for Box<E> {
    fn step(&mut self, input: &[u8], output: &mut [u8]) -> StepResult {
        (**self).step(input, output)
    }

    fn error_code(&self) -> i32 {
        (**self).error_code()
    }
}
