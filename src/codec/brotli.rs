use crate::codec::{DecodeStatus, DecoderEngine, StepResult};
use std::fmt;

use brotli::{enc::StandardAlloc, BrotliDecompressStream, BrotliResult, BrotliState};

/// Brotli decompression engine backed by the `brotli` crate.
pub struct BrotliEngine {
    // `BrotliState` is very large (over 2kb) which is why we're boxing it.
    state: Box<BrotliState<StandardAlloc, StandardAlloc, StandardAlloc>>,
    total_out: usize,
}

impl BrotliEngine {
    /// Creates and initializes a fresh decoder session.
    pub fn new() -> Self {
        Self {
            state: Box::new(BrotliState::new(
                StandardAlloc::default(),
                StandardAlloc::default(),
                StandardAlloc::default(),
            )),
            total_out: 0,
        }
    }
}

impl Default for BrotliEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderEngine for BrotliEngine {
    fn step(&mut self, input: &[u8], output: &mut [u8]) -> StepResult {
        let mut available_in = input.len();
        let mut input_offset = 0;
        let mut available_out = output.len();
        let mut output_offset = 0;

        let result = BrotliDecompressStream(
            &mut available_in,
            &mut input_offset,
            input,
            &mut available_out,
            &mut output_offset,
            output,
            &mut self.total_out,
            &mut *self.state,
        );

        let status = match result {
            BrotliResult::ResultSuccess => DecodeStatus::Success,
            BrotliResult::NeedsMoreInput | BrotliResult::NeedsMoreOutput => {
                DecodeStatus::NeedsMoreInput
            }
            BrotliResult::ResultFailure => DecodeStatus::Error,
        };

        StepResult {
            status,
            consumed: input.len() - available_in,
            produced: output.len() - available_out,
        }
    }

    fn error_code(&self) -> i32 {
        self.state.error_code as i32
    }
}

impl fmt::Debug for BrotliEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrotliEngine")
            .field("state", &"<no debug>")
            .field("total_out", &self.total_out)
            .finish()
    }
}
