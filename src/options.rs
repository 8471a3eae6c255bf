/// Default capacity of the compressed input window, 16 bytes short of 64KiB.
pub const DEFAULT_BUFFER_CAPACITY: usize = 65_520;

/// Direction a stream adaptor operates in.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Read compressed bytes from the source and produce decoded bytes.
    Decompress,
    /// Read uncompressed bytes and produce compressed bytes. Not provided by this crate, requesting
    /// it fails at construction.
    Compress,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Decompress
    }
}

/// Construction-time configuration for a [`Decoder`](crate::read::Decoder).
#[derive(Clone, Copy, Debug)]
pub struct DecoderOptions {
    pub(crate) buffer_capacity: usize,
    pub(crate) leave_open: bool,
    pub(crate) mode: Mode,
    pub(crate) fail_on_truncation: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            leave_open: false,
            mode: Mode::Decompress,
            fail_on_truncation: false,
        }
    }
}

impl DecoderOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of the compressed input window, allocated once per decoder.
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Keep the underlying reader alive when the decoder is closed, so it can still be retrieved
    /// through [`into_inner`](crate::read::Decoder::into_inner).
    pub fn leave_open(mut self, leave_open: bool) -> Self {
        self.leave_open = leave_open;
        self
    }

    /// Direction of the adaptor. Only [`Mode::Decompress`] is accepted.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Report a stream whose source runs dry before the engine finishes as an
    /// [`UnexpectedEof`](std::io::ErrorKind::UnexpectedEof) error instead of a short read.
    ///
    /// Off by default: a zero-length read with [`status`](crate::read::Decoder::status) still at
    /// [`NeedsMoreInput`](crate::DecodeStatus::NeedsMoreInput) means the caller may retry once the
    /// source has more data.
    pub fn fail_on_truncation(mut self, enabled: bool) -> Self {
        self.fail_on_truncation = enabled;
        self
    }
}
