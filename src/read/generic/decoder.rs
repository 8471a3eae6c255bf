use crate::{
    buffer::InputBuffer,
    codec::{DecodeStatus, DecoderEngine},
    error::{Error, Result},
    options::{DecoderOptions, Mode},
    util::PartialBuffer,
};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Engine state and the input window it reads from, acquired and released together.
#[derive(Debug)]
struct Session<E> {
    engine: E,
    input: InputBuffer,
}

/// Adapts a step-driven [`DecoderEngine`] onto a blocking [`Read`] of compressed bytes.
///
/// Each call to [`read`](Read::read) drives the engine until the destination is full, the
/// compressed stream ends, or the source has no more input. A short (or zero-length) read does not
/// by itself mean the stream is finished; consult [`status`](Self::status) to tell
/// [`Success`](DecodeStatus::Success) from a source that ran dry mid-stream.
#[derive(Debug)]
pub struct Decoder<R, E> {
    reader: Option<R>,
    session: Option<Session<E>>,
    status: DecodeStatus,
    options: DecoderOptions,
    total_in: u64,
    total_out: u64,
}

impl<R: Read, E: DecoderEngine> Decoder<R, E> {
    /// Creates a decoder with the default [`DecoderOptions`].
    pub fn new(reader: R, engine: E) -> Self {
        let options = DecoderOptions::default();
        Self::from_parts(reader, engine, options)
    }

    /// Creates a decoder with custom options.
    ///
    /// Fails if the options request [`Mode::Compress`] or a zero-sized input window.
    pub fn with_options(reader: R, engine: E, options: DecoderOptions) -> Result<Self> {
        if options.mode != Mode::Decompress {
            return Err(Error::Unsupported("compression mode"));
        }
        if options.buffer_capacity == 0 {
            return Err(Error::Argument {
                offset: 0,
                count: 0,
                len: 0,
            });
        }

        Ok(Self::from_parts(reader, engine, options))
    }

    fn from_parts(reader: R, engine: E, options: DecoderOptions) -> Self {
        let input = InputBuffer::with_capacity(options.buffer_capacity);
        log::debug!(
            "creating decoder with a {} byte input window",
            input.capacity()
        );

        Self {
            reader: Some(reader),
            session: Some(Session { engine, input }),
            status: DecodeStatus::NeedsMoreInput,
            options,
            total_in: 0,
            total_out: 0,
        }
    }

    /// Reads decoded bytes into `buf[offset..offset + count]`.
    ///
    /// The region is validated before the engine is touched; an invalid region leaves the decoder
    /// unchanged.
    pub fn read_into(&mut self, buf: &mut [u8], offset: usize, count: usize) -> Result<usize> {
        let end = match offset.checked_add(count) {
            Some(end) if end <= buf.len() => end,
            _ => {
                return Err(Error::Argument {
                    offset,
                    count,
                    len: buf.len(),
                })
            }
        };

        self.read_decoded(&mut buf[offset..end])
    }

    fn read_decoded(&mut self, buf: &mut [u8]) -> Result<usize> {
        let (reader, session) = match (self.reader.as_mut(), self.session.as_mut()) {
            (Some(reader), Some(session)) => (reader, session),
            _ => return Err(Error::Disposed),
        };

        match self.status {
            DecodeStatus::Success => return Ok(0),
            DecodeStatus::Error => {
                return Err(Error::InvalidData {
                    code: session.engine.error_code(),
                })
            }
            DecodeStatus::NeedsMoreInput => {}
        }

        let mut output = PartialBuffer::new(buf);
        let mut needs_input = session.input.is_empty();
        let mut stalled = false;

        while !output.is_full() {
            if needs_input {
                let added = session.input.refill(reader)?;
                // The engine may still hold decoded output from earlier input, so running dry
                // only ends the call once a step has made no progress.
                if added == 0 && stalled {
                    log::trace!(
                        "source exhausted with {} compressed bytes pending",
                        session.input.unconsumed().len()
                    );
                    if self.options.fail_on_truncation && output.written().is_empty() {
                        return Err(Error::Truncated);
                    }
                    break;
                }
            }

            let result = session
                .engine
                .step(session.input.unconsumed(), output.unwritten_mut());
            session.input.consume(result.consumed);
            output.advance(result.produced);
            self.total_in += result.consumed as u64;
            self.total_out += result.produced as u64;

            log::trace!(
                "engine step consumed {} produced {} -> {:?}",
                result.consumed,
                result.produced,
                result.status
            );

            match result.status {
                DecodeStatus::Error => {
                    self.status = DecodeStatus::Error;
                    let code = session.engine.error_code();
                    log::warn!(
                        "engine failed with code {} after {} compressed bytes",
                        code,
                        self.total_in
                    );
                    return Err(Error::InvalidData { code });
                }
                DecodeStatus::Success => {
                    self.status = DecodeStatus::Success;
                    log::debug!(
                        "stream finished: {} compressed bytes decoded into {}",
                        self.total_in,
                        self.total_out
                    );
                    break;
                }
                DecodeStatus::NeedsMoreInput => {
                    stalled = result.consumed == 0 && result.produced == 0;
                    needs_input = stalled || session.input.is_empty();
                }
            }
        }

        Ok(output.written().len())
    }
}

impl<R, E> Decoder<R, E> {
    /// Acquires a reference to the underlying reader, if it has not been released by
    /// [`close`](Self::close).
    pub fn get_ref(&self) -> Option<&R> {
        self.reader.as_ref()
    }

    /// Acquires a mutable reference to the underlying reader, if it has not been released by
    /// [`close`](Self::close).
    ///
    /// Note that care must be taken to avoid tampering with the state of the reader which may
    /// otherwise confuse this decoder.
    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.reader.as_mut()
    }

    /// Releases the engine session and returns the underlying reader.
    ///
    /// Note that compressed bytes already pulled into the input window are discarded.
    pub fn into_inner(mut self) -> Option<R> {
        self.session = None;
        self.reader.take()
    }

    /// Current status of the stream.
    pub fn status(&self) -> DecodeStatus {
        self.status
    }

    /// Compressed bytes consumed by the engine so far.
    pub fn total_in(&self) -> u64 {
        self.total_in
    }

    /// Decoded bytes produced so far.
    pub fn total_out(&self) -> u64 {
        self.total_out
    }

    /// Releases the engine session and, unless
    /// [`leave_open`](crate::DecoderOptions::leave_open) was set, the underlying reader.
    ///
    /// Calling this more than once has no further effect.
    pub fn close(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        if !self.options.leave_open {
            self.reader = None;
        }

        log::debug!(
            "closed decoder after {} compressed bytes ({} decoded)",
            self.total_in,
            self.total_out
        );
    }

    /// Whether the decoder can still be read from.
    pub fn can_read(&self) -> bool {
        self.session.is_some() && self.reader.is_some()
    }

    /// Always `false`, decoders are forward-only.
    pub fn can_seek(&self) -> bool {
        false
    }

    /// Always `false`, decoders only read.
    pub fn can_write(&self) -> bool {
        false
    }

    /// Always fails, the decoded length is unknown until the stream ends.
    pub fn len(&self) -> Result<u64> {
        Err(Error::Unsupported("length"))
    }

    /// Always fails.
    pub fn set_len(&mut self, _len: u64) -> Result<()> {
        Err(Error::Unsupported("setting the length"))
    }

    /// Always fails.
    pub fn position(&self) -> Result<u64> {
        Err(Error::Unsupported("position"))
    }

    /// Always fails.
    pub fn set_position(&mut self, _position: u64) -> Result<()> {
        Err(Error::Unsupported("setting the position"))
    }
}

impl<R: Read, E: DecoderEngine> Read for Decoder<R, E> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_decoded(buf)?)
    }
}

impl<R, E> Write for Decoder<R, E> {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(Error::InvalidOperation("writing").into())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.session.is_none() {
            return Err(Error::Disposed.into());
        }
        Ok(())
    }
}

impl<R, E> Seek for Decoder<R, E> {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(Error::Unsupported("seeking").into())
    }
}

impl<R, E> Drop for Decoder<R, E> {
    fn drop(&mut self) {
        if self.session.is_some() {
            log::debug!("decoder dropped without being closed, releasing its engine session");
            self.close();
        }
    }
}
