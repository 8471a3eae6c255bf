macro_rules! decoder {
    ($(#[$attr:meta])* $name:ident<$engine:ty>) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $name<R> {
            inner: crate::read::Decoder<R, $engine>,
        }

        impl<R: std::io::Read> $name<R> {
            /// Creates a new decoder which will read compressed data from the given reader and
            /// emit an uncompressed stream.
            pub fn new(reader: R) -> $name<R> {
                $name {
                    inner: crate::read::Decoder::new(reader, <$engine>::new()),
                }
            }

            /// Creates a new decoder with custom [`DecoderOptions`](crate::DecoderOptions).
            pub fn with_options(
                reader: R,
                options: crate::DecoderOptions,
            ) -> crate::Result<$name<R>> {
                Ok($name {
                    inner: crate::read::Decoder::with_options(reader, <$engine>::new(), options)?,
                })
            }

            /// Reads decoded bytes into `buf[offset..offset + count]`, validating the region
            /// first.
            pub fn read_into(
                &mut self,
                buf: &mut [u8],
                offset: usize,
                count: usize,
            ) -> crate::Result<usize> {
                self.inner.read_into(buf, offset, count)
            }
        }

        impl<R> $name<R> {
            /// Acquires a reference to the underlying reader, if it is still held.
            pub fn get_ref(&self) -> Option<&R> {
                self.inner.get_ref()
            }

            /// Acquires a mutable reference to the underlying reader, if it is still held.
            ///
            /// Note that care must be taken to avoid tampering with the state of the reader which
            /// may otherwise confuse this decoder.
            pub fn get_mut(&mut self) -> Option<&mut R> {
                self.inner.get_mut()
            }

            /// Consumes this decoder returning the underlying reader, if it is still held.
            ///
            /// Note that this may discard internal state of this decoder, so care should be taken
            /// to avoid losing resources when this is called.
            pub fn into_inner(self) -> Option<R> {
                self.inner.into_inner()
            }

            /// Current status of the compressed stream.
            pub fn status(&self) -> crate::DecodeStatus {
                self.inner.status()
            }

            /// Compressed bytes consumed so far.
            pub fn total_in(&self) -> u64 {
                self.inner.total_in()
            }

            /// Decoded bytes produced so far.
            pub fn total_out(&self) -> u64 {
                self.inner.total_out()
            }

            /// Releases the decoder's resources, see [`Decoder::close`](crate::read::Decoder::close).
            pub fn close(&mut self) {
                self.inner.close()
            }

            /// Whether the decoder can still be read from.
            pub fn can_read(&self) -> bool {
                self.inner.can_read()
            }

            /// Always `false`.
            pub fn can_seek(&self) -> bool {
                self.inner.can_seek()
            }

            /// Always `false`.
            pub fn can_write(&self) -> bool {
                self.inner.can_write()
            }

            /// Always fails with [`Error::Unsupported`](crate::Error::Unsupported).
            pub fn len(&self) -> crate::Result<u64> {
                self.inner.len()
            }

            /// Always fails with [`Error::Unsupported`](crate::Error::Unsupported).
            pub fn set_len(&mut self, len: u64) -> crate::Result<()> {
                self.inner.set_len(len)
            }

            /// Always fails with [`Error::Unsupported`](crate::Error::Unsupported).
            pub fn position(&self) -> crate::Result<u64> {
                self.inner.position()
            }

            /// Always fails with [`Error::Unsupported`](crate::Error::Unsupported).
            pub fn set_position(&mut self, position: u64) -> crate::Result<()> {
                self.inner.set_position(position)
            }
        }

        impl<R: std::io::Read> std::io::Read for $name<R> {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                std::io::Read::read(&mut self.inner, buf)
            }
        }

        impl<R> std::io::Write for $name<R> {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                std::io::Write::write(&mut self.inner, buf)
            }

            fn flush(&mut self) -> std::io::Result<()> {
                std::io::Write::flush(&mut self.inner)
            }
        }

        impl<R> std::io::Seek for $name<R> {
            fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
                std::io::Seek::seek(&mut self.inner, pos)
            }
        }

        const _: () = {
            fn _assert() {
                use crate::util::_assert_send;
                use std::io::Read;

                _assert_send::<$name<Box<dyn Read + Send>>>();
            }
        };
    };
}
