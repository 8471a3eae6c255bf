decoder! {
    /// A brotli decoder, or decompressor.
    ///
    /// ```
    /// use brotli_decode_stream::read::BrotliDecoder;
    /// use std::io::{Read, Write};
    ///
    /// let mut compressed = Vec::new();
    /// {
    ///     let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 5, 22);
    ///     writer.write_all(b"hello world")?;
    /// }
    ///
    /// let mut decoder = BrotliDecoder::new(&compressed[..]);
    /// let mut output = String::new();
    /// decoder.read_to_string(&mut output)?;
    /// assert_eq!(output, "hello world");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    #[cfg_attr(docsrs, doc(cfg(feature = "brotli")))]
    BrotliDecoder<crate::codec::BrotliEngine>
}
