use proptest_derive::Arbitrary;
use std::{
    collections::VecDeque,
    io::{self, Read},
};

#[derive(Arbitrary, Debug, Clone)]
pub struct InputStream(Vec<Vec<u8>>);

impl InputStream {
    pub fn as_ref(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// A reader handing out at most one chunk per `read` call, so every chunk boundary is also a
    /// refill boundary.
    pub fn reader(&self) -> ChunkedReader {
        ChunkedReader {
            chunks: self.0.iter().filter(|c| !c.is_empty()).cloned().collect(),
        }
    }

    /// Like [`reader`](Self::reader), but every chunk is followed by a read that returns 0, as a
    /// producer that is momentarily out of data would.
    pub fn bursty_reader(&self) -> ChunkedReader {
        ChunkedReader {
            chunks: self
                .0
                .iter()
                .filter(|c| !c.is_empty())
                .flat_map(|bytes| vec![bytes.clone(), vec![]])
                .collect(),
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.iter().flatten().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}

impl From<Vec<Vec<u8>>> for InputStream {
    fn from(input: Vec<Vec<u8>>) -> InputStream {
        InputStream(input)
    }
}

#[derive(Debug)]
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut chunk = match self.chunks.pop_front() {
            Some(chunk) => chunk,
            None => return Ok(0),
        };

        let len = chunk.len().min(buf.len());
        buf[..len].copy_from_slice(&chunk[..len]);
        if len < chunk.len() {
            self.chunks.push_front(chunk.split_off(len));
        }

        Ok(len)
    }
}
