use crate::error::{Error, Result};
use std::{
    fmt,
    io::{self, Read},
};

/// Fixed-capacity window of compressed bytes that the engine has not consumed yet.
///
/// The unconsumed region is `storage[offset..offset + count]`. The backing storage is allocated
/// once and compacted in place before every refill.
pub(crate) struct InputBuffer {
    storage: Box<[u8]>,
    offset: usize,
    count: usize,
}

impl InputBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity].into_boxed_slice(),
            offset: 0,
            count: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn unconsumed(&self) -> &[u8] {
        &self.storage[self.offset..self.offset + self.count]
    }

    pub(crate) fn consume(&mut self, amount: usize) {
        debug_assert!(amount <= self.count);
        self.offset += amount;
        self.count -= amount;
    }

    /// Moves the unconsumed region to the start of the storage.
    pub(crate) fn compact(&mut self) {
        if self.count == 0 {
            self.offset = 0;
        } else if self.offset != 0 {
            self.storage
                .copy_within(self.offset..self.offset + self.count, 0);
            self.offset = 0;
        }
    }

    /// Compacts, then reads from `source` until the window is full or the source returns 0.
    ///
    /// Returns the number of bytes appended; 0 means the source had nothing more to give.
    pub(crate) fn refill<R: Read>(&mut self, source: &mut R) -> Result<usize> {
        self.compact();

        let mut added = 0;
        loop {
            let start = self.offset + self.count;
            let free = self.storage.len() - start;
            if free == 0 {
                break;
            }

            let read = match source.read(&mut self.storage[start..]) {
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Io(err)),
            };

            if read > free {
                log::warn!("source claimed {} bytes with only {} free", read, free);
                return Err(Error::BufferOverflow {
                    read,
                    capacity: free,
                });
            }

            if read == 0 {
                break;
            }

            self.count += read;
            added += read;
        }

        log::trace!(
            "refilled input window with {} bytes ({} of {} in use)",
            added,
            self.count,
            self.storage.len()
        );

        Ok(added)
    }
}

impl fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBuffer")
            .field("capacity", &self.storage.len())
            .field("offset", &self.offset)
            .field("count", &self.count)
            .finish()
    }
}
