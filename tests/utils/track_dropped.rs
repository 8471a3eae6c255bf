use std::{
    cell::Cell,
    io::{Read, Result},
    rc::Rc,
};

/// A reader that records when it is dropped.
#[derive(Debug)]
pub struct TrackDropped<R> {
    inner: R,
    dropped: Rc<Cell<bool>>,
}

impl<R> TrackDropped<R> {
    pub fn new(inner: R) -> (Self, Rc<Cell<bool>>) {
        let dropped = Rc::new(Cell::new(false));
        let reader = Self {
            inner,
            dropped: dropped.clone(),
        };
        (reader, dropped)
    }
}

impl<R: Read> Read for TrackDropped<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        assert!(!self.dropped.get());
        self.inner.read(buf)
    }
}

impl<R> Drop for TrackDropped<R> {
    fn drop(&mut self) {
        assert!(!self.dropped.replace(true), "reader dropped twice");
    }
}
