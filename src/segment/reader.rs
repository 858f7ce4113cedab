//! Sequential drain over a queue of segment sources.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Read};
use std::mem;

use bytes::Bytes;

use super::source::{Segment, SegmentSource};

/// Presents an ordered set of heterogeneous byte sources as one continuous
/// stream.
///
/// Sources drain strictly in enqueue order, each read serving bytes from at
/// most one source. End-of-stream is reported only once every source is
/// exhausted; between sources the reader silently moves on. An exhausted
/// source is closed immediately, swapped out for a zero-cost placeholder,
/// and never revisited, so peak memory tracks the largest single unread
/// segment instead of the whole body.
///
/// Readers compose: a whole `SegmentReader` enqueues into another via
/// [`push_reader`](SegmentReader::push_reader), and a composite that ends up
/// alone in the queue is spliced in place rather than read through another
/// level of indirection.
///
/// ```
/// use std::io::Read;
///
/// use formbody::SegmentReader;
///
/// let mut inner = SegmentReader::new();
/// inner.push_bytes(&b"abc"[..]);
///
/// let mut outer = SegmentReader::new();
/// outer.push_reader(inner);
/// outer.push_bytes(&b"def"[..]);
///
/// let mut out = String::new();
/// outer.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "abcdef");
/// ```
#[derive(Default)]
pub struct SegmentReader {
    queue: VecDeque<Segment>,
}

impl SegmentReader {
    /// Creates an empty reader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frozen byte snapshot to the tail of the queue.
    pub fn push_bytes(&mut self, bytes: impl Into<Bytes>) {
        self.queue.push_back(Segment::Buffered(bytes.into()));
    }

    /// Appends an owned closable stream to the tail of the queue.
    ///
    /// Ownership transfers here: the reader closes the source once it is
    /// exhausted, and the caller must not close it themselves.
    pub fn push_source<S>(&mut self, source: S)
    where
        S: SegmentSource + Send + 'static,
    {
        self.queue.push_back(Segment::Stream(Box::new(source)));
    }

    /// Appends another composite reader to the tail of the queue.
    pub fn push_reader(&mut self, reader: SegmentReader) {
        self.queue.push_back(Segment::Nested(reader));
    }

    /// Number of sources still queued.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when every enqueued source has been drained, or none ever was.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Read for SegmentReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // A zero-length destination is indistinguishable from end-of-data
        // under the `Read` contract; reject it before it can pop a source.
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            // A lone nested composite is replaced by its own queue, so
            // chained readers unwind iteratively instead of recursing once
            // per nesting level.
            if self.queue.len() == 1 && matches!(self.queue.front(), Some(Segment::Nested(_))) {
                if let Some(Segment::Nested(inner)) = self.queue.pop_front() {
                    self.queue = inner.queue;
                }
                continue;
            }
            let Some(head) = self.queue.front_mut() else {
                return Ok(0);
            };
            match head.read(buf) {
                Ok(0) => {
                    // Exhausted. Take the source out of its slot, drop the
                    // placeholder, close the source. The call has produced
                    // no bytes yet, so a close failure cannot mask a
                    // successful read.
                    let mut finished = mem::replace(head, Segment::Drained);
                    self.queue.pop_front();
                    finished.close()?;
                    log::trace!("segment source exhausted, {} remaining", self.queue.len());
                }
                Ok(n) => return Ok(n),
                // The source stays at the head; a later read resumes it.
                Err(e) => return Err(e),
            }
        }
    }
}

impl fmt::Debug for SegmentReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentReader")
            .field("queue", &self.queue)
            .finish()
    }
}
