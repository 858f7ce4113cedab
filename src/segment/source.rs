//! Segment sources.
//!
//! A segment is one byte-producing unit queued for sequential reading:
//! a frozen in-memory snapshot, an externally owned stream that must be
//! closed once drained, a nested composite, or the placeholder left behind
//! when a finished source is taken out of its slot.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};

use bytes::{Buf, Bytes};

use super::reader::SegmentReader;

/// A closable byte stream that can be attached to a body as a lazily read
/// segment.
///
/// Ownership of the source transfers when it is enqueued; the reader calls
/// [`close`](SegmentSource::close) exactly once, at the moment it observes
/// end-of-data from the source, and drops it afterwards. A source abandoned
/// before exhaustion (its body is dropped mid-read) is released by `Drop`
/// without a `close` call.
pub trait SegmentSource: Read {
    /// Releases the underlying handle.
    ///
    /// The default is a no-op for sources whose drop already releases
    /// everything they hold.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SegmentSource for File {}

impl SegmentSource for io::Empty {}

impl<T: AsRef<[u8]>> SegmentSource for io::Cursor<T> {}

/// One entry in a [`SegmentReader`] queue.
pub(crate) enum Segment {
    /// Immutable snapshot frozen out of a pending buffer.
    Buffered(Bytes),
    /// Externally supplied stream, owned here, closed at exhaustion.
    Stream(Box<dyn SegmentSource + Send>),
    /// A composite enqueued inside another composite.
    Nested(SegmentReader),
    /// Slot left behind while a finished source is closed by value.
    Drained,
}

impl Segment {
    pub(crate) fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Segment::Buffered(bytes) => {
                let n = buf.len().min(bytes.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                bytes.advance(n);
                Ok(n)
            }
            Segment::Stream(source) => source.read(buf),
            Segment::Nested(reader) => reader.read(buf),
            Segment::Drained => Ok(0),
        }
    }

    pub(crate) fn close(&mut self) -> io::Result<()> {
        match self {
            Segment::Stream(source) => source.close(),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Buffered(bytes) => f.debug_tuple("Buffered").field(&bytes.len()).finish(),
            Segment::Stream(_) => f.debug_tuple("Stream").finish(),
            Segment::Nested(reader) => f.debug_tuple("Nested").field(reader).finish(),
            Segment::Drained => f.write_str("Drained"),
        }
    }
}
