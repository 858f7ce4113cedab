//! The writable sink handed out for an open part.

use std::fmt;
use std::io::{self, Write};

use bytes::BytesMut;

/// Sink for the body bytes of the part most recently opened.
///
/// Bytes written here land in the owning body's pending buffer and surface
/// to readers at the next freeze point — the next part open, or the close.
/// The writer mutably borrows its body, so exactly one part accepts bytes
/// at a time; drop it before opening the next part.
///
/// The in-memory sink accepts every byte, but the [`Write`] signature keeps
/// the fallible-write contract for callers that wrap it.
pub struct PartWriter<'a> {
    pending: &'a mut BytesMut,
}

impl<'a> PartWriter<'a> {
    pub(crate) fn new(pending: &'a mut BytesMut) -> Self {
        Self { pending }
    }
}

impl Write for PartWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for PartWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartWriter")
            .field("pending", &self.pending.len())
            .finish()
    }
}
