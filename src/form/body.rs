//! Incremental multipart/form-data body assembly.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use bytes::BytesMut;

use crate::error::{BodyError, Result};
use crate::segment::{SegmentReader, SegmentSource};

use super::boundary::random_boundary;
use super::escape::escape_quotes;
use super::headers::PartHeaders;
use super::writer::PartWriter;

/// Streaming `multipart/form-data` body builder.
///
/// Parts accumulate into a pending buffer that is frozen into a queue of
/// segment sources at each part open and at close, so completed bytes are
/// readable while later parts are still being written. Attached streams are
/// enqueued directly and pulled lazily during reads.
///
/// The body is `open` until [`close`](FormBody::close) runs — explicitly, or
/// implicitly on the first read — and `closed` permanently afterwards; the
/// closing boundary is appended exactly once no matter how often the body is
/// closed or read thereafter.
///
/// ```
/// use std::io::Read;
///
/// use formbody::FormBody;
///
/// # fn main() -> formbody::Result<()> {
/// let mut body = FormBody::new();
/// body.write_field("f1", "v1")?;
///
/// let mut encoded = Vec::new();
/// body.read_to_end(&mut encoded)?;
/// assert!(encoded.starts_with(format!("--{}\r\n", body.boundary()).as_bytes()));
/// # Ok(())
/// # }
/// ```
pub struct FormBody {
    boundary: String,
    pending: BytesMut,
    reader: SegmentReader,
    closed: bool,
}

impl FormBody {
    /// Creates an empty open body with a freshly generated boundary.
    #[must_use]
    pub fn new() -> Self {
        let boundary = random_boundary();
        log::debug!("FormBody: created with boundary {}", boundary);
        Self {
            boundary,
            pending: BytesMut::new(),
            reader: SegmentReader::new(),
            closed: false,
        }
    }

    /// The boundary token delimiting this body's parts.
    ///
    /// The token is generated blind and part content is never scanned for
    /// it; a payload that happens to contain the token corrupts the framing.
    /// Accepted risk.
    #[inline]
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value to advertise as the transport `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// True once the body is finalized, explicitly or by the first read.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Freezes the pending buffer into the segment queue.
    ///
    /// Returns whether any bytes were pending.
    fn freeze_pending(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        self.reader.push_bytes(self.pending.split().freeze());
        true
    }

    /// Opens the next part and returns the sink for its body bytes.
    ///
    /// Any bytes pending from the previous part are frozen first; the
    /// delimiter line they get determines its form — the first flushed part
    /// opens bare, every later one is preceded by the line break that
    /// terminates the previous part's bytes. Header lines are emitted in
    /// ascending name order, and are frozen before the sink is returned so
    /// a large part body streams instead of buffering whole.
    ///
    /// Fails with [`BodyError::Closed`] when the body is already finalized.
    pub fn open_part(&mut self, headers: &PartHeaders) -> Result<PartWriter<'_>> {
        if self.closed {
            return Err(BodyError::Closed);
        }
        let delimiter = if self.freeze_pending() {
            format!("\r\n--{}\r\n", self.boundary)
        } else {
            format!("--{}\r\n", self.boundary)
        };
        self.pending.extend_from_slice(delimiter.as_bytes());
        headers.write_to(&mut self.pending);
        self.pending.extend_from_slice(b"\r\n");
        self.freeze_pending();
        log::debug!("FormBody: opened part ({} header names)", headers.len());
        Ok(PartWriter::new(&mut self.pending))
    }

    /// Opens a text-field part carrying only its `Content-Disposition`
    /// header and returns the sink for incremental value writes.
    ///
    /// Fails with [`BodyError::Closed`] when the body is already finalized.
    pub fn open_field(&mut self, name: &str) -> Result<PartWriter<'_>> {
        let mut headers = PartHeaders::new();
        headers.set(
            "Content-Disposition",
            format!(r#"form-data; name="{}""#, escape_quotes(name)),
        );
        self.open_part(&headers)
    }

    /// Opens a file-flavored part whose content goes through the returned
    /// sink.
    ///
    /// The part advertises `Content-Disposition` with the escaped field and
    /// file names plus `Content-Type: application/octet-stream`. Fails with
    /// [`BodyError::Closed`] when the body is already finalized.
    pub fn open_file_part(&mut self, name: &str, file_name: &str) -> Result<PartWriter<'_>> {
        let mut headers = PartHeaders::new();
        headers.set(
            "Content-Disposition",
            format!(
                r#"form-data; name="{}"; filename="{}""#,
                escape_quotes(name),
                escape_quotes(file_name)
            ),
        );
        headers.set("Content-Type", "application/octet-stream");
        self.open_part(&headers)
    }

    /// Writes a complete text field.
    ///
    /// Fails with whatever [`open_field`](FormBody::open_field) signals, or
    /// with [`BodyError::Write`] should the sink reject bytes.
    pub fn write_field(&mut self, name: &str, value: &str) -> Result<()> {
        let mut part = self.open_field(name)?;
        part.write_all(value.as_bytes()).map_err(BodyError::Write)?;
        Ok(())
    }

    /// Attaches an externally owned stream as a file part.
    ///
    /// The part headers go through the pending buffer as usual; the stream
    /// itself is enqueued behind them, so its bytes are pulled lazily during
    /// reads instead of being copied up front. Ownership transfers here: the
    /// reader closes the stream once it is exhausted, and the caller must
    /// not. When the body is already closed the stream is dropped unused and
    /// [`BodyError::Closed`] is returned.
    pub fn add_stream<S>(&mut self, name: &str, file_name: &str, stream: S) -> Result<()>
    where
        S: SegmentSource + Send + 'static,
    {
        self.open_file_part(name, file_name)?;
        self.reader.push_source(stream);
        log::debug!("FormBody: attached stream for field {:?}", name);
        Ok(())
    }

    /// Attaches the file at `path` as a file part.
    ///
    /// Fails with [`BodyError::Io`] when the open fails, carrying the
    /// filesystem error untouched; otherwise behaves exactly like
    /// [`add_stream`](FormBody::add_stream).
    pub fn add_file(&mut self, name: &str, file_name: &str, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(path)?;
        self.add_stream(name, file_name, file)
    }

    /// Finalizes the body by appending the closing boundary line and
    /// freezing the last of the pending bytes.
    ///
    /// Idempotent: later calls are no-ops, so the terminator appears exactly
    /// once. The first read of an open body calls this implicitly.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let terminator = format!("\r\n--{}--\r\n", self.boundary);
        self.pending.extend_from_slice(terminator.as_bytes());
        self.freeze_pending();
        log::debug!("FormBody: closed");
    }
}

impl Default for FormBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains the finalized body.
///
/// A body that never produced a segment reports end-of-stream immediately
/// and stays open; otherwise the first read closes the body, so terminal
/// framing is present without an explicit [`close`](FormBody::close). A
/// fully drained body keeps reporting end-of-stream.
impl Read for FormBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.reader.is_empty() {
            return Ok(0);
        }
        if !self.closed {
            self.close();
        }
        self.reader.read(buf)
    }
}

/// A finished body nests into another body as a lazily read stream; the
/// implicit close-on-read keeps its terminal framing intact. Its own reads
/// close any stream sources it carries, so the no-op `close` is enough.
impl SegmentSource for FormBody {}

impl fmt::Debug for FormBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBody")
            .field("boundary", &self.boundary)
            .field("pending", &self.pending.len())
            .field("segments", &self.reader.len())
            .field("closed", &self.closed)
            .finish()
    }
}
