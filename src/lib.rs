//! # formbody
//!
//! Streaming `multipart/form-data` body encoder.
//!
//! A [`FormBody`] assembles parts incrementally — text fields, file
//! attachments, caller-owned streams — and exposes the finished body as one
//! [`std::io::Read`] stream. Completed byte runs are frozen into a queue of
//! segment sources as construction proceeds, and reads drain that queue in
//! order, so peak memory tracks the largest single unread segment rather
//! than the whole payload.
//!
//! ## Features
//!
//! - **Incremental assembly**: add fields and attachments in any order
//! - **Lazy consumption**: attached streams are pulled during reads, never
//!   copied up front, and closed by the reader once exhausted
//! - **Deterministic output**: part headers are emitted in ascending name
//!   order, so identical logical input yields identical bytes
//! - **Exactly-once framing**: the closing boundary is appended once,
//!   implicitly on the first read when [`FormBody::close`] was never called
//! - **Composition**: a finished body nests into another as a lazily read
//!   stream, and composite readers flatten instead of recursing
//!
//! ## Usage
//!
//! ```
//! use std::io::Read;
//!
//! use formbody::FormBody;
//!
//! # fn main() -> formbody::Result<()> {
//! let mut body = FormBody::new();
//! body.write_field("username", "seanmonstar")?;
//! body.add_stream("payload", "payload.bin", std::io::Cursor::new(b"raw".to_vec()))?;
//!
//! let content_type = body.content_type();
//! let mut encoded = Vec::new();
//! body.read_to_end(&mut encoded)?;
//!
//! assert!(content_type.starts_with("multipart/form-data; boundary="));
//! assert!(encoded.ends_with(format!("--{}--\r\n", body.boundary()).as_bytes()));
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod error;
pub mod form;
pub mod segment;

// Re-export main types
pub use error::{BodyError, Result};
pub use form::{FormBody, PartHeaders, PartWriter};
pub use segment::{SegmentReader, SegmentSource};
