//! Error types for multipart body construction.
//!
//! Body consumption reports failures as plain [`std::io::Error`] through the
//! `Read` implementations; the variants here cover the construction surface.

use std::io;

/// A `Result` alias where the `Err` case is [`BodyError`].
pub type Result<T> = std::result::Result<T, BodyError>;

/// Errors raised while assembling a multipart body.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// A new part was opened after the body was finalized, either by an
    /// explicit [`close`](crate::FormBody::close) or implicitly by the
    /// first read.
    #[error("multipart body is already closed")]
    Closed,

    /// Opening a file-backed part failed; carries the underlying error
    /// untouched.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Writing into a part sink failed. The in-memory sink never fails,
    /// but the contract admits fallible sinks.
    #[error("failed to write part body bytes")]
    Write(#[source] io::Error),
}

impl BodyError {
    /// Returns true when the error is the closed-body guard.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, BodyError::Closed)
    }
}
