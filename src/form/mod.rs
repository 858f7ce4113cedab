//! multipart/form-data assembly
//!
//! Decomposed body construction: the builder itself, the sink it hands out
//! for an open part, the ordered header map, and the boundary and escaping
//! helpers the header lines lean on.

mod body;
mod boundary;
mod escape;
mod headers;
mod writer;

// Re-export main types
pub use body::FormBody;
pub use headers::PartHeaders;
pub use writer::PartWriter;
