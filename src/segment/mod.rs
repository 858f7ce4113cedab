//! Segment queue plumbing
//!
//! A body's single read stream is backed by an ordered queue of
//! heterogeneous byte sources — frozen buffer snapshots, caller-owned
//! streams, nested composites — drained strictly in enqueue order.

mod reader;
mod source;

// Re-export main types
pub use reader::SegmentReader;
pub use source::SegmentSource;
