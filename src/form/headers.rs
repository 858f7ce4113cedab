//! Ordered part headers.

use std::collections::BTreeMap;

use bytes::BytesMut;

/// Header block for one part: a multimap of header name to values, always
/// iterated in ascending lexicographic order of name.
///
/// The ordering makes serialized output byte-stable no matter the order
/// calls populated the map, which callers hashing or replaying bodies rely
/// on. Names and values are stored and emitted verbatim — no case folding,
/// no validation; the caller owns the syntax of what it sets.
///
/// ```
/// use formbody::PartHeaders;
///
/// let mut headers = PartHeaders::new();
/// headers.set("Content-Type", "application/octet-stream");
/// headers.append("X-Trace", "a");
/// headers.append("X-Trace", "b");
///
/// assert_eq!(headers.get("Content-Type"), Some("application/octet-stream"));
/// assert_eq!(headers.get_all("X-Trace"), ["a", "b"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PartHeaders {
    map: BTreeMap<String, Vec<String>>,
}

impl PartHeaders {
    /// Creates an empty header block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all values recorded under `name` with `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.insert(name.into(), vec![value.into()]);
    }

    /// Adds `value` under `name`, keeping any values already recorded.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.entry(name.into()).or_default().push(value.into());
    }

    /// First value recorded under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values recorded under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.map.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct header names.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no header has been set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Header names with their values, ascending by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Serializes the block as one `Name: value\r\n` line per value, names
    /// ascending. The blank line terminating the block is the caller's to
    /// write.
    pub(crate) fn write_to(&self, buf: &mut BytesMut) {
        for (name, values) in &self.map {
            for value in values {
                buf.extend_from_slice(name.as_bytes());
                buf.extend_from_slice(b": ");
                buf.extend_from_slice(value.as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
        }
    }
}
