//! Quote escaping for `Content-Disposition` parameters.

/// Escapes `\` and `"` so `value` can sit inside a quoted header parameter.
///
/// Backslashes are doubled before quotes are escaped, so the output never
/// re-escapes its own escapes.
pub(crate) fn escape_quotes(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
