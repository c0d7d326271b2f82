//! Single-line embed scanning.

/// Opening marker of an inline image embed.
pub const EMBED_OPEN: &str = "![](";
/// Closing marker of an inline image embed.
pub const EMBED_CLOSE: char = ')';

/// Returns the URL inside the first `![](...)` embed on `line`.
///
/// Only the first embed counts; text after its closing `)` is ignored.
/// An empty embed yields `Some("")` and is left for the validator to reject.
/// Returns `None` when the marker is missing or unterminated.
pub fn embedded_url(line: &str) -> Option<&str> {
    let start = line.find(EMBED_OPEN)? + EMBED_OPEN.len();
    let rest = &line[start..];
    let end = rest.find(EMBED_CLOSE)?;
    Some(&rest[..end])
}
