//! Segment extraction.
//!
//! Pure helpers that carve key and value text out of the source during a
//! record scan. Offsets always land on structural ASCII characters (quotes,
//! colons, commas, braces), so byte slicing is safe even when the content
//! between them is multi-byte.
//!
//! Offset ordering is the caller's responsibility; these helpers do not
//! validate it.

/// The trimmed text strictly between two offsets, both exclusive.
///
/// Keys sit between their two quote characters: `start` is the opening
/// quote, `end` the closing quote, and neither is included.
pub(crate) fn between(input: &str, start: usize, end: usize) -> &str {
    input[start + 1..end].trim()
}

/// The trimmed text from `start` up to, but not including, `end`.
///
/// Values run from just past their colon to the comma or brace that
/// terminates them.
pub(crate) fn up_to(input: &str, start: usize, end: usize) -> &str {
    input[start..end].trim()
}
