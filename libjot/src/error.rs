//! Error types for JOT parsing.

use thiserror::Error;

/// Result type for JOT parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for JOT parsing.
///
/// Only record bodies can fail: any top-level text that is not a record
/// classifies as a keyword, a number, or falls through to a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Braces in a record body never balance out (a close without a
    /// matching open, or an open never closed). The offset is the byte
    /// position within the record text where the imbalance was detected.
    #[error("Unbalanced braces in record at byte {0}")]
    UnbalancedBraces(usize),

    /// A quote opens a string that is still open when input ends. The
    /// offset is the byte position of the opening quote.
    #[error("Unterminated string starting at byte {0}")]
    UnterminatedString(usize),
}
