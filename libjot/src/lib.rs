//! JOT (JSON Object Tree) parser implementation.
//!
//! JOT is a small, permissive JSON dialect: nested string-keyed records
//! with null, boolean, number, and string scalars. There are no arrays,
//! no string escapes, and no exponent notation; text that fits none of
//! the other kinds is simply a string.
//!
//! # Parsing Pipeline
//!
//! Parsing is a single pass with two cooperating layers:
//!
//! 1. **Classifier**: Given one trimmed segment of text, decides which
//!    kind of value it is (keyword, number, record, string) and converts
//!    it. This is also the public entry point.
//!
//! 2. **Scanner**: Walks a record literal character by character,
//!    tracking brace depth and string-quoting state, slicing out key and
//!    value substrings and feeding each value back to the classifier.
//!    Nested records are carried as opaque substrings and parsed by
//!    recursion, so recursion depth matches input nesting depth.

mod classify;
mod error;
mod scanner;
mod segment;
mod value;

pub use error::{ParseError, Result};
pub use value::Value;

/// Parse a JOT document from a string.
///
/// # Example
///
/// ```
/// use libjot::{parse, Value};
///
/// let value = parse("{\"answer\":42}").unwrap();
/// let record = value.as_record().unwrap();
/// assert_eq!(record.get("answer"), Some(&Value::Number(42.0)));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    classify::classify(input)
}
