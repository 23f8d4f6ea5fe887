//! Record-body scanner.
//!
//! A single left-to-right pass over one record literal, enclosing braces
//! included. The scanner tracks brace depth and string-quoting state,
//! carves key and value substrings out of the source, and hands each value
//! to the classifier, recursing through it for nested records.
//!
//! Rather than inferring progress from flag combinations, the scanner
//! names its position in the current pair explicitly (see [`State`]).
//! Nested records are not tokenized here: while depth is above 1 the
//! separator logic is suppressed, so an inner record rides along as an
//! opaque substring until its closing brace, and is parsed by its own
//! recursive scan.

use indexmap::IndexMap;

use crate::classify;
use crate::error::{ParseError, Result};
use crate::segment;
use crate::value::Value;

/// Where the scanner stands within the pair currently being assembled.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Between pairs, waiting for the next key's opening quote.
    SeekingKey,
    /// Inside a key's quotes; `quote` is the offset of the opening quote.
    /// Every character up to the closing quote is literal text, so
    /// structural characters cannot fire in here.
    InKey { quote: usize },
    /// Key captured, waiting for the colon that introduces its value.
    SeekingColon,
    /// Scanning value text; `start` is the offset just past the colon.
    /// While `in_string` is set, a quote opened inside the value is
    /// still unclosed and structural characters are inert.
    InValue { start: usize, in_string: bool },
}

/// Parse one record literal (including its `{` and `}`) into a record.
///
/// The caller guarantees the text starts with `{` and ends with `}`;
/// everything between is scanned in one pass. A pair is committed either
/// by the comma that follows its value or by the closing brace that
/// returns depth to zero, whichever comes first.
pub(crate) fn parse_record(input: &str) -> Result<Value> {
    // Fast path for the empty record.
    if input == "{}" {
        return Ok(Value::Record(IndexMap::new()));
    }

    let mut record: IndexMap<String, Value> = IndexMap::new();
    let mut state = State::SeekingKey;
    let mut current_key = String::new();
    let mut depth: i64 = 0;

    for (i, ch) in input.char_indices() {
        match state {
            State::SeekingKey => match ch {
                '"' => state = State::InKey { quote: i },
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(ParseError::UnbalancedBraces(i));
                    }
                    if depth == 0 {
                        // Terminal close with no pair pending.
                        return Ok(Value::Record(record));
                    }
                }
                _ => {}
            },
            State::InKey { quote } => {
                if ch == '"' {
                    current_key = segment::between(input, quote, i).to_string();
                    state = State::SeekingColon;
                }
            }
            State::SeekingColon => match ch {
                ':' if depth == 1 => {
                    state = State::InValue {
                        start: i + 1,
                        in_string: false,
                    };
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(ParseError::UnbalancedBraces(i));
                    }
                    if depth == 0 {
                        // Record closed with a key but no value; the
                        // pending key is dropped, best-effort.
                        return Ok(Value::Record(record));
                    }
                }
                _ => {}
            },
            State::InValue { start, in_string } => match ch {
                '"' => {
                    state = State::InValue {
                        start,
                        in_string: !in_string,
                    };
                }
                _ if in_string => {}
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(ParseError::UnbalancedBraces(i));
                    }
                    if depth == 0 {
                        // Terminal close commits the final pair, which
                        // has no trailing comma to commit it.
                        commit(input, start, i, &mut current_key, &mut record)?;
                        return Ok(Value::Record(record));
                    }
                }
                ',' if depth == 1 => {
                    commit(input, start, i, &mut current_key, &mut record)?;
                    state = State::SeekingKey;
                }
                _ => {}
            },
        }
    }

    // Input ran out before the closing brace brought depth back to zero.
    match state {
        State::InKey { quote } => Err(ParseError::UnterminatedString(quote)),
        State::InValue {
            start,
            in_string: true,
        } => {
            let quote = input[start..].find('"').map_or(start, |at| start + at);
            Err(ParseError::UnterminatedString(quote))
        }
        _ => Err(ParseError::UnbalancedBraces(input.len())),
    }
}

/// Commit the pair ending at `end`: slice out the value text, classify
/// it, and insert it under the pending key. Re-inserting a duplicate key
/// replaces its value but keeps the key's original position.
fn commit(
    input: &str,
    start: usize,
    end: usize,
    current_key: &mut String,
    record: &mut IndexMap<String, Value>,
) -> Result<()> {
    let text = segment::up_to(input, start, end);
    let value = classify::classify(text)?;
    record.insert(std::mem::take(current_key), value);
    Ok(())
}
