//! Value classification.
//!
//! Given one trimmed text segment, decide which kind of value it is and
//! convert it. First match wins: keyword, number, record, then string as
//! the catch-all. Records hand their full text back to the scanner, which
//! recurses into this module for each nested value.

use crate::error::Result;
use crate::scanner;
use crate::value::Value;

/// Classify and convert one trimmed segment of text.
pub(crate) fn classify(text: &str) -> Result<Value> {
    match text {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if is_number(text) {
        // The grammar below is a strict subset of what f64 accepts, so
        // this parse cannot fail; the fallthrough keeps the string case
        // as the only terminal.
        if let Ok(n) = text.parse::<f64>() {
            return Ok(Value::Number(n));
        }
    }

    if text.starts_with('{') && text.ends_with('}') {
        return scanner::parse_record(text);
    }

    Ok(Value::String(unquote(text).to_string()))
}

/// Plain decimal notation only: an optional leading minus, one or more
/// digits, and an optional fractional part with at least one digit.
/// No exponents, no leading `+`, no leading or trailing decimal point.
fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// Strip exactly one pair of surrounding quotes, if present.
///
/// Interior characters are untouched (JOT strings have no escapes).
/// Text without both quotes comes back verbatim: bare words are strings
/// too, not errors.
fn unquote(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
