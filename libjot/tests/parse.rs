//! End-to-end tests for the public `parse` entry point.

use libjot::{parse, ParseError, Value};

#[test]
fn parses_keyword_literals() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
}

#[test]
fn parses_integers_and_decimals() {
    assert_eq!(parse("42").unwrap(), Value::Number(42.0));
    assert_eq!(parse("0").unwrap(), Value::Number(0.0));
    assert_eq!(parse("-7").unwrap(), Value::Number(-7.0));
    assert_eq!(parse("-3.5").unwrap(), Value::Number(-3.5));
    assert_eq!(parse("10.25").unwrap(), Value::Number(10.25));
}

#[test]
fn unsupported_number_notations_are_strings() {
    assert_eq!(parse("1e10").unwrap(), Value::String("1e10".into()));
    assert_eq!(parse("+1").unwrap(), Value::String("+1".into()));
    assert_eq!(parse(".5").unwrap(), Value::String(".5".into()));
    assert_eq!(parse("1.").unwrap(), Value::String("1.".into()));
    assert_eq!(parse("-infinity").unwrap(), Value::String("-infinity".into()));
}

#[test]
fn quoted_text_loses_exactly_its_outer_quotes() {
    assert_eq!(parse("\"hello\"").unwrap(), Value::String("hello".into()));
    assert_eq!(parse("\"\"").unwrap(), Value::String("".into()));
    // No un-escaping: interior characters survive untouched.
    assert_eq!(
        parse("\"a b\\nc\"").unwrap(),
        Value::String("a b\\nc".into())
    );
}

#[test]
fn unquoted_text_is_a_string_verbatim() {
    assert_eq!(parse("hello").unwrap(), Value::String("hello".into()));
    assert_eq!(parse("").unwrap(), Value::String("".into()));
    assert_eq!(parse("nulls").unwrap(), Value::String("nulls".into()));
}

#[test]
fn parses_empty_record() {
    assert_eq!(parse("{}").unwrap().as_record().unwrap().len(), 0);
}

#[test]
fn parses_flat_record_in_key_order() {
    let value = parse("{\"a\":1,\"b\":true,\"c\":\"x\"}").unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(record.get("b"), Some(&Value::Bool(true)));
    assert_eq!(record.get("c"), Some(&Value::String("x".into())));
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn commits_final_pair_at_closing_brace() {
    let value = parse("{\"x\":1}").unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record.get("x"), Some(&Value::Number(1.0)));
}

#[test]
fn parses_nested_records() {
    let value = parse("{\"a\":{\"b\":1}}").unwrap();
    let outer = value.as_record().unwrap();
    let inner = outer.get("a").unwrap().as_record().unwrap();
    assert_eq!(inner.get("b"), Some(&Value::Number(1.0)));
}

#[test]
fn parses_deeply_nested_records() {
    let value = parse("{\"a\":{\"b\":{\"c\":{\"d\":null}}}}").unwrap();
    let d = value
        .as_record()
        .and_then(|r| r.get("a"))
        .and_then(Value::as_record)
        .and_then(|r| r.get("b"))
        .and_then(Value::as_record)
        .and_then(|r| r.get("c"))
        .and_then(Value::as_record)
        .and_then(|r| r.get("d"))
        .unwrap();
    assert!(d.is_null());
}

#[test]
fn nested_record_sits_among_scalar_pairs() {
    let value = parse("{\"a\":1,\"b\":{\"c\":2,\"d\":3},\"e\":4}").unwrap();
    let record = value.as_record().unwrap();
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "e"]);
    let inner = record.get("b").unwrap().as_record().unwrap();
    assert_eq!(inner.get("c"), Some(&Value::Number(2.0)));
    assert_eq!(inner.get("d"), Some(&Value::Number(3.0)));
    assert_eq!(record.get("e"), Some(&Value::Number(4.0)));
}

#[test]
fn structural_characters_inside_strings_are_literal() {
    let value = parse("{\"a\":\"x,y:z{w}\"}").unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.get("a"), Some(&Value::String("x,y:z{w}".into())));
}

#[test]
fn whitespace_around_keys_and_values_is_trimmed() {
    let value = parse("{ \"a\" : 1 , \"b\" : \"x\" }").unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(record.get("b"), Some(&Value::String("x".into())));
}

#[test]
fn unquoted_record_values_are_strings() {
    let value = parse("{\"a\":hello}").unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.get("a"), Some(&Value::String("hello".into())));
}

#[test]
fn duplicate_keys_keep_position_take_last_value() {
    let value = parse("{\"a\":1,\"b\":2,\"a\":3}").unwrap();
    let record = value.as_record().unwrap();
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(record.get("a"), Some(&Value::Number(3.0)));
}

#[test]
fn record_text_without_closing_brace_is_a_string() {
    // The classifier only treats text as a record when it both begins
    // with `{` and ends with `}`.
    assert_eq!(
        parse("{\"a\":1").unwrap(),
        Value::String("{\"a\":1".into())
    );
}

#[test]
fn unbalanced_braces_are_reported() {
    assert!(matches!(
        parse("{{}"),
        Err(ParseError::UnbalancedBraces(_))
    ));
    // Ends with a brace, so it scans as a record, but the outer record
    // never closes.
    assert!(matches!(
        parse("{\"a\":{\"b\":1}"),
        Err(ParseError::UnbalancedBraces(_))
    ));
}

#[test]
fn unterminated_strings_are_reported() {
    assert!(matches!(
        parse("{\"a}"),
        Err(ParseError::UnterminatedString(_))
    ));
    assert!(matches!(
        parse("{\"a\":\"x}"),
        Err(ParseError::UnterminatedString(_))
    ));
}

#[test]
fn mixed_record_of_every_value_kind() {
    let input = "{\"n\":null,\"t\":true,\"f\":false,\"num\":-1.25,\"s\":\"text\",\"r\":{\"inner\":0}}";
    let value = parse(input).unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.len(), 6);
    assert_eq!(record.get("n"), Some(&Value::Null));
    assert_eq!(record.get("t"), Some(&Value::Bool(true)));
    assert_eq!(record.get("f"), Some(&Value::Bool(false)));
    assert_eq!(record.get("num"), Some(&Value::Number(-1.25)));
    assert_eq!(record.get("s"), Some(&Value::String("text".into())));
    let inner = record.get("r").unwrap().as_record().unwrap();
    assert_eq!(inner.get("inner"), Some(&Value::Number(0.0)));
}
