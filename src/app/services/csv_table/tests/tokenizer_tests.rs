//! Tests for line tokenizing and field cleaning

use super::super::tokenizer::{clean_field, tokenize};

#[test]
fn test_tokenize_simple_line() {
    assert_eq!(tokenize("a,b,c", None), vec!["a", "b", "c"]);
}

#[test]
fn test_tokenize_keeps_final_field() {
    assert_eq!(tokenize("a,b,", None), vec!["a", "b", ""]);
    assert_eq!(tokenize("a,,c", Some(3)), vec!["a", "", "c"]);
}

#[test]
fn test_tokenize_empty_line_yields_single_empty_field() {
    assert_eq!(tokenize("", None), vec![""]);
}

#[test]
fn test_tokenize_quoted_separator() {
    let fields = tokenize(r#""ABC","SMITH, JOHN","3""#, None);
    assert_eq!(fields, vec![r#""ABC""#, r#""SMITH, JOHN""#, r#""3""#]);
}

#[test]
fn test_tokenize_escaped_separator_is_literal() {
    let fields = tokenize(r"A\,B,C", None);
    assert_eq!(fields, vec![r"A\,B", "C"]);
}

#[test]
fn test_tokenize_escaped_quote_does_not_toggle() {
    // The escaped quote leaves the quoted section open, so the comma is literal
    let fields = tokenize(r#""say \"hi, there","x""#, None);
    assert_eq!(fields, vec![r#""say \"hi, there""#, r#""x""#]);
}

#[test]
fn test_tokenize_multibyte_text() {
    let fields = tokenize("CAFÉ,Ñ,ok", None);
    assert_eq!(fields, vec!["CAFÉ", "Ñ", "ok"]);
}

#[test]
fn test_clean_field_strips_quotes_and_whitespace() {
    assert_eq!(clean_field(r#"  "Runway 09" "#), "Runway 09");
    assert_eq!(clean_field(r#""""#), "");
    assert_eq!(clean_field("abc"), "abc");
}

#[test]
fn test_clean_field_preserves_case_and_escapes() {
    assert_eq!(clean_field(r#""Mixed\,Case""#), r"Mixed\,Case");
}
