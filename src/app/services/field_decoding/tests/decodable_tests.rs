//! Tests for primitive decode targets

use super::super::decodable::Decodable;
use chrono::NaiveDate;

#[test]
fn test_integer_decoding() {
    assert_eq!(i32::decode("-12"), Some(-12));
    assert_eq!(u32::decode("0042"), Some(42));
    assert_eq!(u8::decode("256"), None);
    assert_eq!(i64::decode(""), None);
    assert_eq!(i64::decode("1.5"), None);
}

#[test]
fn test_decimal_decoding() {
    assert_eq!(f64::decode("1234.5"), Some(1234.5));
    assert_eq!(f64::decode("-0.25"), Some(-0.25));
    assert_eq!(f64::decode("N/A"), None);
}

#[test]
fn test_decimal_rejects_non_finite() {
    for text in ["NaN", "nan", "inf", "-inf", "infinity", "1e400"] {
        assert_eq!(f64::decode(text), None, "{text}");
    }
    assert_eq!(f32::decode("1e39"), None);
    assert_eq!(f32::decode("2.5"), Some(2.5));
}

#[test]
fn test_boolean_vocabulary() {
    for word in ["TRUE", "t", "Yes", "y"] {
        assert_eq!(bool::decode(word), Some(true), "word {}", word);
    }
    for word in ["false", "F", "NO", "n"] {
        assert_eq!(bool::decode(word), Some(false), "word {}", word);
    }
    assert_eq!(bool::decode(""), None);
    assert_eq!(bool::decode("1"), None);
    assert_eq!(bool::decode("YESS"), None);
}

#[test]
fn test_character_decoding() {
    assert_eq!(char::decode("N"), Some('N'));
    assert_eq!(char::decode("Ñ"), Some('Ñ'));
    assert_eq!(char::decode(""), None);
    assert_eq!(char::decode("NS"), None);
}

#[test]
fn test_text_decoding_accepts_empty() {
    assert_eq!(String::decode(""), Some(String::new()));
    assert_eq!(String::decode("ROOF-TOP"), Some("ROOF-TOP".to_string()));
}

#[test]
fn test_date_decoding() {
    assert_eq!(
        NaiveDate::decode("2023/01/26"),
        NaiveDate::from_ymd_opt(2023, 1, 26)
    );
    assert_eq!(NaiveDate::decode("2023-01-26"), None);
    assert_eq!(NaiveDate::decode("2023/02/30"), None);
    assert_eq!(NaiveDate::decode(""), None);
}
