//! Primitive decode targets

use crate::constants::{DATE_FORMAT, FALSE_WORDS, TRUE_WORDS};
use chrono::NaiveDate;

/// A type that can be produced from one cleaned cell
///
/// `decode` returns `None` for any text the type cannot represent, including
/// empty text for every type except [`String`].
pub trait Decodable: Sized {
    /// Human-readable kind used in decode errors
    const KIND: &'static str;

    fn decode(text: &str) -> Option<Self>;
}

macro_rules! impl_decodable_from_str {
    ($kind:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Decodable for $ty {
                const KIND: &'static str = $kind;

                fn decode(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )+
    };
}

impl_decodable_from_str!("integer" => i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// `NaN`, `inf` and values that overflow to infinity are rejected
macro_rules! impl_decodable_finite {
    ($kind:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Decodable for $ty {
                const KIND: &'static str = $kind;

                fn decode(text: &str) -> Option<Self> {
                    text.parse::<$ty>().ok().filter(|value| value.is_finite())
                }
            }
        )+
    };
}

impl_decodable_finite!("decimal" => f32, f64);

impl Decodable for bool {
    const KIND: &'static str = "boolean";

    fn decode(text: &str) -> Option<Self> {
        let word = text.to_ascii_uppercase();
        if TRUE_WORDS.contains(&word.as_str()) {
            Some(true)
        } else if FALSE_WORDS.contains(&word.as_str()) {
            Some(false)
        } else {
            None
        }
    }
}

impl Decodable for char {
    const KIND: &'static str = "character";

    fn decode(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Decodable for String {
    const KIND: &'static str = "text";

    fn decode(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl Decodable for NaiveDate {
    const KIND: &'static str = "date (yyyy/mm/dd)";

    fn decode(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
    }
}
