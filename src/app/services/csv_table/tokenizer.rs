//! Line tokenizer for NASR CSV records
//!
//! Splits one record line on commas that are neither escaped nor inside a
//! quoted section. Quotes and escapes are left in place; they are removed
//! later by [`clean_field`] (quotes and surrounding whitespace only).

use crate::constants::{ESCAPE, FIELD_SEPARATOR, QUOTE};

/// Split one line into raw fields
///
/// A quote toggles the quoted section unless the previous character is the
/// escape character. The final field runs to the end of the line, so an empty
/// line yields a single empty field.
///
/// # Arguments
/// * `line` - One record line without its line terminator
/// * `size_hint` - Expected field count, used to pre-size the output
pub fn tokenize(line: &str, size_hint: Option<usize>) -> Vec<&str> {
    let mut fields = Vec::with_capacity(size_hint.unwrap_or(0));
    let mut start = 0;
    let mut previous = None;
    let mut in_quoted_section = false;

    for (position, c) in line.char_indices() {
        let escaped = previous == Some(ESCAPE);

        if c == QUOTE && !escaped {
            in_quoted_section = !in_quoted_section;
        }

        if c == FIELD_SEPARATOR && !escaped && !in_quoted_section {
            fields.push(&line[start..position]);
            start = position + c.len_utf8();
        }

        previous = Some(c);
    }

    fields.push(&line[start..]);
    fields
}

/// Strip surrounding whitespace and quote characters from a raw field
///
/// Case is preserved and interior characters (including escapes) are untouched.
pub fn clean_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == QUOTE)
}
