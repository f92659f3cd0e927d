//! Column-to-kind mapping for strict validation of extract rows
//!
//! Entry types publish a static `&[FieldSpec]` describing the columns they
//! read. Validation uses it to report header gaps and cells that would fail
//! (or silently fold) under the decode paths.

use super::decodable::Decodable;
use crate::app::services::csv_table::{Header, Row};
use crate::constants::REPEATED_VALUE_SEPARATOR;
use crate::Result;
use chrono::NaiveDate;
use std::fmt;

/// Target shape of one column
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Whole number that may be negative (`i32`)
    Signed,

    /// Whole number read into a `u32`
    Unsigned,

    /// Whole number read into a `u16`
    UnsignedShort,

    Decimal,
    Boolean,
    Character,
    Text,
    Date,

    /// Single code checked against an enumeration's table
    Code(fn(&str) -> bool),

    /// Comma-separated codes checked against an enumeration's table
    CodeList(fn(&str) -> bool),
}

impl FieldKind {
    /// Name used in issue reports
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Signed => i32::KIND,
            Self::Unsigned => "non-negative integer",
            Self::UnsignedShort => "non-negative integer up to 65535",
            Self::Decimal => f64::KIND,
            Self::Boolean => bool::KIND,
            Self::Character => char::KIND,
            Self::Text => String::KIND,
            Self::Date => NaiveDate::KIND,
            Self::Code(_) => "code",
            Self::CodeList(_) => "code list",
        }
    }

    /// Whether non-empty text is acceptable for this kind
    fn accepts(&self, text: &str) -> std::result::Result<(), IssueKind> {
        let parses = match self {
            Self::Signed => i32::decode(text).is_some(),
            Self::Unsigned => u32::decode(text).is_some(),
            Self::UnsignedShort => u16::decode(text).is_some(),
            Self::Decimal => f64::decode(text).is_some(),
            Self::Boolean => bool::decode(text).is_some(),
            Self::Character => char::decode(text).is_some(),
            Self::Text => true,
            Self::Date => NaiveDate::decode(text).is_some(),
            Self::Code(known) => {
                return known(text).then_some(()).ok_or(IssueKind::UnrecognizedCode);
            }
            Self::CodeList(known) => {
                return text
                    .split(REPEATED_VALUE_SEPARATOR)
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .all(known)
                    .then_some(())
                    .ok_or(IssueKind::UnrecognizedCode);
            }
        };

        if parses {
            Ok(())
        } else {
            Err(IssueKind::Unparsable {
                expected: self.expected(),
            })
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expected())
    }
}

/// One column of an entry's schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            required: true,
        }
    }

    pub const fn optional(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            required: false,
        }
    }
}

/// Why a cell failed inspection
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum IssueKind {
    MissingRequired,
    Unparsable { expected: &'static str },
    UnrecognizedCode,
}

/// A cell that failed inspection
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldIssue {
    pub column: &'static str,
    pub value: String,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingRequired => write!(f, "{}: required value missing", self.column),
            IssueKind::Unparsable { expected } => {
                write!(f, "{}: '{}' is not a valid {}", self.column, self.value, expected)
            }
            IssueKind::UnrecognizedCode => {
                write!(f, "{}: '{}' is not a recognized code", self.column, self.value)
            }
        }
    }
}

/// Schema columns absent from a header
pub fn missing_columns(header: &Header, fields: &[FieldSpec]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|spec| !header.contains(spec.column))
        .map(|spec| spec.column)
        .collect()
}

/// Check every mapped cell of one row
///
/// # Errors
/// * `Error::ColumnNotFound` if a mapped column is missing from the row's header;
///   run [`missing_columns`] first to report those as a group
pub fn inspect_row(row: &Row, fields: &[FieldSpec]) -> Result<Vec<FieldIssue>> {
    let mut issues = Vec::new();

    for spec in fields {
        let text = row.raw(spec.column)?;

        let kind = if text.is_empty() {
            if !spec.required {
                continue;
            }
            IssueKind::MissingRequired
        } else {
            match spec.kind.accepts(text) {
                Ok(()) => continue,
                Err(kind) => kind,
            }
        };

        issues.push(FieldIssue {
            column: spec.column,
            value: text.to_string(),
            kind,
        });
    }

    Ok(issues)
}
