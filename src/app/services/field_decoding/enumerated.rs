//! Closed enumerations decoded from code columns
//!
//! A coded column is matched by exact string comparison against a static
//! [`LookupTable`]. The result keeps three outcomes apart:
//! - `Matched` - the code is in the table
//! - `Unrecognized` - non-empty text that is not in the table (carries a sentinel)
//! - `Absent` - the cell is empty
//!
//! Enumerations are declared with [`code_enum!`](crate::code_enum), which
//! generates the enum, its `Unknown` sentinel and its [`Enumeration`] impl.

/// Static code to value table
///
/// Several codes may map to one value; the first listed code is the
/// canonical one returned by [`code_of`](Self::code_of).
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<E: 'static> {
    entries: &'static [(&'static str, E)],
}

impl<E: Copy + 'static> LookupTable<E> {
    pub const fn new(entries: &'static [(&'static str, E)]) -> Self {
        Self { entries }
    }

    /// Value for an exact code; the first matching entry wins
    pub fn find(&self, code: &str) -> Option<E> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, value)| *value)
    }

    /// Canonical code for a value (inverse lookup)
    pub fn code_of(&self, value: E) -> Option<&'static str>
    where
        E: PartialEq,
    {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(code, _)| *code)
    }

    /// Every code in table order
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A closed set of values with a static code table and an unknown sentinel
pub trait Enumeration: Copy + PartialEq + 'static {
    const TABLE: LookupTable<Self>;

    /// Value substituted for codes missing from [`TABLE`](Self::TABLE)
    const UNKNOWN: Self;

    fn from_code(code: &str) -> Option<Self> {
        Self::TABLE.find(code)
    }

    /// Canonical code, `None` for the sentinel
    fn code(&self) -> Option<&'static str> {
        Self::TABLE.code_of(*self)
    }

    fn is_known_code(code: &str) -> bool {
        Self::TABLE.find(code).is_some()
    }
}

/// Outcome of decoding a coded cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Enumerated<E> {
    /// Code found in the lookup table
    Matched(E),

    /// Non-empty code missing from the lookup table, with the sentinel substituted
    Unrecognized(E),

    /// Empty cell
    Absent,
}

impl<E: Copy> Enumerated<E> {
    /// Classify cleaned text against a lookup table
    pub fn classify(text: &str, table: &LookupTable<E>, sentinel: E) -> Self {
        if text.is_empty() {
            return Self::Absent;
        }
        match table.find(text) {
            Some(value) => Self::Matched(value),
            None => Self::Unrecognized(sentinel),
        }
    }

    /// Best-effort value: the match or the sentinel, `None` only when absent
    pub fn as_option(&self) -> Option<E> {
        match self {
            Self::Matched(value) | Self::Unrecognized(value) => Some(*value),
            Self::Absent => None,
        }
    }

    pub fn value_or(&self, fallback: E) -> E {
        self.as_option().unwrap_or(fallback)
    }

    /// The value only if the code was recognized
    pub fn matched(&self) -> Option<E> {
        match self {
            Self::Matched(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Declare a coded enumeration with its lookup table
///
/// Each variant lists one or more codes; the first is canonical. An `Unknown`
/// variant is appended and used as the sentinel for unrecognized codes.
///
/// ```rust
/// use nasr_reader::code_enum;
/// use nasr_reader::app::services::field_decoding::Enumeration;
///
/// code_enum! {
///     /// Runway lighting
///     pub enum Lighting {
///         High => ["HIGH", "H"],
///         Medium => ["MED"],
///     }
/// }
///
/// assert_eq!(Lighting::from_code("H"), Some(Lighting::High));
/// assert_eq!(Lighting::High.code(), Some("HIGH"));
/// assert_eq!(Lighting::Unknown.code(), None);
/// ```
#[macro_export]
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => [$($code:literal),+ $(,)?]
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Code not present in the lookup table
            Unknown,
        }

        impl $crate::app::services::field_decoding::Enumeration for $name {
            const TABLE: $crate::app::services::field_decoding::LookupTable<Self> =
                $crate::app::services::field_decoding::LookupTable::new(&[
                    $( $( ($code, $name::$variant), )+ )*
                ]);

            const UNKNOWN: Self = $name::Unknown;
        }
    };
}
