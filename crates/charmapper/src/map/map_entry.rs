//! # Map File Lines
//!
//! Lines are:
//! ```terminaloutput
//! {INDEX}\t{VALUE}
//! ```
//!
//! Where `VALUE` is one of:
//! * a single literal character, including a literal space or tab;
//! * `Space` or `Tab`;
//! * empty (read as a space);
//! * a backslash escape: `\n`, `\t`, `\r`, `\0`, `\\`, `\'`, `\"`;
//! * any longer token, of which only the first character is used.
//!
//! Trailing whitespace after a multi-character value is ignored.

use core::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::types::CharIndex;

/// The named token for `' '`.
pub const SPACE_TOKEN: &str = "Space";

/// The named token for `'\t'`.
pub const TAB_TOKEN: &str = "Tab";

/// A successfully parsed map file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapEntry {
    /// The 1-based slot index.
    pub index: CharIndex,

    /// The character.
    pub ch: char,
}

/// Non-fatal remarks about an accepted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryNote {
    /// The value was empty and read as a space.
    EmptyAsSpace,

    /// The value had several characters; only the first was used.
    Truncated {
        /// The full value token.
        token: String,
    },
}

/// Reasons a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No tab separator.
    MissingTab,

    /// The index is not an integer.
    InvalidIndex(String),

    /// The index is outside `1..=capacity`.
    IndexOutOfRange {
        /// The parsed index.
        index: i64,

        /// The map capacity.
        capacity: usize,
    },

    /// A two-character backslash sequence which is not a known escape.
    UnknownEscape(String),
}

/// The outcome of parsing one map file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line assigns a slot.
    Entry(MapEntry, Option<EntryNote>),

    /// The line was skipped.
    Skip(SkipReason),
}

impl fmt::Display for EntryNote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            EntryNote::EmptyAsSpace => write!(f, "empty character interpreted as space"),
            EntryNote::Truncated { token } => write!(
                f,
                "character part '{token}' contains multiple characters, using first one: {}",
                describe_char(token.chars().next().unwrap_or(' '))
            ),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            SkipReason::MissingTab => {
                write!(f, "not in the expected format (index<tab>character)")
            }
            SkipReason::InvalidIndex(s) => write!(f, "invalid index {s:?}"),
            SkipReason::IndexOutOfRange { index, capacity } => {
                write!(f, "index {index} out of range 1..={capacity}")
            }
            SkipReason::UnknownEscape(s) => write!(f, "unknown escape sequence {s}"),
        }
    }
}

/// Decode a two-character backslash escape marker.
pub fn decode_escape(marker: char) -> Option<char> {
    match marker {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

/// Parse one map file line.
///
/// A single-character value is taken verbatim, so `"7\t "` assigns a
/// literal space. Longer values have trailing whitespace trimmed before
/// matching, so `"2\tSpace "` is still a space and `"8\t  "` is empty.
///
/// ## Arguments
/// * `line` - the raw line; a trailing `\n` or `\r\n` is permitted.
/// * `capacity` - the map capacity; indices must lie in `1..=capacity`.
pub fn parse_map_line(
    line: &str,
    capacity: usize,
) -> LineOutcome {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let Some((index_part, value)) = line.split_once('\t') else {
        return LineOutcome::Skip(SkipReason::MissingTab);
    };

    let index: i64 = match index_part.trim().parse() {
        Ok(index) => index,
        Err(_) => return LineOutcome::Skip(SkipReason::InvalidIndex(index_part.to_string())),
    };
    if index < 1 || index as u64 > capacity as u64 {
        return LineOutcome::Skip(SkipReason::IndexOutOfRange { index, capacity });
    }
    let index = index as CharIndex;
    let entry = |ch| MapEntry { index, ch };

    let value = match value.chars().nth(1) {
        Some(_) => value.trim_end(),
        None => value,
    };

    if value == SPACE_TOKEN {
        return LineOutcome::Entry(entry(' '), None);
    }
    if value == TAB_TOKEN {
        return LineOutcome::Entry(entry('\t'), None);
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => LineOutcome::Entry(entry(' '), Some(EntryNote::EmptyAsSpace)),
        (Some(ch), None, _) => LineOutcome::Entry(entry(ch), None),
        (Some('\\'), Some(marker), None) => match decode_escape(marker) {
            Some(ch) => LineOutcome::Entry(entry(ch), None),
            None => LineOutcome::Skip(SkipReason::UnknownEscape(value.to_string())),
        },
        (Some(ch), Some(_), _) => LineOutcome::Entry(
            entry(ch),
            Some(EntryNote::Truncated {
                token: value.to_string(),
            }),
        ),
    }
}

/// Render a character for map listings.
///
/// Printable characters render as `'c'`; everything else as `'\xNN'`.
pub fn describe_char(ch: char) -> String {
    if is_printable(ch) {
        format!("'{ch}'")
    } else {
        format!("'\\x{:02x}'", ch as u32)
    }
}

/// Returns `true` for characters rendered literally in listings.
///
/// Control, format, separator (other than `' '`), private-use, surrogate
/// and unassigned characters are not printable.
pub fn is_printable(ch: char) -> bool {
    use GeneralCategory::*;
    if ch == ' ' {
        return true;
    }
    !matches!(
        get_general_category(ch),
        Control
            | Format
            | Surrogate
            | PrivateUse
            | Unassigned
            | SpaceSeparator
            | LineSeparator
            | ParagraphSeparator
    )
}

/// Choose the map file token which loads back to `ch`.
pub fn value_token(ch: char) -> String {
    match ch {
        ' ' => SPACE_TOKEN.to_string(),
        '\t' => TAB_TOKEN.to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\0' => "\\0".to_string(),
        ch => ch.to_string(),
    }
}

/// Format a map file line for a slot.
pub fn format_map_line(
    index: CharIndex,
    ch: char,
) -> String {
    format!("{index}\t{}", value_token(ch))
}
