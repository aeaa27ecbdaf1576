//! # Error Types

/// Errors from charmapper operations.
#[derive(Debug, thiserror::Error)]
pub enum CharMapError {
    /// A map index outside `1..=capacity`.
    #[error("map index {index} out of range 1..={capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: i64,

        /// The map capacity.
        capacity: usize,
    },

    /// An alphabet with no characters.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// An alphabet with more characters than the map has slots.
    #[error("alphabet of {alphabet} characters exceeds the map capacity of {capacity}")]
    AlphabetTooLarge {
        /// The alphabet size.
        alphabet: usize,

        /// The map capacity.
        capacity: usize,
    },

    /// An enumeration whose total count exceeds the configured limit.
    #[error("enumeration of {alphabet}^{cells} strings exceeds the limit of {limit}")]
    EnumerationTooLarge {
        /// The alphabet size.
        alphabet: usize,

        /// The number of cells.
        cells: usize,

        /// The configured limit.
        limit: u64,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (integer, char, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for charmapper operations.
pub type CMResult<T> = core::result::Result<T, CharMapError>;
