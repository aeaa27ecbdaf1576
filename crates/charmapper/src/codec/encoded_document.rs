//! # Encoded Documents

use core::{fmt, str::FromStr};

use crate::{
    errors::CharMapError,
    types::{CharIndex, UNMAPPED_INDEX},
};

/// A sequence of map indices, one per source character.
///
/// The text form writes every index followed by a single space:
/// ```terminaloutput
/// 8 5 12 12 15 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedDocument {
    indices: Vec<CharIndex>,
}

impl From<Vec<CharIndex>> for EncodedDocument {
    fn from(indices: Vec<CharIndex>) -> Self {
        Self { indices }
    }
}

impl EncodedDocument {
    /// The indices.
    pub fn indices(&self) -> &[CharIndex] {
        &self.indices
    }

    /// Consume the document, returning the indices.
    pub fn into_indices(self) -> Vec<CharIndex> {
        self.indices
    }

    /// The number of indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if there are no indices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The number of unmapped (`0`) indices.
    pub fn unmapped_count(&self) -> usize {
        self.indices.iter().filter(|&&i| i == UNMAPPED_INDEX).count()
    }
}

impl fmt::Display for EncodedDocument {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for index in &self.indices {
            write!(f, "{index} ")?;
        }
        Ok(())
    }
}

/// Strict parsing; every whitespace-separated token must be an index.
///
/// See [`CharMapDecoder`](crate::codec::CharMapDecoder) for the lenient
/// token stream reading used when decoding files.
impl FromStr for EncodedDocument {
    type Err = CharMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(|token| {
                token
                    .parse::<CharIndex>()
                    .map_err(|e| CharMapError::Parse(format!("{token:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}
