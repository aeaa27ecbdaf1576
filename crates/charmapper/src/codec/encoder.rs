//! # Character Map Encoder

use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use crate::{
    codec::EncodedDocument,
    errors::CMResult,
    map::CharMap,
    types::{CharIndex, UNMAPPED_INDEX},
};

/// Counters from a streaming encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Characters read.
    pub chars: usize,

    /// Characters not present in the map.
    pub unmapped: usize,
}

/// Encodes text into 1-based map indices.
///
/// Each character maps to the lowest index holding it, or `0`.
#[derive(Debug, Clone)]
pub struct CharMapEncoder {
    map: Arc<CharMap>,
}

impl CharMapEncoder {
    /// Construct an encoder over a map.
    pub fn new(map: Arc<CharMap>) -> Self {
        Self { map }
    }

    /// The attached map.
    pub fn map(&self) -> &Arc<CharMap> {
        &self.map
    }

    /// Encode one character.
    pub fn encode_char(
        &self,
        ch: char,
    ) -> CharIndex {
        self.map.find_index(ch).unwrap_or(UNMAPPED_INDEX)
    }

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - the text to encode.
    /// * `indices` - the target buffer to append to.
    pub fn encode_append(
        &self,
        text: &str,
        indices: &mut Vec<CharIndex>,
    ) {
        indices.extend(text.chars().map(|ch| self.encode_char(ch)));
    }

    /// Encode text into an [`EncodedDocument`].
    pub fn encode_document(
        &self,
        text: &str,
    ) -> EncodedDocument {
        let mut indices = Vec::with_capacity(text.len());
        self.encode_append(text, &mut indices);
        indices.into()
    }

    /// Encode a text stream, writing the [`EncodedDocument`] text form.
    ///
    /// Line endings are kept, and encoded like any other character.
    pub fn encode_stream(
        &self,
        reader: &mut dyn BufRead,
        writer: &mut dyn Write,
    ) -> CMResult<EncodeStats> {
        let mut stats = EncodeStats::default();

        let mut line = String::new();
        let mut indices = Vec::new();
        while reader.read_line(&mut line)? > 0 {
            indices.clear();
            self.encode_append(&line, &mut indices);

            for &index in &indices {
                if index == UNMAPPED_INDEX {
                    stats.unmapped += 1;
                }
                write!(writer, "{index} ")?;
            }
            stats.chars += indices.len();

            line.clear();
        }
        writer.flush()?;

        log::info!(
            "encoded {} characters ({} unmapped)",
            stats.chars,
            stats.unmapped
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn test_encoder() -> CharMapEncoder {
        CharMapEncoder::new(Arc::new(
            CharMap::from_alphabet("abc \n".chars(), 256).unwrap(),
        ))
    }

    #[test]
    fn test_encode_document() {
        let encoder = test_encoder();

        let doc = encoder.encode_document("cab z\n");
        assert_eq!(doc.indices(), &[3, 1, 2, 4, 0, 5]);
        assert_eq!(doc.to_string(), "3 1 2 4 0 5 ");
        assert_eq!(encoder.encode_char('x'), 0);
    }

    #[test]
    fn test_encode_stream() {
        let encoder = test_encoder();

        let mut reader = Cursor::new("ab\r\nc\n");
        let mut out = Vec::new();
        let stats = encoder.encode_stream(&mut reader, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1 2 0 5 3 5 ");
        assert_eq!(
            stats,
            EncodeStats {
                chars: 6,
                unmapped: 1
            }
        );
    }

    #[test]
    fn test_encode_empty() {
        let encoder = test_encoder();

        let mut out = Vec::new();
        let stats = encoder
            .encode_stream(&mut Cursor::new(""), &mut out)
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(stats, EncodeStats::default());
        assert!(encoder.encode_document("").is_empty());
    }
}
