//! # Character Map Decoder

use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use crate::{
    codec::{DecodeOptions, EncodedDocument},
    errors::CMResult,
    map::CharMap,
    types::{CharIndex, UNMAPPED_INDEX},
};

/// The decoding of one index token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedToken {
    /// A mapped character.
    Char(char),

    /// Index `0`; decodes to the placeholder.
    Placeholder(char),

    /// An index in `1..=size` whose slot is unassigned.
    Unassigned,

    /// A non-numeric, negative, or out-of-range token.
    Skipped,
}

impl DecodedToken {
    /// The emitted character, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            DecodedToken::Char(ch) | DecodedToken::Placeholder(ch) => Some(*ch),
            _ => None,
        }
    }
}

/// Counters from a streaming decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Tokens read.
    pub tokens: usize,

    /// Characters written, placeholders included.
    pub chars: usize,

    /// Placeholders written for index `0`.
    pub placeholders: usize,

    /// In-range tokens whose slot is unassigned.
    pub unassigned: usize,

    /// Non-numeric, negative, or out-of-range tokens.
    pub skipped: usize,
}

impl DecodeStats {
    fn record(
        &mut self,
        decoded: DecodedToken,
    ) {
        self.tokens += 1;
        match decoded {
            DecodedToken::Char(_) => self.chars += 1,
            DecodedToken::Placeholder(_) => {
                self.chars += 1;
                self.placeholders += 1;
            }
            DecodedToken::Unassigned => self.unassigned += 1,
            DecodedToken::Skipped => self.skipped += 1,
        }
    }
}

/// Decodes whitespace-separated map indices back into text.
#[derive(Debug, Clone)]
pub struct CharMapDecoder {
    map: Arc<CharMap>,
    options: DecodeOptions,
}

impl CharMapDecoder {
    /// Construct a decoder over a map, with default options.
    pub fn new(map: Arc<CharMap>) -> Self {
        Self::with_options(map, DecodeOptions::default())
    }

    /// Construct a decoder over a map.
    pub fn with_options(
        map: Arc<CharMap>,
        options: DecodeOptions,
    ) -> Self {
        Self { map, options }
    }

    /// The attached map.
    pub fn map(&self) -> &Arc<CharMap> {
        &self.map
    }

    /// The decoder options.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode one index.
    pub fn decode_index(
        &self,
        index: i64,
    ) -> DecodedToken {
        if index == UNMAPPED_INDEX as i64 {
            return DecodedToken::Placeholder(self.options.placeholder);
        }
        if index < 0 || index as u64 > self.map.size() as u64 {
            return DecodedToken::Skipped;
        }
        match self.map.get(index as CharIndex) {
            Some(ch) => DecodedToken::Char(ch),
            None => DecodedToken::Unassigned,
        }
    }

    /// Decode one text token.
    pub fn decode_token(
        &self,
        token: &str,
    ) -> DecodedToken {
        match token.parse::<i64>() {
            Ok(index) => self.decode_index(index),
            Err(_) => DecodedToken::Skipped,
        }
    }

    /// Decode whitespace-separated tokens, appending to a target string.
    ///
    /// ## Returns
    /// The decode counters for `text`.
    pub fn decode_append(
        &self,
        text: &str,
        out: &mut String,
    ) -> DecodeStats {
        let mut stats = DecodeStats::default();
        for token in text.split_whitespace() {
            let decoded = self.decode_token(token);
            if decoded == DecodedToken::Skipped {
                log::debug!("skipping token {token:?}");
            }
            if let Some(ch) = decoded.as_char() {
                out.push(ch);
            }
            stats.record(decoded);
        }
        stats
    }

    /// Decode an [`EncodedDocument`] to a string.
    pub fn decode_document(
        &self,
        doc: &EncodedDocument,
    ) -> String {
        doc.indices()
            .iter()
            .filter_map(|&index| self.decode_index(index as i64).as_char())
            .collect()
    }

    /// Decode a token stream, writing the text.
    pub fn decode_stream(
        &self,
        reader: &mut dyn BufRead,
        writer: &mut dyn Write,
    ) -> CMResult<DecodeStats> {
        let mut stats = DecodeStats::default();

        let mut line = String::new();
        let mut text = String::new();
        while reader.read_line(&mut line)? > 0 {
            text.clear();
            let line_stats = self.decode_append(&line, &mut text);
            writer.write_all(text.as_bytes())?;

            stats.tokens += line_stats.tokens;
            stats.chars += line_stats.chars;
            stats.placeholders += line_stats.placeholders;
            stats.unassigned += line_stats.unassigned;
            stats.skipped += line_stats.skipped;

            line.clear();
        }
        writer.flush()?;

        log::info!(
            "decoded {} tokens into {} characters ({} placeholders, {} skipped)",
            stats.tokens,
            stats.chars,
            stats.placeholders,
            stats.skipped + stats.unassigned
        );
        Ok(stats)
    }
}
