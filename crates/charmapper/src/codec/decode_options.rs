//! # Decode Options

/// The default placeholder for index `0`.
pub const DEFAULT_PLACEHOLDER: char = '?';

/// Options for a [`CharMapDecoder`](crate::codec::CharMapDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// The character emitted for index `0`.
    pub placeholder: char,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl DecodeOptions {
    /// Sets the placeholder for index `0`.
    pub fn with_placeholder(
        mut self,
        placeholder: char,
    ) -> Self {
        self.placeholder = placeholder;
        self
    }
}
