//! # Encoding and Decoding
//!
//! * [`CharMapEncoder`] turns text into an [`EncodedDocument`].
//! * [`CharMapDecoder`] turns index tokens back into text.

mod decode_options;
mod decoder;
mod encoded_document;
mod encoder;

#[doc(inline)]
pub use decode_options::*;
#[doc(inline)]
pub use decoder::*;
#[doc(inline)]
pub use encoded_document::*;
#[doc(inline)]
pub use encoder::*;
