//! # `charmapper` Character Map Transcoder
//!
//! A [`CharMap`] associates small 1-based indices with characters.
//! It is loaded from a tab-delimited map file, and is used to transliterate
//! text into a stream of indices and back.
//!
//! See:
//! * [`map`] to load, build, list, and save character maps.
//! * [`codec`] to encode text into indices and decode indices into text.
//! * [`files`] to resolve numbered-file shorthands (`"5"` => `5.txt`).
//! * [`enumerate`] to list every fixed-length string over an alphabet.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps the reverse-lookup ``HashMap`` for ``ahash``.
//! This is done by the [`types::CMHashMap`] type alias machinery.
//!
//! ## Map File Format
//!
//! ```terminaloutput
//! 1	a
//! 2	Space
//! 3	\n
//! ```
//!
//! ## Round Trip
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use charmapper::{
//!     codec::{CharMapDecoder, CharMapEncoder},
//!     map::{LoadOptions, load_char_map_path},
//! };
//!
//! fn example() -> charmapper::CMResult<String> {
//!     let report = load_char_map_path("1.txt", &LoadOptions::default())?;
//!     let map = Arc::new(report.map);
//!
//!     let encoder = CharMapEncoder::new(map.clone());
//!     let decoder = CharMapDecoder::new(map);
//!
//!     let doc = encoder.encode_document("hello");
//!     Ok(decoder.decode_document(&doc))
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod codec;
pub mod enumerate;
pub mod errors;
pub mod files;
pub mod map;
pub mod types;

#[doc(inline)]
pub use codec::{CharMapDecoder, CharMapEncoder, EncodedDocument};
#[doc(inline)]
pub use errors::{CMResult, CharMapError};
#[doc(inline)]
pub use map::{CharMap, CharMapBuilder, LoadOptions};
#[doc(inline)]
pub use types::CharIndex;
