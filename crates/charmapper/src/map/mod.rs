//! # Character Maps
//!
//! A [`CharMap`] is built from a [`CharMapBuilder`], usually by
//! [`load_char_map_path`] or [`read_char_map`]; and is read-only afterward.

mod char_map;
mod load_options;
mod map_entry;
mod map_io;

#[doc(inline)]
pub use char_map::*;
#[doc(inline)]
pub use load_options::*;
#[doc(inline)]
pub use map_entry::*;
#[doc(inline)]
pub use map_io::*;
