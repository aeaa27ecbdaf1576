//! # Numbered Files
//!
//! Map files and encoded documents are conventionally named by number;
//! a bare `"5"` refers to `5.txt` in the working directory.
//!
//! * [`FileRef`] parses a user file reference.
//! * [`DirResolver`] picks the directory numbered files resolve against.

mod dir_resolver;
mod file_ref;

#[doc(inline)]
pub use dir_resolver::*;
#[doc(inline)]
pub use file_ref::*;
