//! # File References

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// The file extension appended to numbered files.
pub const NUMBERED_FILE_EXTENSION: &str = "txt";

/// A user-supplied file reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef {
    /// A bare number `n`, meaning `n.txt` in the resolution directory.
    Numbered(String),

    /// A literal path.
    Path(PathBuf),
}

impl FileRef {
    /// Parse a file reference.
    ///
    /// Non-empty all-ASCII-digit strings are [`FileRef::Numbered`].
    pub fn parse(s: &str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            FileRef::Numbered(s.to_string())
        } else {
            FileRef::Path(PathBuf::from(s))
        }
    }

    /// Returns `true` for [`FileRef::Numbered`].
    pub fn is_numbered(&self) -> bool {
        matches!(self, FileRef::Numbered(_))
    }

    /// Resolve to a path.
    ///
    /// ## Arguments
    /// * `dir` - the directory numbered files live in; literal paths ignore it.
    pub fn resolve<P: AsRef<Path>>(
        &self,
        dir: P,
    ) -> PathBuf {
        match self {
            FileRef::Numbered(n) => dir
                .as_ref()
                .join(format!("{n}.{NUMBERED_FILE_EXTENSION}")),
            FileRef::Path(p) => p.clone(),
        }
    }
}

impl fmt::Display for FileRef {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FileRef::Numbered(n) => write!(f, "{n}.{NUMBERED_FILE_EXTENSION}"),
            FileRef::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(FileRef::parse("5"), FileRef::Numbered("5".to_string()));
        assert_eq!(FileRef::parse("007"), FileRef::Numbered("007".to_string()));
        assert!(FileRef::parse("12").is_numbered());

        for s in ["", "5.txt", "-5", "a5", "map.txt", "\u{0665}"] {
            assert_eq!(FileRef::parse(s), FileRef::Path(PathBuf::from(s)), "{s:?}");
        }
    }

    #[test]
    fn test_resolve() {
        let dir = Path::new("maps");
        assert_eq!(FileRef::parse("5").resolve(dir), dir.join("5.txt"));
        assert_eq!(
            FileRef::parse("other/x.txt").resolve(dir),
            PathBuf::from("other/x.txt")
        );
        assert_eq!(FileRef::parse("5").to_string(), "5.txt");
    }
}
