//! # Cell Enumeration
//!
//! Lists every string of `n` cells over an alphabet of `k + 1` characters,
//! in odometer order; the first cell is the most significant.
//!
//! The listing format is:
//! ```terminaloutput
//!
//! F1
//! aa
//! F2
//! ab
//! ...
//!
//! End.(k+1)^n = (1 + 1)^2 = 4
//! ```

use std::io::Write;

use crate::errors::{CMResult, CharMapError};

/// The default alphabet: letters, digits, ASCII punctuation, then whitespace.
pub const DEFAULT_ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0c\x0b",
);

/// The default cap on the number of enumerated strings.
pub const DEFAULT_ENUMERATION_LIMIT: u64 = 10_000_000;

/// Options for a [`CellEnumerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// The number of cells per string.
    pub cells: usize,

    /// The maximum number of strings.
    pub limit: u64,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            cells: 1,
            limit: DEFAULT_ENUMERATION_LIMIT,
        }
    }
}

impl EnumerateOptions {
    /// Sets the number of cells.
    pub fn with_cells(
        mut self,
        cells: usize,
    ) -> Self {
        self.cells = cells;
        self
    }

    /// Sets the enumeration limit.
    pub fn with_limit(
        mut self,
        limit: u64,
    ) -> Self {
        self.limit = limit;
        self
    }
}

/// Enumerates all fixed-length strings over an alphabet.
#[derive(Debug, Clone)]
pub struct CellEnumerator {
    alphabet: Vec<char>,
    cells: usize,
    count: u64,
}

impl CellEnumerator {
    /// Construct an enumerator.
    ///
    /// ## Errors
    /// * [`CharMapError::EmptyAlphabet`] for an empty alphabet.
    /// * [`CharMapError::EnumerationTooLarge`] if `|alphabet|^cells` exceeds `options.limit`.
    pub fn new<I>(
        alphabet: I,
        options: &EnumerateOptions,
    ) -> CMResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let alphabet: Vec<char> = alphabet.into_iter().collect();
        if alphabet.is_empty() {
            return Err(CharMapError::EmptyAlphabet);
        }

        let too_large = || CharMapError::EnumerationTooLarge {
            alphabet: alphabet.len(),
            cells: options.cells,
            limit: options.limit,
        };
        let count = u32::try_from(options.cells)
            .ok()
            .and_then(|exp| (alphabet.len() as u64).checked_pow(exp))
            .filter(|&count| count <= options.limit)
            .ok_or_else(too_large)?;

        Ok(Self {
            cells: options.cells,
            count,
            alphabet,
        })
    }

    /// The alphabet.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The number of cells per string.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// The number of strings, `|alphabet|^cells`.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Iterate over the strings in odometer order.
    pub fn iter(&self) -> CellIter<'_> {
        CellIter {
            alphabet: &self.alphabet,
            digits: vec![0; self.cells],
            remaining: self.count,
        }
    }

    /// Write the enumeration listing.
    ///
    /// ## Returns
    /// The number of strings written.
    pub fn write_listing<W: Write>(
        &self,
        writer: &mut W,
    ) -> CMResult<u64> {
        log::info!(
            "enumerating {} strings of {} cells over {} characters",
            self.count,
            self.cells,
            self.alphabet.len()
        );

        let mut id: u64 = 0;
        for cells in self.iter() {
            id += 1;
            write!(writer, "\nF{id}\n{cells}")?;
        }

        writeln!(
            writer,
            "\n\nEnd.(k+1)^n = ({} + 1)^{} = {}",
            self.alphabet.len() - 1,
            self.cells,
            id
        )?;
        writer.flush()?;
        Ok(id)
    }
}

/// Iterator over the strings of a [`CellEnumerator`].
#[derive(Debug, Clone)]
pub struct CellIter<'a> {
    alphabet: &'a [char],
    digits: Vec<usize>,
    remaining: u64,
}

impl Iterator for CellIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let item = self.digits.iter().map(|&d| self.alphabet[d]).collect();

        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet.len() {
                break;
            }
            *digit = 0;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odometer_order() {
        let options = EnumerateOptions::default().with_cells(2);
        let e = CellEnumerator::new("ab".chars(), &options).unwrap();

        assert_eq!(e.count(), 4);
        assert_eq!(e.cells(), 2);
        assert_eq!(e.alphabet(), &['a', 'b']);
        assert_eq!(e.iter().collect::<Vec<_>>(), vec!["aa", "ab", "ba", "bb"]);
        assert_eq!(e.iter().size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_zero_cells() {
        let options = EnumerateOptions::default().with_cells(0);
        let e = CellEnumerator::new("xyz".chars(), &options).unwrap();
        assert_eq!(e.iter().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_write_listing() {
        let options = EnumerateOptions::default().with_cells(2);
        let e = CellEnumerator::new("01".chars(), &options).unwrap();

        let mut buf = Vec::new();
        assert_eq!(e.write_listing(&mut buf).unwrap(), 4);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\nF1\n00\nF2\n01\nF3\n10\nF4\n11\n\nEnd.(k+1)^n = (1 + 1)^2 = 4\n"
        );
    }

    #[test]
    fn test_limits() {
        assert!(matches!(
            CellEnumerator::new("".chars(), &EnumerateOptions::default()),
            Err(CharMapError::EmptyAlphabet)
        ));

        let options = EnumerateOptions::default().with_cells(3).with_limit(7);
        assert!(matches!(
            CellEnumerator::new("ab".chars(), &options),
            Err(CharMapError::EnumerationTooLarge {
                alphabet: 2,
                cells: 3,
                limit: 7
            })
        ));

        let options = EnumerateOptions::default()
            .with_cells(64)
            .with_limit(u64::MAX);
        assert!(CellEnumerator::new(DEFAULT_ALPHABET.chars(), &options).is_err());
    }

    #[test]
    fn test_default_alphabet() {
        assert_eq!(DEFAULT_ALPHABET.chars().count(), 100);
        assert!(DEFAULT_ALPHABET.ends_with("\x0c\x0b"));
    }
}
