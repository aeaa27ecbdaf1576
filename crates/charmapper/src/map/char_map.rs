//! # Character Map

use crate::{
    errors::{CMResult, CharMapError},
    types::{CMHashMap, CharIndex, hash_map_with_capacity},
};

/// The default slot capacity of a [`CharMap`].
pub const DEFAULT_MAP_CAPACITY: usize = 256;

/// A mutable character map under construction.
///
/// Slots are 1-based; a later [`insert`](Self::insert) to the same index
/// overwrites the earlier value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMapBuilder {
    capacity: usize,
    slots: Vec<Option<char>>,
}

impl Default for CharMapBuilder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAP_CAPACITY)
    }
}

impl CharMapBuilder {
    /// Create an empty builder with the given slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::new(),
        }
    }

    /// The slot capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The highest assigned index so far.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Check that `index` lies in `1..=capacity`.
    pub fn check_index(
        &self,
        index: i64,
    ) -> CMResult<CharIndex> {
        if index < 1 || index as u64 > self.capacity as u64 {
            return Err(CharMapError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            });
        }
        CharIndex::try_from(index).map_err(|_| CharMapError::IndexOutOfRange {
            index,
            capacity: self.capacity,
        })
    }

    /// Assign `ch` to the slot at `index`.
    ///
    /// ## Returns
    /// The previous value of the slot, if any.
    pub fn insert(
        &mut self,
        index: CharIndex,
        ch: char,
    ) -> CMResult<Option<char>> {
        let index = self.check_index(index as i64)? as usize;
        if self.slots.len() < index {
            self.slots.resize(index, None);
        }
        Ok(self.slots[index - 1].replace(ch))
    }

    /// Assign `ch` to the slot at `index`, returning the builder.
    pub fn with_entry(
        mut self,
        index: CharIndex,
        ch: char,
    ) -> CMResult<Self> {
        self.insert(index, ch)?;
        Ok(self)
    }

    /// Freeze the builder into a read-only [`CharMap`].
    pub fn build(self) -> CharMap {
        let mut reverse = hash_map_with_capacity(self.slots.len());
        for (offset, slot) in self.slots.iter().enumerate() {
            if let Some(ch) = slot {
                // Lowest index wins; matches a front-to-back scan.
                reverse.entry(*ch).or_insert((offset + 1) as CharIndex);
            }
        }

        CharMap {
            capacity: self.capacity,
            slots: self.slots,
            reverse,
        }
    }
}

/// A read-only map from 1-based indices to characters.
///
/// `size` is the highest assigned index; slots below it may be unassigned.
#[derive(Debug, Clone)]
pub struct CharMap {
    capacity: usize,
    slots: Vec<Option<char>>,
    reverse: CMHashMap<char, CharIndex>,
}

impl PartialEq for CharMap {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.slots == other.slots
    }
}

impl Eq for CharMap {}

impl Default for CharMap {
    fn default() -> Self {
        CharMapBuilder::default().build()
    }
}

impl CharMap {
    /// Build a map assigning `alphabet[i]` to index `i + 1`.
    ///
    /// ## Arguments
    /// * `alphabet` - the characters, in index order.
    /// * `capacity` - the slot capacity.
    ///
    /// ## Errors
    /// * [`CharMapError::EmptyAlphabet`] for an empty alphabet.
    /// * [`CharMapError::AlphabetTooLarge`] if the alphabet does not fit in `capacity`;
    ///   such a map would not load back under the same capacity.
    pub fn from_alphabet<I>(
        alphabet: I,
        capacity: usize,
    ) -> CMResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = alphabet.into_iter().collect();
        if chars.is_empty() {
            return Err(CharMapError::EmptyAlphabet);
        }

        if chars.len() > capacity {
            return Err(CharMapError::AlphabetTooLarge {
                alphabet: chars.len(),
                capacity,
            });
        }

        let mut builder = CharMapBuilder::with_capacity(capacity);
        for (offset, ch) in chars.into_iter().enumerate() {
            builder.insert((offset + 1) as CharIndex, ch)?;
        }
        Ok(builder.build())
    }

    /// The slot capacity the map was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The highest assigned index.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// The number of assigned slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no slot is assigned.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the character at a 1-based index.
    pub fn get(
        &self,
        index: CharIndex,
    ) -> Option<char> {
        let offset = (index as usize).checked_sub(1)?;
        self.slots.get(offset).copied().flatten()
    }

    /// Find the lowest index holding `ch`.
    pub fn find_index(
        &self,
        ch: char,
    ) -> Option<CharIndex> {
        self.reverse.get(&ch).copied()
    }

    /// Returns `true` if some slot holds `ch`.
    pub fn contains_char(
        &self,
        ch: char,
    ) -> bool {
        self.reverse.contains_key(&ch)
    }

    /// Iterate over the assigned `(index, char)` slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (CharIndex, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(offset, slot)| slot.map(|ch| ((offset + 1) as CharIndex, ch)))
    }

    /// Reopen the map for modification.
    pub fn into_builder(self) -> CharMapBuilder {
        CharMapBuilder {
            capacity: self.capacity,
            slots: self.slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_index(
        map: &CharMap,
        ch: char,
    ) -> Option<CharIndex> {
        map.iter().find(|&(_, c)| c == ch).map(|(idx, _)| idx)
    }

    #[test]
    fn test_builder_size_is_highest_index() {
        let mut builder = CharMapBuilder::default();
        builder.insert(3, 'c').unwrap();
        builder.insert(1, 'a').unwrap();

        let map = builder.build();
        assert_eq!(map.size(), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(1), Some('a'));
        assert_eq!(map.get(2), None);
        assert_eq!(map.get(3), Some('c'));
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(4), None);
    }

    #[test]
    fn test_builder_overwrite() {
        let mut builder = CharMapBuilder::default();
        assert_eq!(builder.insert(1, 'a').unwrap(), None);
        assert_eq!(builder.insert(1, 'b').unwrap(), Some('a'));

        let map = builder.build();
        assert_eq!(map.get(1), Some('b'));
        assert_eq!(map.find_index('a'), None);
        assert_eq!(map.find_index('b'), Some(1));
    }

    #[test]
    fn test_index_range() {
        let mut builder = CharMapBuilder::with_capacity(4);
        assert!(builder.insert(0, 'x').is_err());
        assert!(builder.insert(5, 'x').is_err());
        assert!(builder.insert(4, 'x').is_ok());

        assert!(matches!(
            builder.check_index(-2),
            Err(CharMapError::IndexOutOfRange {
                index: -2,
                capacity: 4
            })
        ));
    }

    #[test]
    fn test_lowest_index_wins() {
        let map = CharMapBuilder::default()
            .with_entry(5, 'x')
            .and_then(|b| b.with_entry(2, 'x'))
            .and_then(|b| b.with_entry(7, 'x'))
            .unwrap()
            .build();

        assert_eq!(map.find_index('x'), Some(2));
        assert_eq!(map.find_index('x'), scan_index(&map, 'x'));
    }

    #[test]
    fn test_reverse_index_matches_scan() {
        let map = CharMap::from_alphabet("abcabc xyz\t".chars(), 64).unwrap();
        for ch in "abcxyz \t?!".chars() {
            assert_eq!(map.find_index(ch), scan_index(&map, ch), "{ch:?}");
        }
    }

    #[test]
    fn test_from_alphabet() {
        let map = CharMap::from_alphabet("xyz".chars(), 3).unwrap();
        assert_eq!(map.size(), 3);
        assert_eq!(map.capacity(), 3);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(1, 'x'), (2, 'y'), (3, 'z')]
        );

        assert!(matches!(
            CharMap::from_alphabet("".chars(), 8),
            Err(CharMapError::EmptyAlphabet)
        ));
        assert!(matches!(
            CharMap::from_alphabet("xyz".chars(), 2),
            Err(CharMapError::AlphabetTooLarge {
                alphabet: 3,
                capacity: 2
            })
        ));
    }

    #[test]
    fn test_into_builder() {
        let map = CharMap::from_alphabet("ab".chars(), 8).unwrap();
        let mut builder = map.into_builder();
        builder.insert(4, 'd').unwrap();

        let map = builder.build();
        assert_eq!(map.size(), 4);
        assert!(map.contains_char('d'));
        assert!(!map.is_empty());
        assert!(CharMap::default().is_empty());
    }
}
