//! # Common Types

/// The index type of a character map slot.
///
/// Slot indices are 1-based; `0` is reserved for "not in the map".
pub type CharIndex = u32;

/// The index emitted for characters which are not in the map.
pub const UNMAPPED_INDEX: CharIndex = 0;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CMHashMap<K, V> {
            CMHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CMHashMap<K, V> {
            CMHashMap::with_capacity(capacity)
        }
    }
}
