//! # Load Options

use crate::map::DEFAULT_MAP_CAPACITY;

/// Options for loading a [`CharMap`](crate::map::CharMap) from a map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Slot capacity; lines with indices outside `1..=capacity` are skipped.
    pub capacity: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MAP_CAPACITY,
        }
    }
}

impl LoadOptions {
    /// Sets the slot capacity.
    pub fn with_capacity(
        mut self,
        capacity: usize,
    ) -> Self {
        self.capacity = capacity;
        self
    }
}
