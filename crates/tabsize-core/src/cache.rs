//! Last-known content size per tab.

use std::collections::HashMap;

use tabsize_common::types::{Size, TabId};

/// Maps a tab to the last size resolved for it.
///
/// A missing entry means "never measured", which is distinct from any
/// stored value, zero included.
#[derive(Debug, Default)]
pub struct SizeCache {
    sizes: HashMap<TabId, Size>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tab: TabId) -> Option<Size> {
        self.sizes.get(&tab).copied()
    }

    pub fn set(&mut self, tab: TabId, size: Size) {
        self.sizes.insert(tab, size);
    }

    /// Evict a tab's entry, returning what was cached.
    pub fn remove(&mut self, tab: TabId) -> Option<Size> {
        self.sizes.remove(&tab)
    }

    pub fn contains(&self, tab: TabId) -> bool {
        self.sizes.contains_key(&tab)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
