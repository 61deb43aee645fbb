//! Per-coin snapshot cache.

use super::SnapshotDocument;
use crate::types::Cursor;
use std::collections::HashMap;

/// A rendered document and the cursor it was built for.
#[derive(Clone, Debug)]
pub struct SnapshotEntry {
    pub cursor: Cursor,
    pub document: SnapshotDocument,
}

/// At most one cached snapshot per coin.
///
/// An entry only serves requests for exactly the cursor it was built for.
/// There is no size bound; entries leave only through
/// [`invalidate`](Self::invalidate) or replacement.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    entries: HashMap<String, SnapshotEntry>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached document for `coin` if it was built for exactly `cursor`.
    pub fn get(&self, coin: &str, cursor: Cursor) -> Option<SnapshotDocument> {
        self.entries
            .get(coin)
            .filter(|entry| entry.cursor == cursor && !entry.document.is_empty())
            .map(|entry| SnapshotDocument::clone(&entry.document))
    }

    /// Store `document` for `coin`, replacing any previous entry.
    pub fn insert(&mut self, coin: &str, cursor: Cursor, document: SnapshotDocument) {
        self.entries
            .insert(coin.to_string(), SnapshotEntry { cursor, document });
    }

    /// Drop the entry for `coin`. Returns whether one existed.
    pub fn invalidate(&mut self, coin: &str) -> bool {
        self.entries.remove(coin).is_some()
    }

    /// The live entry for `coin`, whatever its cursor.
    #[cfg(test)]
    pub(crate) fn entry(&self, coin: &str) -> Option<&SnapshotEntry> {
        self.entries.get(coin)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
