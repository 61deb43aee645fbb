//! Ordered id → handle partitions and handle → time indexes.

use crate::types::{Cursor, Timestamp, UserId};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

/// Users of a single coin, ordered by ascending id.
#[derive(Clone, Debug, Default)]
pub struct CoinPartition {
    users: BTreeMap<UserId, String>,
}

impl CoinPartition {
    /// Insert or overwrite the handle for `id`.
    pub fn insert(&mut self, id: UserId, handle: &str) {
        self.users.insert(id, handle.to_string());
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &str)> + '_ {
        self.users.iter().map(|(id, handle)| (*id, handle.as_str()))
    }

    /// Entries with id strictly greater than `cursor`, or every entry when
    /// the cursor is at the start.
    pub fn iter_after(&self, cursor: Cursor) -> impl Iterator<Item = (UserId, &str)> + '_ {
        let lower = if cursor.is_start() {
            Bound::Unbounded
        } else {
            Bound::Excluded(UserId(cursor.0))
        };
        self.users
            .range((lower, Bound::Unbounded))
            .map(|(id, handle)| (*id, handle.as_str()))
    }
}

/// Last update time per handle within one coin.
#[derive(Clone, Debug, Default)]
pub struct UpdateTimeIndex {
    times: HashMap<String, Timestamp>,
}

impl UpdateTimeIndex {
    /// Stamp `handle` with `at`, replacing any earlier stamp.
    pub fn record(&mut self, handle: &str, at: Timestamp) {
        match self.times.get_mut(handle) {
            Some(existing) => *existing = at,
            None => {
                self.times.insert(handle.to_string(), at);
            }
        }
    }

    pub fn get(&self, handle: &str) -> Option<Timestamp> {
        self.times.get(handle).copied()
    }
}
