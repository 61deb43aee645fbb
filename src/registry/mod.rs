//! Per-coin user registry.
//!
//! Every write lands in the named coin's partition and in the merged
//! partition keyed by [`MERGED_COIN`](crate::types::MERGED_COIN).

mod partition;

pub use partition::{CoinPartition, UpdateTimeIndex};

use crate::types::{is_merged, Timestamp, UserId, MERGED_COIN};
use std::collections::HashMap;

/// Id → handle partitions and handle → update time indexes, per coin.
#[derive(Debug, Default)]
pub struct Registry {
    partitions: HashMap<String, CoinPartition>,
    update_times: HashMap<String, UpdateTimeIndex>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id → handle` under `coin` and under the merged partition,
    /// stamping the handle with `now` in both update-time indexes.
    pub fn add_user(&mut self, id: UserId, handle: &str, coin: &str, now: Timestamp) {
        for key in [coin, MERGED_COIN] {
            self.partitions
                .entry(key.to_string())
                .or_default()
                .insert(id, handle);
            self.update_times
                .entry(key.to_string())
                .or_default()
                .record(handle, now);
        }
    }

    /// The partition for `coin`, if anything was ever written to it.
    pub fn partition(&self, coin: &str) -> Option<&CoinPartition> {
        self.partitions.get(coin)
    }

    /// Last update time of `handle` within `coin`, or zero if unknown.
    pub fn update_time(&self, handle: &str, coin: &str) -> Timestamp {
        self.update_times
            .get(coin)
            .and_then(|index| index.get(handle))
            .unwrap_or(Timestamp::ZERO)
    }

    /// Number of distinct ids in `coin`'s partition.
    pub fn user_count(&self, coin: &str) -> usize {
        self.partitions.get(coin).map_or(0, CoinPartition::len)
    }

    /// Real coins seen so far, sorted. The merged partition is excluded.
    pub fn coins(&self) -> Vec<String> {
        let mut coins: Vec<String> = self
            .partitions
            .keys()
            .filter(|coin| !is_merged(coin))
            .cloned()
            .collect();
        coins.sort();
        coins
    }
}
