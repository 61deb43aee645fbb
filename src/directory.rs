//! The user directory service tying registry and snapshot cache together.

use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::registry::Registry;
use crate::snapshot::{self, HandleEncoding, SnapshotCache, SnapshotDocument};
use crate::types::{Cursor, DirectoryStats, Timestamp, UserId, MERGED_COIN};
use parking_lot::Mutex;

/// State guarded by the directory lock.
#[derive(Debug, Default)]
struct DirectoryState {
    registry: Registry,
    cache: SnapshotCache,
}

/// Concurrently accessed per-coin user directory.
///
/// A single mutex guards the registry and the snapshot cache together, so
/// every operation observes either all or none of a write, and a snapshot is
/// never rendered from a half-applied update.
///
/// A new directory is empty. Nothing is persisted and no user is ever
/// removed; the directory lives as long as its owner keeps it.
pub struct UserDirectory {
    config: DirectoryConfig,
    state: Mutex<DirectoryState>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    /// Create an empty directory with the default configuration.
    pub fn new() -> Self {
        Self {
            config: DirectoryConfig::default(),
            state: Mutex::new(DirectoryState::default()),
        }
    }

    /// Create an empty directory with a validated configuration.
    pub fn with_config(config: DirectoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: Mutex::new(DirectoryState::default()),
        })
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    // --- Writes ---

    /// Record `id → handle` under `coin` and the merged partition.
    ///
    /// Overwrites an existing handle for the same id, restamps the handle's
    /// update time, and discards the cached snapshots of `coin` and of the
    /// merged partition. Inputs are not validated; an empty `coin` writes
    /// straight into the merged partition.
    pub fn add_user(&self, id: impl Into<UserId>, handle: &str, coin: &str) {
        let id = id.into();
        let mut state = self.state.lock();
        let now = Timestamp::now();

        state.registry.add_user(id, handle, coin, now);
        tracing::trace!(coin, id = id.0, handle, "user recorded");

        let evicted_coin = state.cache.invalidate(coin);
        let evicted_merged = state.cache.invalidate(MERGED_COIN);
        if evicted_coin || evicted_merged {
            tracing::debug!(coin, evicted_coin, evicted_merged, "snapshot cache invalidated");
        }
    }

    // --- Reads ---

    /// JSON document listing every user of `coin` with id greater than
    /// `last_user_id`, in ascending id order.
    ///
    /// A cursor of zero or below lists the whole partition. Unknown coins
    /// produce an empty `data` object. The document is cached per coin and
    /// returned as-is while the same cursor is requested and no write touches
    /// the coin.
    pub fn get_user_list_json(&self, last_user_id: impl Into<Cursor>, coin: &str) -> SnapshotDocument {
        let cursor = last_user_id.into();
        let mut state = self.state.lock();

        if let Some(document) = state.cache.get(coin, cursor) {
            tracing::debug!(coin, %cursor, "snapshot cache hit");
            return document;
        }

        let partition = state.registry.partition(coin);
        let document: SnapshotDocument =
            snapshot::render(partition, cursor, self.handle_encoding()).into();
        tracing::debug!(
            coin,
            %cursor,
            partition_len = partition.map_or(0, |p| p.len()),
            bytes = document.len(),
            "snapshot rebuilt"
        );

        state
            .cache
            .insert(coin, cursor, SnapshotDocument::clone(&document));
        document
    }

    /// Last update time of `handle` within `coin`, or [`Timestamp::ZERO`]
    /// if it was never recorded there.
    ///
    /// Takes the directory lock, so the result reflects every completed
    /// `add_user` call.
    pub fn get_user_update_time(&self, handle: &str, coin: &str) -> Timestamp {
        self.state.lock().registry.update_time(handle, coin)
    }

    /// Seconds after an update during which pollers may not have seen it.
    pub fn safety_period(&self) -> u64 {
        self.config.safety_period()
    }

    /// Whether `handle` was updated in `coin` within the safety period.
    pub fn is_in_safety_period(&self, handle: &str, coin: &str) -> bool {
        let updated = self.get_user_update_time(handle, coin);
        if updated.is_zero() {
            return false;
        }
        updated.seconds_until(Timestamp::now()) < self.safety_period()
    }

    /// Number of users in `coin`'s partition.
    pub fn user_count(&self, coin: &str) -> usize {
        self.state.lock().registry.user_count(coin)
    }

    /// Real coins seen so far, sorted.
    pub fn coins(&self) -> Vec<String> {
        self.state.lock().registry.coins()
    }

    /// Directory counters.
    pub fn stats(&self) -> DirectoryStats {
        let state = self.state.lock();
        DirectoryStats {
            coins: state.registry.coins().len(),
            merged_users: state.registry.user_count(MERGED_COIN),
            cached_snapshots: state.cache.len(),
        }
    }

    fn handle_encoding(&self) -> HandleEncoding {
        if self.config.escape_handles {
            HandleEncoding::Escaped
        } else {
            HandleEncoding::Raw
        }
    }
}
