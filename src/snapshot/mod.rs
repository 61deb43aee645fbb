//! Serialized user-list snapshots and their per-coin cache.

mod cache;
mod document;

pub use cache::{SnapshotCache, SnapshotEntry};
pub use document::{render, HandleEncoding, EMPTY_DOCUMENT};

use std::sync::Arc;

/// An immutable rendered document. Cloning shares the same buffer.
pub type SnapshotDocument = Arc<str>;
