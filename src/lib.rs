//! # User Directory
//!
//! An in-memory, concurrently accessed directory of users per payment coin,
//! served to polling clients as incremental JSON snapshots.
//!
//! ## Core Concepts
//!
//! - **Coins**: Each coin keeps an id → handle partition ordered by id
//! - **Merged view**: The empty coin `""` aggregates every coin's users
//! - **Snapshots**: Rendered documents cached per coin for one cursor
//! - **Update times**: When each handle was last written, per coin
//!
//! ## Example
//!
//! ```
//! use user_directory::UserDirectory;
//!
//! let directory = UserDirectory::new();
//! directory.add_user(1, "alice", "btc");
//! directory.add_user(2, "bob", "btc");
//!
//! // Everything after id 1
//! let json = directory.get_user_list_json(1, "btc");
//! assert_eq!(&*json, r#"{"err_no":0,"err_msg":null,"data":{"bob":2}}"#);
//!
//! // The merged view sees both
//! assert_eq!(directory.user_count(""), 2);
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod registry;
pub mod snapshot;
pub mod types;

// Re-exports
pub use config::DirectoryConfig;
pub use directory::UserDirectory;
pub use error::{DirectoryError, Result};
pub use registry::{CoinPartition, Registry, UpdateTimeIndex};
pub use snapshot::{HandleEncoding, SnapshotCache, SnapshotDocument, SnapshotEntry};
pub use types::*;
