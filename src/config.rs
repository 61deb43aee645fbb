//! Directory configuration.

use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};

/// Directory configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// How often consumers poll the user list, in seconds.
    pub fetch_interval_seconds: u64,

    /// Escape handles as JSON strings when rendering snapshots.
    ///
    /// Disabling this writes handles verbatim, so a handle containing `"`
    /// or `\` produces a malformed document.
    pub escape_handles: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            fetch_interval_seconds: 10,
            escape_handles: true,
        }
    }
}

impl DirectoryConfig {
    /// Check the configuration for values the directory cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.fetch_interval_seconds == 0 {
            return Err(DirectoryError::InvalidConfig(
                "fetch_interval_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Window after an update during which a poller may not have seen it yet.
    pub fn safety_period(&self) -> u64 {
        self.fetch_interval_seconds * 15 / 10
    }
}
