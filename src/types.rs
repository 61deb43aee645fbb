//! Core types for the user directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Coin key of the merged partition aggregating every real coin.
pub const MERGED_COIN: &str = "";

/// Returns true if `coin` names the merged partition.
pub fn is_merged(coin: &str) -> bool {
    coin == MERGED_COIN
}

/// Numeric user identifier. Any value is accepted, including non-positive ones.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        UserId(i64::from(id))
    }
}

/// Seconds since Unix epoch. Zero means "never recorded".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The "unknown" timestamp.
    pub const ZERO: Timestamp = Timestamp(0);

    /// Current wall-clock time.
    pub fn now() -> Self {
        // A clock set before the epoch reads as zero rather than failing.
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Timestamp(secs)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Seconds elapsed from `self` until `later`, saturating at zero.
    pub fn seconds_until(self, later: Timestamp) -> u64 {
        later.0.saturating_sub(self.0).max(0) as u64
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Pagination cursor: the last user id a client has already seen.
///
/// Listing resumes strictly after the cursor. Zero and negative cursors
/// start from the beginning of the partition.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Cursor(pub i64);

impl Cursor {
    /// Cursor that lists a whole partition.
    pub const START: Cursor = Cursor(0);

    /// True if listing should begin at the first entry.
    pub fn is_start(self) -> bool {
        self.0 <= 0
    }

    /// Parse a `last_id` query value.
    ///
    /// Accepts an optional sign followed by decimal digits and nothing else.
    /// Anything else, including surrounding whitespace, an empty string or an
    /// out-of-range number, yields the start cursor.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse::<i64>().map(Cursor).unwrap_or(Cursor::START)
    }
}

impl From<i64> for Cursor {
    fn from(v: i64) -> Self {
        Cursor(v)
    }
}

impl From<i32> for Cursor {
    fn from(v: i32) -> Self {
        Cursor(i64::from(v))
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({})", self.0)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Counters describing the directory contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    /// Real coins seen so far (the merged partition is not counted).
    pub coins: usize,
    /// Distinct user ids in the merged partition.
    pub merged_users: usize,
    /// Live snapshot cache entries, merged included.
    pub cached_snapshots: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_parse_lossy() {
        assert_eq!(Cursor::parse_lossy("42"), Cursor(42));
        assert_eq!(Cursor::parse_lossy(" 7 "), Cursor::START);
        assert_eq!(Cursor::parse_lossy("-3"), Cursor(-3));
        assert_eq!(Cursor::parse_lossy("+5"), Cursor(5));
        assert_eq!(Cursor::parse_lossy(""), Cursor::START);
        assert_eq!(Cursor::parse_lossy("abc"), Cursor::START);
        assert_eq!(Cursor::parse_lossy("12abc"), Cursor::START);
        assert_eq!(Cursor::parse_lossy("99999999999999999999999"), Cursor::START);
    }

    #[test]
    fn test_cursor_start() {
        assert!(Cursor(0).is_start());
        assert!(Cursor(-10).is_start());
        assert!(!Cursor(1).is_start());
    }

    #[test]
    fn test_timestamp_elapsed() {
        assert_eq!(Timestamp(100).seconds_until(Timestamp(115)), 15);
        assert_eq!(Timestamp(100).seconds_until(Timestamp(90)), 0);
        assert!(Timestamp::now().0 > 0);
        assert!(Timestamp::ZERO.is_zero());
    }

    #[test]
    fn test_merged_coin() {
        assert!(is_merged(""));
        assert!(!is_merged("btc"));
    }
}
