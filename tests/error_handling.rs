//! Edge case tests. No directory operation fails; odd inputs degrade to
//! empty results.

use serde_json::Value;
use user_directory::{Cursor, DirectoryConfig, DirectoryError, Timestamp, UserDirectory};

const EMPTY: &str = r#"{"err_no":0,"err_msg":null,"data":{}}"#;

#[test]
fn test_unknown_coin_lists_nothing() {
    let dir = UserDirectory::new();
    assert_eq!(&*dir.get_user_list_json(0, "nonexistent"), EMPTY);
    assert_eq!(&*dir.get_user_list_json(0, ""), EMPTY);
}

#[test]
fn test_unknown_handle_has_zero_time() {
    let dir = UserDirectory::new();
    dir.add_user(1, "alice", "btc");
    assert_eq!(dir.get_user_update_time("bob", "btc"), Timestamp::ZERO);
    assert_eq!(dir.get_user_update_time("alice", "nonexistent"), Timestamp::ZERO);
}

#[test]
fn test_cursor_past_last_id() {
    let dir = UserDirectory::new();
    dir.add_user(1, "alice", "btc");
    assert_eq!(&*dir.get_user_list_json(1, "btc"), EMPTY);
    assert_eq!(&*dir.get_user_list_json(i64::MAX, "btc"), EMPTY);
}

#[test]
fn test_negative_cursor_lists_everything() {
    let dir = UserDirectory::new();
    dir.add_user(-2, "neg", "btc");
    dir.add_user(0, "zero", "btc");
    dir.add_user(3, "pos", "btc");

    let expected = r#"{"err_no":0,"err_msg":null,"data":{"neg":-2,"zero":0,"pos":3}}"#;
    assert_eq!(&*dir.get_user_list_json(-1, "btc"), expected);
    assert_eq!(&*dir.get_user_list_json(i64::MIN, "btc"), expected);
    assert_eq!(&*dir.get_user_list_json(0, "btc"), expected);
}

#[test]
fn test_empty_coin_writes_merged_directly() {
    let dir = UserDirectory::new();
    dir.add_user(1, "alice", "");
    assert_eq!(
        &*dir.get_user_list_json(0, ""),
        r#"{"err_no":0,"err_msg":null,"data":{"alice":1}}"#
    );
    assert!(dir.coins().is_empty());
}

#[test]
fn test_empty_handle_accepted() {
    let dir = UserDirectory::new();
    dir.add_user(1, "", "btc");
    assert_eq!(
        &*dir.get_user_list_json(0, "btc"),
        r#"{"err_no":0,"err_msg":null,"data":{"":1}}"#
    );
    assert!(!dir.get_user_update_time("", "btc").is_zero());
}

#[test]
fn test_json_unsafe_handle_is_escaped() {
    let dir = UserDirectory::new();
    dir.add_user(1, "quo\"te", "btc");
    dir.add_user(2, "back\\slash", "btc");
    dir.add_user(3, "tab\there", "btc");

    let json = dir.get_user_list_json(0, "btc");
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["data"]["quo\"te"], 1);
    assert_eq!(value["data"]["back\\slash"], 2);
    assert_eq!(value["data"]["tab\there"], 3);
}

#[test]
fn test_json_unsafe_handle_raw_mode_is_malformed() {
    let dir = UserDirectory::with_config(DirectoryConfig {
        escape_handles: false,
        ..Default::default()
    })
    .unwrap();
    dir.add_user(1, "quo\"te", "btc");

    let json = dir.get_user_list_json(0, "btc");
    assert!(serde_json::from_str::<Value>(&json).is_err());
}

#[test]
fn test_invalid_config_rejected() {
    let result = UserDirectory::with_config(DirectoryConfig {
        fetch_interval_seconds: 0,
        ..Default::default()
    });
    assert!(matches!(result, Err(DirectoryError::InvalidConfig(_))));
}

#[test]
fn test_lossy_cursor_from_query() {
    let dir = UserDirectory::new();
    dir.add_user(1, "alice", "btc");
    dir.add_user(2, "bob", "btc");

    let all = dir.get_user_list_json(Cursor::parse_lossy("not-a-number"), "btc");
    assert_eq!(&*all, r#"{"err_no":0,"err_msg":null,"data":{"alice":1,"bob":2}}"#);

    let rest = dir.get_user_list_json(Cursor::parse_lossy("1"), "btc");
    assert_eq!(&*rest, r#"{"err_no":0,"err_msg":null,"data":{"bob":2}}"#);

    // Padded values are not numbers; they list from the start.
    let padded = dir.get_user_list_json(Cursor::parse_lossy(" 1 "), "btc");
    assert_eq!(padded, all);
}
