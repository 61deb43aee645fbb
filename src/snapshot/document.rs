//! Rendering of the user-list envelope.
//!
//! The envelope is `{"err_no":0,"err_msg":null,"data":{...}}` where `data`
//! maps handle → id in ascending id order.

use crate::registry::CoinPartition;
use crate::types::{Cursor, UserId};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Document returned for a partition with nothing after the cursor.
pub const EMPTY_DOCUMENT: &str = r#"{"err_no":0,"err_msg":null,"data":{}}"#;

const ENVELOPE_PREFIX: &str = r#"{"err_no":0,"err_msg":null,"data":{"#;
const ENVELOPE_SUFFIX: &str = "}}";

/// How handles are written as JSON object keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleEncoding {
    /// Escape per JSON string rules.
    Escaped,
    /// Write handles verbatim. Handles containing `"`, `\` or control
    /// characters produce an invalid document.
    Raw,
}

/// Render every entry of `partition` after `cursor`.
///
/// A missing partition renders as an empty `data` object.
pub fn render(partition: Option<&CoinPartition>, cursor: Cursor, encoding: HandleEncoding) -> String {
    match encoding {
        HandleEncoding::Escaped => {
            let envelope = Envelope {
                data: UserList { partition, cursor },
            };
            match serde_json::to_string(&envelope) {
                Ok(json) => json,
                Err(e) => {
                    // String keys and integer values cannot fail to serialize.
                    tracing::error!(error = %e, "failed to serialize user list, writing raw");
                    render_raw(partition, cursor)
                }
            }
        }
        HandleEncoding::Raw => render_raw(partition, cursor),
    }
}

fn render_raw(partition: Option<&CoinPartition>, cursor: Cursor) -> String {
    let mut json = String::from(ENVELOPE_PREFIX);
    for (i, (id, handle)) in entries(partition, cursor).enumerate() {
        if i > 0 {
            json.push(',');
        }
        json.push('"');
        json.push_str(handle);
        json.push_str("\":");
        json.push_str(&id.0.to_string());
    }
    json.push_str(ENVELOPE_SUFFIX);
    json
}

fn entries<'a>(
    partition: Option<&'a CoinPartition>,
    cursor: Cursor,
) -> impl Iterator<Item = (UserId, &'a str)> + 'a {
    partition.into_iter().flat_map(move |p| p.iter_after(cursor))
}

struct Envelope<'a> {
    data: UserList<'a>,
}

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 3)?;
        state.serialize_field("err_no", &0)?;
        state.serialize_field("err_msg", &Option::<&str>::None)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

struct UserList<'a> {
    partition: Option<&'a CoinPartition>,
    cursor: Cursor,
}

impl Serialize for UserList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(entries(self.partition, self.cursor).map(|(id, handle)| (handle, id.0)))
    }
}
