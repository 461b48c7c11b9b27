//! Wire shapes of the history and session JSONL logs.
//!
//! Every field is optional and unknown fields are ignored. A line only fails
//! to decode when a known field has the wrong JSON type.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::parsers::deserializers::null_as_default;

/// One line of `history.jsonl` (a submitted prompt)
#[derive(Debug, Deserialize)]
pub struct HistoryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: String,
    #[serde(rename = "sessionId", default, deserialize_with = "null_as_default")]
    pub session_id: String,
}

/// Envelope of one line in a session log
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_meta: bool,
    #[serde(default)]
    pub message: Option<Box<RawValue>>,
}

/// Record kinds the reconstructor acts on; everything else is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Assistant,
    Other,
}

impl SessionRecord {
    pub fn record_kind(&self) -> RecordKind {
        match self.kind.as_str() {
            "user" => RecordKind::User,
            "assistant" => RecordKind::Assistant,
            _ => RecordKind::Other,
        }
    }
}

/// The `message` object nested in user/assistant records
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub content: Option<Box<RawValue>>,
}

/// A typed item of a content array.
///
/// Kept flat (rather than an internally tagged enum) so `input` and `content`
/// can stay as raw JSON text.
#[derive(Debug, Default, Deserialize)]
pub struct RawContentItem {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thinking: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub input: Option<Box<RawValue>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tool_use_id: String,
    #[serde(default)]
    pub content: Option<Box<RawValue>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_error: bool,
}

/// Text-bearing item inside a `tool_result` content array
#[derive(Debug, Deserialize)]
pub struct RawTextItem {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}
