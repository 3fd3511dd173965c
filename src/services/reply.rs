//! Reply extraction from the chat server's JSON body.

use serde_json::Value;

use crate::error::TransportError;

/// Shown when the body carries neither `response` nor `reply`.
pub const NO_REPLY_PLACEHOLDER: &str = "No response from AI.";

/// Primary field first, then the fallback.
const REPLY_FIELDS: &[&str] = &["response", "reply"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Recognized(String),
    Unrecognized,
}

/// Picks the first recognized reply field. Only non-empty strings count.
pub fn parse_reply(body: &Value) -> Reply {
    let Some(obj) = body.as_object() else {
        return Reply::Unrecognized;
    };
    REPLY_FIELDS
        .iter()
        .filter_map(|field| obj.get(*field).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(|text| Reply::Recognized(text.to_string()))
        .unwrap_or(Reply::Unrecognized)
}

/// Text of the assistant turn for one finished call.
pub fn turn_text(outcome: Result<Value, TransportError>) -> String {
    match outcome {
        Ok(body) => match parse_reply(&body) {
            Reply::Recognized(text) => text,
            Reply::Unrecognized => NO_REPLY_PLACEHOLDER.to_string(),
        },
        Err(e) => format!("Error: {e}"),
    }
}
