use crate::message::{DecodeOutcome, Payload};
use serde_json::Value;
use tracing::warn;

/// Substring of `message` that marks an expired or rejected session
pub const UNAUTHORIZED_MARKER: &str = "Unauthorized";

/// The backend reports an invalid session inside a normal JSON body rather
/// than through the status code.
pub fn is_unauthorized_payload(record: &Value) -> bool {
    record
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains(UNAUTHORIZED_MARKER))
}

/// Incoming transform applied to every response body, whatever the status.
///
/// Never fails: a body that is not JSON is logged and handed back raw.
pub fn decode_response(raw: &str) -> DecodeOutcome {
    if raw.is_empty() {
        return DecodeOutcome::Ok(Payload::Empty);
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(record) if is_unauthorized_payload(&record) => {
            DecodeOutcome::AuthExpired(Payload::Json(record))
        }
        Ok(record) => DecodeOutcome::Ok(Payload::Json(record)),
        Err(e) => {
            warn!("Error parsing response: {}", e);
            DecodeOutcome::Ok(Payload::Raw(raw.to_string()))
        }
    }
}
