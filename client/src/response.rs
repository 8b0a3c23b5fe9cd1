use crate::error::{ClientError, Result};
use http::StatusCode;
use protocol::Payload;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Successful response handed back to resource callers unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub payload: Payload,
}

impl ApiResponse {
    pub fn new(status: StatusCode, payload: Payload) -> Self {
        Self { status, payload }
    }

    /// Deserialize a JSON payload. An empty body reads as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.payload {
            Payload::Json(value) => Ok(T::deserialize(value)?),
            Payload::Empty => Ok(serde_json::from_value(Value::Null)?),
            Payload::Raw(raw) => Err(ClientError::UnexpectedPayload(format!(
                "expected JSON, got {} bytes of text",
                raw.len()
            ))),
        }
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}
