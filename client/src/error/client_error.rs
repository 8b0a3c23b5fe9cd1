use http::StatusCode;
use protocol::Payload;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure, including timeouts
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; the decoded body is kept for the caller to display
    #[error("Request failed with status {status}")]
    Status { status: StatusCode, payload: Payload },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),

    #[error("Session error: {0}")]
    Session(#[from] common::CommonError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            ClientError::Status { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
