use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}
