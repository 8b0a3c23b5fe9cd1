//! Client for the course-scheduling tools API.
//!
//! [`ApiClient`] attaches the session's bearer token to every request,
//! encodes bodies, decodes responses and signs the user out when the server
//! reports the session as unauthorized. The [`resources`] modules map each
//! backend noun onto its endpoints.

pub mod api_client;
pub mod auth;
pub mod config;
pub mod error;
pub mod navigator;
pub mod resources;
pub mod response;
pub mod upload;

pub use api_client::ApiClient;
pub use auth::Auth;
pub use config::{ClientConfig, DEFAULT_REQUEST_TIMEOUT};
pub use error::{ClientError, Result};
pub use navigator::{LoggingNavigator, Navigator};
pub use resources::Collection;
pub use response::ApiResponse;
pub use upload::UploadFile;

pub use protocol::{Environment, Payload, QueryParams, Route};
