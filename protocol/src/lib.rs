pub mod codec;
pub mod environment;
pub mod error;
pub mod headers;
pub mod message;
pub mod routes;

pub use codec::{
    EncodedBody, EncodedRequest, UNAUTHORIZED_MARKER, decode_response, encode_request,
    is_unauthorized_payload,
};
pub use environment::{DEVELOPMENT_BASE_URL, Environment, PRODUCTION_BASE_PATH};
pub use error::{ProtocolError, Result};
pub use message::{
    ApiPath, DecodeOutcome, FormPart, MultipartForm, OutgoingRequest, Payload, QueryParams,
    RequestBody,
};
pub use routes::Route;
