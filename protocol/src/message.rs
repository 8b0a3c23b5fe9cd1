mod api_path;
mod payload;
mod request;

pub use api_path::ApiPath;
pub use payload::{DecodeOutcome, Payload};
pub use request::{FormPart, MultipartForm, OutgoingRequest, QueryParams, RequestBody};
