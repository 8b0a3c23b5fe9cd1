mod request_codec;
mod response_codec;

pub use request_codec::{EncodedBody, EncodedRequest, encode_request};
pub use response_codec::{UNAUTHORIZED_MARKER, decode_response, is_unauthorized_payload};
