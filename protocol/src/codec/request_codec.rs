use crate::error::Result;
use crate::headers::authorization_value;
use crate::message::{MultipartForm, RequestBody};
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap};
use serde_json::Value;

/// Body as it leaves the process
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedBody {
    Empty,
    Text(String),
    /// Left to the transport, which picks the multipart boundary
    Multipart(MultipartForm),
}

#[derive(Debug, Clone)]
pub struct EncodedRequest {
    pub headers: HeaderMap,
    pub body: EncodedBody,
}

/// Outgoing transform applied to every request.
///
/// `token` is the bearer token of the session read at send time. The
/// `Authorization` header is always written, empty when there is no usable
/// token, so a header left over from an earlier session never leaks.
pub fn encode_request(
    body: RequestBody,
    token: Option<&str>,
    mut headers: HeaderMap,
) -> Result<EncodedRequest> {
    headers.insert(AUTHORIZATION, authorization_value(token)?);

    let body = match body {
        RequestBody::Multipart(form) => {
            headers.remove(CONTENT_TYPE);
            EncodedBody::Multipart(form)
        }
        RequestBody::None | RequestBody::Json(Value::Null) => EncodedBody::Empty,
        RequestBody::Text(text) | RequestBody::Json(Value::String(text)) => EncodedBody::Text(text),
        RequestBody::Json(value) => EncodedBody::Text(serde_json::to_string(&value)?),
    };

    Ok(EncodedRequest { headers, body })
}
