use crate::error::Result;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

pub const APPLICATION_JSON: &str = "application/json";
pub const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Headers every request starts with
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(X_REQUESTED_WITH, HeaderValue::from_static(XML_HTTP_REQUEST));
    headers
}

/// `Authorization` value for an optional token: `Bearer <token>` or empty.
pub fn authorization_value(token: Option<&str>) -> Result<HeaderValue> {
    match token {
        Some(token) if !token.is_empty() => {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            Ok(value)
        }
        _ => Ok(HeaderValue::from_static("")),
    }
}
