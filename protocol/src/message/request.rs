use super::api_path::ApiPath;
use crate::error::Result;
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Query string parameters for list endpoints
pub type QueryParams = BTreeMap<String, String>;

/// Body handed to the client before the outgoing transform runs
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    None,
    /// Already encoded text, sent as is
    Text(String),
    /// Structured record, serialized to JSON on the way out
    Json(Value),
    /// File upload, encoded by the transport as multipart/form-data
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }
}

/// One part of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        data: Bytes,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } => name,
            FormPart::File { name, .. } => name,
        }
    }
}

/// Ordered multipart form, the equivalent of a browser `FormData`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.to_string(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime: mime.into(),
            data: data.into(),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn field(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|part| part.name() == name)
    }
}

/// A request as built by a resource method
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub method: Method,
    pub path: ApiPath,
    pub query: QueryParams,
    pub body: RequestBody,
}

impl OutgoingRequest {
    pub fn new(method: Method, path: ApiPath) -> Self {
        Self {
            method,
            path,
            query: QueryParams::new(),
            body: RequestBody::None,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}
