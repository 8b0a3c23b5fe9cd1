use crate::error::Result;
use bytes::Bytes;
use protocol::MultipartForm;
use std::path::Path;

pub const CSV_MIME: &str = "text/csv";
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// File attached to a bulk import
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub data: Bytes,
}

impl UploadFile {
    /// MIME type is guessed from the extension: `text/csv` for `.csv`,
    /// octet-stream otherwise.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime = if file_name.to_ascii_lowercase().ends_with(".csv") {
            CSV_MIME
        } else {
            OCTET_STREAM_MIME
        };
        Self {
            file_name,
            mime: mime.to_string(),
            data: data.into(),
        }
    }

    pub fn csv(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            mime: CSV_MIME.to_string(),
            ..Self::new(file_name, data)
        }
    }

    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, data))
    }

    /// Form with this file under the `file` field
    pub fn into_form(self) -> MultipartForm {
        MultipartForm::new().file("file", self.file_name, self.mime, self.data)
    }
}
