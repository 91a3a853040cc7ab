pub mod accounts;
pub mod adverts;
pub mod lipa;
pub mod orders;
pub mod packages;
pub mod premium;
pub mod store;
pub mod support;
pub mod wallet;

use reqwest::multipart::Part;

use crate::error::ApiResult;

/// In-memory file destined for a multipart field (KYC documents, screenshots,
/// support images).
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub(crate) fn into_part(self) -> ApiResult<Part> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)?)
    }
}
