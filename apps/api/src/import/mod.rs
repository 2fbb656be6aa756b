// PDF import: upload validation, text extraction, AI parsing, and the
// pipeline that replaces a session's document with the result.

pub mod extract;
pub mod handlers;
pub mod pipeline;

use bytes::Bytes;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::store::state::UploadedFile;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Processing message shown while an upload is being read.
pub const PARSING_MESSAGE: &str = "Parsing your resume...";

/// Shown for any failure after validation; the details go to the log only.
pub const UNREADABLE_PDF_MESSAGE: &str =
    "Could not read data from PDF. Please fill the form manually.";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid file type. Please upload a PDF.")]
    InvalidFileType,

    #[error("File is too large. Maximum size is {max_mb}MB.")]
    TooLarge { max_mb: u64 },

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("AI failed to parse resume data: {0}")]
    Parse(#[from] LlmError),
}

impl ImportError {
    /// The text stored as the session's upload error.
    pub fn user_message(&self) -> String {
        match self {
            ImportError::InvalidFileType | ImportError::TooLarge { .. } => self.to_string(),
            ImportError::Extraction(_) | ImportError::Parse(_) => {
                UNREADABLE_PDF_MESSAGE.to_string()
            }
        }
    }
}

/// A file received from the client.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Upload {
    pub fn metadata(&self) -> UploadedFile {
        UploadedFile {
            file_name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.bytes.len() as u64,
        }
    }
}

/// Megabytes to bytes, saturating instead of overflowing.
pub fn mb_to_bytes(mb: u64) -> u64 {
    mb.saturating_mul(1024 * 1024)
}

/// Type is checked before size.
pub fn validate_upload(upload: &Upload, max_mb: u64) -> Result<(), ImportError> {
    if upload.content_type != PDF_CONTENT_TYPE {
        return Err(ImportError::InvalidFileType);
    }
    if upload.bytes.len() as u64 > mb_to_bytes(max_mb) {
        return Err(ImportError::TooLarge { max_mb });
    }
    Ok(())
}
