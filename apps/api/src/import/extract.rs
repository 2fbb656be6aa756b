use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::import::ImportError;

/// Turns an uploaded PDF into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf: Bytes) -> Result<String, ImportError>;
}

/// `pdf-extract` based extractor. Parsing is CPU-bound, so it runs on the
/// blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf: Bytes) -> Result<String, ImportError> {
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
            .await
            .map_err(|e| ImportError::Extraction(format!("extraction task failed: {e}")))?
            .map_err(|e| ImportError::Extraction(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ImportError::Extraction(
                "PDF contains no extractable text".to_string(),
            ));
        }
        debug!("Extracted {} characters of text from PDF", text.len());
        Ok(text)
    }
}
