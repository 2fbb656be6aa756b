use std::sync::Arc;

use crate::ai::ResumeAi;
use crate::config::Config;
use crate::import::extract::TextExtractor;
use crate::render::export::PdfRenderer;
use crate::sessions::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    /// Resume parsing and enhancement. Default: `LlmResumeAi`.
    pub ai: Arc<dyn ResumeAi>,
    /// PDF upload -> plain text. Default: `PdfTextExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
    /// Rendered HTML -> PDF bytes. Default: `ChromePdfRenderer`.
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    pub config: Config,
}
