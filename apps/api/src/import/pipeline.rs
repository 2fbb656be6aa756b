//! Import pipeline: validate -> record upload -> extract text -> AI parse ->
//! replace document.
//!
//! The document is only touched by the final wholesale replacement. Any
//! earlier failure leaves it as it was and is reported through `uploadError`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::ai::ResumeAi;
use crate::import::extract::TextExtractor;
use crate::import::{validate_upload, ImportError, Upload, PARSING_MESSAGE};
use crate::models::resume::ResumeDocument;
use crate::sessions::{Session, SessionError};
use crate::store::{Command, StoreState};

/// Extracts and parses an upload into a complete document.
pub async fn import_document(
    ai: &dyn ResumeAi,
    extractor: &dyn TextExtractor,
    upload: &Upload,
) -> Result<ResumeDocument, ImportError> {
    let text = extractor.extract(upload.bytes.clone()).await?;
    let parsed = ai.parse_resume(&text).await?;
    Ok(parsed.into_document())
}

/// Runs a whole import against a session and returns the resulting snapshot.
///
/// Fails with `Busy`, recording nothing, if another operation is running.
pub async fn run_import(
    session: &Arc<Session>,
    ai: &dyn ResumeAi,
    extractor: &dyn TextExtractor,
    upload: Upload,
    max_upload_mb: u64,
) -> Result<Arc<StoreState>, SessionError> {
    if let Err(e) = validate_upload(&upload, max_upload_mb) {
        warn!("Session {}: rejected upload '{}': {e}", session.id, upload.file_name);
        return Ok(session.dispatch_infallible(Command::SetUploadError {
            message: e.user_message(),
        }));
    }

    {
        let _processing = session.begin_processing(Some(PARSING_MESSAGE))?;
        session.dispatch_infallible(Command::SetUploadedFile {
            file: upload.metadata(),
        });
        match import_document(ai, extractor, &upload).await {
            Ok(document) => {
                info!(
                    "Session {}: imported '{}' ({} jobs, {} schools)",
                    session.id,
                    upload.file_name,
                    document.experience.len(),
                    document.education.len()
                );
                session.dispatch_infallible(Command::ReplaceDocument { document });
            }
            Err(e) => {
                warn!("Session {}: failed to process PDF: {e}", session.id);
                session.dispatch_infallible(Command::SetUploadError {
                    message: e.user_message(),
                });
                session.dispatch_infallible(Command::ClearUploadedFile);
            }
        }
    }

    Ok(session.snapshot())
}
