use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::import::pipeline::run_import;
use crate::import::Upload;
use crate::sessions::handlers::{load_session, SessionResponse};
use crate::state::AppState;

/// Multipart field carrying the PDF.
pub const UPLOAD_FIELD: &str = "resume";

/// POST /api/v1/sessions/:id/import
///
/// A malformed request is a 400. Anything wrong with the file itself is
/// reported through the session's `uploadError` in a 200 response. A session
/// already running an import or enhancement answers 409.
pub async fn handle_import(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::Validation("Invalid file".to_string()))?;
        upload = Some(Upload {
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    let upload = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing multipart field '{UPLOAD_FIELD}'"))
    })?;
    info!(
        "Session {}: received upload '{}' ({} bytes)",
        session.id,
        upload.file_name,
        upload.bytes.len()
    );

    let snapshot = run_import(
        &session,
        state.ai.as_ref(),
        state.extractor.as_ref(),
        upload,
        state.config.max_upload_mb,
    )
    .await?;
    Ok(Json(SessionResponse::new(session.id, &snapshot)))
}
