pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ai::handlers::{handle_enhance, handle_review};
use crate::import::handlers::handle_import;
use crate::render::handlers::{handle_export, handle_preview};
use crate::sessions::handlers::{
    handle_command, handle_create_session, handle_dispose_session, handle_get_session,
};
use crate::state::AppState;

/// Headroom over the upload limit for multipart framing, so an oversized PDF
/// reaches validation and gets the friendly message instead of a bare 413.
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

/// Body limit for the import route: twice the upload limit plus framing.
fn upload_body_limit(max_upload_bytes: u64) -> usize {
    let limit = max_upload_bytes
        .saturating_mul(2)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    usize::try_from(limit).unwrap_or(usize::MAX)
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = upload_body_limit(state.config.max_upload_bytes());

    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handle_get_session).delete(handle_dispose_session),
        )
        .route("/api/v1/sessions/:id/commands", post(handle_command))
        // Import / AI
        .route(
            "/api/v1/sessions/:id/import",
            post(handle_import).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/sessions/:id/enhance", post(handle_enhance))
        .route("/api/v1/sessions/:id/review", get(handle_review))
        // Output
        .route("/api/v1/sessions/:id/preview", get(handle_preview))
        .route("/api/v1/sessions/:id/export", get(handle_export))
        .with_state(state)
}
