use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::sessions::Session;
use crate::state::AppState;
use crate::store::selectors::displayed_step;
use crate::store::state::Step;
use crate::store::{Command, StoreState};

/// Snapshot of one session as returned by every state-changing endpoint.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub displayed_step: Step,
    pub state: StoreState,
}

impl SessionResponse {
    pub fn new(session_id: Uuid, state: &StoreState) -> Self {
        Self {
            session_id,
            displayed_step: displayed_step(state),
            state: state.clone(),
        }
    }
}

pub async fn load_session(state: &AppState, id: Uuid) -> Result<Arc<Session>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    let response = SessionResponse::new(session.id, &session.snapshot());
    (StatusCode::CREATED, Json(response))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Json(SessionResponse::new(session.id, &session.snapshot())))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_dispose_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.dispose(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// POST /api/v1/sessions/:id/commands
///
/// Applies one command. A rejected command (bad index, missing suggestion)
/// returns 400, and an edit sent while an import or enhancement is running
/// returns 409. Either way the session is unchanged.
pub async fn handle_command(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<Command>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let snapshot = session.dispatch_client(command)?;
    Ok(Json(SessionResponse::new(session.id, &snapshot)))
}
