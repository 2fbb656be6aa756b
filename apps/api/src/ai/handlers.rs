//! Axum route handlers for AI enhancement and review.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::ai::enhancer::run_enhancement;
use crate::errors::AppError;
use crate::sessions::handlers::{load_session, SessionResponse};
use crate::state::AppState;
use crate::store::selectors::{review_cards, ReviewCard};

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub session_id: Uuid,
    pub cards: Vec<ReviewCard>,
}

/// POST /api/v1/sessions/:id/enhance
///
/// A failed AI call yields the marked fallback suggestions instead of an
/// error. Returns 409 if another import or enhancement is running, or if the
/// experience list changed before the reply arrived.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let snapshot = run_enhancement(&session, state.ai.as_ref()).await?;
    Ok(Json(SessionResponse::new(session.id, &snapshot)))
}

/// GET /api/v1/sessions/:id/review
pub async fn handle_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReviewResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let cards = review_cards(&session.snapshot());
    Ok(Json(ReviewResponse {
        session_id: session.id,
        cards,
    }))
}
