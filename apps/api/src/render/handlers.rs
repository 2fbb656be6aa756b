use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{render_html, Template};
use crate::sessions::handlers::load_session;
use crate::state::AppState;
use crate::store::selectors::export_filename;

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

impl TemplateQuery {
    fn template(&self) -> Result<Template, AppError> {
        match &self.template {
            None => Ok(Template::default()),
            Some(raw) => raw
                .parse()
                .map_err(|e: crate::render::UnknownTemplate| AppError::Validation(e.to_string())),
        }
    }
}

/// GET /api/v1/sessions/:id/preview?template=modern
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let template = query.template()?;
    let session = load_session(&state, id).await?;
    Ok(Html(render_html(&session.snapshot().resume_data, template)))
}

/// GET /api/v1/sessions/:id/export?template=modern
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Response, AppError> {
    let template = query.template()?;
    let session = load_session(&state, id).await?;
    let snapshot = session.snapshot();
    let doc = &snapshot.resume_data;

    let filename = export_filename(doc, template);
    let pdf = state.pdf_renderer.render(render_html(doc, template)).await?;
    info!("Session {}: exported {filename} ({} bytes)", session.id, pdf.len());

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        header_safe(&filename)
    ))
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}

/// Keeps the filename inside a quoted header value.
fn header_safe(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
