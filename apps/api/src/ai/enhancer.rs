//! Resume enhancement: prompt building, alignment of the reply with the
//! document, and the degraded fallback used when the call fails.
//!
//! Flow: begin processing → ai.enhance() (or fallback) → align → setSuggestions
//!       → step 2 → processing cleared by guard.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_ROLE};
use crate::ai::ResumeAi;
use crate::llm_client::prompts::{fill_template, json_system};
use crate::models::resume::{AiSuggestionSet, ResumeDocument, SuggestedExperience};
use crate::sessions::{Session, SessionError};
use crate::store::state::Step;
use crate::store::{Command, StoreState};

/// Marker attached to text when the AI call failed.
pub const ENHANCEMENT_FAILED_MARKER: &str = "(AI enhancement failed)";

/// Returns `(system, prompt)` for an enhancement call. Only the job title,
/// company and non-empty bullets of each job are sent.
pub fn build_enhance_prompt(doc: &ResumeDocument) -> (String, String) {
    let experience: Vec<_> = doc
        .experience
        .iter()
        .map(|e| {
            json!({
                "jobTitle": e.job_title,
                "company": e.company,
                "responsibilities": e.filled_responsibilities().collect::<Vec<_>>(),
            })
        })
        .collect();
    let experience_json =
        serde_json::to_string_pretty(&experience).unwrap_or_else(|_| "[]".to_string());

    let prompt = fill_template(
        ENHANCE_PROMPT_TEMPLATE,
        &[
            ("summary", doc.summary.as_str()),
            ("experience_json", experience_json.as_str()),
        ],
    );
    (json_system(ENHANCE_ROLE), prompt)
}

/// The suggestion set shown when enhancement fails: the user's own text,
/// clearly marked, so the review step still has something to display.
pub fn fallback_suggestions(doc: &ResumeDocument) -> AiSuggestionSet {
    AiSuggestionSet {
        summary: Some(format!("{ENHANCEMENT_FAILED_MARKER} {}", doc.summary)),
        experience: Some(
            doc.experience
                .iter()
                .map(|e| {
                    let mut responsibilities = e.responsibilities.clone();
                    responsibilities.push(ENHANCEMENT_FAILED_MARKER.to_string());
                    SuggestedExperience {
                        job_title: Some(e.job_title.clone()),
                        company: Some(e.company.clone()),
                        responsibilities,
                    }
                })
                .collect(),
        ),
    }
}

/// Suggestions pair with jobs by position. Extra suggestions have no job to
/// merge into and are dropped; a short list leaves the trailing jobs without a
/// suggestion.
pub fn align_to_document(mut suggestions: AiSuggestionSet, doc: &ResumeDocument) -> AiSuggestionSet {
    if let Some(list) = suggestions.experience.as_mut() {
        if list.len() != doc.experience.len() {
            warn!(
                "Enhancement returned {} experience suggestions for {} jobs",
                list.len(),
                doc.experience.len()
            );
        }
        list.truncate(doc.experience.len());
    }
    suggestions
}

/// Calls the enhancer, substituting the fallback on any error.
pub async fn enhance_or_fallback(ai: &dyn ResumeAi, doc: &ResumeDocument) -> AiSuggestionSet {
    match ai.enhance(doc).await {
        Ok(suggestions) => align_to_document(suggestions, doc),
        Err(e) => {
            warn!("AI enhancement failed, using fallback suggestions: {e}");
            fallback_suggestions(doc)
        }
    }
}

/// Ids of the jobs, in order. Suggestions are positional, so they only apply
/// to a document whose experience list still has exactly this shape.
fn experience_ids(doc: &ResumeDocument) -> Vec<Uuid> {
    doc.experience.iter().map(|e| e.id).collect()
}

/// Runs enhancement for a session and moves it to the review step.
///
/// Fails with `Busy` if another operation is running. If the experience list
/// changed while the AI call was in flight, the reply is discarded rather than
/// stored against the wrong jobs.
pub async fn run_enhancement(
    session: &Arc<Session>,
    ai: &dyn ResumeAi,
) -> Result<Arc<StoreState>, SessionError> {
    {
        let _processing = session.begin_processing(None)?;
        let doc = session.snapshot().resume_data.clone();
        let sent_ids = experience_ids(&doc);

        let suggestions = enhance_or_fallback(ai, &doc).await;

        let stored = session.dispatch_all_if(
            |current| {
                if experience_ids(&current.resume_data) == sent_ids {
                    Ok(())
                } else {
                    Err(SessionError::DocumentChanged {
                        operation: "AI enhancement",
                    })
                }
            },
            vec![
                Command::SetSuggestions {
                    suggestions: Some(suggestions),
                },
                Command::SetStep {
                    step: Step::Review.number(),
                },
            ],
        );
        match &stored {
            Ok(state) => info!(
                "Session {}: stored suggestions for {} jobs",
                session.id,
                state
                    .ai_suggestions
                    .as_ref()
                    .and_then(|s| s.experience.as_ref())
                    .map_or(0, Vec::len)
            ),
            Err(e) => warn!("Session {}: discarded enhancement: {e}", session.id),
        }
        stored?;
    }
    Ok(session.snapshot())
}
