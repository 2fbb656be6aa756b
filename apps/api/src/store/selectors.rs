//! Read-only derivations over a store snapshot.

use serde::Serialize;
use uuid::Uuid;

use crate::models::resume::ResumeDocument;
use crate::render::Template;
use crate::store::state::{Step, StoreState};

/// The screen to show. Stored step numbers outside 1–3 fall back to the form.
pub fn displayed_step(state: &StoreState) -> Step {
    Step::from_number(state.step)
}

/// One "original vs suggestion" pair on the review screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewCard {
    Summary {
        title: String,
        original: String,
        suggestion: String,
    },
    Experience {
        /// Position in both the document and the suggestion list; pass this to
        /// `acceptExperienceSuggestion`.
        index: usize,
        experience_id: Uuid,
        title: String,
        original: Vec<String>,
        suggestion: Vec<String>,
    },
}

/// Builds the review screen. Suggestions pair with jobs by position; suggestions
/// past the end of the experience list have no job to merge into and are dropped.
pub fn review_cards(state: &StoreState) -> Vec<ReviewCard> {
    let Some(suggestions) = &state.ai_suggestions else {
        return Vec::new();
    };
    let doc = &state.resume_data;
    let mut cards = Vec::new();

    if let Some(summary) = suggestions.summary.as_deref().filter(|s| !s.is_empty()) {
        cards.push(ReviewCard::Summary {
            title: "Professional Summary".to_string(),
            original: doc.summary.clone(),
            suggestion: summary.to_string(),
        });
    }

    let suggested = suggestions.experience.as_deref().unwrap_or_default();
    for (index, (entry, suggestion)) in doc.experience.iter().zip(suggested).enumerate() {
        let job_title = suggestion.job_title.as_deref().unwrap_or(&entry.job_title);
        let company = suggestion.company.as_deref().unwrap_or(&entry.company);
        cards.push(ReviewCard::Experience {
            index,
            experience_id: entry.id,
            title: format!("Experience: {job_title} at {company}"),
            original: entry.responsibilities.clone(),
            suggestion: suggestion.responsibilities.clone(),
        });
    }

    cards
}

/// `Jane_Doe_modern.pdf`; falls back to `Resume_<template>.pdf` when no name is set.
pub fn export_filename(doc: &ResumeDocument, template: Template) -> String {
    let name = doc
        .personal_info
        .full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let name = if name.is_empty() { "Resume" } else { &name };
    format!("{name}_{}.pdf", template.key())
}
