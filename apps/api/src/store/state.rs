use serde::{Deserialize, Serialize};

use crate::models::resume::{AiSuggestionSet, ResumeDocument};

/// Message shown while work is in flight when the caller does not supply one.
pub const DEFAULT_PROCESSING_MESSAGE: &str = "Enhancing your resume with AI...";

/// The three screens of the builder flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Form,
    Review,
    Preview,
}

impl Step {
    pub fn number(self) -> i32 {
        match self {
            Step::Form => 1,
            Step::Review => 2,
            Step::Preview => 3,
        }
    }

    /// Maps a stored step number to a screen. Anything outside 1–3 shows the form.
    pub fn from_number(n: i32) -> Self {
        match n {
            2 => Step::Review,
            3 => Step::Preview,
            _ => Step::Form,
        }
    }
}

/// Metadata of the PDF the user last uploaded. The bytes themselves never enter the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// One immutable snapshot of a session: the resume plus transient process state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// Raw step number as last set. Not clamped; see `Step::from_number`.
    pub step: i32,
    pub resume_data: ResumeDocument,
    pub ai_suggestions: Option<AiSuggestionSet>,
    pub processing: bool,
    pub processing_message: String,
    pub uploaded_file: Option<UploadedFile>,
    pub upload_error: String,
}

impl StoreState {
    pub fn initial() -> Self {
        Self {
            step: Step::Form.number(),
            resume_data: ResumeDocument::seeded(),
            ai_suggestions: None,
            processing: false,
            processing_message: DEFAULT_PROCESSING_MESSAGE.to_string(),
            uploaded_file: None,
            upload_error: String::new(),
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = StoreState::initial();
        assert_eq!(state.step, 1);
        assert!(!state.processing);
        assert_eq!(state.processing_message, DEFAULT_PROCESSING_MESSAGE);
        assert!(state.ai_suggestions.is_none());
        assert!(state.upload_error.is_empty());
    }

    #[test]
    fn test_out_of_range_step_displays_form() {
        assert_eq!(Step::from_number(0), Step::Form);
        assert_eq!(Step::from_number(7), Step::Form);
        assert_eq!(Step::from_number(-1), Step::Form);
        assert_eq!(Step::from_number(3), Step::Preview);
    }
}
