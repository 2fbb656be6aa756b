// AI collaborators: resume parsing (text -> document) and enhancement
// (document -> suggestions). All LLM traffic goes through llm_client.

pub mod enhancer;
pub mod handlers;
pub mod parser;
pub mod prompts;

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::{AiSuggestionSet, ResumeDocument};
use parser::{build_parse_prompt, ParsedResume};

/// The AI service seen by the import and enhancement pipelines.
///
/// Carried in `AppState` as `Arc<dyn ResumeAi>` so tests can swap in a stub.
#[async_trait]
pub trait ResumeAi: Send + Sync {
    /// Extracts structured resume data from plain text.
    async fn parse_resume(&self, text: &str) -> Result<ParsedResume, LlmError>;

    /// Proposes rewrites of the summary and of each job's responsibilities.
    async fn enhance(&self, document: &ResumeDocument) -> Result<AiSuggestionSet, LlmError>;
}

/// `ResumeAi` backed by the Claude Messages API.
pub struct LlmResumeAi(pub LlmClient);

#[async_trait]
impl ResumeAi for LlmResumeAi {
    async fn parse_resume(&self, text: &str) -> Result<ParsedResume, LlmError> {
        let (system, prompt) = build_parse_prompt(text);
        self.0.call_json(&prompt, &system).await
    }

    async fn enhance(&self, document: &ResumeDocument) -> Result<AiSuggestionSet, LlmError> {
        let (system, prompt) = enhancer::build_enhance_prompt(document);
        self.0.call_json(&prompt, &system).await
    }
}
