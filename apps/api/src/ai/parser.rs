//! Resume parsing: typed model of the LLM's parse reply and its normalization
//! into a complete `ResumeDocument`.

use serde::Deserialize;
use uuid::Uuid;

use crate::ai::prompts::{PARSE_PROMPT_TEMPLATE, PARSE_ROLE};
use crate::llm_client::prompts::{fill_template, json_system};
use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};

/// What the parser may return. Every field is optional because the model
/// leaves out what it cannot find; types are still enforced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    #[serde(default)]
    pub personal_info: Option<ParsedPersonalInfo>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Option<Vec<ParsedExperience>>,
    #[serde(default)]
    pub education: Option<Vec<ParsedEducation>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedPersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub linked_in: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedExperience {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub responsibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedEducation {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
}

impl ParsedResume {
    /// Fills every gap so the result satisfies the document invariants:
    /// - fresh ids on every entry
    /// - missing experience/education lists become empty lists
    /// - a job with no responsibilities list gets one empty bullet
    /// - an empty or missing skills list becomes one empty skill slot
    pub fn into_document(self) -> ResumeDocument {
        let personal_info = self
            .personal_info
            .map(|p| PersonalInfo {
                full_name: p.full_name.unwrap_or_default(),
                email: p.email.unwrap_or_default(),
                phone_number: p.phone_number.unwrap_or_default(),
                address: p.address.unwrap_or_default(),
                linked_in: p.linked_in.unwrap_or_default(),
                website: p.website.unwrap_or_default(),
            })
            .unwrap_or_default();

        let experience = self
            .experience
            .unwrap_or_default()
            .into_iter()
            .map(|e| ExperienceEntry {
                id: Uuid::new_v4(),
                job_title: e.job_title.unwrap_or_default(),
                company: e.company.unwrap_or_default(),
                location: e.location.unwrap_or_default(),
                start_date: e.start_date.unwrap_or_default(),
                end_date: e.end_date.unwrap_or_default(),
                responsibilities: e.responsibilities.unwrap_or_else(|| vec![String::new()]),
            })
            .collect();

        let education = self
            .education
            .unwrap_or_default()
            .into_iter()
            .map(|e| EducationEntry {
                id: Uuid::new_v4(),
                degree: e.degree.unwrap_or_default(),
                school: e.school.unwrap_or_default(),
                location: e.location.unwrap_or_default(),
                graduation_date: e.graduation_date.unwrap_or_default(),
            })
            .collect();

        let skills = match self.skills {
            Some(skills) if !skills.is_empty() => skills,
            _ => vec![String::new()],
        };

        ResumeDocument {
            personal_info,
            summary: self.summary.unwrap_or_default(),
            experience,
            education,
            skills,
        }
    }
}

/// Returns `(system, prompt)` for a parse call.
pub fn build_parse_prompt(resume_text: &str) -> (String, String) {
    (
        json_system(PARSE_ROLE),
        fill_template(PARSE_PROMPT_TEMPLATE, &[("resume_text", resume_text)]),
    )
}
