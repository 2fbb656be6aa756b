use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block at the top of every resume. All fields are free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub linked_in: String,
    pub website: String,
}

/// One job. `responsibilities` is an ordered list of bullets; order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl ExperienceEntry {
    /// A blank entry with a fresh id and one empty bullet so the form has an editable row.
    pub fn seeded() -> Self {
        Self {
            id: Uuid::new_v4(),
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            responsibilities: vec![String::new()],
        }
    }

    /// Bullets with text in them, in display order.
    pub fn filled_responsibilities(&self) -> impl Iterator<Item = &str> {
        self.responsibilities
            .iter()
            .map(String::as_str)
            .filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub graduation_date: String,
}

impl EducationEntry {
    pub fn seeded() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            school: String::new(),
            location: String::new(),
            graduation_date: String::new(),
        }
    }
}

/// The complete structured resume content.
///
/// Lists default to empty when absent from incoming JSON, so a document can
/// never carry a missing `education` or `skills` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl ResumeDocument {
    /// The document a new session starts with: one blank job, one blank school, one skill slot.
    pub fn seeded() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experience: vec![ExperienceEntry::seeded()],
            education: vec![EducationEntry::seeded()],
            skills: vec![String::new()],
        }
    }

    pub fn experience_mut(&mut self, id: Uuid) -> Option<&mut ExperienceEntry> {
        self.experience.iter_mut().find(|e| e.id == id)
    }

    pub fn education_mut(&mut self, id: Uuid) -> Option<&mut EducationEntry> {
        self.education.iter_mut().find(|e| e.id == id)
    }

    /// Skills with text in them, in display order.
    pub fn filled_skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Re-keys any entry whose id collides with an earlier one in the same list.
    /// Documents supplied wholesale by a client are not trusted to keep ids unique.
    pub fn ensure_unique_ids(&mut self) {
        let mut seen = HashSet::new();
        for entry in &mut self.experience {
            while !seen.insert(entry.id) {
                entry.id = Uuid::new_v4();
            }
        }
        seen.clear();
        for entry in &mut self.education {
            while !seen.insert(entry.id) {
                entry.id = Uuid::new_v4();
            }
        }
    }
}

/// One AI-rewritten job, aligned by position with `ResumeDocument::experience`.
/// `job_title` and `company` are echoed back for display only and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedExperience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub responsibilities: Vec<String>,
}

/// AI-proposed replacement text, not yet applied to the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestionSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<SuggestedExperience>>,
}
