//! The closed set of operations that may change a store.
//!
//! Every field address is a typed variant, so a command that names a field
//! which does not exist cannot be built. Clients still speak dotted paths
//! (`personalInfo.fullName`); those are checked once, in `DocumentField::from_str`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{AiSuggestionSet, ResumeDocument};
use crate::store::state::UploadedFile;
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalInfoField {
    FullName,
    Email,
    PhoneNumber,
    Address,
    LinkedIn,
    Website,
}

/// A top-level scalar of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "field", rename_all = "camelCase")]
pub enum DocumentField {
    Summary,
    PersonalInfo(PersonalInfoField),
}

impl FromStr for DocumentField {
    type Err = StoreError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let field = match path {
            "summary" => DocumentField::Summary,
            "personalInfo.fullName" => DocumentField::PersonalInfo(PersonalInfoField::FullName),
            "personalInfo.email" => DocumentField::PersonalInfo(PersonalInfoField::Email),
            "personalInfo.phoneNumber" => {
                DocumentField::PersonalInfo(PersonalInfoField::PhoneNumber)
            }
            "personalInfo.address" => DocumentField::PersonalInfo(PersonalInfoField::Address),
            "personalInfo.linkedIn" => DocumentField::PersonalInfo(PersonalInfoField::LinkedIn),
            "personalInfo.website" => DocumentField::PersonalInfo(PersonalInfoField::Website),
            other => return Err(StoreError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    JobTitle,
    Company,
    Location,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    School,
    Location,
    GraduationDate,
}

/// A single store mutation. JSON form: `{"type": "updateSkill", "index": 0, "value": "Go"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    SetStep {
        step: i32,
    },
    ReplaceDocument {
        document: ResumeDocument,
    },
    SetField {
        field: DocumentField,
        value: String,
    },

    AddExperience,
    RemoveExperience {
        id: Uuid,
    },
    UpdateExperienceField {
        id: Uuid,
        field: ExperienceField,
        value: String,
    },
    AddResponsibility {
        experience_id: Uuid,
    },
    UpdateResponsibility {
        experience_id: Uuid,
        index: usize,
        value: String,
    },
    RemoveResponsibility {
        experience_id: Uuid,
        index: usize,
    },

    AddEducation,
    RemoveEducation {
        id: Uuid,
    },
    UpdateEducationField {
        id: Uuid,
        field: EducationField,
        value: String,
    },

    AddSkill,
    UpdateSkill {
        index: usize,
        value: String,
    },
    RemoveSkill {
        index: usize,
    },

    SetProcessing {
        processing: bool,
        #[serde(default)]
        message: Option<String>,
    },
    SetSuggestions {
        suggestions: Option<AiSuggestionSet>,
    },
    SetUploadedFile {
        file: UploadedFile,
    },
    ClearUploadedFile,
    SetUploadError {
        message: String,
    },

    /// Copies the suggested summary into the document.
    AcceptSummarySuggestion,
    /// Replaces the responsibilities of the job at `index` with the suggested ones.
    AcceptExperienceSuggestion {
        index: usize,
    },
}

impl Command {
    /// Whether a client may send this while a long-running operation holds
    /// the processing flag. That operation owns the document, the suggestions,
    /// the upload bookkeeping and the flag itself until it ends; only
    /// navigation is independent of it.
    pub fn allowed_while_processing(&self) -> bool {
        matches!(self, Command::SetStep { .. })
    }

    /// Name used in logs; matches the JSON `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetStep { .. } => "setStep",
            Command::ReplaceDocument { .. } => "replaceDocument",
            Command::SetField { .. } => "setField",
            Command::AddExperience => "addExperience",
            Command::RemoveExperience { .. } => "removeExperience",
            Command::UpdateExperienceField { .. } => "updateExperienceField",
            Command::AddResponsibility { .. } => "addResponsibility",
            Command::UpdateResponsibility { .. } => "updateResponsibility",
            Command::RemoveResponsibility { .. } => "removeResponsibility",
            Command::AddEducation => "addEducation",
            Command::RemoveEducation { .. } => "removeEducation",
            Command::UpdateEducationField { .. } => "updateEducationField",
            Command::AddSkill => "addSkill",
            Command::UpdateSkill { .. } => "updateSkill",
            Command::RemoveSkill { .. } => "removeSkill",
            Command::SetProcessing { .. } => "setProcessing",
            Command::SetSuggestions { .. } => "setSuggestions",
            Command::SetUploadedFile { .. } => "setUploadedFile",
            Command::ClearUploadedFile => "clearUploadedFile",
            Command::SetUploadError { .. } => "setUploadError",
            Command::AcceptSummarySuggestion => "acceptSummarySuggestion",
            Command::AcceptExperienceSuggestion { .. } => "acceptExperienceSuggestion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_paths_resolve_to_typed_fields() {
        assert_eq!(
            "personalInfo.fullName".parse::<DocumentField>().unwrap(),
            DocumentField::PersonalInfo(PersonalInfoField::FullName)
        );
        assert_eq!(
            "summary".parse::<DocumentField>().unwrap(),
            DocumentField::Summary
        );
    }

    #[test]
    fn test_unknown_path_fails_fast() {
        let err = "personalInfo.nickname".parse::<DocumentField>().unwrap_err();
        assert!(matches!(err, StoreError::UnknownField(p) if p == "personalInfo.nickname"));
        assert!("personal.fullName".parse::<DocumentField>().is_err());
    }

    #[test]
    fn test_command_json_uses_type_tag() {
        let cmd: Command =
            serde_json::from_str(r#"{"type": "updateSkill", "index": 1, "value": "Rust"}"#)
                .unwrap();
        assert_eq!(
            cmd,
            Command::UpdateSkill {
                index: 1,
                value: "Rust".to_string()
            }
        );
        assert_eq!(cmd.name(), "updateSkill");
    }

    #[test]
    fn test_unit_command_json() {
        let cmd: Command = serde_json::from_str(r#"{"type": "addExperience"}"#).unwrap();
        assert_eq!(cmd, Command::AddExperience);
    }

    #[test]
    fn test_set_field_json() {
        let json = r#"{
            "type": "setField",
            "field": {"section": "personalInfo", "field": "linkedIn"},
            "value": "https://linkedin.com/in/ada"
        }"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::SetField {
                field: DocumentField::PersonalInfo(PersonalInfoField::LinkedIn),
                value: "https://linkedin.com/in/ada".to_string(),
            }
        );
    }

    #[test]
    fn test_set_field_rejects_unknown_field_name() {
        let json = r#"{
            "type": "setField",
            "field": {"section": "personalInfo", "field": "nickname"},
            "value": "x"
        }"#;
        assert!(serde_json::from_str::<Command>(json).is_err());
    }

    #[test]
    fn test_multiword_fields_are_camel_case() {
        let id = Uuid::new_v4();
        let cmd = Command::RemoveResponsibility {
            experience_id: id,
            index: 0,
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["type"], "removeResponsibility");
        assert_eq!(value["experienceId"], id.to_string());
    }

    #[test]
    fn test_only_navigation_is_allowed_while_processing() {
        assert!(Command::SetStep { step: 2 }.allowed_while_processing());
        assert!(!Command::AddSkill.allowed_while_processing());
        assert!(!Command::AcceptSummarySuggestion.allowed_while_processing());
        assert!(!Command::SetProcessing {
            processing: false,
            message: None
        }
        .allowed_while_processing());
    }

    #[test]
    fn test_set_processing_message_is_optional() {
        let cmd: Command =
            serde_json::from_str(r#"{"type": "setProcessing", "processing": false}"#).unwrap();
        assert_eq!(
            cmd,
            Command::SetProcessing {
                processing: false,
                message: None
            }
        );
    }
}
