//! Pure state transitions: `(snapshot, command) -> new snapshot`.
//!
//! The input snapshot is never touched. On error nothing is returned but the
//! error, so a command is either applied whole or not at all.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument};
use crate::store::commands::{
    Command, DocumentField, EducationField, ExperienceField, PersonalInfoField,
};
use crate::store::state::{StoreState, DEFAULT_PROCESSING_MESSAGE};
use crate::store::StoreError;

pub fn reduce(state: &StoreState, command: Command) -> Result<StoreState, StoreError> {
    let mut next = state.clone();
    let doc = &mut next.resume_data;

    match command {
        Command::SetStep { step } => next.step = step,
        Command::ReplaceDocument { mut document } => {
            document.ensure_unique_ids();
            *doc = document;
        }
        Command::SetField { field, value } => *document_field(doc, field) = value,

        Command::AddExperience => doc.experience.push(ExperienceEntry::seeded()),
        Command::RemoveExperience { id } => doc.experience.retain(|e| e.id != id),
        Command::UpdateExperienceField { id, field, value } => {
            if let Some(entry) = doc.experience_mut(id) {
                *experience_field(entry, field) = value;
            }
        }
        Command::AddResponsibility { experience_id } => {
            if let Some(entry) = doc.experience_mut(experience_id) {
                entry.responsibilities.push(String::new());
            }
        }
        Command::UpdateResponsibility {
            experience_id,
            index,
            value,
        } => {
            if let Some(entry) = doc.experience_mut(experience_id) {
                let len = entry.responsibilities.len();
                let slot = entry.responsibilities.get_mut(index).ok_or(
                    StoreError::ResponsibilityIndexOutOfBounds {
                        experience_id,
                        index,
                        len,
                    },
                )?;
                *slot = value;
            }
        }
        Command::RemoveResponsibility {
            experience_id,
            index,
        } => {
            if let Some(entry) = doc.experience_mut(experience_id) {
                check_index(index, entry.responsibilities.len(), |len| {
                    StoreError::ResponsibilityIndexOutOfBounds {
                        experience_id,
                        index,
                        len,
                    }
                })?;
                entry.responsibilities.remove(index);
            }
        }

        Command::AddEducation => doc.education.push(EducationEntry::seeded()),
        Command::RemoveEducation { id } => doc.education.retain(|e| e.id != id),
        Command::UpdateEducationField { id, field, value } => {
            if let Some(entry) = doc.education_mut(id) {
                *education_field(entry, field) = value;
            }
        }

        Command::AddSkill => doc.skills.push(String::new()),
        Command::UpdateSkill { index, value } => {
            let len = doc.skills.len();
            let slot = doc
                .skills
                .get_mut(index)
                .ok_or(StoreError::SkillIndexOutOfBounds { index, len })?;
            *slot = value;
        }
        Command::RemoveSkill { index } => {
            check_index(index, doc.skills.len(), |len| {
                StoreError::SkillIndexOutOfBounds { index, len }
            })?;
            doc.skills.remove(index);
        }

        Command::SetProcessing {
            processing,
            message,
        } => {
            next.processing = processing;
            next.processing_message =
                message.unwrap_or_else(|| DEFAULT_PROCESSING_MESSAGE.to_string());
        }
        Command::SetSuggestions { suggestions } => next.ai_suggestions = suggestions,
        Command::SetUploadedFile { file } => {
            next.uploaded_file = Some(file);
            next.upload_error.clear();
        }
        Command::ClearUploadedFile => next.uploaded_file = None,
        Command::SetUploadError { message } => next.upload_error = message,

        Command::AcceptSummarySuggestion => {
            let summary = next
                .ai_suggestions
                .as_ref()
                .ok_or(StoreError::NoSuggestions)?
                .summary
                .clone()
                .ok_or(StoreError::NoSummarySuggestion)?;
            next.resume_data.summary = summary;
        }
        Command::AcceptExperienceSuggestion { index } => {
            let suggested = next
                .ai_suggestions
                .as_ref()
                .ok_or(StoreError::NoSuggestions)?
                .experience
                .as_ref()
                .and_then(|list| list.get(index))
                .ok_or(StoreError::NoExperienceSuggestion { index })?
                .responsibilities
                .clone();
            accept_responsibilities(&mut next.resume_data, index, suggested)?;
        }
    }

    Ok(next)
}

/// Merges suggested bullets into the job at `index`. Identity and every other
/// field of the entry are left as they were.
fn accept_responsibilities(
    doc: &mut ResumeDocument,
    index: usize,
    responsibilities: Vec<String>,
) -> Result<(), StoreError> {
    let len = doc.experience.len();
    let entry = doc
        .experience
        .get_mut(index)
        .ok_or(StoreError::NoExperienceAt { index, len })?;
    entry.responsibilities = responsibilities;
    Ok(())
}

fn check_index(
    index: usize,
    len: usize,
    err: impl FnOnce(usize) -> StoreError,
) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        Err(err(len))
    }
}

fn document_field(doc: &mut ResumeDocument, field: DocumentField) -> &mut String {
    let info = &mut doc.personal_info;
    match field {
        DocumentField::Summary => &mut doc.summary,
        DocumentField::PersonalInfo(PersonalInfoField::FullName) => &mut info.full_name,
        DocumentField::PersonalInfo(PersonalInfoField::Email) => &mut info.email,
        DocumentField::PersonalInfo(PersonalInfoField::PhoneNumber) => &mut info.phone_number,
        DocumentField::PersonalInfo(PersonalInfoField::Address) => &mut info.address,
        DocumentField::PersonalInfo(PersonalInfoField::LinkedIn) => &mut info.linked_in,
        DocumentField::PersonalInfo(PersonalInfoField::Website) => &mut info.website,
    }
}

fn experience_field(entry: &mut ExperienceEntry, field: ExperienceField) -> &mut String {
    match field {
        ExperienceField::JobTitle => &mut entry.job_title,
        ExperienceField::Company => &mut entry.company,
        ExperienceField::Location => &mut entry.location,
        ExperienceField::StartDate => &mut entry.start_date,
        ExperienceField::EndDate => &mut entry.end_date,
    }
}

fn education_field(entry: &mut EducationEntry, field: EducationField) -> &mut String {
    match field {
        EducationField::Degree => &mut entry.degree,
        EducationField::School => &mut entry.school,
        EducationField::Location => &mut entry.location,
        EducationField::GraduationDate => &mut entry.graduation_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::models::resume::{AiSuggestionSet, SuggestedExperience};
    use crate::store::state::UploadedFile;

    fn apply(state: &StoreState, cmd: Command) -> StoreState {
        reduce(state, cmd).unwrap()
    }

    fn reduce_all(
        state: &StoreState,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<StoreState, StoreError> {
        commands
            .into_iter()
            .try_fold(state.clone(), |acc, cmd| reduce(&acc, cmd))
    }

    fn experience_id_at(state: &StoreState, index: usize) -> Option<Uuid> {
        state.resume_data.experience.get(index).map(|e| e.id)
    }

    fn first_exp_id(state: &StoreState) -> Uuid {
        experience_id_at(state, 0).unwrap()
    }

    fn with_bullets(bullets: &[&str]) -> StoreState {
        let mut state = StoreState::initial();
        state.resume_data.experience[0].responsibilities =
            bullets.iter().map(|s| s.to_string()).collect();
        state
    }

    #[test]
    fn test_set_step_accepts_out_of_range() {
        let state = apply(&StoreState::initial(), Command::SetStep { step: 9 });
        assert_eq!(state.step, 9);
    }

    #[test]
    fn test_set_field_personal_info() {
        let state = apply(
            &StoreState::initial(),
            Command::SetField {
                field: "personalInfo.fullName".parse().unwrap(),
                value: "Ada Lovelace".to_string(),
            },
        );
        assert_eq!(state.resume_data.personal_info.full_name, "Ada Lovelace");
        assert!(state.resume_data.personal_info.email.is_empty());
    }

    #[test]
    fn test_input_snapshot_is_not_mutated() {
        let before = StoreState::initial();
        let copy = before.clone();
        let _ = apply(&before, Command::AddSkill);
        assert_eq!(before, copy);
    }

    #[test]
    fn test_add_experience_twice_keeps_seed_and_distinct_ids() {
        let initial = StoreState::initial();
        let seed = initial.resume_data.experience[0].clone();

        let state = reduce_all(&initial, [Command::AddExperience, Command::AddExperience]).unwrap();
        let exp = &state.resume_data.experience;

        assert_eq!(exp.len(), 3);
        assert_eq!(exp[0], seed);
        assert_ne!(exp[0].id, exp[1].id);
        assert_ne!(exp[1].id, exp[2].id);
        assert_ne!(exp[0].id, exp[2].id);
        assert_eq!(exp[2].responsibilities, vec![String::new()]);
    }

    #[test]
    fn test_unrelated_mutations_keep_ids_stable() {
        let initial = StoreState::initial();
        let exp_id = first_exp_id(&initial);
        let edu_id = initial.resume_data.education[0].id;

        let state = reduce_all(
            &initial,
            [
                Command::AddSkill,
                Command::UpdateSkill {
                    index: 1,
                    value: "SQL".into(),
                },
                Command::SetField {
                    field: DocumentField::Summary,
                    value: "Builder".into(),
                },
                Command::AddEducation,
            ],
        )
        .unwrap();

        assert_eq!(first_exp_id(&state), exp_id);
        assert_eq!(state.resume_data.education[0].id, edu_id);
    }

    #[test]
    fn test_removed_id_is_never_reissued() {
        let initial = StoreState::initial();
        let removed = first_exp_id(&initial);
        let state = reduce_all(
            &initial,
            [
                Command::RemoveExperience { id: removed },
                Command::AddExperience,
                Command::AddExperience,
            ],
        )
        .unwrap();
        assert!(state.resume_data.experience.iter().all(|e| e.id != removed));
    }

    #[test]
    fn test_id_keyed_operations_skip_missing_ids() {
        let initial = StoreState::initial();
        let ghost = Uuid::new_v4();
        let state = reduce_all(
            &initial,
            [
                Command::RemoveExperience { id: ghost },
                Command::UpdateExperienceField {
                    id: ghost,
                    field: ExperienceField::Company,
                    value: "Acme".into(),
                },
                Command::AddResponsibility {
                    experience_id: ghost,
                },
                Command::UpdateResponsibility {
                    experience_id: ghost,
                    index: 42,
                    value: "x".into(),
                },
                Command::RemoveResponsibility {
                    experience_id: ghost,
                    index: 42,
                },
                Command::RemoveEducation { id: ghost },
                Command::UpdateEducationField {
                    id: ghost,
                    field: EducationField::School,
                    value: "MIT".into(),
                },
            ],
        )
        .unwrap();
        assert_eq!(state, initial);
    }

    #[test]
    fn test_update_experience_field() {
        let initial = StoreState::initial();
        let id = first_exp_id(&initial);
        let state = apply(
            &initial,
            Command::UpdateExperienceField {
                id,
                field: ExperienceField::StartDate,
                value: "2020-01".into(),
            },
        );
        assert_eq!(state.resume_data.experience[0].start_date, "2020-01");
        assert!(state.resume_data.experience[0].end_date.is_empty());
    }

    #[test]
    fn test_remove_responsibility_shifts_and_preserves_order() {
        let initial = with_bullets(&["a", "b", "c", "d"]);
        let id = first_exp_id(&initial);
        let state = apply(
            &initial,
            Command::RemoveResponsibility {
                experience_id: id,
                index: 1,
            },
        );
        assert_eq!(
            state.resume_data.experience[0].responsibilities,
            vec!["a", "c", "d"]
        );
    }

    #[test]
    fn test_responsibility_index_out_of_bounds_is_an_error() {
        let initial = with_bullets(&["a"]);
        let id = first_exp_id(&initial);

        let err = reduce(
            &initial,
            Command::UpdateResponsibility {
                experience_id: id,
                index: 1,
                value: "b".into(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            StoreError::ResponsibilityIndexOutOfBounds {
                experience_id: id,
                index: 1,
                len: 1
            }
        );

        assert!(reduce(
            &initial,
            Command::RemoveResponsibility {
                experience_id: id,
                index: 5,
            },
        )
        .is_err());
    }

    #[test]
    fn test_add_and_update_responsibility() {
        let initial = StoreState::initial();
        let id = first_exp_id(&initial);
        let state = reduce_all(
            &initial,
            [
                Command::AddResponsibility { experience_id: id },
                Command::UpdateResponsibility {
                    experience_id: id,
                    index: 1,
                    value: "Shipped v2".into(),
                },
            ],
        )
        .unwrap();
        assert_eq!(
            state.resume_data.experience[0].responsibilities,
            vec!["", "Shipped v2"]
        );
    }

    #[test]
    fn test_skill_scenario() {
        let state = reduce_all(
            &StoreState::initial(),
            [
                Command::UpdateSkill {
                    index: 0,
                    value: "Go".into(),
                },
                Command::AddSkill,
                Command::UpdateSkill {
                    index: 1,
                    value: "Rust".into(),
                },
                Command::RemoveSkill { index: 0 },
            ],
        )
        .unwrap();
        assert_eq!(state.resume_data.skills, vec!["Rust"]);
    }

    #[test]
    fn test_skill_index_out_of_bounds_is_an_error() {
        let initial = StoreState::initial();
        assert_eq!(
            reduce(&initial, Command::RemoveSkill { index: 1 }).unwrap_err(),
            StoreError::SkillIndexOutOfBounds { index: 1, len: 1 }
        );
        assert!(reduce(
            &initial,
            Command::UpdateSkill {
                index: 3,
                value: "x".into()
            }
        )
        .is_err());
    }

    #[test]
    fn test_education_add_update_remove() {
        let initial = StoreState::initial();
        let state = apply(&initial, Command::AddEducation);
        let second = state.resume_data.education[1].id;
        let state = apply(
            &state,
            Command::UpdateEducationField {
                id: second,
                field: EducationField::GraduationDate,
                value: "2019".into(),
            },
        );
        assert_eq!(state.resume_data.education[1].graduation_date, "2019");

        let first = state.resume_data.education[0].id;
        let state = apply(&state, Command::RemoveEducation { id: first });
        assert_eq!(state.resume_data.education.len(), 1);
        assert_eq!(state.resume_data.education[0].id, second);
    }

    #[test]
    fn test_set_processing_then_clear() {
        let state = reduce_all(
            &StoreState::initial(),
            [
                Command::SetProcessing {
                    processing: true,
                    message: Some("X".into()),
                },
                Command::SetProcessing {
                    processing: false,
                    message: None,
                },
            ],
        )
        .unwrap();
        assert!(!state.processing);
        assert_eq!(state.processing_message, DEFAULT_PROCESSING_MESSAGE);
    }

    #[test]
    fn test_upload_handle_and_error() {
        let file = UploadedFile {
            file_name: "cv.pdf".into(),
            content_type: "application/pdf".into(),
            size_bytes: 1024,
        };
        let initial = apply(
            &StoreState::initial(),
            Command::SetUploadError {
                message: "old".into(),
            },
        );

        let state = apply(&initial, Command::SetUploadedFile { file: file.clone() });
        assert_eq!(state.uploaded_file, Some(file));
        assert!(state.upload_error.is_empty());

        let state = reduce_all(
            &state,
            [
                Command::SetUploadError {
                    message: "bad".into(),
                },
                Command::ClearUploadedFile,
            ],
        )
        .unwrap();
        assert!(state.uploaded_file.is_none());
        assert_eq!(state.upload_error, "bad");
    }

    #[test]
    fn test_replace_document_with_missing_education() {
        let imported: ResumeDocument =
            serde_json::from_str(r#"{"summary": "Imported", "skills": ["Rust"]}"#).unwrap();
        let state = apply(
            &StoreState::initial(),
            Command::ReplaceDocument { document: imported },
        );
        assert_eq!(state.resume_data.summary, "Imported");
        assert!(state.resume_data.education.is_empty());
    }

    fn with_suggestions(suggestions: AiSuggestionSet) -> StoreState {
        let mut state = with_bullets(&["old one", "old two"]);
        let exp = &mut state.resume_data.experience[0];
        exp.job_title = "Engineer".into();
        exp.company = "Acme".into();
        exp.location = "Remote".into();
        exp.start_date = "2020".into();
        exp.end_date = "2023".into();
        state.resume_data.summary = "Old summary".into();
        apply(
            &state,
            Command::SetSuggestions {
                suggestions: Some(suggestions),
            },
        )
    }

    #[test]
    fn test_accept_summary_changes_only_summary() {
        let before = with_suggestions(AiSuggestionSet {
            summary: Some("New summary".into()),
            experience: None,
        });
        let after = apply(&before, Command::AcceptSummarySuggestion);

        assert_eq!(after.resume_data.summary, "New summary");
        let mut expected = before.clone();
        expected.resume_data.summary = "New summary".into();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_accept_experience_changes_only_responsibilities() {
        let before = with_suggestions(AiSuggestionSet {
            summary: None,
            experience: Some(vec![SuggestedExperience {
                job_title: Some("Senior Engineer".into()),
                company: Some("ACME Corp".into()),
                responsibilities: vec!["Led 4 engineers".into(), "Cut costs 20%".into()],
            }]),
        });
        let after = apply(&before, Command::AcceptExperienceSuggestion { index: 0 });

        let old = &before.resume_data.experience[0];
        let new = &after.resume_data.experience[0];
        assert_eq!(new.responsibilities, vec!["Led 4 engineers", "Cut costs 20%"]);
        assert_eq!(new.id, old.id);
        assert_eq!(new.job_title, old.job_title);
        assert_eq!(new.company, old.company);
        assert_eq!(new.location, old.location);
        assert_eq!(new.start_date, old.start_date);
        assert_eq!(new.end_date, old.end_date);
        assert_eq!(after.resume_data.summary, before.resume_data.summary);
    }

    #[test]
    fn test_accept_without_suggestions_fails() {
        let state = StoreState::initial();
        assert_eq!(
            reduce(&state, Command::AcceptSummarySuggestion).unwrap_err(),
            StoreError::NoSuggestions
        );

        let state = with_suggestions(AiSuggestionSet::default());
        assert_eq!(
            reduce(&state, Command::AcceptSummarySuggestion).unwrap_err(),
            StoreError::NoSummarySuggestion
        );
        assert_eq!(
            reduce(&state, Command::AcceptExperienceSuggestion { index: 0 }).unwrap_err(),
            StoreError::NoExperienceSuggestion { index: 0 }
        );
    }

    #[test]
    fn test_accept_suggestion_beyond_document_fails() {
        let suggestion = SuggestedExperience {
            job_title: None,
            company: None,
            responsibilities: vec!["x".into()],
        };
        let state = with_suggestions(AiSuggestionSet {
            summary: None,
            experience: Some(vec![suggestion.clone(), suggestion]),
        });
        assert_eq!(
            reduce(&state, Command::AcceptExperienceSuggestion { index: 1 }).unwrap_err(),
            StoreError::NoExperienceAt { index: 1, len: 1 }
        );
    }
}
