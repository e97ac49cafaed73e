//! The per-session student profile, the one mutable entity in the system.
//!
//! Serialized field names follow the stored document schema (camelCase), and
//! every field is serde-defaulted so a document missing a field deserializes
//! over the default record (merge-on-load).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImprovementStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

/// One academic subject with its exam date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub subject: String,
    pub exam_date: NaiveDate,
}

/// One skill the student is actively working on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementEntry {
    pub id: Uuid,
    pub skill: String,
    pub resource: String,
    pub status: ImprovementStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub branch: String,
    pub programming_skills: Vec<String>,
    pub target_roles: Vec<String>,
    pub target_companies: Vec<String>,
    pub projects_completed: Vec<String>,
    pub github_profile: String,
    pub leetcode_profile: String,
    pub codechef_profile: String,
    pub linkedin_profile: String,
    pub vercel_profile: String,
    pub netlify_profile: String,
    #[serde(rename = "resumeURL")]
    pub resume_url: String,
    pub academic_schedule: Vec<ScheduleEntry>,
    pub skill_improvement_plan: Vec<ImprovementEntry>,
}

impl ProfileRecord {
    /// Idempotent membership toggle used by the checkbox-style selectors.
    pub fn toggle_skill(&mut self, skill: &str) {
        toggle(&mut self.programming_skills, skill);
    }

    pub fn toggle_target_role(&mut self, role_id: &str) {
        toggle(&mut self.target_roles, role_id);
    }

    pub fn toggle_completed_project(&mut self, project_id: &str) {
        toggle(&mut self.projects_completed, project_id);
    }

    /// Appends a target company. Rejects a blank name and a case-sensitive
    /// exact duplicate with distinct messages.
    pub fn add_target_company(&mut self, name: &str) -> Result<(), AppError> {
        if self.target_companies.iter().any(|c| c == name) {
            return Err(AppError::Validation("Company already added.".to_string()));
        }
        if name.is_empty() {
            return Err(AppError::Validation(
                "Please enter a company name.".to_string(),
            ));
        }
        self.target_companies.push(name.to_string());
        Ok(())
    }

    /// Removes by exact string match; no-op if absent.
    pub fn remove_target_company(&mut self, name: &str) {
        self.target_companies.retain(|c| c != name);
    }

    /// Appends an academic subject with a freshly generated id.
    pub fn add_schedule_entry(
        &mut self,
        subject: &str,
        exam_date: Option<NaiveDate>,
    ) -> Result<Uuid, AppError> {
        let exam_date = match exam_date {
            Some(date) if !subject.is_empty() => date,
            _ => {
                return Err(AppError::Validation(
                    "Please enter both subject and exam date.".to_string(),
                ))
            }
        };
        let id = Uuid::new_v4();
        self.academic_schedule.push(ScheduleEntry {
            id,
            subject: subject.to_string(),
            exam_date,
        });
        Ok(id)
    }

    /// No-op if the id is not present.
    pub fn remove_schedule_entry(&mut self, id: Uuid) {
        self.academic_schedule.retain(|e| e.id != id);
    }

    /// Appends a skill-improvement entry with a freshly generated id.
    pub fn add_improvement(
        &mut self,
        skill: &str,
        resource: &str,
        status: ImprovementStatus,
    ) -> Result<Uuid, AppError> {
        if skill.is_empty() || resource.is_empty() {
            return Err(AppError::Validation(
                "Please enter skill and resource for improvement plan.".to_string(),
            ));
        }
        let id = Uuid::new_v4();
        self.skill_improvement_plan.push(ImprovementEntry {
            id,
            skill: skill.to_string(),
            resource: resource.to_string(),
            status,
        });
        Ok(id)
    }

    /// Replaces the status in place; no-op if the id is not present.
    pub fn update_improvement_status(&mut self, id: Uuid, status: ImprovementStatus) {
        if let Some(entry) = self.skill_improvement_plan.iter_mut().find(|e| e.id == id) {
            entry.status = status;
        }
    }

    /// No-op if the id is not present.
    pub fn remove_improvement(&mut self, id: Uuid) {
        self.skill_improvement_plan.retain(|e| e.id != id);
    }
}

fn toggle(items: &mut Vec<String>, value: &str) {
    if let Some(pos) = items.iter().position(|v| v == value) {
        items.remove(pos);
    } else {
        items.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_skill_toggle_is_idempotent() {
        let mut profile = ProfileRecord::default();
        let original = profile.programming_skills.clone();
        profile.toggle_skill("Python");
        assert_eq!(profile.programming_skills, vec!["Python".to_string()]);
        profile.toggle_skill("Python");
        assert_eq!(profile.programming_skills, original);
    }

    #[test]
    fn test_role_toggle_preserves_other_entries() {
        let mut profile = ProfileRecord::default();
        profile.toggle_target_role("se");
        profile.toggle_target_role("ml");
        profile.toggle_target_role("se");
        assert_eq!(profile.target_roles, vec!["ml".to_string()]);
    }

    #[test]
    fn test_duplicate_company_rejected_once() {
        let mut profile = ProfileRecord::default();
        profile.add_target_company("Google").unwrap();
        let err = profile.add_target_company("Google").unwrap_err();
        assert!(err.to_string().contains("Company already added."));
        assert_eq!(profile.target_companies, vec!["Google".to_string()]);
    }

    #[test]
    fn test_company_duplicate_check_is_case_sensitive() {
        let mut profile = ProfileRecord::default();
        profile.add_target_company("Google").unwrap();
        profile.add_target_company("google").unwrap();
        assert_eq!(profile.target_companies.len(), 2);
    }

    #[test]
    fn test_blank_company_rejected() {
        let mut profile = ProfileRecord::default();
        let err = profile.add_target_company("").unwrap_err();
        assert!(err.to_string().contains("Please enter a company name."));
        assert!(profile.target_companies.is_empty());
    }

    #[test]
    fn test_remove_company_by_exact_match() {
        let mut profile = ProfileRecord::default();
        profile.add_target_company("Google").unwrap();
        profile.add_target_company("TCS").unwrap();
        profile.remove_target_company("Google");
        assert_eq!(profile.target_companies, vec!["TCS".to_string()]);
        // Removing an absent name is a no-op
        profile.remove_target_company("Amazon");
        assert_eq!(profile.target_companies.len(), 1);
    }

    #[test]
    fn test_schedule_entry_requires_both_fields() {
        let mut profile = ProfileRecord::default();
        assert!(profile.add_schedule_entry("", Some(date("2025-12-15"))).is_err());
        assert!(profile.add_schedule_entry("DSA", None).is_err());
        assert!(profile.academic_schedule.is_empty());
    }

    #[test]
    fn test_schedule_entries_get_unique_ids_and_append_in_order() {
        let mut profile = ProfileRecord::default();
        let first = profile
            .add_schedule_entry("DSA", Some(date("2025-12-15")))
            .unwrap();
        let second = profile
            .add_schedule_entry("OS", Some(date("2026-01-10")))
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(profile.academic_schedule[0].subject, "DSA");
        assert_eq!(profile.academic_schedule[1].subject, "OS");
    }

    #[test]
    fn test_remove_schedule_entry_unknown_id_is_noop() {
        let mut profile = ProfileRecord::default();
        profile
            .add_schedule_entry("DSA", Some(date("2025-12-15")))
            .unwrap();
        profile.remove_schedule_entry(Uuid::new_v4());
        assert_eq!(profile.academic_schedule.len(), 1);
    }

    #[test]
    fn test_improvement_requires_skill_and_resource() {
        let mut profile = ProfileRecord::default();
        let err = profile
            .add_improvement("", "Coursera CNN course", ImprovementStatus::NotStarted)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("Please enter skill and resource for improvement plan."));
    }

    #[test]
    fn test_improvement_status_update_in_place() {
        let mut profile = ProfileRecord::default();
        let id = profile
            .add_improvement(
                "Deep Learning",
                "Coursera CNN course",
                ImprovementStatus::NotStarted,
            )
            .unwrap();
        profile.update_improvement_status(id, ImprovementStatus::InProgress);
        assert_eq!(
            profile.skill_improvement_plan[0].status,
            ImprovementStatus::InProgress
        );
        // Unknown id leaves the plan untouched
        profile.update_improvement_status(Uuid::new_v4(), ImprovementStatus::Completed);
        assert_eq!(
            profile.skill_improvement_plan[0].status,
            ImprovementStatus::InProgress
        );
    }

    #[test]
    fn test_merge_on_load_fills_missing_fields_with_defaults() {
        // A stored document written before targetCompanies existed
        let document = serde_json::json!({
            "branch": "Computer Science",
            "programmingSkills": ["Python"],
            "targetRoles": ["se"]
        });
        let profile: ProfileRecord = serde_json::from_value(document).unwrap();
        assert_eq!(profile.branch, "Computer Science");
        assert!(profile.target_companies.is_empty());
        assert!(profile.academic_schedule.is_empty());
        assert!(profile.resume_url.is_empty());
    }

    #[test]
    fn test_document_field_names_match_stored_schema() {
        let mut profile = ProfileRecord::default();
        profile.resume_url = "https://example.com/resumes/u1/resume.pdf".to_string();
        profile.github_profile = "https://github.com/student".to_string();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("resumeURL").is_some());
        assert!(value.get("githubProfile").is_some());
        assert!(value.get("skillImprovementPlan").is_some());
    }

    #[test]
    fn test_improvement_status_serializes_with_spaces() {
        let json = serde_json::to_string(&ImprovementStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: ImprovementStatus = serde_json::from_str("\"Not Started\"").unwrap();
        assert_eq!(parsed, ImprovementStatus::NotStarted);
    }
}
