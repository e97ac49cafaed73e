//! Daily study plan, derived deterministically from the profile: one academic
//! slot, one skill-development slot, one project slot.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::profile::record::{ImprovementStatus, ProfileRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanKind {
    Academic,
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    Project,
    Guidance,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanItem {
    pub time: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: PlanKind,
}

pub fn generate_daily_plan(profile: &ProfileRecord, catalog: &Catalog) -> Vec<PlanItem> {
    let mut plan = Vec::new();

    if let Some(entry) = profile.academic_schedule.first() {
        plan.push(PlanItem {
            time: "9:00 AM - 11:00 AM".to_string(),
            activity: format!("{} (Academic Prep for {})", entry.subject, entry.exam_date),
            kind: PlanKind::Academic,
        });
    }

    // Only the leading improvement entry is scheduled, and only while it is
    // still in flight
    if let Some(item) = profile.skill_improvement_plan.first() {
        if item.status != ImprovementStatus::Completed {
            plan.push(PlanItem {
                time: "2:00 PM - 4:00 PM".to_string(),
                activity: format!("{} (Skill Improvement: {})", item.skill, item.resource),
                kind: PlanKind::SkillDevelopment,
            });
        }
    }

    match profile.projects_completed.first() {
        Some(project_id) => {
            let name = catalog
                .project(project_id)
                .map(|p| p.name.as_str())
                .unwrap_or("Your Project");
            plan.push(PlanItem {
                time: "7:00 PM - 9:00 PM".to_string(),
                activity: format!("Project Work: {name} (Focus: Coding)"),
                kind: PlanKind::Project,
            });
        }
        None => {
            plan.push(PlanItem {
                time: "7:00 PM - 9:00 PM".to_string(),
                activity: "Explore new project ideas in \"Projects & Portfolio\"".to_string(),
                kind: PlanKind::Project,
            });
        }
    }

    if plan.is_empty() {
        plan.push(PlanItem {
            time: "Flexible".to_string(),
            activity: "Update your profile to get a personalized study plan!".to_string(),
            kind: PlanKind::Guidance,
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_profile_gets_three_slots() {
        let catalog = Catalog::load().unwrap();
        let mut profile = ProfileRecord::default();
        profile
            .add_schedule_entry("DSA", Some(date("2025-12-15")))
            .unwrap();
        profile
            .add_improvement(
                "Deep Learning",
                "Coursera CNN course",
                ImprovementStatus::InProgress,
            )
            .unwrap();
        profile.toggle_completed_project("p1");

        let plan = generate_daily_plan(&profile, &catalog);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].kind, PlanKind::Academic);
        assert!(plan[0].activity.contains("DSA"));
        assert!(plan[0].activity.contains("2025-12-15"));
        assert_eq!(plan[1].kind, PlanKind::SkillDevelopment);
        assert!(plan[1].activity.contains("Coursera CNN course"));
        assert_eq!(plan[2].kind, PlanKind::Project);
        assert!(plan[2].activity.contains("E-commerce Website (Full Stack)"));
    }

    #[test]
    fn test_completed_leading_improvement_is_skipped() {
        let catalog = Catalog::load().unwrap();
        let mut profile = ProfileRecord::default();
        profile
            .add_improvement("SQL", "Mode tutorials", ImprovementStatus::Completed)
            .unwrap();

        let plan = generate_daily_plan(&profile, &catalog);
        assert!(plan.iter().all(|i| i.kind != PlanKind::SkillDevelopment));
    }

    #[test]
    fn test_unknown_completed_project_gets_placeholder() {
        let catalog = Catalog::load().unwrap();
        let mut profile = ProfileRecord::default();
        profile.toggle_completed_project("p999");

        let plan = generate_daily_plan(&profile, &catalog);
        let project = plan.iter().find(|i| i.kind == PlanKind::Project).unwrap();
        assert!(project.activity.contains("Your Project"));
    }

    #[test]
    fn test_empty_profile_still_gets_project_prompt() {
        let catalog = Catalog::load().unwrap();
        let plan = generate_daily_plan(&ProfileRecord::default(), &catalog);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].kind, PlanKind::Project);
        assert!(plan[0].activity.contains("Explore new project ideas"));
    }
}
