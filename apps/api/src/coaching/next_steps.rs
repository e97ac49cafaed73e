//! Dashboard action items: an ordered checklist derived from profile gaps
//! and the matching engine's current outputs.

use crate::catalog::Catalog;
use crate::matching;
use crate::profile::record::ProfileRecord;

pub fn next_steps(profile: &ProfileRecord, catalog: &Catalog) -> Vec<String> {
    let gaps = matching::skill_gaps(profile, catalog);
    let projects = matching::recommended_projects(profile, catalog);
    let internships = matching::recommended_internships(profile, catalog);

    let mut steps = Vec::new();
    if profile.branch.is_empty() {
        steps.push("Complete your branch information in My Profile.".to_string());
    }
    if profile.target_roles.is_empty() {
        steps.push("Select your target job roles in My Profile.".to_string());
    }
    if profile.programming_skills.is_empty() {
        steps.push("Add your programming skills in My Profile.".to_string());
    }
    if !gaps.is_empty() {
        steps.push("Address your identified skill gaps in Skills & Learning.".to_string());
    }
    if profile.target_companies.is_empty() {
        steps.push("Add your dream companies for focused prep.".to_string());
    }
    if profile.resume_url.is_empty() {
        steps.push("Upload your resume for AI analysis.".to_string());
    }
    if profile.github_profile.is_empty() {
        steps.push("Link your GitHub profile for portfolio tracking.".to_string());
    }
    if profile.academic_schedule.is_empty() {
        steps.push("Add your academic subjects and exam dates.".to_string());
    }
    if profile.skill_improvement_plan.is_empty() {
        steps.push("Create your first skill improvement plan.".to_string());
    }
    steps.push("Try the AI-powered interview practice.".to_string());
    if !projects.is_empty() {
        steps.push("Explore recommended projects to build your portfolio.".to_string());
    }
    if !internships.is_empty() {
        steps.push("Check out recommended internships.".to_string());
    }
    if !profile.target_roles.is_empty() && !profile.programming_skills.is_empty() && gaps.is_empty()
    {
        steps.push(
            "You're on track! Keep honing your skills and exploring opportunities.".to_string(),
        );
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_lists_setup_steps() {
        let catalog = Catalog::load().unwrap();
        let steps = next_steps(&ProfileRecord::default(), &catalog);
        assert!(steps[0].contains("branch information"));
        assert!(steps.iter().any(|s| s.contains("interview practice")));
        assert!(!steps.iter().any(|s| s.contains("on track")));
    }

    #[test]
    fn test_fully_skilled_profile_is_on_track() {
        let catalog = Catalog::load().unwrap();
        let mut profile = ProfileRecord::default();
        profile.branch = "Computer Science".to_string();
        profile.toggle_target_role("se");
        // Cover every skill the role requires
        for skill in catalog.role("se").unwrap().required_skills.clone() {
            profile.toggle_skill(&skill);
        }

        let steps = next_steps(&profile, &catalog);
        assert!(steps.iter().any(|s| s.contains("on track")));
        assert!(!steps.iter().any(|s| s.contains("skill gaps")));
    }

    #[test]
    fn test_gaps_surface_as_action_item() {
        let catalog = Catalog::load().unwrap();
        let mut profile = ProfileRecord::default();
        profile.toggle_target_role("se");
        profile.toggle_skill("Python");

        let steps = next_steps(&profile, &catalog);
        assert!(steps.iter().any(|s| s.contains("skill gaps")));
    }
}
