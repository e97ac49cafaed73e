//! Matching engine: pure functions deriving recommendation sets and the
//! skill-gap set from the current profile and the static catalog.
//!
//! Every call recomputes from its inputs; the catalog tables are small and
//! calls are infrequent, so there is no caching layer. Matching is role
//! driven: an item no target role points at is never recommended, however
//! well it fits the student's own skills. Unresolved role ids are skipped,
//! never surfaced as errors, and the functions expose no numeric score.

pub mod handlers;

use std::collections::HashSet;

use crate::catalog::{Catalog, Hackathon, Internship, JobRole, Project};
use crate::profile::record::ProfileRecord;

/// Minimum overlap between a project's skills and a role's required skills.
const PROJECT_ROLE_OVERLAP_MIN: usize = 2;
/// Minimum overlap between a project's skills and the student's own skills.
const PROJECT_STUDENT_OVERLAP_MIN: usize = 1;
/// Minimum overlap between an internship's skills and a role's required skills.
const INTERNSHIP_SKILL_OVERLAP_MIN: usize = 2;

fn resolved_roles<'a>(
    profile: &'a ProfileRecord,
    catalog: &'a Catalog,
) -> impl Iterator<Item = &'a JobRole> + 'a {
    profile.target_roles.iter().filter_map(|id| catalog.role(id))
}

/// Required skills of the target roles that the student does not yet have.
/// Insertion-ordered and deduplicated; empty target roles yield an empty set.
pub fn skill_gaps(profile: &ProfileRecord, catalog: &Catalog) -> Vec<String> {
    let mut gaps: Vec<String> = Vec::new();
    for role in resolved_roles(profile, catalog) {
        for required in &role.required_skills {
            if !profile.programming_skills.contains(required) && !gaps.contains(required) {
                gaps.push(required.clone());
            }
        }
    }
    gaps
}

/// Projects whose skills overlap a target role's requirements by at least two
/// and the student's own skills by at least one.
pub fn recommended_projects<'a>(
    profile: &ProfileRecord,
    catalog: &'a Catalog,
) -> Vec<&'a Project> {
    let mut seen = HashSet::new();
    let mut recommended = Vec::new();
    for role in resolved_roles(profile, catalog) {
        for project in &catalog.projects {
            let role_overlap = project
                .skills
                .iter()
                .filter(|s| role.required_skills.contains(*s))
                .count();
            let student_overlap = project
                .skills
                .iter()
                .filter(|s| profile.programming_skills.contains(*s))
                .count();
            if role_overlap >= PROJECT_ROLE_OVERLAP_MIN
                && student_overlap >= PROJECT_STUDENT_OVERLAP_MIN
                && seen.insert(project.id.as_str())
            {
                recommended.push(project);
            }
        }
    }
    recommended
}

/// Hackathons whose focus areas touch a target role's requirements and the
/// student's own skills.
///
/// Focus-to-role matching is bidirectional substring containment, so label
/// variants like "Cloud Computing" and "Cloud Computing (AWS/Azure/GCP)"
/// still pair up. It also over-matches short labels ("C" against "C++");
/// preserved as shipped pending product sign-off.
pub fn recommended_hackathons<'a>(
    profile: &ProfileRecord,
    catalog: &'a Catalog,
) -> Vec<&'a Hackathon> {
    let mut seen = HashSet::new();
    let mut recommended = Vec::new();
    for role in resolved_roles(profile, catalog) {
        for hackathon in &catalog.hackathons {
            let focus_overlap = hackathon
                .focus
                .iter()
                .filter(|f| {
                    role.required_skills
                        .iter()
                        .any(|rs| rs.contains(f.as_str()) || f.contains(rs.as_str()))
                })
                .count();
            let student_focus_overlap = hackathon
                .focus
                .iter()
                .filter(|f| profile.programming_skills.contains(*f))
                .count();
            if focus_overlap > 0 && student_focus_overlap > 0 && seen.insert(hackathon.id.as_str())
            {
                recommended.push(hackathon);
            }
        }
    }
    recommended
}

/// Internships whose skills overlap a target role's requirements by at least
/// two, gated on the student's branch being eligible (exact match).
pub fn recommended_internships<'a>(
    profile: &ProfileRecord,
    catalog: &'a Catalog,
) -> Vec<&'a Internship> {
    let mut seen = HashSet::new();
    let mut recommended = Vec::new();
    for role in resolved_roles(profile, catalog) {
        for internship in &catalog.internships {
            let skill_overlap = internship
                .skills
                .iter()
                .filter(|s| role.required_skills.contains(*s))
                .count();
            let branch_match = internship.branch.contains(&profile.branch);
            if skill_overlap >= INTERNSHIP_SKILL_OVERLAP_MIN
                && branch_match
                && seen.insert(internship.id.as_str())
            {
                recommended.push(internship);
            }
        }
    }
    recommended
}
