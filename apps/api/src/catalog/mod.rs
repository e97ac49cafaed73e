//! Static opportunity catalog: job roles, projects, hackathons, internships,
//! plus the branch and skill vocabularies.
//!
//! Loaded and validated once at startup, never mutated afterwards. Lookup
//! misses are not errors; callers treat an unresolved id as "no contribution".

pub mod handlers;
mod seed;

use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A job role a student can target, with the skills it requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub id: String,
    pub name: String,
    pub required_skills: Vec<String>,
}

/// A portfolio project suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub category: String,
    pub description: String,
}

/// A hackathon with its focus areas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: String,
    pub name: String,
    pub focus: Vec<String>,
    pub date: String,
    pub description: String,
}

/// An internship listing, gated on branch eligibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub branch: Vec<String>,
    pub description: String,
}

/// The full reference dataset. Carried in `AppState` as `Arc<Catalog>`.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub roles: Vec<JobRole>,
    pub projects: Vec<Project>,
    pub hackathons: Vec<Hackathon>,
    pub internships: Vec<Internship>,
    pub branches: Vec<String>,
    pub skills: Vec<String>,
}

impl Catalog {
    /// Builds the seeded catalog and validates its shape.
    pub fn load() -> Result<Self> {
        let catalog = seed::catalog();
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn role(&self, id: &str) -> Option<&JobRole> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn is_known_branch(&self, branch: &str) -> bool {
        self.branches.iter().any(|b| b == branch)
    }

    /// Rejects malformed reference data instead of trusting its shape:
    /// ids must be unique per table and every role must require at least
    /// one skill (a role with none could never produce a gap or a match).
    fn validate(&self) -> Result<()> {
        check_unique("role", self.roles.iter().map(|r| r.id.as_str()))?;
        check_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        check_unique("hackathon", self.hackathons.iter().map(|h| h.id.as_str()))?;
        check_unique("internship", self.internships.iter().map(|i| i.id.as_str()))?;

        for role in &self.roles {
            if role.required_skills.is_empty() {
                bail!("role '{}' has no required skills", role.id);
            }
        }
        for internship in &self.internships {
            if internship.branch.is_empty() {
                bail!("internship '{}' has no eligible branches", internship.id);
            }
        }
        Ok(())
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            bail!("empty {kind} id in catalog");
        }
        if !seen.insert(id) {
            bail!("duplicate {kind} id '{id}' in catalog");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_is_valid() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.roles.is_empty());
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.hackathons.is_empty());
        assert!(!catalog.internships.is_empty());
        assert!(!catalog.branches.is_empty());
        assert!(!catalog.skills.is_empty());
    }

    #[test]
    fn test_role_lookup_by_id() {
        let catalog = Catalog::load().unwrap();
        let role = catalog.role("se").unwrap();
        assert_eq!(role.name, "Software Engineer");
        assert!(role.required_skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_role_lookup_miss_is_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.role("no-such-role").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::load().unwrap();
        let dup = catalog.roles[0].clone();
        catalog.roles.push(dup);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate role id"));
    }

    #[test]
    fn test_role_without_skills_rejected() {
        let mut catalog = Catalog::load().unwrap();
        catalog.roles[0].required_skills.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_known_branch() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.is_known_branch("Computer Science"));
        assert!(!catalog.is_known_branch("Astrology"));
    }
}
