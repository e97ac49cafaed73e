//! Placement-preparation lookup for target companies: focused skills,
//! aptitude topics, and previous-paper links. Unknown companies get the
//! generic entry.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CompanyPrep {
    pub skills: Vec<String>,
    pub aptitude: Vec<String>,
    pub papers: Vec<String>,
}

const COMMON_SKILLS: &[&str] = &[
    "Data Structures",
    "Algorithms",
    "Problem Solving",
    "System Design",
];

const COMMON_APTITUDE: &[&str] = &[
    "Quantitative Aptitude",
    "Logical Reasoning",
    "Verbal Ability",
];

pub fn prep_for(company: &str) -> CompanyPrep {
    match company {
        "Google" => CompanyPrep {
            skills: with_common(COMMON_SKILLS, &[
                "Distributed Systems",
                "Machine Learning",
                "C++/Java/Python",
            ]),
            aptitude: with_common(COMMON_APTITUDE, &["Advanced Puzzles"]),
            papers: strings(&[
                "https://example.com/google-prev-papers",
                "https://leetcode.com/tag/google/",
            ]),
        },
        "Microsoft" => CompanyPrep {
            skills: with_common(COMMON_SKILLS, &[
                "Object-Oriented Design",
                "Cloud Technologies (Azure)",
                "C#/Java",
            ]),
            aptitude: with_common(COMMON_APTITUDE, &["Coding Challenges"]),
            papers: strings(&[
                "https://example.com/microsoft-prev-papers",
                "https://interviewbit.com/microsoft-interview-questions/",
            ]),
        },
        "Amazon" => CompanyPrep {
            skills: with_common(COMMON_SKILLS, &[
                "AWS",
                "Distributed Systems",
                "Leadership Principles",
            ]),
            aptitude: with_common(COMMON_APTITUDE, &["Work Style Assessment"]),
            papers: strings(&[
                "https://example.com/amazon-prev-papers",
                "https://www.geeksforgeeks.org/amazon-interview-experience/",
            ]),
        },
        // Service companies screen on fundamentals, not the common DSA set
        "TCS" => CompanyPrep {
            skills: strings(&["Java", "Python", "SQL", "Basic Programming"]),
            aptitude: strings(&[
                "Numerical Ability",
                "Reasoning Ability",
                "Verbal Ability",
            ]),
            papers: strings(&[
                "https://example.com/tcs-prev-papers",
                "https://prepinsta.com/tcs-nqt/",
            ]),
        },
        _ => CompanyPrep {
            skills: strings(&["General Programming", "Core CS Concepts"]),
            aptitude: strings(&["Basic Aptitude"]),
            papers: strings(&["https://example.com/generic-prep"]),
        },
    }
}

fn with_common(common: &[&str], extra: &[&str]) -> Vec<String> {
    common.iter().chain(extra).map(|s| s.to_string()).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_company_extends_common_skills() {
        let prep = prep_for("Google");
        assert!(prep.skills.contains(&"Data Structures".to_string()));
        assert!(prep.skills.contains(&"Distributed Systems".to_string()));
        assert!(prep.aptitude.contains(&"Advanced Puzzles".to_string()));
    }

    #[test]
    fn test_tcs_uses_its_own_lists() {
        let prep = prep_for("TCS");
        assert!(!prep.skills.contains(&"System Design".to_string()));
        assert!(prep.skills.contains(&"Basic Programming".to_string()));
    }

    #[test]
    fn test_unknown_company_gets_default_entry() {
        let prep = prep_for("Some Startup");
        assert_eq!(prep.skills, strings(&["General Programming", "Core CS Concepts"]));
        assert_eq!(prep.papers, strings(&["https://example.com/generic-prep"]));
    }
}
