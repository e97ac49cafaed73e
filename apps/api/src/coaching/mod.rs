//! Coaching capabilities: interview practice, project ideas, resume analysis.
//!
//! Each capability is a trait carried in `AppState` as `Arc<dyn ...>` so a
//! model-backed implementation can replace the fixed-table defaults without
//! touching the matching engine or the handlers. The defaults rotate through
//! their templates so repeated calls vary.

pub mod company_prep;
pub mod handlers;
pub mod next_steps;
pub mod study_plan;

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::profile::record::ProfileRecord;

/// Generates an interview question tailored to the profile.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, profile: &ProfileRecord, catalog: &Catalog)
        -> Result<String, AppError>;
}

/// Scores a submitted interview answer and returns feedback.
#[async_trait]
pub trait AnswerScorer: Send + Sync {
    async fn score(&self, answer: &str) -> Result<String, AppError>;
}

/// Suggests a new portfolio project idea.
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    async fn generate(&self, profile: &ProfileRecord, catalog: &Catalog)
        -> Result<String, AppError>;
}

/// Fixed-table question generator. Templates are filled from the resolved
/// target-role names and the student's leading skill.
#[derive(Default)]
pub struct TemplateQuestionGenerator {
    cursor: AtomicUsize,
}

#[async_trait]
impl QuestionGenerator for TemplateQuestionGenerator {
    async fn generate(
        &self,
        profile: &ProfileRecord,
        catalog: &Catalog,
    ) -> Result<String, AppError> {
        let roles: Vec<&str> = profile
            .target_roles
            .iter()
            .filter_map(|id| catalog.role(id))
            .map(|r| r.name.as_str())
            .collect();
        let role_or = |fallback: &str| roles.first().copied().unwrap_or(fallback).to_string();
        let lead_skill = profile
            .programming_skills
            .first()
            .map(String::as_str)
            .unwrap_or("your primary skill");

        let questions = [
            format!(
                "Describe a challenging project you've worked on and how you overcame obstacles, relevant to a {} role.",
                role_or("tech")
            ),
            format!(
                "Explain a core concept in {lead_skill} as if explaining it to a non-technical person."
            ),
            "How do you handle constructive criticism on your code/work in a team environment?"
                .to_string(),
            format!(
                "Given your interest in {}, what is your understanding of Data Structures and Algorithms and their importance?",
                role_or("Software Engineering")
            ),
            format!(
                "What are your career aspirations in the next 3-5 years, especially considering your interest in {}?",
                role_or("AI/ML")
            ),
        ];

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % questions.len();
        Ok(questions[index].clone())
    }
}

/// Fixed-table answer feedback. Rejects a blank answer; otherwise rotates
/// through generic coaching messages.
#[derive(Default)]
pub struct FeedbackTableScorer {
    cursor: AtomicUsize,
}

const FEEDBACK_MESSAGES: &[&str] = &[
    "Good start! Try to be more specific with examples.",
    "Your answer is clear and concise. Consider adding a personal touch.",
    "Excellent explanation! You demonstrated strong understanding.",
    "Focus on structuring your answer using the STAR method (Situation, Task, Action, Result).",
    "You covered the technical aspects well. Practice articulating the business impact.",
    "Ensure your answer directly addresses the question asked.",
];

#[async_trait]
impl AnswerScorer for FeedbackTableScorer {
    async fn score(&self, answer: &str) -> Result<String, AppError> {
        if answer.trim().is_empty() {
            return Err(AppError::Validation(
                "Please provide an answer to analyze.".to_string(),
            ));
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % FEEDBACK_MESSAGES.len();
        Ok(FEEDBACK_MESSAGES[index].to_string())
    }
}

/// Fixed-table project idea generator.
#[derive(Default)]
pub struct TemplateIdeaGenerator {
    cursor: AtomicUsize,
}

const PROJECT_IDEAS: &[&str] = &[
    "AI-Powered Resume Keyword Optimizer: A web app that takes a resume and a job description, and suggests keywords from the job description to include in the resume to improve ATS compatibility.",
    "Smart Waste Segregation System: An IoT-based project using computer vision to automatically sort waste into different categories (e.g., plastic, paper, organic).",
    "Personalized Learning Path Generator: A tool that takes a desired skill/role and current knowledge, then generates a step-by-step learning path with recommended resources (online courses, books, tutorials).",
    "Voice-Controlled Smart Mirror: An AR/IoT project where a mirror displays information (weather, news) and responds to voice commands, with customizable widgets.",
    "Decentralized Voting System using Blockchain: A project exploring blockchain fundamentals for a secure and transparent voting application.",
];

#[async_trait]
impl IdeaGenerator for TemplateIdeaGenerator {
    async fn generate(
        &self,
        _profile: &ProfileRecord,
        _catalog: &Catalog,
    ) -> Result<String, AppError> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % PROJECT_IDEAS.len();
        Ok(PROJECT_IDEAS[index].to_string())
    }
}

/// Fixed resume-analysis report returned once a resume reference is on file.
/// The artifact itself is stored externally; only its URL lives in the record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisReport {
    pub skills_identified: Vec<String>,
    pub suggested_improvements: Vec<String>,
    pub keyword_optimization: Vec<String>,
}

pub fn resume_analysis_report() -> ResumeAnalysisReport {
    ResumeAnalysisReport {
        skills_identified: vec![
            "Python".to_string(),
            "Java".to_string(),
            "Web Development".to_string(),
            "SQL".to_string(),
            "Problem Solving".to_string(),
        ],
        suggested_improvements: vec![
            "Add more quantifiable achievements to project descriptions.".to_string(),
            "Tailor summary to specific job roles.".to_string(),
            "Expand on internship responsibilities.".to_string(),
        ],
        keyword_optimization: vec![
            "Data Structures".to_string(),
            "Algorithms".to_string(),
            "Cloud Computing".to_string(),
            "Machine Learning".to_string(),
        ],
    }
}
