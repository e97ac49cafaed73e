use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coaching::company_prep::{self, CompanyPrep};
use crate::coaching::next_steps;
use crate::coaching::study_plan::{self, PlanItem};
use crate::coaching::{resume_analysis_report, ResumeAnalysisReport};
use crate::errors::AppError;
use crate::profile::handlers::SessionQuery;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionResponse {
    pub question: String,
}

/// POST /api/v1/coaching/interview/question
pub async fn handle_interview_question(
    State(state): State<AppState>,
    Json(req): Json<SessionBody>,
) -> Result<Json<QuestionResponse>, AppError> {
    let profile = state.sessions.get(req.session_id).await?;
    let question = state
        .question_generator
        .generate(&profile, &state.catalog)
        .await?;
    Ok(Json(QuestionResponse { question }))
}

#[derive(Deserialize)]
pub struct SessionBody {
    pub session_id: Uuid,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub session_id: Uuid,
    #[serde(default)]
    pub answer: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// POST /api/v1/coaching/interview/answer
pub async fn handle_interview_answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    state.sessions.get(req.session_id).await?;
    let feedback = state.answer_scorer.score(&req.answer).await?;
    Ok(Json(FeedbackResponse { feedback }))
}

#[derive(Serialize)]
pub struct IdeaResponse {
    pub idea: String,
}

/// POST /api/v1/coaching/project-idea
pub async fn handle_project_idea(
    State(state): State<AppState>,
    Json(req): Json<SessionBody>,
) -> Result<Json<IdeaResponse>, AppError> {
    let profile = state.sessions.get(req.session_id).await?;
    let idea = state
        .idea_generator
        .generate(&profile, &state.catalog)
        .await?;
    Ok(Json(IdeaResponse { idea }))
}

#[derive(Serialize)]
pub struct StudyPlanResponse {
    pub plan: Vec<PlanItem>,
}

/// GET /api/v1/coaching/study-plan
pub async fn handle_study_plan(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<StudyPlanResponse>, AppError> {
    let profile = state.sessions.get(params.session_id).await?;
    Ok(Json(StudyPlanResponse {
        plan: study_plan::generate_daily_plan(&profile, &state.catalog),
    }))
}

#[derive(Serialize)]
pub struct CompanyPrepEntry {
    pub company: String,
    #[serde(flatten)]
    pub prep: CompanyPrep,
}

#[derive(Serialize)]
pub struct CompanyPrepResponse {
    pub companies: Vec<CompanyPrepEntry>,
}

/// GET /api/v1/coaching/company-prep
/// One entry per target company, in the profile's own order.
pub async fn handle_company_prep(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<CompanyPrepResponse>, AppError> {
    let profile = state.sessions.get(params.session_id).await?;
    let companies = profile
        .target_companies
        .iter()
        .map(|name| CompanyPrepEntry {
            company: name.clone(),
            prep: company_prep::prep_for(name),
        })
        .collect();
    Ok(Json(CompanyPrepResponse { companies }))
}

#[derive(Serialize)]
pub struct NextStepsResponse {
    pub steps: Vec<String>,
}

/// GET /api/v1/coaching/next-steps
pub async fn handle_next_steps(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<NextStepsResponse>, AppError> {
    let profile = state.sessions.get(params.session_id).await?;
    Ok(Json(NextStepsResponse {
        steps: next_steps::next_steps(&profile, &state.catalog),
    }))
}

/// GET /api/v1/coaching/resume-analysis
/// Requires a resume reference on the profile.
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ResumeAnalysisReport>, AppError> {
    let profile = state.sessions.get(params.session_id).await?;
    if profile.resume_url.is_empty() {
        return Err(AppError::NotFound("No resume uploaded yet.".to_string()));
    }
    Ok(Json(resume_analysis_report()))
}
