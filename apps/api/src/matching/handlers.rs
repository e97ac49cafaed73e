use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::catalog::{Hackathon, Internship, Project};
use crate::errors::AppError;
use crate::matching;
use crate::profile::handlers::SessionQuery;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub skill_gaps: Vec<String>,
    pub projects: Vec<Project>,
    pub hackathons: Vec<Hackathon>,
    pub internships: Vec<Internship>,
}

/// GET /api/v1/recommendations
/// Recomputes all four recommendation sets from the live profile.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = state.sessions.get(params.session_id).await?;
    let catalog = &state.catalog;

    Ok(Json(RecommendationsResponse {
        skill_gaps: matching::skill_gaps(&profile, catalog),
        projects: matching::recommended_projects(&profile, catalog)
            .into_iter()
            .cloned()
            .collect(),
        hackathons: matching::recommended_hackathons(&profile, catalog)
            .into_iter()
            .cloned()
            .collect(),
        internships: matching::recommended_internships(&profile, catalog)
            .into_iter()
            .cloned()
            .collect(),
    }))
}
