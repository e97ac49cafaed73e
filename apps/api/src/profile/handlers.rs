use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::record::{ImprovementStatus, ProfileRecord};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

#[derive(Deserialize, Default)]
pub struct EstablishRequest {
    /// A previously issued session id; omitted on first visit.
    pub session_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub profile: ProfileRecord,
    /// Set when hydration fell back to a default record after a failed load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Every mutation responds with the updated record and a save notice. A
/// failed write-through degrades durability, never the mutation itself.
#[derive(Serialize)]
pub struct ProfileUpdateResponse {
    pub profile: ProfileRecord,
    pub notice: String,
}

/// Persists the record after a mutation. The in-memory record stays the
/// source of truth, so a save failure becomes a notice rather than an error.
async fn write_through(state: &AppState, session_id: Uuid, record: &ProfileRecord) -> String {
    match state.store.save(session_id, record).await {
        Ok(()) => "Profile saved successfully!".to_string(),
        Err(e) => {
            warn!("Error saving profile for session {session_id}: {e}");
            format!("Error saving profile: {e}")
        }
    }
}

/// POST /api/v1/sessions
/// Establishes identity (anonymous by default) and hydrates the profile from
/// the store, stored fields overlaying the default record.
pub async fn handle_establish_session(
    State(state): State<AppState>,
    body: Option<Json<EstablishRequest>>,
) -> Result<Json<SessionResponse>, AppError> {
    let session_id = match body.and_then(|Json(req)| req.session_id) {
        Some(id) => id,
        None => state.identity.establish().await?,
    };
    let (profile, notice) = state.sessions.hydrate(session_id, state.store.as_ref()).await;
    Ok(Json(SessionResponse {
        session_id,
        profile,
        notice,
    }))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ProfileRecord>, AppError> {
    Ok(Json(state.sessions.get(params.session_id).await?))
}

#[derive(Deserialize)]
pub struct SkillToggleRequest {
    pub session_id: Uuid,
    pub skill: String,
}

/// POST /api/v1/profile/skills/toggle
pub async fn handle_toggle_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillToggleRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.toggle_skill(&req.skill);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

#[derive(Deserialize)]
pub struct RoleToggleRequest {
    pub session_id: Uuid,
    pub role_id: String,
}

/// POST /api/v1/profile/roles/toggle
pub async fn handle_toggle_target_role(
    State(state): State<AppState>,
    Json(req): Json<RoleToggleRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.toggle_target_role(&req.role_id);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

#[derive(Deserialize)]
pub struct ProjectToggleRequest {
    pub session_id: Uuid,
    pub project_id: String,
}

/// POST /api/v1/profile/projects/toggle
pub async fn handle_toggle_completed_project(
    State(state): State<AppState>,
    Json(req): Json<ProjectToggleRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.toggle_completed_project(&req.project_id);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

#[derive(Deserialize)]
pub struct CompanyRequest {
    pub session_id: Uuid,
    pub company: String,
}

/// POST /api/v1/profile/companies
pub async fn handle_add_company(
    State(state): State<AppState>,
    Json(req): Json<CompanyRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.add_target_company(&req.company)
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

/// DELETE /api/v1/profile/companies
pub async fn handle_remove_company(
    State(state): State<AppState>,
    Json(req): Json<CompanyRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.remove_target_company(&req.company);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

#[derive(Deserialize)]
pub struct ScheduleAddRequest {
    pub session_id: Uuid,
    #[serde(default)]
    pub subject: String,
    pub exam_date: Option<NaiveDate>,
}

/// POST /api/v1/profile/schedule
pub async fn handle_add_schedule_entry(
    State(state): State<AppState>,
    Json(req): Json<ScheduleAddRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.add_schedule_entry(&req.subject, req.exam_date)?;
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

/// DELETE /api/v1/profile/schedule/:id
pub async fn handle_remove_schedule_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(params.session_id, |record| {
            record.remove_schedule_entry(id);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, params.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

#[derive(Deserialize)]
pub struct ImprovementAddRequest {
    pub session_id: Uuid,
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub status: ImprovementStatus,
}

/// POST /api/v1/profile/improvements
pub async fn handle_add_improvement(
    State(state): State<AppState>,
    Json(req): Json<ImprovementAddRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.add_improvement(&req.skill, &req.resource, req.status)?;
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

#[derive(Deserialize)]
pub struct ImprovementStatusRequest {
    pub session_id: Uuid,
    pub status: ImprovementStatus,
}

/// PATCH /api/v1/profile/improvements/:id
pub async fn handle_update_improvement_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ImprovementStatusRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(req.session_id, |record| {
            record.update_improvement_status(id, req.status);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, req.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

/// DELETE /api/v1/profile/improvements/:id
pub async fn handle_remove_improvement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let profile = state
        .sessions
        .update(params.session_id, |record| {
            record.remove_improvement(id);
            Ok(())
        })
        .await?;
    let notice = write_through(&state, params.session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}

/// Scalar field edits. Absent fields are left untouched; present fields
/// replace the stored value (an empty string clears it).
#[derive(Deserialize)]
pub struct ProfileFieldsRequest {
    pub session_id: Uuid,
    pub branch: Option<String>,
    pub github_profile: Option<String>,
    pub leetcode_profile: Option<String>,
    pub codechef_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub vercel_profile: Option<String>,
    pub netlify_profile: Option<String>,
    pub resume_url: Option<String>,
}

/// PATCH /api/v1/profile
pub async fn handle_update_fields(
    State(state): State<AppState>,
    Json(req): Json<ProfileFieldsRequest>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let session_id = req.session_id;
    let catalog = state.catalog.clone();
    let profile = state
        .sessions
        .update(session_id, move |record| {
            if let Some(branch) = req.branch {
                if !branch.is_empty() && !catalog.is_known_branch(&branch) {
                    return Err(AppError::Validation(format!("Unknown branch '{branch}'.")));
                }
                record.branch = branch;
            }
            if let Some(url) = req.github_profile {
                record.github_profile = url;
            }
            if let Some(url) = req.leetcode_profile {
                record.leetcode_profile = url;
            }
            if let Some(url) = req.codechef_profile {
                record.codechef_profile = url;
            }
            if let Some(url) = req.linkedin_profile {
                record.linkedin_profile = url;
            }
            if let Some(url) = req.vercel_profile {
                record.vercel_profile = url;
            }
            if let Some(url) = req.netlify_profile {
                record.netlify_profile = url;
            }
            if let Some(url) = req.resume_url {
                record.resume_url = url;
            }
            Ok(())
        })
        .await?;
    let notice = write_through(&state, session_id, &profile).await;
    Ok(Json(ProfileUpdateResponse { profile, notice }))
}
