pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::coaching::handlers as coaching;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(profile::handle_establish_session))
        // Catalog (static reference data)
        .route(
            "/api/v1/catalog",
            get(crate::catalog::handlers::handle_get_catalog),
        )
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).patch(profile::handle_update_fields),
        )
        .route(
            "/api/v1/profile/skills/toggle",
            post(profile::handle_toggle_skill),
        )
        .route(
            "/api/v1/profile/roles/toggle",
            post(profile::handle_toggle_target_role),
        )
        .route(
            "/api/v1/profile/projects/toggle",
            post(profile::handle_toggle_completed_project),
        )
        .route(
            "/api/v1/profile/companies",
            post(profile::handle_add_company).delete(profile::handle_remove_company),
        )
        .route(
            "/api/v1/profile/schedule",
            post(profile::handle_add_schedule_entry),
        )
        .route(
            "/api/v1/profile/schedule/:id",
            delete(profile::handle_remove_schedule_entry),
        )
        .route(
            "/api/v1/profile/improvements",
            post(profile::handle_add_improvement),
        )
        .route(
            "/api/v1/profile/improvements/:id",
            patch(profile::handle_update_improvement_status)
                .delete(profile::handle_remove_improvement),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(matching::handle_get_recommendations),
        )
        // Coaching
        .route(
            "/api/v1/coaching/interview/question",
            post(coaching::handle_interview_question),
        )
        .route(
            "/api/v1/coaching/interview/answer",
            post(coaching::handle_interview_answer),
        )
        .route(
            "/api/v1/coaching/project-idea",
            post(coaching::handle_project_idea),
        )
        .route(
            "/api/v1/coaching/study-plan",
            get(coaching::handle_study_plan),
        )
        .route(
            "/api/v1/coaching/company-prep",
            get(coaching::handle_company_prep),
        )
        .route(
            "/api/v1/coaching/next-steps",
            get(coaching::handle_next_steps),
        )
        .route(
            "/api/v1/coaching/resume-analysis",
            get(coaching::handle_resume_analysis),
        )
        .with_state(state)
}
