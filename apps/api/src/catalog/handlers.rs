use axum::extract::State;
use axum::Json;

use crate::catalog::Catalog;
use crate::state::AppState;

/// GET /api/v1/catalog
/// Returns the full static reference dataset for form rendering.
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json((*state.catalog).clone())
}
