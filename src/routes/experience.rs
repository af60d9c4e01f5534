use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::models::Experience;
use crate::state::AppState;

/// GET /api/v1/experience
pub async fn list_experience(State(state): State<AppState>) -> ApiResult<Json<Vec<Experience>>> {
    let experience = state.db.get_experience().await?;
    Ok(Json(experience))
}
