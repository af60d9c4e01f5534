use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::models::Skill;
use crate::state::AppState;

/// GET /api/v1/skills
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Json<Vec<Skill>>> {
    let skills = state.db.get_skills().await?;
    Ok(Json(skills))
}
