use axum::{extract::State, Json};

use crate::error::{ApiError, ApiResult};
use crate::models::Profile;
use crate::state::AppState;

/// GET /api/v1/profile
///
/// The profile table holds at most one row; an empty table is a 404,
/// not a server error.
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Json<Profile>> {
    let profile = state
        .db
        .get_profile()
        .await?
        .ok_or(ApiError::NotFound("Profile"))?;
    Ok(Json(profile))
}
