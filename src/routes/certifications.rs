use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::models::Certification;
use crate::state::AppState;

/// GET /api/v1/certifications
pub async fn list_certifications(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Certification>>> {
    let certifications = state.db.get_certifications().await?;
    Ok(Json(certifications))
}
