//! Error types for portfolio-api.
//!
//! Repository failures carry the name of the resource they were fetching;
//! the HTTP mapping turns that into a fixed, generic client message while
//! the underlying error is only logged server-side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Singleton resource has no row. Distinct from a failed query.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("failed to query {resource}: {source}")]
    Query {
        resource: &'static str,
        source: sqlx::Error,
    },

    #[error("failed to decode {resource} column: {source}")]
    Decode {
        resource: &'static str,
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn query(resource: &'static str, source: sqlx::Error) -> Self {
        Self::Query { resource, source }
    }

    pub fn decode(resource: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { resource, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, format!("{resource} not found"))
            }
            ApiError::Query { resource, source } => {
                tracing::error!(resource = %resource, error = %source, "query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch {resource}"),
                )
            }
            ApiError::Decode { resource, source } => {
                tracing::error!(resource = %resource, error = %source, "column decode failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch {resource}"),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
