//! Route table for the portfolio API.

use axum::{routing::get, Router};

use crate::state::AppState;

pub mod certifications;
pub mod experience;
pub mod health;
pub mod profile;
pub mod projects;
pub mod skills;

/// The five fixed resource routes, all GET-only. Nested under `/api/v1`
/// by `build_router`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/experience", get(experience::list_experience))
        .route("/projects", get(projects::list_projects))
        .route("/skills", get(skills::list_skills))
        .route("/certifications", get(certifications::list_certifications))
}
