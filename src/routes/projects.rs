use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::models::Project;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// `?featured=true` (the exact literal) narrows the list to featured
/// projects, keeping display order. A repeated key takes its first value;
/// any other value returns everything.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Project>>> {
    let mut projects = state.db.get_projects().await?;
    let featured = params
        .iter()
        .find(|(key, _)| key == "featured")
        .map(|(_, value)| value.as_str());
    if featured == Some("true") {
        projects.retain(|p| p.featured);
    }
    Ok(Json(projects))
}

#[cfg(test)]
mod tests {
    use crate::models::Project;

    fn project(id: i32, featured: bool) -> Project {
        Project {
            id,
            title: format!("project-{id}"),
            description: String::new(),
            tech_stack: Vec::new(),
            repo_link: String::new(),
            live_link: String::new(),
            featured,
            display_order: id,
        }
    }

    #[test]
    fn featured_filter_keeps_relative_order() {
        let mut projects = vec![
            project(1, true),
            project(2, false),
            project(3, true),
            project(4, false),
            project(5, true),
        ];

        projects.retain(|p| p.featured);

        let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
