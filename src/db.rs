//! Postgres repository: one fixed read query per resource.
//!
//! Null plain-text columns are coalesced to `''` in SQL so the models never
//! carry an optional string (end_date excepted, where null means ongoing).
//! JSONB columns are selected as text and decoded here; absent or empty
//! content decodes to the container's default value, never an error.

use serde::de::DeserializeOwned;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::error::{ApiError, ApiResult};
use crate::models::{Certification, Experience, Profile, Project, Skill};

/// Read-only data access over the shared connection pool.
#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the singleton profile row. `Ok(None)` when the table is empty,
    /// which is distinct from a failed query.
    pub async fn get_profile(&self) -> ApiResult<Option<Profile>> {
        let row = sqlx::query(
            r#"
            SELECT id, name,
                   COALESCE(title, '') AS title,
                   COALESCE(subtitle, '') AS subtitle,
                   COALESCE(about_me, '') AS about_me,
                   COALESCE(resume_url, '') AS resume_url,
                   social_links::text AS social_links
            FROM profile
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::query("profile", e))?;

        row.as_ref().map(profile_from_row).transpose()
    }

    /// All experience rows, most recent role first.
    pub async fn get_experience(&self) -> ApiResult<Vec<Experience>> {
        let rows = sqlx::query(
            r#"
            SELECT id, company, role, start_date, end_date,
                   COALESCE(location, '') AS location,
                   achievements::text AS achievements
            FROM experience
            ORDER BY start_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::query("experience", e))?;

        rows.iter().map(experience_from_row).collect()
    }

    /// All projects in display order.
    pub async fn get_projects(&self) -> ApiResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title,
                   COALESCE(description, '') AS description,
                   tech_stack::text AS tech_stack,
                   COALESCE(repo_link, '') AS repo_link,
                   COALESCE(live_link, '') AS live_link,
                   featured, display_order
            FROM projects
            ORDER BY display_order ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::query("projects", e))?;

        rows.iter().map(project_from_row).collect()
    }

    /// All skills grouped by category, stable within a category by id.
    pub async fn get_skills(&self) -> ApiResult<Vec<Skill>> {
        let rows = sqlx::query(
            r#"
            SELECT id, category, skill, description, icon_name, icon_color
            FROM skills
            ORDER BY category ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::query("skills", e))?;

        rows.iter().map(skill_from_row).collect()
    }

    /// All certifications in display order, newest first within a slot.
    pub async fn get_certifications(&self) -> ApiResult<Vec<Certification>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, issuer, issue_date,
                   COALESCE(credential_url, '') AS credential_url,
                   display_order
            FROM certifications
            ORDER BY display_order ASC, issue_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::query("certifications", e))?;

        rows.iter().map(certification_from_row).collect()
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn profile_from_row(row: &PgRow) -> ApiResult<Profile> {
    const RESOURCE: &str = "profile";
    let links: Option<String> = col(row, "social_links", RESOURCE)?;
    Ok(Profile {
        id: col(row, "id", RESOURCE)?,
        name: col(row, "name", RESOURCE)?,
        title: col(row, "title", RESOURCE)?,
        subtitle: col(row, "subtitle", RESOURCE)?,
        about_me: col(row, "about_me", RESOURCE)?,
        resume_url: col(row, "resume_url", RESOURCE)?,
        social_links: decode_structured(links, RESOURCE)?,
    })
}

fn experience_from_row(row: &PgRow) -> ApiResult<Experience> {
    const RESOURCE: &str = "experience";
    let achievements: Option<String> = col(row, "achievements", RESOURCE)?;
    Ok(Experience {
        id: col(row, "id", RESOURCE)?,
        company: col(row, "company", RESOURCE)?,
        role: col(row, "role", RESOURCE)?,
        start_date: col(row, "start_date", RESOURCE)?,
        end_date: col(row, "end_date", RESOURCE)?,
        location: col(row, "location", RESOURCE)?,
        achievements: decode_structured(achievements, RESOURCE)?,
    })
}

fn project_from_row(row: &PgRow) -> ApiResult<Project> {
    const RESOURCE: &str = "projects";
    let tech_stack: Option<String> = col(row, "tech_stack", RESOURCE)?;
    Ok(Project {
        id: col(row, "id", RESOURCE)?,
        title: col(row, "title", RESOURCE)?,
        description: col(row, "description", RESOURCE)?,
        tech_stack: decode_structured(tech_stack, RESOURCE)?,
        repo_link: col(row, "repo_link", RESOURCE)?,
        live_link: col(row, "live_link", RESOURCE)?,
        featured: col(row, "featured", RESOURCE)?,
        display_order: col(row, "display_order", RESOURCE)?,
    })
}

fn skill_from_row(row: &PgRow) -> ApiResult<Skill> {
    const RESOURCE: &str = "skills";
    Ok(Skill {
        id: col(row, "id", RESOURCE)?,
        category: col(row, "category", RESOURCE)?,
        skill: col(row, "skill", RESOURCE)?,
        description: col(row, "description", RESOURCE)?,
        icon_name: col(row, "icon_name", RESOURCE)?,
        icon_color: col(row, "icon_color", RESOURCE)?,
    })
}

fn certification_from_row(row: &PgRow) -> ApiResult<Certification> {
    const RESOURCE: &str = "certifications";
    Ok(Certification {
        id: col(row, "id", RESOURCE)?,
        name: col(row, "name", RESOURCE)?,
        issuer: col(row, "issuer", RESOURCE)?,
        issue_date: col(row, "issue_date", RESOURCE)?,
        credential_url: col(row, "credential_url", RESOURCE)?,
        display_order: col(row, "display_order", RESOURCE)?,
    })
}

fn col<'r, T>(row: &'r PgRow, name: &str, resource: &'static str) -> ApiResult<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| ApiError::query(resource, e))
}

/// Decode a JSONB column fetched as text. SQL NULL, empty text, and JSON
/// `null` all collapse to the container's default value.
fn decode_structured<T>(raw: Option<String>, resource: &'static str) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    match raw {
        Some(text) if !text.is_empty() => serde_json::from_str::<Option<T>>(&text)
            .map(Option::unwrap_or_default)
            .map_err(|e| ApiError::decode(resource, e)),
        _ => Ok(T::default()),
    }
}
