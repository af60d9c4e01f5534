//! Resource shapes exposed by the API.
//!
//! Plain-text columns that may be NULL in the store are coalesced to `""`
//! at the query layer, so they are `String` here. The one deliberate
//! exception is `Experience::end_date`, where null carries meaning
//! (the role is ongoing).

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// The singleton `profile` row.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub about_me: String,
    pub resume_url: String,
    /// Platform name → URL, stored as a JSONB object.
    pub social_links: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub role: String,
    pub start_date: NaiveDate,
    /// None means the role is ongoing.
    pub end_date: Option<NaiveDate>,
    pub location: String,
    /// Ordered bullet points, stored as a JSONB array.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Ordered technology names, stored as a JSONB array.
    pub tech_stack: Vec<String>,
    pub repo_link: String,
    pub live_link: String,
    pub featured: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub skill: String,
    pub description: String,
    pub icon_name: String,
    pub icon_color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub id: i32,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub credential_url: String,
    pub display_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_empty_links_as_object() {
        let profile = Profile {
            id: 1,
            name: "Ada".to_string(),
            title: String::new(),
            subtitle: String::new(),
            about_me: String::new(),
            resume_url: String::new(),
            social_links: HashMap::new(),
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["social_links"], serde_json::json!({}));
        assert_eq!(value["title"], serde_json::json!(""));
    }

    #[test]
    fn ongoing_experience_serializes_null_end_date() {
        let exp = Experience {
            id: 1,
            company: "Initech".to_string(),
            role: "Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            end_date: None,
            location: "Remote".to_string(),
            achievements: vec!["Shipped the thing".to_string()],
        };

        let value = serde_json::to_value(&exp).unwrap();
        assert!(value["end_date"].is_null());
        assert_eq!(value["start_date"], serde_json::json!("2023-04-01"));
    }
}
