//! Shared request and response types for the Foglio publishing API.
//!
//! Everything that crosses the `/api/v1` boundary is defined here so that
//! API consumers can depend on the wire contract without pulling in the
//! server. Timestamps serialize as RFC 3339; identifiers are UUIDs.

mod patch;

pub use patch::Patch;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

fn default_author() -> String {
    "Admin".to_string()
}

/// A category as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A post row as returned by the API, without category resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub author_id: String,
    pub author: String,
    pub read_time: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A post together with its resolved categories, name-ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostWithCategoriesResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub categories: Vec<CategoryResponse>,
}

/// Input for `POST /api/v1/posts`.
///
/// The slug is supplied by the caller (see the slug derivation helper in the
/// server crate); the service rejects collisions rather than inventing a
/// replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreateRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub author_id: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub read_time: Option<i32>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

/// Input for `PATCH /api/v1/posts/{id}`.
///
/// Omitted fields are left unchanged. The nullable columns use [`Patch`] so
/// an explicit `null` clears them instead of being mistaken for an omission.
/// `category_ids`, when present (even empty), replaces the full link set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub image_url: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub read_time: Patch<i32>,
    #[serde(default)]
    pub category_ids: Option<Vec<Uuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults() {
        let request: PostCreateRequest = serde_json::from_str(
            r#"{
                "title": "Hello World",
                "slug": "hello-world",
                "content": "body",
                "author_id": "user-1"
            }"#,
        )
        .expect("deserialize");

        assert!(!request.published);
        assert_eq!(request.author, "Admin");
        assert!(request.category_ids.is_empty());
        assert_eq!(request.description, None);
    }

    #[test]
    fn update_request_distinguishes_null_from_absent() {
        let request: PostUpdateRequest =
            serde_json::from_str(r#"{"title": "New", "image_url": null}"#).expect("deserialize");

        assert_eq!(request.title.as_deref(), Some("New"));
        assert_eq!(request.description, Patch::Keep);
        assert_eq!(request.image_url, Patch::Clear);
        assert_eq!(request.category_ids, None);
    }

    #[test]
    fn empty_category_list_is_distinct_from_omission() {
        let request: PostUpdateRequest =
            serde_json::from_str(r#"{"category_ids": []}"#).expect("deserialize");
        assert_eq!(request.category_ids, Some(Vec::new()));
    }
}
