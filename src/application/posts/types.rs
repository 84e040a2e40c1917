use foglio_api_types::Patch;
use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::application::repos::RepoError;
use crate::domain::entities::{CategoryRecord, PostRecord};

pub(crate) const TITLE_MAX_CHARS: usize = 200;
pub(crate) const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("invalid `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("post not found")]
    NotFound,
    #[error("a post with slug `{slug}` already exists")]
    SlugConflict { slug: String },
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for PostError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => PostError::NotFound,
            other => PostError::Repo(other),
        }
    }
}

/// A post enriched with its resolved categories, name-ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithCategories {
    #[serde(flatten)]
    pub post: PostRecord,
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub published: bool,
    pub author_id: String,
    pub author: String,
    pub read_time: Option<i32>,
    pub category_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub description: Patch<String>,
    pub image_url: Patch<String>,
    pub read_time: Patch<i32>,
    pub category_ids: Option<Vec<Uuid>>,
}

fn validation(field: &'static str, message: impl Into<String>) -> PostError {
    PostError::Validation {
        field,
        message: message.into(),
    }
}

pub(crate) fn ensure_non_empty(value: &str, field: &'static str) -> Result<(), PostError> {
    if value.trim().is_empty() {
        return Err(validation(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), PostError> {
    ensure_non_empty(title, "title")?;
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(validation(
            "title",
            format!("must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_description(description: Option<&str>) -> Result<(), PostError> {
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(validation(
                "description",
                format!("must be at most {DESCRIPTION_MAX_CHARS} characters"),
            ));
        }
    }
    Ok(())
}

/// Validate an optional image URL, treating an empty string as absent.
///
/// Editors submit `""` when the field is left untouched; that normalizes to
/// no image rather than a validation failure.
pub(crate) fn normalize_image_url(image_url: Option<String>) -> Result<Option<String>, PostError> {
    let Some(raw) = image_url else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    Url::parse(&raw).map_err(|err| validation("image_url", err.to_string()))?;
    Ok(Some(raw))
}

/// Drop duplicate category ids while preserving first-seen order.
pub(crate) fn dedup_category_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::BTreeSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_must_be_within_bounds() {
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"x".repeat(TITLE_MAX_CHARS)).is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(TITLE_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        assert!(validate_title(&"ü".repeat(TITLE_MAX_CHARS)).is_ok());
    }

    #[test]
    fn description_limit_only_applies_when_present() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("short")).is_ok());
        assert!(validate_description(Some(&"x".repeat(DESCRIPTION_MAX_CHARS + 1))).is_err());
    }

    #[test]
    fn image_url_must_be_absolute() {
        assert_eq!(
            normalize_image_url(Some("https://example.com/a.png".into())).expect("valid"),
            Some("https://example.com/a.png".to_string())
        );
        assert!(normalize_image_url(Some("/relative/path.png".into())).is_err());
        assert!(normalize_image_url(Some("not a url".into())).is_err());
    }

    #[test]
    fn empty_image_url_normalizes_to_absent() {
        assert_eq!(normalize_image_url(Some(String::new())).expect("ok"), None);
        assert_eq!(normalize_image_url(None).expect("ok"), None);
    }

    #[test]
    fn category_ids_are_deduplicated_in_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(dedup_category_ids(vec![a, b, a, b, a]), vec![a, b]);
    }
}
