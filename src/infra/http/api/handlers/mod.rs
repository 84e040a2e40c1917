//! API handlers organized by resource type.
//!
//! Helper functions for error conversion are defined here and shared across
//! modules.

mod categories;
mod health;
mod posts;

pub use categories::*;
pub use health::*;
pub use posts::*;

// ----- Shared query structs -----

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    pub author_id: Option<String>,
    pub published_only: Option<bool>,
}

// ----- Shared error conversions -----

use axum::http::StatusCode;

use crate::application::categories::CategoryError;
use crate::application::posts::PostError;
use crate::application::repos::RepoError;

use super::error::{ApiError, codes};

pub(crate) fn repo_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::Duplicate { constraint } => ApiError::new(
            StatusCode::CONFLICT,
            codes::DUPLICATE,
            "Duplicate record",
            Some(constraint),
        ),
        RepoError::NotFound => ApiError::not_found("resource not found"),
        RepoError::InvalidInput { message } => ApiError::new(
            StatusCode::BAD_REQUEST,
            codes::INVALID_INPUT,
            "Invalid input",
            Some(message),
        ),
        RepoError::Integrity { message } => ApiError::new(
            StatusCode::CONFLICT,
            codes::INTEGRITY,
            "Integrity constraint violated",
            Some(message),
        ),
        RepoError::Timeout => ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            codes::DB_TIMEOUT,
            "Database timeout",
            None,
        ),
        RepoError::Persistence(msg) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::REPO,
            "Persistence error",
            Some(msg),
        ),
    }
}

pub(crate) fn post_to_api(err: PostError) -> ApiError {
    match err {
        PostError::Validation { field, message } => ApiError::new(
            StatusCode::BAD_REQUEST,
            codes::INVALID_INPUT,
            "Invalid post",
            Some(format!("{field}: {message}")),
        ),
        PostError::NotFound => ApiError::not_found("post not found"),
        PostError::SlugConflict { slug } => ApiError::new(
            StatusCode::CONFLICT,
            codes::DUPLICATE,
            "A post with this slug already exists",
            Some(slug),
        ),
        PostError::Repo(repo) => repo_to_api(repo),
    }
}

pub(crate) fn category_to_api(err: CategoryError) -> ApiError {
    match err {
        CategoryError::Repo(repo) => repo_to_api(repo),
    }
}
