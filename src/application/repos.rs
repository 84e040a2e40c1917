//! Repository traits describing persistence adapters.

use std::collections::HashMap;

use async_trait::async_trait;
use foglio_api_types::Patch;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{CategoryRecord, PostRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Filter for the combined post listing. Both conditions AND-combine.
#[derive(Debug, Clone)]
pub struct PostListFilter {
    pub author_id: Option<String>,
    pub published_only: bool,
}

impl Default for PostListFilter {
    fn default() -> Self {
        Self {
            author_id: None,
            published_only: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub author_id: String,
    pub author: String,
    pub read_time: Option<i32>,
    pub category_ids: Vec<Uuid>,
}

/// Partial update applied against an existing post row.
///
/// `Option` fields are absent-or-replace; [`Patch`] fields additionally
/// distinguish an explicit clear. `category_ids` replaces the full link set
/// when present, even when empty.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
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

#[async_trait]
pub trait PostsRepo: Send + Sync {
    async fn list_posts(&self, filter: &PostListFilter) -> Result<Vec<PostRecord>, RepoError>;

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<PostRecord>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PostRecord>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    /// Insert the post row and its category links as one transactional unit.
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError>;

    /// Apply the provided fields, refresh `updated_at`, and replace category
    /// links when requested, all in one transaction. `NotFound` when no row
    /// matches the id.
    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError>;

    /// Remove the post's category links and the post row in one transaction,
    /// returning the deleted row's prior state. `NotFound` when missing.
    async fn delete_post(&self, id: Uuid) -> Result<PostRecord, RepoError>;
}

#[async_trait]
pub trait CategoriesRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CategoryRecord>, RepoError>;

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CategoryRecord>, RepoError>;

    /// Batched category resolution for a set of posts, keyed by post id.
    /// Posts without links are simply absent from the map.
    async fn list_for_posts(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CategoryRecord>>, RepoError>;
}
