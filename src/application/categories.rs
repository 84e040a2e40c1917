//! Read-only category listing.
//!
//! Categories are administered out of band (see the `seed` subcommand); the
//! API surface never mutates them.

use std::sync::Arc;

use thiserror::Error;

use crate::application::repos::{CategoriesRepo, RepoError};
use crate::domain::entities::CategoryRecord;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoriesRepo>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoriesRepo>) -> Self {
        Self { repo }
    }

    /// All categories, name-ascending.
    pub async fn list_all(&self) -> Result<Vec<CategoryRecord>, CategoryError> {
        self.repo.list_all().await.map_err(CategoryError::from)
    }
}
