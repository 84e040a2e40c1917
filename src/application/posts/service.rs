use std::sync::Arc;

use crate::application::repos::{CategoriesRepo, PostsRepo, PostsWriteRepo};

/// Post lifecycle service: stateless between calls, all shared state lives
/// in the persistence layer behind the repository traits.
#[derive(Clone)]
pub struct PostService {
    pub(crate) reader: Arc<dyn PostsRepo>,
    pub(crate) writer: Arc<dyn PostsWriteRepo>,
    pub(crate) categories: Arc<dyn CategoriesRepo>,
}

impl PostService {
    pub fn new(
        reader: Arc<dyn PostsRepo>,
        writer: Arc<dyn PostsWriteRepo>,
        categories: Arc<dyn CategoriesRepo>,
    ) -> Self {
        Self {
            reader,
            writer,
            categories,
        }
    }
}
