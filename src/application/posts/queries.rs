use uuid::Uuid;

use crate::application::repos::PostListFilter;
use crate::domain::entities::PostRecord;

use super::service::PostService;
use super::types::{PostError, PostWithCategories};

impl PostService {
    /// List posts newest-first, each enriched with its resolved categories.
    ///
    /// Backs both the public feed (`published_only = true`) and the author
    /// dashboard (`published_only = false` with the author's own id).
    pub async fn list_posts(
        &self,
        filter: PostListFilter,
    ) -> Result<Vec<PostWithCategories>, PostError> {
        let posts = self.reader.list_posts(&filter).await?;

        let ids: Vec<Uuid> = posts.iter().map(|post| post.id).collect();
        let mut categories = self.categories.list_for_posts(&ids).await?;

        Ok(posts
            .into_iter()
            .map(|post| {
                let categories = categories.remove(&post.id).unwrap_or_default();
                PostWithCategories { post, categories }
            })
            .collect())
    }

    /// Load a single post by slug with categories resolved.
    ///
    /// Drafts resolve too; whether to show unpublished content is the
    /// caller's decision.
    pub async fn get_by_slug(&self, slug: &str) -> Result<PostWithCategories, PostError> {
        let post = self
            .reader
            .find_by_slug(slug)
            .await?
            .ok_or(PostError::NotFound)?;

        let categories = self.categories.list_for_post(post.id).await?;
        Ok(PostWithCategories { post, categories })
    }

    /// List an author's posts newest-first, without category resolution.
    pub async fn list_by_author(&self, author_id: &str) -> Result<Vec<PostRecord>, PostError> {
        self.reader
            .list_by_author(author_id)
            .await
            .map_err(PostError::from)
    }
}
