use foglio_api_types::Patch;
use metrics::counter;
use uuid::Uuid;

use crate::application::repos::{CreatePostParams, RepoError, UpdatePostParams};
use crate::domain::entities::PostRecord;

use super::service::PostService;
use super::types::{
    CreatePostCommand, PostError, UpdatePostCommand, dedup_category_ids, ensure_non_empty,
    normalize_image_url, validate_description, validate_title,
};

impl PostService {
    /// Create a post and link its categories as one atomic unit.
    ///
    /// Field shape is validated before any storage access. The slug
    /// pre-check gives the common collision a clean error; the unique
    /// constraint remains the backstop for two concurrent creates racing
    /// past it, and a duplicate-key rejection from that race still surfaces
    /// as a conflict.
    pub async fn create_post(&self, command: CreatePostCommand) -> Result<PostRecord, PostError> {
        let CreatePostCommand {
            title,
            slug,
            content,
            description,
            image_url,
            published,
            author_id,
            author,
            read_time,
            category_ids,
        } = command;

        validate_title(&title)?;
        ensure_non_empty(&slug, "slug")?;
        ensure_non_empty(&content, "content")?;
        validate_description(description.as_deref())?;
        let image_url = normalize_image_url(image_url)?;

        if self.reader.find_by_slug(&slug).await?.is_some() {
            return Err(PostError::SlugConflict { slug });
        }

        let params = CreatePostParams {
            title,
            slug: slug.clone(),
            description,
            content,
            image_url,
            published,
            author_id,
            author,
            read_time,
            category_ids: dedup_category_ids(category_ids),
        };

        let post = match self.writer.create_post(params).await {
            Ok(post) => post,
            Err(RepoError::Duplicate { .. }) => return Err(PostError::SlugConflict { slug }),
            Err(err) => return Err(PostError::from(err)),
        };

        counter!("foglio_posts_created_total").increment(1);
        Ok(post)
    }

    /// Apply a partial update, refreshing `updated_at` and replacing the
    /// category link set when `category_ids` is present (even empty).
    pub async fn update_post(&self, command: UpdatePostCommand) -> Result<PostRecord, PostError> {
        if let Some(title) = command.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(slug) = command.slug.as_deref() {
            ensure_non_empty(slug, "slug")?;
        }
        if let Some(content) = command.content.as_deref() {
            ensure_non_empty(content, "content")?;
        }
        if let Patch::Set(description) = &command.description {
            validate_description(Some(description.as_str()))?;
        }

        let image_url = match command.image_url {
            Patch::Set(raw) => match normalize_image_url(Some(raw))? {
                Some(url) => Patch::Set(url),
                None => Patch::Clear,
            },
            other => other,
        };

        let requested_slug = command.slug.clone();
        let params = UpdatePostParams {
            id: command.id,
            title: command.title,
            slug: command.slug,
            content: command.content,
            published: command.published,
            description: command.description,
            image_url,
            read_time: command.read_time,
            category_ids: command.category_ids.map(dedup_category_ids),
        };

        let post = match self.writer.update_post(params).await {
            Ok(post) => post,
            Err(RepoError::Duplicate { .. }) => {
                return Err(PostError::SlugConflict {
                    slug: requested_slug.unwrap_or_default(),
                });
            }
            Err(err) => return Err(PostError::from(err)),
        };

        counter!("foglio_posts_updated_total").increment(1);
        Ok(post)
    }

    /// Delete a post and its category links, returning the prior row state.
    pub async fn delete_post(&self, id: Uuid) -> Result<PostRecord, PostError> {
        let post = self.writer.delete_post(id).await?;
        counter!("foglio_posts_deleted_total").increment(1);
        Ok(post)
    }
}
