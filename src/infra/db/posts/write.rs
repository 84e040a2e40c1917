use async_trait::async_trait;
use foglio_api_types::Patch;
use sqlx::{Postgres, QueryBuilder, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{
    CreatePostParams, PostsWriteRepo, RepoError, UpdatePostParams,
};
use crate::domain::entities::PostRecord;
use crate::infra::db::{PostgresRepositories, map_sqlx_error};

use super::types::{POST_COLUMNS, PostRow};

async fn insert_links(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
    category_ids: &[Uuid],
) -> Result<(), RepoError> {
    if category_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO post_categories (post_id, category_id) \
         SELECT $1, id FROM UNNEST($2::uuid[]) AS id",
    )
    .bind(post_id)
    .bind(category_ids)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

#[async_trait]
impl PostsWriteRepo for PostgresRepositories {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        let CreatePostParams {
            title,
            slug,
            description,
            content,
            image_url,
            published,
            author_id,
            author,
            read_time,
            category_ids,
        } = params;

        let mut tx = self.begin().await.map_err(map_sqlx_error)?;

        let id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        let sql = format!(
            "INSERT INTO posts (id, title, slug, description, content, image_url, \
             published, author_id, author, read_time, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11) \
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .bind(title)
            .bind(slug)
            .bind(description)
            .bind(content)
            .bind(image_url)
            .bind(published)
            .bind(author_id)
            .bind(author)
            .bind(read_time)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        insert_links(&mut tx, row.id, &category_ids).await?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        let UpdatePostParams {
            id,
            title,
            slug,
            content,
            published,
            description,
            image_url,
            read_time,
            category_ids,
        } = params;

        let mut tx = self.begin().await.map_err(map_sqlx_error)?;

        let now = OffsetDateTime::now_utc();
        let mut qb = QueryBuilder::new("UPDATE posts SET updated_at = ");
        qb.push_bind(now);

        if let Some(title) = title {
            qb.push(", title = ");
            qb.push_bind(title);
        }
        if let Some(slug) = slug {
            qb.push(", slug = ");
            qb.push_bind(slug);
        }
        if let Some(content) = content {
            qb.push(", content = ");
            qb.push_bind(content);
        }
        if let Some(published) = published {
            qb.push(", published = ");
            qb.push_bind(published);
        }
        match description {
            Patch::Keep => {}
            Patch::Clear => {
                qb.push(", description = NULL");
            }
            Patch::Set(value) => {
                qb.push(", description = ");
                qb.push_bind(value);
            }
        }
        match image_url {
            Patch::Keep => {}
            Patch::Clear => {
                qb.push(", image_url = NULL");
            }
            Patch::Set(value) => {
                qb.push(", image_url = ");
                qb.push_bind(value);
            }
        }
        match read_time {
            Patch::Keep => {}
            Patch::Clear => {
                qb.push(", read_time = NULL");
            }
            Patch::Set(value) => {
                qb.push(", read_time = ");
                qb.push_bind(value);
            }
        }

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {POST_COLUMNS}"));

        let row = qb
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepoError::NotFound)?;

        if let Some(category_ids) = category_ids {
            sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

            insert_links(&mut tx, id, &category_ids).await?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }

    async fn delete_post(&self, id: Uuid) -> Result<PostRecord, RepoError> {
        let mut tx = self.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let sql = format!("DELETE FROM posts WHERE id = $1 RETURNING {POST_COLUMNS}");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepoError::NotFound)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }
}
