use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{CategoriesRepo, RepoError};
use crate::domain::entities::CategoryRecord;

use super::PostgresRepositories;
use super::map_sqlx_error;

const CATEGORY_COLUMNS: &str = "id, name, slug, description, created_at";

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: OffsetDateTime,
}

impl From<CategoryRow> for CategoryRecord {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostCategoryRow {
    post_id: Uuid,
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: OffsetDateTime,
}

#[async_trait]
impl CategoriesRepo for PostgresRepositories {
    async fn list_all(&self) -> Result<Vec<CategoryRecord>, RepoError> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name ASC");
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CategoryRecord::from).collect())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CategoryRecord>, RepoError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, c.name, c.slug, c.description, c.created_at \
             FROM categories c \
             INNER JOIN post_categories pc ON pc.category_id = c.id \
             WHERE pc.post_id = $1 \
             ORDER BY c.name ASC",
        )
        .bind(post_id)
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CategoryRecord::from).collect())
    }

    async fn list_for_posts(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CategoryRecord>>, RepoError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostCategoryRow>(
            "SELECT pc.post_id, c.id, c.name, c.slug, c.description, c.created_at \
             FROM categories c \
             INNER JOIN post_categories pc ON pc.category_id = c.id \
             WHERE pc.post_id = ANY($1) \
             ORDER BY c.name ASC",
        )
        .bind(post_ids)
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        let mut grouped: HashMap<Uuid, Vec<CategoryRecord>> = HashMap::new();
        for row in rows {
            grouped.entry(row.post_id).or_default().push(CategoryRecord {
                id: row.id,
                name: row.name,
                slug: row.slug,
                description: row.description,
                created_at: row.created_at,
            });
        }

        Ok(grouped)
    }
}
