use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::entities::PostRecord;

pub(crate) const POST_COLUMNS: &str = "id, title, slug, description, content, image_url, \
     published, author_id, author, read_time, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub(crate) struct PostRow {
    pub(crate) id: Uuid,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) description: Option<String>,
    pub(crate) content: String,
    pub(crate) image_url: Option<String>,
    pub(crate) published: bool,
    pub(crate) author_id: String,
    pub(crate) author: String,
    pub(crate) read_time: Option<i32>,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
}

impl From<PostRow> for PostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            content: row.content,
            image_url: row.image_url,
            published: row.published,
            author_id: row.author_id,
            author: row.author,
            read_time: row.read_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
