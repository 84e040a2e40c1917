//! Default category set, installed by the `seed` subcommand.
//!
//! Categories are administered out of band; this is the only writer. The
//! insert is idempotent so re-running the command is safe.

use sqlx::postgres::PgPool;

use crate::application::repos::RepoError;

use super::map_sqlx_error;

pub const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Technology", "technology", "Latest in tech and innovation"),
    ("Design", "design", "UI/UX and visual design"),
    ("Development", "development", "Software development and coding"),
    ("Business", "business", "Business strategies and insights"),
    ("Lifestyle", "lifestyle", "Life, culture, and experiences"),
    ("Research", "research", "Research and analysis"),
    ("Tutorial", "tutorial", "Step-by-step guides"),
    ("News", "news", "Latest news and updates"),
];

/// Insert the default categories, skipping any that already exist.
/// Returns the number of rows actually inserted.
pub async fn install_default_categories(pool: &PgPool) -> Result<u64, RepoError> {
    let mut installed = 0;

    for (name, slug, description) in DEFAULT_CATEGORIES {
        let result = sqlx::query(
            "INSERT INTO categories (name, slug, description) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(slug)
        .bind(description)
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;

        installed += result.rows_affected();
    }

    Ok(installed)
}
