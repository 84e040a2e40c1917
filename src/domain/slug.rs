//! Utilities for deriving URL-safe post slugs.
//!
//! Slug generation is a caller-side concern: the post service only rejects
//! collisions. These helpers give callers the canonical derivation — the
//! title lowercased, non-alphanumeric runs collapsed to single hyphens
//! (`slug` crate), trimmed, with a short random suffix so two posts titled
//! identically do not collide on their first attempt.

use slug::slugify;
use thiserror::Error;
use uuid::Uuid;

const SUFFIX_LEN: usize = 6;

/// Errors that can occur while deriving a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive the base slug from human-readable text, without a suffix.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Derive a collision-resistant slug by appending a short random suffix.
pub fn generate_slug(input: &str) -> Result<String, SlugError> {
    let base = derive_slug(input)?;
    Ok(format!("{base}-{}", random_suffix()))
}

fn random_suffix() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..SUFFIX_LEN].to_string()
}
