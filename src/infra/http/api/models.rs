//! Conversions between wire contracts and service types.

use uuid::Uuid;

pub use foglio_api_types::{
    CategoryResponse, Patch, PostCreateRequest, PostResponse, PostUpdateRequest,
    PostWithCategoriesResponse,
};

use crate::application::posts::{CreatePostCommand, PostWithCategories, UpdatePostCommand};
use crate::domain::entities::{CategoryRecord, PostRecord};

pub(crate) fn post_response(record: PostRecord) -> PostResponse {
    PostResponse {
        id: record.id,
        title: record.title,
        slug: record.slug,
        description: record.description,
        content: record.content,
        image_url: record.image_url,
        published: record.published,
        author_id: record.author_id,
        author: record.author,
        read_time: record.read_time,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

pub(crate) fn category_response(record: CategoryRecord) -> CategoryResponse {
    CategoryResponse {
        id: record.id,
        name: record.name,
        slug: record.slug,
        description: record.description,
        created_at: record.created_at,
    }
}

pub(crate) fn post_with_categories_response(
    value: PostWithCategories,
) -> PostWithCategoriesResponse {
    PostWithCategoriesResponse {
        post: post_response(value.post),
        categories: value
            .categories
            .into_iter()
            .map(category_response)
            .collect(),
    }
}

pub(crate) fn create_command(request: PostCreateRequest) -> CreatePostCommand {
    CreatePostCommand {
        title: request.title,
        slug: request.slug,
        content: request.content,
        description: request.description,
        image_url: request.image_url,
        published: request.published,
        author_id: request.author_id,
        author: request.author,
        read_time: request.read_time,
        category_ids: request.category_ids,
    }
}

pub(crate) fn update_command(id: Uuid, request: PostUpdateRequest) -> UpdatePostCommand {
    UpdatePostCommand {
        id,
        title: request.title,
        slug: request.slug,
        content: request.content,
        published: request.published,
        description: request.description,
        image_url: request.image_url,
        read_time: request.read_time,
        category_ids: request.category_ids,
    }
}
