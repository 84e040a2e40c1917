//! Posts handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::repos::PostListFilter;

use super::{PostListQuery, post_to_api};
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::{
    PostCreateRequest, PostResponse, PostUpdateRequest, PostWithCategoriesResponse,
    create_command, post_response, post_with_categories_response, update_command,
};
use crate::infra::http::api::state::ApiState;

pub async fn list_posts(
    State(state): State<ApiState>,
    Query(query): Query<PostListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = PostListFilter {
        author_id: query.author_id,
        published_only: query.published_only.unwrap_or(true),
    };

    let posts = state
        .posts
        .list_posts(filter)
        .await
        .map_err(post_to_api)?;

    let body: Vec<PostWithCategoriesResponse> = posts
        .into_iter()
        .map(post_with_categories_response)
        .collect();

    Ok(Json(body))
}

pub async fn get_post(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .posts
        .get_by_slug(&slug)
        .await
        .map_err(post_to_api)?;

    Ok(Json(post_with_categories_response(post)))
}

pub async fn list_posts_by_author(
    State(state): State<ApiState>,
    Path(author_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let posts = state
        .posts
        .list_by_author(&author_id)
        .await
        .map_err(post_to_api)?;

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(Json(body))
}

pub async fn create_post(
    State(state): State<ApiState>,
    Json(payload): Json<PostCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .posts
        .create_post(create_command(payload))
        .await
        .map_err(post_to_api)?;

    Ok((StatusCode::CREATED, Json(post_response(post))))
}

pub async fn update_post(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PostUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .posts
        .update_post(update_command(id, payload))
        .await
        .map_err(post_to_api)?;

    Ok(Json(post_response(post)))
}

pub async fn delete_post(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.posts.delete_post(id).await.map_err(post_to_api)?;

    Ok(Json(post_response(post)))
}
