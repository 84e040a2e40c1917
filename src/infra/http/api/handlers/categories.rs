//! Categories handlers

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use super::category_to_api;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::{CategoryResponse, category_response};
use crate::infra::http::api::state::ApiState;

pub async fn list_categories(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .categories
        .list_all()
        .await
        .map_err(category_to_api)?;

    let body: Vec<CategoryResponse> = categories.into_iter().map(category_response).collect();
    Ok(Json(body))
}
