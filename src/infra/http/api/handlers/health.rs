//! Operational health probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::infra::http::api::error::{ApiError, codes};
use crate::infra::http::api::state::ApiState;

/// Round-trips the database before reporting healthy.
pub async fn health(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    state.db.health_check().await.map_err(|err| {
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            codes::DB_TIMEOUT,
            "Database unreachable",
            Some(err.to_string()),
        )
    })?;

    Ok((StatusCode::OK, "ok"))
}
