pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::ApiState;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch},
};

use crate::infra::http::middleware::{log_responses, set_request_context};

pub fn build_api_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/categories", get(handlers::list_categories))
        .route(
            "/api/v1/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route("/api/v1/posts/slug/{slug}", get(handlers::get_post))
        .route(
            "/api/v1/posts/author/{author_id}",
            get(handlers::list_posts_by_author),
        )
        .route(
            "/api/v1/posts/{id}",
            patch(handlers::update_post).delete(handlers::delete_post),
        )
        .layer(axum_middleware::from_fn(log_responses))
        .layer(axum_middleware::from_fn(set_request_context))
        .with_state(state)
}
