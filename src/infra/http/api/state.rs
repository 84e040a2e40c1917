use std::sync::Arc;

use crate::application::categories::CategoryService;
use crate::application::posts::PostService;
use crate::infra::db::PostgresRepositories;

#[derive(Clone)]
pub struct ApiState {
    pub posts: Arc<PostService>,
    pub categories: Arc<CategoryService>,
    pub db: Arc<PostgresRepositories>,
}
