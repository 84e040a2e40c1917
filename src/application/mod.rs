//! Application services layer.

pub mod categories;
pub mod error;
pub mod posts;
pub mod repos;
