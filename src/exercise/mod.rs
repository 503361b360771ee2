pub mod catalog;
pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
mod services;

use crate::state::AppState;
use axum::Router;

pub use repo_types::{ExerciseEntry, ExerciseType};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::search_routes())
        .merge(handlers::log_routes())
}
