pub mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
mod services;

pub use repo_types::DailyData;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
