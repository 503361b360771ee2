//! Static showcase content and the liveness probe.

pub mod handlers;
mod library;

pub use library::{Recipe, Workout, WorkoutStep};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
