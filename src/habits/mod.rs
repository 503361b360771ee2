//! Daily habits. Habits are not stored: the default set is rebuilt from the
//! day's snapshot on every request. Toggles are returned to the client only.

pub mod handlers;
mod model;

pub use model::{default_habits, find_habit, Habit};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
