pub mod aggregate;
pub mod handlers;

pub use aggregate::{
    exercise_totals, food_totals, goals_for, summarize, DailySummary, ExerciseTotals, Nutrients,
};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
