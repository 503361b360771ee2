//! Personalised plans: calorie and macro targets, suggested workouts and
//! focus habits derived from the profile. Regenerating is a premium action.

pub mod generator;
pub mod handlers;
pub mod repo;
mod repo_types;

pub use generator::{generate, PlanContent};
pub use repo_types::PersonalizedPlan;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
