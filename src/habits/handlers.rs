use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::model::{default_habits, find_habit, is_builtin, Habit};
use crate::{
    auth::SessionUser,
    daily::{dto::DailyQuery, repo},
    dates,
    error::{AppError, AppResult},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub success: bool,
    pub habits: Vec<Habit>,
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub success: bool,
    pub habit: Habit,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/habits", get(list_habits))
        .route("/user/habits/:id/toggle", post(toggle_habit))
}

#[instrument(skip(state))]
pub async fn list_habits(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<DailyQuery>,
) -> AppResult<Json<HabitsResponse>> {
    let date = dates::parse_param(q.date.as_deref())?.unwrap_or_else(dates::today);
    let user_id = session.resolve(q.user_id, &state);
    let daily = repo::find_or_zeroed(&state.db, user_id, date).await?;
    Ok(Json(HabitsResponse {
        success: true,
        habits: default_habits(&daily),
    }))
}

/// Flip one habit for the day and return it. Nothing is stored; the client
/// keeps the toggled state.
#[instrument(skip(state))]
pub async fn toggle_habit(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<String>,
    Query(q): Query<DailyQuery>,
) -> AppResult<Json<HabitResponse>> {
    if !is_builtin(&id) {
        warn!(habit = %id, "unknown habit");
        return Err(AppError::NotFound("Habit not found".into()));
    }
    let date = dates::parse_param(q.date.as_deref())?.unwrap_or_else(dates::today);
    let user_id = session.resolve(q.user_id, &state);
    let daily = repo::find_or_zeroed(&state.db, user_id, date).await?;

    let mut habit =
        find_habit(&id, &daily).ok_or_else(|| AppError::NotFound("Habit not found".into()))?;
    habit.toggle(date);
    info!(user_id, habit = %habit.id, completed = habit.completed_today, "habit toggled");
    Ok(Json(HabitResponse { success: true, habit }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn post(uri: &str) -> StatusCode {
        let req = Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap();
        routes().with_state(AppState::fake()).oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn toggling_unknown_habit_is_not_found() {
        assert_eq!(post("/user/habits/reading/toggle").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn toggle_rejects_bad_date_before_db() {
        assert_eq!(
            post("/user/habits/water/toggle?date=tomorrow").await,
            StatusCode::BAD_REQUEST
        );
    }
}
