use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::{
    catalog,
    dto::{
        ExerciseLogQuery, ExerciseLoggedResponse, ExerciseLogsResponse, ExerciseSearchQuery,
        ExerciseSearchResponse, LogExerciseRequest,
    },
    repo,
};
use crate::{
    auth::{SessionUser, UserQuery},
    dates,
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn search_routes() -> Router<AppState> {
    Router::new().route("/exercises/search", get(search))
}

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/user/log-exercise", post(log_exercise).get(list_exercise))
        .route("/user/log-exercise/:id", delete(delete_exercise))
}

#[instrument]
pub async fn search(Query(q): Query<ExerciseSearchQuery>) -> Json<ExerciseSearchResponse> {
    Json(catalog::search(
        q.q.as_deref().unwrap_or_default(),
        q.category.as_deref(),
    ))
}

#[instrument(skip(state, payload))]
pub async fn log_exercise(
    State(state): State<AppState>,
    session: SessionUser,
    AppJson(payload): AppJson<LogExerciseRequest>,
) -> AppResult<Json<ExerciseLoggedResponse>> {
    let entry = payload.validate()?;
    let user_id = session.resolve(payload.user_id, &state);
    let row = repo::insert(&state.db, user_id, &entry).await?;
    info!(
        user_id,
        entry_id = row.id,
        exercise = %row.exercise_name,
        minutes = row.duration_minutes,
        "exercise logged"
    );
    Ok(Json(ExerciseLoggedResponse {
        success: true,
        message: "Exercise logged successfully",
        data: row,
    }))
}

#[instrument(skip(state))]
pub async fn list_exercise(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<ExerciseLogQuery>,
) -> AppResult<Json<ExerciseLogsResponse>> {
    let date = dates::parse_param(q.date.as_deref())?;
    let user_id = session.resolve(q.user_id, &state);
    let logs = repo::list_for_user(&state.db, user_id, date).await?;
    Ok(Json(ExerciseLogsResponse { success: true, logs }))
}

#[instrument(skip(state))]
pub async fn delete_exercise(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<i32>,
    Query(q): Query<UserQuery>,
) -> AppResult<Json<Value>> {
    let user_id = session.resolve(q.user_id, &state);
    if !repo::delete(&state.db, user_id, id).await? {
        warn!(user_id, entry_id = id, "exercise entry not found");
        return Err(AppError::NotFound("Exercise entry not found".into()));
    }
    info!(user_id, entry_id = id, "exercise entry deleted");
    Ok(Json(json!({ "success": true, "message": "Exercise entry deleted" })))
}
