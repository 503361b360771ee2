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
        FoodItem, FoodLogQuery, FoodLoggedResponse, FoodLogsResponse, LogFoodRequest,
        RecognizeResponse, SearchQuery,
    },
    repo,
    services::{parse_meal, search_foods},
};
use crate::{
    auth::{SessionUser, UserQuery},
    dates,
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods/search", get(search))
        .route("/foods/recognize", post(recognize))
}

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/user/log-food", post(log_food).get(list_food))
        .route("/user/log-food/:id", delete(delete_food))
}

#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> AppResult<Json<Vec<FoodItem>>> {
    let items = search_foods(&state.db, q.q.as_deref()).await?;
    info!(hits = items.len(), "food search");
    Ok(Json(items))
}

/// Body (an image upload in the clients) is never read.
#[instrument]
pub async fn recognize() -> Json<RecognizeResponse> {
    let food = catalog::recognize(&mut rand::thread_rng());
    info!(food = %food.name, "mock recognition");
    Json(RecognizeResponse { success: true, food })
}

#[instrument(skip(state, payload))]
pub async fn log_food(
    State(state): State<AppState>,
    session: SessionUser,
    AppJson(payload): AppJson<LogFoodRequest>,
) -> AppResult<Json<FoodLoggedResponse>> {
    let entry = payload.validate()?;
    let user_id = session.resolve(payload.user_id, &state);
    let row = repo::insert(&state.db, user_id, &entry).await?;
    info!(user_id, entry_id = row.id, food = %row.food_name, "food logged");
    Ok(Json(FoodLoggedResponse {
        success: true,
        message: "Food logged successfully",
        data: row,
    }))
}

#[instrument(skip(state))]
pub async fn list_food(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<FoodLogQuery>,
) -> AppResult<Json<FoodLogsResponse>> {
    let date = dates::parse_param(q.date.as_deref())?;
    let meal = parse_meal(q.meal.as_deref())?;
    let user_id = session.resolve(q.user_id, &state);
    let logs = repo::list_for_user(&state.db, user_id, date, meal).await?;
    Ok(Json(FoodLogsResponse { success: true, logs }))
}

#[instrument(skip(state))]
pub async fn delete_food(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<i32>,
    Query(q): Query<UserQuery>,
) -> AppResult<Json<Value>> {
    let user_id = session.resolve(q.user_id, &state);
    if !repo::delete(&state.db, user_id, id).await? {
        warn!(user_id, entry_id = id, "food entry not found");
        return Err(AppError::NotFound("Food entry not found".into()));
    }
    info!(user_id, entry_id = id, "food entry deleted");
    Ok(Json(json!({ "success": true, "message": "Food entry deleted" })))
}
