use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, instrument};

use super::aggregate::{goals_for, summarize, DailySummary};
use crate::{
    auth::{SessionUser, User},
    dates, exercise,
    error::AppResult,
    nutrition::{self, services::parse_meal},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub user_id: Option<i32>,
    pub date: Option<String>,
    pub meal: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(with = "crate::dates::iso_date")]
    pub date: Date,
    pub summary: DailySummary,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/user/summary", get(daily_summary))
}

#[instrument(skip(state))]
pub async fn daily_summary(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<SummaryQuery>,
) -> AppResult<Json<SummaryResponse>> {
    let date = dates::parse_param(q.date.as_deref())?.unwrap_or_else(dates::today);
    let meal = parse_meal(q.meal.as_deref())?;
    let user_id = session.resolve(q.user_id, &state);

    let user = User::find_by_id(&state.db, user_id).await?;
    let food = nutrition::repo::list_for_user(&state.db, user_id, Some(date), None).await?;
    let workouts = exercise::repo::list_for_user(&state.db, user_id, Some(date)).await?;

    let summary = summarize(&food, &workouts, meal, goals_for(user.as_ref()));
    debug!(
        user_id,
        entries = food.len(),
        workouts = workouts.len(),
        calories = summary.consumed.calories,
        "daily summary"
    );
    Ok(Json(SummaryResponse {
        success: true,
        date,
        summary,
    }))
}
