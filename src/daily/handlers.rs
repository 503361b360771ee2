use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{DailyDataResponse, DailyQuery, DailySnapshotRequest},
    repo,
};
use crate::{auth::SessionUser, dates, error::AppResult, extract::AppJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/user/daily-data", post(upsert_daily).get(get_daily))
}

#[instrument(skip(state, payload))]
pub async fn upsert_daily(
    State(state): State<AppState>,
    session: SessionUser,
    AppJson(payload): AppJson<DailySnapshotRequest>,
) -> AppResult<Json<DailyDataResponse>> {
    let snapshot = payload.validate()?;
    let user_id = session.resolve(payload.user_id, &state);
    let row = repo::upsert(&state.db, user_id, &snapshot).await?;
    info!(user_id, date = %dates::format(row.date), "daily data upserted");
    Ok(Json(DailyDataResponse {
        success: true,
        message: Some("Daily data updated successfully"),
        data: row,
    }))
}

#[instrument(skip(state))]
pub async fn get_daily(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<DailyQuery>,
) -> AppResult<Json<DailyDataResponse>> {
    let date = dates::parse_param(q.date.as_deref())?.unwrap_or_else(dates::today);
    let user_id = session.resolve(q.user_id, &state);
    let data = repo::find_or_zeroed(&state.db, user_id, date).await?;
    Ok(Json(DailyDataResponse {
        success: true,
        message: None,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DailyData;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use time::macros::date;
    use tower::ServiceExt;

    #[test]
    fn zeroed_snapshot_serializes_without_row_metadata() {
        let v = serde_json::to_value(DailyData::zeroed(1, date!(2025 - 04 - 02))).unwrap();
        assert_eq!(v["date"], "2025-04-02");
        assert_eq!(v["water"], 0);
        assert_eq!(v["mood"], "");
        assert!(v.get("id").is_none());
        assert!(v.get("created_at").is_none());
    }

    #[tokio::test]
    async fn invalid_snapshot_is_rejected_before_db() {
        let app = routes().with_state(AppState::fake());
        let req = Request::builder()
            .method("POST")
            .uri("/user/daily-data")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"userId":1,"sleepHours":30}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn fractional_water_is_a_validation_error() {
        let app = routes().with_state(AppState::fake());
        let req = Request::builder()
            .method("POST")
            .uri("/user/daily-data")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"water":2.5}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
