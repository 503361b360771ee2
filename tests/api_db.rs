//! End-to-end tests against a real Postgres.
//!
//! Ignored by default; run with `DATABASE_URL=... cargo test -- --ignored`.

use std::sync::Arc;

use aifit::{
    app::build_app,
    config::{AppConfig, JwtConfig},
    state::AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

fn app(db: PgPool) -> Router {
    let config = AppConfig {
        database_url: String::new(),
        jwt: JwtConfig {
            secret: "integration".into(),
            issuer: "aifit".into(),
            audience: "aifit-users".into(),
            ttl_minutes: 5,
            refresh_ttl_minutes: 60,
        },
        trial_days: 3,
        default_user_id: 1,
        cors_origins: vec![],
    };
    build_app(AppState::from_parts(db, Arc::new(config)))
}

async fn call(
    db: &PgPool,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let res = app(db.clone()).oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn daily_snapshot_upsert_is_last_write_wins(db: PgPool) {
    let first = json!({
        "userId": 1, "date": "2025-07-14", "water": 3, "steps": 4000, "mood": "Good"
    });
    let second = json!({ "userId": 1, "date": "2025-07-14", "water": 8 });

    let (status, _) = call(&db, "POST", "/api/user/daily-data", None, Some(first)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = call(&db, "POST", "/api/user/daily-data", None, Some(second)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["water"], 8);
    assert_eq!(body["data"]["steps"], 0);
    assert_eq!(body["data"]["mood"], "");

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM daily_data WHERE user_id = 1")
        .fetch_one(&db)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let uri = "/api/user/daily-data?userId=1&date=2025-07-15";
    let (_, body) = call(&db, "GET", uri, None, None).await;
    assert_eq!(body["data"]["water"], 0);
    assert_eq!(body["data"]["date"], "2025-07-15");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn logged_food_shows_up_by_date_and_in_summary(db: PgPool) {
    let apple = json!({
        "foodName": "Apple", "calories": 95, "protein": 0.5, "carbs": 25, "fat": 0.3,
        "mealType": "Snack", "date": "2025-07-14"
    });
    let (status, body) = call(&db, "POST", "/api/user/log-food", None, Some(apple)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["food_name"], "Apple");
    assert_eq!(body["data"]["quantity"], 1.0);

    let (_, body) = call(&db, "GET", "/api/user/log-food?date=2025-07-14", None, None).await;
    assert_eq!(body["logs"].as_array().unwrap().len(), 1);
    let (_, body) = call(&db, "GET", "/api/user/log-food?date=2025-07-13", None, None).await;
    assert!(body["logs"].as_array().unwrap().is_empty());

    let (_, body) = call(&db, "GET", "/api/user/summary?date=2025-07-14", None, None).await;
    assert_eq!(body["summary"]["consumed"]["calories"], 95.0);
    assert_eq!(body["summary"]["remaining"]["calories"], 1905.0);

    let (_, body) = call(&db, "GET", "/api/foods/search?q=app", None, None).await;
    assert_eq!(body[0]["name"], "Apple");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn plan_regeneration_follows_the_trial(db: PgPool) {
    let (status, body) = call(
        &db,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "trial@example.com", "name": "Trial" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_owned();
    let user_id = body["user"]["id"].as_i64().unwrap() as i32;
    assert!(body["user"]["trial_started_at"].is_string());

    let (status, body) =
        call(&db, "POST", "/api/personalized-plan/regenerate", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access"]["trial_active"]["days_left"], 3);

    sqlx::query("UPDATE users SET trial_started_at = NOW() - INTERVAL '4 days' WHERE id = $1")
        .bind(user_id)
        .execute(&db)
        .await
        .unwrap();
    let (status, _) =
        call(&db, "POST", "/api/personalized-plan/regenerate", Some(&token), None).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

    // Reading the stored plan is never gated.
    let (status, body) = call(&db, "GET", "/api/personalized-plan", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], true);

    sqlx::query("UPDATE users SET premium = TRUE WHERE id = $1")
        .bind(user_id)
        .execute(&db)
        .await
        .unwrap();
    let (status, body) =
        call(&db, "POST", "/api/personalized-plan/regenerate", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access"], "premium");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn deleting_a_log_is_scoped_to_its_owner(db: PgPool) {
    let (_, body) = call(
        &db,
        "POST",
        "/api/user/log-exercise",
        None,
        Some(json!({ "exerciseName": "Running", "duration": 30 })),
    )
    .await;
    assert_eq!(body["data"]["calories_burned"], 360.0);
    let id = body["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/user/log-exercise/{id}");
    let (status, _) = call(&db, "DELETE", &format!("{uri}?userId=2"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&db, "DELETE", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn regenerate_reads_user_id_from_the_body(db: PgPool) {
    sqlx::query("UPDATE users SET trial_started_at = NOW() - INTERVAL '10 days' WHERE id = 1")
        .execute(&db)
        .await
        .unwrap();
    let (_, body) = call(
        &db,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "x@y.co" })),
    )
    .await;
    let user_id = body["user"]["id"].as_i64().unwrap();

    let (status, body) = call(
        &db,
        "POST",
        "/api/personalized-plan/regenerate",
        None,
        Some(json!({ "userId": user_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["user_id"], user_id);

    // Without a body the expired default user is checked.
    let (status, _) = call(&db, "POST", "/api/personalized-plan/regenerate", None, None).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn first_gated_call_starts_the_trial_for_seeded_users(db: PgPool) {
    let started: Option<time::OffsetDateTime> =
        sqlx::query_scalar("SELECT trial_started_at FROM users WHERE id = 1")
            .fetch_one(&db)
            .await
            .unwrap();
    assert!(started.is_none());

    let (status, body) = call(&db, "POST", "/api/personalized-plan/regenerate", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access"]["trial_active"]["days_elapsed"], 0);
    assert_eq!(body["access"]["trial_active"]["days_left"], 3);

    let started: Option<time::OffsetDateTime> =
        sqlx::query_scalar("SELECT trial_started_at FROM users WHERE id = 1")
            .fetch_one(&db)
            .await
            .unwrap();
    assert!(started.is_some());
}
