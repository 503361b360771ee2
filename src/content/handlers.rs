use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::library::{Recipe, Workout, RECIPES, WORKOUTS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/recipes", get(recipes))
        .route("/workouts", get(workouts))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK", message: "AiFit API is running" })
}

pub async fn recipes() -> Json<&'static [Recipe]> {
    Json(RECIPES)
}

pub async fn workouts() -> Json<&'static [Workout]> {
    Json(WORKOUTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let res = routes()
            .with_state(AppState::fake())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "AiFit API is running");
    }

    #[tokio::test]
    async fn recipes_use_client_field_names() {
        let (_, body) = get_json("/recipes").await;
        assert_eq!(body[0]["title"], "Protein Pancakes");
        assert_eq!(body[0]["cookTime"], 15);
        assert_eq!(body[0]["tags"][1], "High Protein");
    }

    #[tokio::test]
    async fn workouts_list_their_steps() {
        let (_, body) = get_json("/workouts").await;
        assert_eq!(body[0]["isPremium"], false);
        assert_eq!(body[0]["exercises"].as_array().unwrap().len(), 3);
        assert_eq!(body[0]["exercises"][1]["name"], "Burpees");
    }
}
