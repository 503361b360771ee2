use axum::{
    extract::{FromRef, Query, State},
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{
            AuthResponse, LoginRequest, ProfileResponse, RefreshRequest, RegisterRequest,
            UpdateProfileRequest,
        },
        extractors::{SessionUser, UserQuery},
        jwt::JwtKeys,
        password::{hash_new_password, password_matches},
        repo_types::User,
        services::{is_unique_violation, issue_tokens, normalize_email, validate_profile},
    },
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
    trial,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/auth/profile", get(get_profile).post(update_profile))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = normalize_email(&payload.email)?;
    let name = payload.name.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let hash = payload.password.as_deref().map(hash_new_password).transpose()?;

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let mut user = User::create(
        &state.db,
        &email,
        name,
        hash.as_deref(),
        state.config.trial_days,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Email already registered".into())
        } else {
            AppError::Internal(e)
        }
    })?;

    user.trial_started_at =
        Some(trial::ensure_trial_started(&state.db, user.id, OffsetDateTime::now_utc()).await?);

    info!(user_id = user.id, email = %email, "user registered");
    Ok(Json(issue_tokens(&JwtKeys::from_ref(&state), user)?))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = normalize_email(&payload.email)?;

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    };

    if !password_matches(user.password_hash.as_deref(), payload.password.as_deref())? {
        warn!(user_id = user.id, "login invalid password");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    info!(user_id = user.id, "user logged in");
    Ok(Json(issue_tokens(&JwtKeys::from_ref(&state), user)?))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

    Ok(Json(issue_tokens(&keys, user)?))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<UserQuery>,
) -> AppResult<Json<ProfileResponse>> {
    let user_id = session.resolve(q.user_id, &state);
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(ProfileResponse { success: true, user }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    session: SessionUser,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    validate_profile(&payload)?;
    let user_id = session.resolve(payload.user_id, &state);
    let user = User::update_profile(&state.db, user_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    info!(user_id, "profile updated");
    Ok(Json(ProfileResponse { success: true, user }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .merge(auth_routes())
            .merge(profile_routes())
            .with_state(AppState::fake())
    }

    async fn post_json(uri: &str, body: &str) -> StatusCode {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        app().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn register_rejects_invalid_email_before_touching_db() {
        let status =
            post_json("/auth/register", r#"{"email":"nope","password":"longenough"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_without_email_is_a_validation_error() {
        let req = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let status = post_json("/auth/register", r#"{"email":"a@b.co","password":"short"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn refresh_rejects_access_token() {
        let keys = JwtKeys::from_ref(&AppState::fake());
        let token = keys.sign_access(1).unwrap();
        let status = post_json("/auth/refresh", &format!(r#"{{"refresh_token":"{token}"}}"#)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn profile_update_validates_before_db() {
        let status = post_json("/auth/profile", r#"{"userId":1,"age":-4}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
