use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Deserialize;
use tracing::warn;

use super::{claims::TokenKind, jwt::JwtKeys};
use crate::{error::AppError, state::AppState};

/// Identity carried by a bearer access token, if any.
///
/// A request without an `Authorization` header is anonymous and falls back to
/// the `userId` parameter, then to the configured default user. A header that
/// is present but invalid is rejected outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionUser(pub Option<i32>);

impl SessionUser {
    pub fn resolve(self, requested: Option<i32>, state: &AppState) -> i32 {
        self.0
            .or(requested)
            .unwrap_or(state.config.default_user_id)
    }
}

/// `?userId=` query parameter shared by the read endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<i32>,
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(SessionUser(None));
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|h| h.strip_prefix("Bearer ").or_else(|| h.strip_prefix("bearer ")))
            .ok_or_else(|| AppError::Unauthorized("invalid auth scheme".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            AppError::Unauthorized("invalid or expired token".into())
        })?;

        if claims.kind != TokenKind::Access {
            return Err(AppError::Unauthorized("access token required".into()));
        }

        Ok(SessionUser(Some(claims.sub)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>, state: &AppState) -> Result<SessionUser, AppError> {
        let (mut parts, _) = req.into_parts();
        SessionUser::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn anonymous_request_falls_back_to_param_then_default() {
        let state = AppState::fake();
        let session = extract(Request::new(()), &state).await.unwrap();
        assert_eq!(session.resolve(Some(9), &state), 9);
        assert_eq!(session.resolve(None, &state), 1);
    }

    #[tokio::test]
    async fn access_token_wins_over_param() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign_access(5).unwrap();
        let req = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(())
            .unwrap();
        let session = extract(req, &state).await.unwrap();
        assert_eq!(session.resolve(Some(9), &state), 5);
    }

    #[tokio::test]
    async fn refresh_token_and_garbage_are_rejected() {
        let state = AppState::fake();
        let refresh = JwtKeys::from_ref(&state).sign_refresh(5).unwrap();
        let req = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {refresh}"))
            .body(())
            .unwrap();
        assert!(matches!(extract(req, &state).await, Err(AppError::Unauthorized(_))));

        let req = Request::builder()
            .header(AUTHORIZATION, "Basic abc")
            .body(())
            .unwrap();
        assert!(matches!(extract(req, &state).await, Err(AppError::Unauthorized(_))));
    }
}
