use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, instrument};

use super::{generator, repo, repo_types::PersonalizedPlan};
use crate::{
    auth::{SessionUser, User, UserQuery},
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
    trial::{self, TrialState},
};

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub success: bool,
    /// False when the plan was generated by this request.
    pub cached: bool,
    pub plan: PersonalizedPlan,
}

#[derive(Debug, Serialize)]
pub struct RegeneratedPlanResponse {
    pub success: bool,
    pub access: TrialState,
    pub plan: PersonalizedPlan,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/personalized-plan", get(current_plan))
        .route("/personalized-plan/regenerate", post(regenerate_plan))
}

async fn load_user(state: &AppState, user_id: i32) -> AppResult<User> {
    User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// Latest stored plan, or a freshly generated one on first access.
#[instrument(skip(state))]
pub async fn current_plan(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<UserQuery>,
) -> AppResult<Json<PlanResponse>> {
    let user_id = session.resolve(q.user_id, &state);

    if let Some(plan) = repo::latest(&state.db, user_id).await? {
        return Ok(Json(PlanResponse { success: true, cached: true, plan }));
    }

    let user = load_user(&state, user_id).await?;
    let plan = repo::insert(&state.db, user_id, &generator::generate(&user)).await?;
    info!(user_id, plan_id = %plan.id, "plan generated");
    Ok(Json(PlanResponse { success: true, cached: false, plan }))
}

/// Premium action: rebuild the plan from the current profile.
///
/// `userId` may come from the query string or the JSON body; the query wins.
#[instrument(skip(state, body))]
pub async fn regenerate_plan(
    State(state): State<AppState>,
    session: SessionUser,
    Query(q): Query<UserQuery>,
    body: Option<AppJson<UserQuery>>,
) -> AppResult<Json<RegeneratedPlanResponse>> {
    let requested = q.user_id.or(body.and_then(|AppJson(b)| b.user_id));
    let user_id = session.resolve(requested, &state);
    let access = trial::require_premium_or_trial(&state.db, user_id).await?;

    let user = load_user(&state, user_id).await?;
    let plan = repo::insert(&state.db, user_id, &generator::generate(&user)).await?;
    info!(user_id, plan_id = %plan.id, ?access, "plan regenerated");
    Ok(Json(RegeneratedPlanResponse { success: true, access, plan }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn regenerate_rejects_malformed_token_before_db() {
        let req = Request::builder()
            .method("POST")
            .uri("/personalized-plan/regenerate")
            .header(AUTHORIZATION, "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap();
        let res = routes().with_state(AppState::fake()).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
