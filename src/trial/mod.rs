//! Trial / premium gate for premium-only actions.

mod gate;

pub use gate::{classify, evaluate, AccessDecision, TrialState, DEFAULT_TRIAL_DAYS};

use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;

use crate::{
    auth::User,
    error::{AppError, AppResult},
};

/// Start the trial clock for `user_id` if it has not started yet.
///
/// Idempotent: the first stamp wins. Runs at registration, and before the
/// gate is evaluated for accounts that predate trial tracking.
pub async fn ensure_trial_started(
    db: &PgPool,
    user_id: i32,
    now: OffsetDateTime,
) -> AppResult<OffsetDateTime> {
    let started = User::ensure_trial_started(db, user_id, now)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    info!(user_id, started_at = %started, "trial ensured");
    Ok(started)
}

/// Load the user, initialise the trial if needed, and decide.
pub async fn require_premium_or_trial(db: &PgPool, user_id: i32) -> AppResult<TrialState> {
    let mut user = User::find_by_id(db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let now = OffsetDateTime::now_utc();

    if !user.premium && user.trial_started_at.is_none() {
        user.trial_started_at = Some(ensure_trial_started(db, user_id, now).await?);
    }

    match evaluate(&user, now) {
        AccessDecision::Allowed(state) => Ok(state),
        AccessDecision::Denied(_) => Err(AppError::PaymentRequired(
            "Trial expired / Not premium".into(),
        )),
    }
}
