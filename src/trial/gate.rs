use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::auth::User;

pub const DEFAULT_TRIAL_DAYS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialState {
    NoTrialStarted,
    TrialActive { days_elapsed: i64, days_left: i64 },
    TrialExpired { days_elapsed: i64 },
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed(TrialState),
    Denied(TrialState),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed(_))
    }
}

/// Whole days elapsed, floored. Clock skew that puts `started` in the future
/// counts as zero.
fn days_elapsed(started: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let elapsed = now - started;
    if elapsed.is_negative() {
        0
    } else {
        elapsed.whole_seconds().div_euclid(Duration::DAY.whole_seconds())
    }
}

pub fn classify(
    premium: bool,
    trial_started_at: Option<OffsetDateTime>,
    trial_days: i32,
    now: OffsetDateTime,
) -> TrialState {
    if premium {
        return TrialState::Premium;
    }
    let Some(started) = trial_started_at else {
        return TrialState::NoTrialStarted;
    };
    let trial_days = i64::from(if trial_days > 0 { trial_days } else { DEFAULT_TRIAL_DAYS });
    let elapsed = days_elapsed(started, now);
    if elapsed < trial_days {
        TrialState::TrialActive {
            days_elapsed: elapsed,
            days_left: trial_days - elapsed,
        }
    } else {
        TrialState::TrialExpired { days_elapsed: elapsed }
    }
}

/// Pure permission check. `NoTrialStarted` is denied here: callers start the
/// trial explicitly before asking.
pub fn evaluate(user: &User, now: OffsetDateTime) -> AccessDecision {
    match classify(user.premium, user.trial_started_at, user.trial_days, now) {
        state @ (TrialState::Premium | TrialState::TrialActive { .. }) => {
            AccessDecision::Allowed(state)
        }
        state => AccessDecision::Denied(state),
    }
}
