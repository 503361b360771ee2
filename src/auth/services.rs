use lazy_static::lazy_static;
use regex::Regex;

use super::{
    dto::{AuthResponse, UpdateProfileRequest},
    jwt::JwtKeys,
    repo_types::User,
};
use crate::error::{AppError, AppResult};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(raw: &str) -> AppResult<String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email".into()));
    }
    Ok(email)
}

pub(crate) fn validate_profile(p: &UpdateProfileRequest) -> AppResult<()> {
    if matches!(p.age, Some(age) if !(1..=130).contains(&age)) {
        return Err(AppError::Validation("age must be between 1 and 130".into()));
    }
    let non_negative = [
        ("weight", p.weight),
        ("height", p.height),
        ("dailyCalories", p.daily_calories),
        ("dailyProtein", p.daily_protein),
        ("dailyCarbs", p.daily_carbs),
        ("dailyFat", p.daily_fat),
    ];
    for (field, value) in non_negative {
        if matches!(value, Some(v) if !v.is_finite() || v < 0.0) {
            return Err(AppError::Validation(format!("{field} must be a non-negative number")));
        }
    }
    if matches!(p.name.as_deref(), Some(n) if n.trim().is_empty()) {
        return Err(AppError::Validation("name must not be blank".into()));
    }
    Ok(())
}

/// True when the error chain bottoms out in a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

pub(crate) fn issue_tokens(keys: &JwtKeys, user: User) -> AppResult<AuthResponse> {
    let access_token = keys.sign_access(user.id)?;
    let refresh_token = keys.sign_refresh(user.id)?;
    Ok(AuthResponse {
        success: true,
        access_token,
        refresh_token,
        user,
    })
}
