use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database. Doubles as the profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>, // Argon2 hash, not exposed in JSON
    pub age: Option<i32>,
    pub weight: Option<f64>,           // kg
    pub height: Option<f64>,           // cm
    pub goal: Option<String>,
    pub activity_level: Option<String>,
    pub daily_calories: Option<f64>,
    pub daily_protein: Option<f64>,
    pub daily_carbs: Option<f64>,
    pub daily_fat: Option<f64>,
    pub premium: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub trial_started_at: Option<OffsetDateTime>,
    pub trial_days: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
