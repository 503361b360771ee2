use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

/// One snapshot per user per calendar day. `id`/`created_at` are absent on
/// the zeroed placeholder returned for days with no row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DailyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub user_id: i32,
    #[serde(with = "crate::dates::iso_date")]
    pub date: Date,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub water: i32,
    pub steps: i32,
    pub exercise_minutes: i32,
    pub calories_burned: f64,
    pub sleep_hours: f64,
    pub mood: String,
    pub weight: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl DailyData {
    pub fn zeroed(user_id: i32, date: Date) -> Self {
        Self {
            id: None,
            user_id,
            date,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            water: 0,
            steps: 0,
            exercise_minutes: 0,
            calories_burned: 0.0,
            sleep_hours: 0.0,
            mood: String::new(),
            weight: 0.0,
            created_at: None,
        }
    }
}
