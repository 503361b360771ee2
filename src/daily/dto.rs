use serde::{Deserialize, Serialize};
use time::Date;

use super::repo_types::DailyData;

pub const MOODS: [&str; 5] = ["excellent", "good", "okay", "low", "poor"];

/// POST /api/user/daily-data. The whole snapshot is written: omitted fields
/// are stored as zero / empty, never merged with the stored row.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshotRequest {
    pub user_id: Option<i32>,
    #[serde(default, with = "crate::dates::iso_date_opt")]
    pub date: Option<Date>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub water: Option<i32>,
    pub steps: Option<i32>,
    pub exercise_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub mood: Option<String>,
    pub weight: Option<f64>,
}

/// Validated values ready for the upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySnapshot {
    pub date: Option<Date>,
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
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuery {
    pub user_id: Option<i32>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DailyDataResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub data: DailyData,
}
