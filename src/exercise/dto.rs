use serde::{Deserialize, Serialize};
use time::Date;

use super::{catalog::Exercise, repo_types::ExerciseEntry};

/// POST /api/user/log-exercise
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogExerciseRequest {
    #[serde(alias = "name")]
    pub exercise_name: Option<String>,
    #[serde(alias = "durationMinutes")]
    pub duration: Option<i32>,
    #[serde(alias = "caloriesBurned")]
    pub calories: Option<f64>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    #[serde(rename = "type", alias = "exerciseType")]
    pub exercise_type: Option<String>,
    #[serde(default, with = "crate::dates::iso_date_opt")]
    pub date: Option<Date>,
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExerciseEntry {
    pub exercise_name: String,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub exercise_type: String,
    pub date: Option<Date>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogQuery {
    pub user_id: Option<i32>,
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExerciseSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseLoggedResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: ExerciseEntry,
}

#[derive(Debug, Serialize)]
pub struct ExerciseLogsResponse {
    pub success: bool,
    pub logs: Vec<ExerciseEntry>,
}

pub type ExerciseSearchResponse = Vec<&'static Exercise>;
