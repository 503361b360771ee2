use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use time::{Date, OffsetDateTime};

/// A logged workout. `calories_burned` is the absolute total, not a rate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseEntry {
    pub id: i32,
    pub user_id: i32,
    pub exercise_name: String,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub exercise_type: String,
    #[serde(with = "crate::dates::iso_date")]
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Weight,
    Bodyweight,
    Cardio,
    Custom,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Weight => "weight",
            ExerciseType::Bodyweight => "bodyweight",
            ExerciseType::Cardio => "cardio",
            ExerciseType::Custom => "custom",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight" => Ok(ExerciseType::Weight),
            "bodyweight" => Ok(ExerciseType::Bodyweight),
            "cardio" => Ok(ExerciseType::Cardio),
            "custom" => Ok(ExerciseType::Custom),
            other => Err(format!("unknown exercise type '{other}'")),
        }
    }
}
