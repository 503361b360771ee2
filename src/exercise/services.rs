use super::{
    catalog,
    dto::{LogExerciseRequest, NewExerciseEntry},
    repo_types::ExerciseType,
};
use crate::error::{AppError, AppResult};

fn non_negative_int(field: &str, value: Option<i32>) -> AppResult<Option<i32>> {
    match value {
        Some(v) if v < 0 => Err(AppError::Validation(format!("{field} must not be negative"))),
        other => Ok(other),
    }
}

impl LogExerciseRequest {
    /// Library exercises take their type and burn rate from the catalog when
    /// the client leaves them out; anything else is `custom` at 6 kcal/min.
    pub fn validate(&self) -> AppResult<NewExerciseEntry> {
        let exercise_name = self
            .exercise_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("exerciseName is required".into()))?
            .to_string();

        let duration_minutes = non_negative_int("duration", self.duration)?.unwrap_or(0);
        let known = catalog::find_by_name(&exercise_name);

        let calories_burned = match self.calories {
            Some(c) if !c.is_finite() || c < 0.0 => {
                return Err(AppError::Validation("calories must be a non-negative number".into()))
            }
            Some(c) => c,
            None => catalog::estimate_calories(&exercise_name, duration_minutes),
        };

        let requested_type = self.exercise_type.as_deref().map(str::trim).filter(|t| !t.is_empty());
        let exercise_type = match requested_type {
            Some(t) => t.parse::<ExerciseType>().map_err(AppError::Validation)?,
            None => known.map(|e| e.kind).unwrap_or(ExerciseType::Custom),
        };

        if matches!(self.weight, Some(w) if !w.is_finite() || w < 0.0) {
            return Err(AppError::Validation("weight must be a non-negative number".into()));
        }

        Ok(NewExerciseEntry {
            exercise_name,
            duration_minutes,
            calories_burned,
            sets: non_negative_int("sets", self.sets)?,
            reps: non_negative_int("reps", self.reps)?,
            weight: self.weight,
            exercise_type: exercise_type.as_str().to_string(),
            date: self.date,
        })
    }
}
