use super::dto::{DailySnapshot, DailySnapshotRequest, MOODS};
use crate::{
    error::{AppError, AppResult},
    nutrition::services::non_negative,
};

fn count(field: &str, value: Option<i32>) -> AppResult<i32> {
    match value {
        Some(v) if v < 0 => Err(AppError::Validation(format!("{field} must not be negative"))),
        other => Ok(other.unwrap_or(0)),
    }
}

impl DailySnapshotRequest {
    pub fn validate(&self) -> AppResult<DailySnapshot> {
        let sleep_hours = non_negative("sleepHours", self.sleep_hours, 0.0)?;
        if sleep_hours > 24.0 {
            return Err(AppError::Validation("sleepHours must be between 0 and 24".into()));
        }

        let mood = self
            .mood
            .as_deref()
            .map(|m| m.trim().to_lowercase())
            .unwrap_or_default();
        if !mood.is_empty() && !MOODS.contains(&mood.as_str()) {
            return Err(AppError::Validation(format!(
                "mood must be one of {}",
                MOODS.join(", ")
            )));
        }

        Ok(DailySnapshot {
            date: self.date,
            calories: non_negative("calories", self.calories, 0.0)?,
            protein: non_negative("protein", self.protein, 0.0)?,
            carbs: non_negative("carbs", self.carbs, 0.0)?,
            fat: non_negative("fat", self.fat, 0.0)?,
            water: count("water", self.water)?,
            steps: count("steps", self.steps)?,
            exercise_minutes: count("exerciseMinutes", self.exercise_minutes)?,
            calories_burned: non_negative("caloriesBurned", self.calories_burned, 0.0)?,
            sleep_hours,
            mood,
            weight: non_negative("weight", self.weight, 0.0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_become_zero_not_merged() {
        let req: DailySnapshotRequest =
            serde_json::from_str(r#"{"userId":1,"water":3,"mood":"Good"}"#).unwrap();
        let s = req.validate().unwrap();
        assert_eq!(s.water, 3);
        assert_eq!(s.steps, 0);
        assert_eq!(s.sleep_hours, 0.0);
        assert_eq!(s.mood, "good");
        assert_eq!(s.date, None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let bad_sleep = DailySnapshotRequest { sleep_hours: Some(25.0), ..Default::default() };
        assert!(bad_sleep.validate().is_err());
        let bad_steps = DailySnapshotRequest { steps: Some(-10), ..Default::default() };
        assert!(bad_steps.validate().is_err());
        let bad_mood = DailySnapshotRequest { mood: Some("ecstatic".into()), ..Default::default() };
        assert!(bad_mood.validate().is_err());
    }

    #[test]
    fn same_request_validates_identically() {
        let req: DailySnapshotRequest = serde_json::from_str(
            r#"{"date":"2025-02-01","water":8,"steps":9000,"sleepHours":7.5,"weight":70.2}"#,
        )
        .unwrap();
        assert_eq!(req.validate().unwrap(), req.clone().validate().unwrap());
    }
}
