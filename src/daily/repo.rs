use sqlx::PgPool;
use time::Date;

use super::{dto::DailySnapshot, repo_types::DailyData};

const DAILY_COLUMNS: &str = "id, user_id, date, calories, protein, carbs, fat, water, steps, \
     exercise_minutes, calories_burned, sleep_hours, mood, weight, created_at";

/// Insert or fully overwrite the snapshot for (user, date). Last write wins.
pub async fn upsert(db: &PgPool, user_id: i32, s: &DailySnapshot) -> anyhow::Result<DailyData> {
    let row = sqlx::query_as::<_, DailyData>(&format!(
        r#"
        INSERT INTO daily_data
            (user_id, date, calories, protein, carbs, fat, water, steps, exercise_minutes,
             calories_burned, sleep_hours, mood, weight)
        VALUES ($1, COALESCE($2, CURRENT_DATE), $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        ON CONFLICT (user_id, date)
        DO UPDATE SET
            calories = EXCLUDED.calories,
            protein = EXCLUDED.protein,
            carbs = EXCLUDED.carbs,
            fat = EXCLUDED.fat,
            water = EXCLUDED.water,
            steps = EXCLUDED.steps,
            exercise_minutes = EXCLUDED.exercise_minutes,
            calories_burned = EXCLUDED.calories_burned,
            sleep_hours = EXCLUDED.sleep_hours,
            mood = EXCLUDED.mood,
            weight = EXCLUDED.weight
        RETURNING {DAILY_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(s.date)
    .bind(s.calories)
    .bind(s.protein)
    .bind(s.carbs)
    .bind(s.fat)
    .bind(s.water)
    .bind(s.steps)
    .bind(s.exercise_minutes)
    .bind(s.calories_burned)
    .bind(s.sleep_hours)
    .bind(&s.mood)
    .bind(s.weight)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn find(db: &PgPool, user_id: i32, date: Date) -> anyhow::Result<Option<DailyData>> {
    let row = sqlx::query_as::<_, DailyData>(&format!(
        "SELECT {DAILY_COLUMNS} FROM daily_data WHERE user_id = $1 AND date = $2"
    ))
    .bind(user_id)
    .bind(date)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Stored snapshot or a zeroed one; never errors on a missing day.
pub async fn find_or_zeroed(db: &PgPool, user_id: i32, date: Date) -> anyhow::Result<DailyData> {
    Ok(find(db, user_id, date)
        .await?
        .unwrap_or_else(|| DailyData::zeroed(user_id, date)))
}
