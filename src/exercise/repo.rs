use sqlx::PgPool;
use time::Date;

use super::{dto::NewExerciseEntry, repo_types::ExerciseEntry};

const EXERCISE_COLUMNS: &str = "id, user_id, exercise_name, duration_minutes, calories_burned, \
     sets, reps, weight, exercise_type, date, created_at";

pub async fn insert(
    db: &PgPool,
    user_id: i32,
    e: &NewExerciseEntry,
) -> anyhow::Result<ExerciseEntry> {
    let row = sqlx::query_as::<_, ExerciseEntry>(&format!(
        r#"
        INSERT INTO exercise_entries
            (user_id, exercise_name, duration_minutes, calories_burned, sets, reps, weight,
             exercise_type, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, CURRENT_DATE))
        RETURNING {EXERCISE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&e.exercise_name)
    .bind(e.duration_minutes)
    .bind(e.calories_burned)
    .bind(e.sets)
    .bind(e.reps)
    .bind(e.weight)
    .bind(&e.exercise_type)
    .bind(e.date)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_for_user(
    db: &PgPool,
    user_id: i32,
    date: Option<Date>,
) -> anyhow::Result<Vec<ExerciseEntry>> {
    let rows = sqlx::query_as::<_, ExerciseEntry>(&format!(
        r#"
        SELECT {EXERCISE_COLUMNS}
        FROM exercise_entries
        WHERE user_id = $1
          AND ($2::date IS NULL OR date = $2)
        ORDER BY created_at DESC, id DESC
        "#
    ))
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn delete(db: &PgPool, user_id: i32, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM exercise_entries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
