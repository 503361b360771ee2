use sqlx::PgPool;
use time::Date;

use super::{
    dto::NewFoodEntry,
    repo_types::{FoodEntry, LoggedFoodRow, Meal},
};

const FOOD_COLUMNS: &str =
    "id, user_id, food_name, calories, protein, carbs, fat, quantity, meal_type, date, created_at";

pub async fn insert(db: &PgPool, user_id: i32, e: &NewFoodEntry) -> anyhow::Result<FoodEntry> {
    let row = sqlx::query_as::<_, FoodEntry>(&format!(
        r#"
        INSERT INTO food_entries
            (user_id, food_name, calories, protein, carbs, fat, quantity, meal_type, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, CURRENT_DATE))
        RETURNING {FOOD_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&e.food_name)
    .bind(e.calories)
    .bind(e.protein)
    .bind(e.carbs)
    .bind(e.fat)
    .bind(e.quantity)
    .bind(e.meal_type.as_deref())
    .bind(e.date)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Entries for a user, newest first, optionally narrowed to one day and meal.
pub async fn list_for_user(
    db: &PgPool,
    user_id: i32,
    date: Option<Date>,
    meal: Option<Meal>,
) -> anyhow::Result<Vec<FoodEntry>> {
    let rows = sqlx::query_as::<_, FoodEntry>(&format!(
        r#"
        SELECT {FOOD_COLUMNS}
        FROM food_entries
        WHERE user_id = $1
          AND ($2::date IS NULL OR date = $2)
          AND ($3::text IS NULL OR meal_type = $3)
        ORDER BY created_at DESC, id DESC
        "#
    ))
    .bind(user_id)
    .bind(date)
    .bind(meal.map(|m| m.as_str()))
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Returns false when no entry with that id belongs to the user.
pub async fn delete(db: &PgPool, user_id: i32, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM food_entries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Previously logged foods whose name contains `query`, any user.
pub async fn search_logged(db: &PgPool, query: &str) -> anyhow::Result<Vec<LoggedFoodRow>> {
    let rows = sqlx::query_as::<_, LoggedFoodRow>(
        r#"
        SELECT DISTINCT food_name, calories, protein, carbs, fat
        FROM food_entries
        WHERE food_name ILIKE $1
        "#,
    )
    .bind(format!("%{query}%"))
    .fetch_all(db)
    .await?;
    Ok(rows)
}
