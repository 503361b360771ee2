use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::{generator::PlanContent, repo_types::PersonalizedPlan};

const PLAN_COLUMNS: &str = "id, user_id, plan, created_at";

pub async fn insert(
    db: &PgPool,
    user_id: i32,
    plan: &PlanContent,
) -> anyhow::Result<PersonalizedPlan> {
    let row = sqlx::query_as::<_, PersonalizedPlan>(&format!(
        r#"
        INSERT INTO personalized_plans (id, user_id, plan)
        VALUES ($1, $2, $3)
        RETURNING {PLAN_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(plan))
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn latest(db: &PgPool, user_id: i32) -> anyhow::Result<Option<PersonalizedPlan>> {
    let row = sqlx::query_as::<_, PersonalizedPlan>(&format!(
        r#"
        SELECT {PLAN_COLUMNS} FROM personalized_plans
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
