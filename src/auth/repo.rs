use crate::auth::{dto::UpdateProfileRequest, repo_types::User};
use sqlx::PgPool;
use time::OffsetDateTime;

const USER_COLUMNS: &str = r#"
    id, email, name, password_hash, age, weight, height, goal, activity_level,
    daily_calories, daily_protein, daily_carbs, daily_fat,
    premium, trial_started_at, trial_days, created_at
"#;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user; the password hash is optional.
    pub async fn create(
        db: &PgPool,
        email: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
        trial_days: i32,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, name, password_hash, trial_days)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(trial_days)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Partial profile update: absent fields keep their stored value.
    pub async fn update_profile(
        db: &PgPool,
        id: i32,
        p: &UpdateProfileRequest,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                weight = COALESCE($4, weight),
                height = COALESCE($5, height),
                goal = COALESCE($6, goal),
                activity_level = COALESCE($7, activity_level),
                daily_calories = COALESCE($8, daily_calories),
                daily_protein = COALESCE($9, daily_protein),
                daily_carbs = COALESCE($10, daily_carbs),
                daily_fat = COALESCE($11, daily_fat)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(p.name.as_deref())
        .bind(p.age)
        .bind(p.weight)
        .bind(p.height)
        .bind(p.goal.as_deref())
        .bind(p.activity_level.as_deref())
        .bind(p.daily_calories)
        .bind(p.daily_protein)
        .bind(p.daily_carbs)
        .bind(p.daily_fat)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Stamp the trial start once; later calls leave the original timestamp.
    pub async fn ensure_trial_started(
        db: &PgPool,
        id: i32,
        now: OffsetDateTime,
    ) -> anyhow::Result<Option<OffsetDateTime>> {
        let started: Option<(Option<OffsetDateTime>,)> = sqlx::query_as(
            r#"
            UPDATE users
            SET trial_started_at = COALESCE(trial_started_at, $2)
            WHERE id = $1
            RETURNING trial_started_at
            "#,
        )
        .bind(id)
        .bind(now)
        .fetch_optional(db)
        .await?;
        Ok(started.and_then(|(ts,)| ts))
    }
}
