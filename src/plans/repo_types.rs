use serde::Serialize;
use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

use super::generator::PlanContent;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PersonalizedPlan {
    pub id: Uuid,
    pub user_id: i32,
    pub plan: Json<PlanContent>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
