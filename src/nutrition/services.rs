use sqlx::PgPool;

use super::{
    catalog,
    dto::{FoodItem, LogFoodRequest, NewFoodEntry},
    repo,
    repo_types::Meal,
};
use crate::error::{AppError, AppResult};

pub(crate) fn non_negative(field: &str, value: Option<f64>, default: f64) -> AppResult<f64> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        ))),
    }
}

pub(crate) fn parse_meal(raw: Option<&str>) -> AppResult<Option<Meal>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s.parse::<Meal>().map(Some).map_err(AppError::Validation),
    }
}

impl LogFoodRequest {
    /// Checks required fields and fills defaults (quantity 1, nutrients 0).
    pub fn validate(&self) -> AppResult<NewFoodEntry> {
        let food_name = self
            .food_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("foodName is required".into()))?
            .to_string();

        let quantity = non_negative("quantity", self.quantity, 1.0)?;
        if quantity == 0.0 {
            return Err(AppError::Validation("quantity must be greater than zero".into()));
        }

        Ok(NewFoodEntry {
            food_name,
            calories: non_negative("calories", self.calories, 0.0)?,
            protein: non_negative("protein", self.protein, 0.0)?,
            carbs: non_negative("carbs", self.carbs, 0.0)?,
            fat: non_negative("fat", self.fat, 0.0)?,
            quantity,
            meal_type: parse_meal(self.meal_type.as_deref())?.map(|m| m.as_str().to_string()),
            date: self.date,
        })
    }
}

/// Food search: blank queries short-circuit to an empty list without a query.
pub async fn search_foods(db: &PgPool, query: Option<&str>) -> AppResult<Vec<FoodItem>> {
    let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(Vec::new());
    };
    let logged = repo::search_logged(db, q).await?;
    Ok(catalog::merge_results(logged, q))
}
