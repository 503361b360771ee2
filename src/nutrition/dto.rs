use serde::{Deserialize, Serialize};
use time::Date;

use super::repo_types::FoodEntry;

/// POST /api/user/log-food
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFoodRequest {
    #[serde(alias = "name")]
    pub food_name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub quantity: Option<f64>,
    #[serde(alias = "meal")]
    pub meal_type: Option<String>,
    #[serde(default, with = "crate::dates::iso_date_opt")]
    pub date: Option<Date>,
    pub user_id: Option<i32>,
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodEntry {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: f64,
    pub meal_type: Option<String>,
    pub date: Option<Date>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogQuery {
    pub user_id: Option<i32>,
    pub date: Option<String>,
    pub meal: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// One food search hit. Logged foods carry no id, brand or serving size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FoodLoggedResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: FoodEntry,
}

#[derive(Debug, Serialize)]
pub struct FoodLogsResponse {
    pub success: bool,
    pub logs: Vec<FoodEntry>,
}

#[derive(Debug, Serialize)]
pub struct RecognizeResponse {
    pub success: bool,
    pub food: FoodItem,
}
