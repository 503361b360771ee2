//! Static food data standing in for a real food database and image model.

use rand::{seq::SliceRandom, Rng};

use super::{dto::FoodItem, repo_types::LoggedFoodRow};

struct StaticFood {
    id: Option<i32>,
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    brand: Option<&'static str>,
    serving_size: &'static str,
}

impl StaticFood {
    fn to_item(&self) -> FoodItem {
        FoodItem {
            id: self.id,
            name: self.name.to_string(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            brand: self.brand.map(String::from),
            serving_size: Some(self.serving_size.to_string()),
        }
    }
}

const fn food(
    id: Option<i32>,
    name: &'static str,
    (calories, protein, carbs, fat): (f64, f64, f64, f64),
    brand: Option<&'static str>,
    serving_size: &'static str,
) -> StaticFood {
    StaticFood { id, name, calories, protein, carbs, fat, brand, serving_size }
}

const GENERIC: Option<&str> = Some("Generic");

static SEARCHABLE: [StaticFood; 5] = [
    food(Some(1), "Chicken Breast", (165.0, 31.0, 0.0, 3.6), GENERIC, "100g"),
    food(Some(2), "Brown Rice", (216.0, 5.0, 45.0, 1.8), GENERIC, "1 cup cooked"),
    food(Some(3), "Avocado", (234.0, 2.9, 12.0, 21.0), GENERIC, "1 medium"),
    food(Some(4), "Greek Yogurt", (100.0, 17.0, 6.0, 0.0), Some("Chobani"), "1 container"),
    food(Some(5), "Banana", (105.0, 1.3, 27.0, 0.4), GENERIC, "1 medium"),
];

static RECOGNIZABLE: [StaticFood; 3] = [
    food(None, "Apple", (95.0, 0.5, 25.0, 0.3), None, "1 medium (182g)"),
    food(None, "Chicken Breast", (165.0, 31.0, 0.0, 3.6), None, "100g"),
    food(None, "Broccoli", (55.0, 3.7, 11.0, 0.6), None, "1 cup (91g)"),
];

/// Case-insensitive substring filter over the built-in list, in list order.
pub fn filter_catalog(query: &str) -> Vec<FoodItem> {
    let needle = query.to_lowercase();
    SEARCHABLE
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .map(StaticFood::to_item)
        .collect()
}

/// Database hits first, then built-in matches. No ranking or de-duplication.
pub fn merge_results(logged: Vec<LoggedFoodRow>, query: &str) -> Vec<FoodItem> {
    logged
        .into_iter()
        .map(|r| FoodItem {
            id: None,
            name: r.food_name,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            brand: None,
            serving_size: None,
        })
        .chain(filter_catalog(query))
        .collect()
}

/// Mock recognition: the image is never inspected, one of three foods is
/// picked uniformly at random.
pub fn recognize<R: Rng + ?Sized>(rng: &mut R) -> FoodItem {
    RECOGNIZABLE
        .choose(rng)
        .map(StaticFood::to_item)
        .unwrap_or_else(|| RECOGNIZABLE[0].to_item())
}
