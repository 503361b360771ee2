use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i32,
    pub title: &'static str,
    pub image: &'static str,
    pub cook_time: u32,
    pub servings: u32,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub difficulty: &'static str,
    pub tags: &'static [&'static str],
    pub rating: f64,
    pub reviews: u32,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutStep {
    pub name: &'static str,
    /// Seconds.
    pub duration: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i32,
    pub title: &'static str,
    pub thumbnail: &'static str,
    /// Minutes.
    pub duration: u32,
    pub calories: f64,
    pub difficulty: &'static str,
    pub category: &'static str,
    pub equipment: &'static [&'static str],
    pub rating: f64,
    pub reviews: u32,
    pub instructor: &'static str,
    pub description: &'static str,
    pub exercises: &'static [WorkoutStep],
    pub is_premium: bool,
}

pub static RECIPES: &[Recipe] = &[Recipe {
    id: 1,
    title: "Protein Pancakes",
    image: "https://images.pexels.com/photos/376464/pexels-photo-376464.jpeg",
    cook_time: 15,
    servings: 2,
    calories: 340.0,
    protein: 22.0,
    carbs: 35.0,
    fat: 12.0,
    difficulty: "Easy",
    tags: &["Breakfast", "High Protein"],
    rating: 4.8,
    reviews: 124,
    ingredients: &["2 eggs", "1 scoop protein powder", "1/2 cup oats", "1 banana"],
    instructions: &["Mix ingredients", "Cook on griddle", "Serve hot"],
    category: "Breakfast",
}];

pub static WORKOUTS: &[Workout] = &[Workout {
    id: 1,
    title: "Full Body HIIT Blast",
    thumbnail: "https://images.pexels.com/photos/416778/pexels-photo-416778.jpeg",
    duration: 20,
    calories: 250.0,
    difficulty: "Intermediate",
    category: "HIIT",
    equipment: &["None"],
    rating: 4.8,
    reviews: 342,
    instructor: "Sarah Johnson",
    description: "High-intensity interval training that targets all major muscle groups.",
    exercises: &[
        WorkoutStep {
            name: "Jumping Jacks",
            duration: 45,
            description: "Full body cardio movement",
        },
        WorkoutStep {
            name: "Burpees",
            duration: 30,
            description: "Complete body exercise",
        },
        WorkoutStep {
            name: "Mountain Climbers",
            duration: 45,
            description: "Core and cardio combination",
        },
    ],
    is_premium: false,
}];
