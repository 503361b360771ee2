//! Built-in exercise library used by exercise search and calorie estimates.

use serde::Serialize;

use super::repo_types::ExerciseType;

/// Burn rate for exercises not in the library.
pub const CUSTOM_CALORIES_PER_MINUTE: f64 = 6.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i32,
    pub name: &'static str,
    pub category: &'static str,
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    pub calories_per_minute: f64,
    pub muscle_groups: &'static [&'static str],
}

const fn ex(
    id: i32,
    name: &'static str,
    category: &'static str,
    kind: ExerciseType,
    calories_per_minute: f64,
    muscle_groups: &'static [&'static str],
) -> Exercise {
    Exercise { id, name, category, kind, calories_per_minute, muscle_groups }
}

use super::repo_types::ExerciseType::{Bodyweight, Cardio, Weight};

pub static EXERCISES: &[Exercise] = &[
    ex(1, "Running", "Cardio", Cardio, 12.0, &["legs", "cardiovascular"]),
    ex(2, "Cycling", "Cardio", Cardio, 10.0, &["legs", "cardiovascular"]),
    ex(3, "Swimming", "Cardio", Cardio, 11.0, &["full body", "cardiovascular"]),
    ex(4, "Jogging", "Cardio", Cardio, 8.0, &["legs", "cardiovascular"]),
    ex(5, "Jump Rope", "Cardio", Cardio, 13.0, &["legs", "cardiovascular"]),
    ex(11, "Push-ups", "Strength", Bodyweight, 8.0, &["chest", "triceps", "shoulders"]),
    ex(12, "Squats", "Strength", Bodyweight, 6.0, &["legs", "glutes"]),
    ex(13, "Pull-ups", "Strength", Bodyweight, 10.0, &["back", "biceps"]),
    ex(14, "Deadlifts", "Strength", Weight, 9.0, &["back", "legs", "glutes"]),
    ex(15, "Bench Press", "Strength", Weight, 7.0, &["chest", "triceps", "shoulders"]),
    ex(21, "Burpees", "HIIT", Bodyweight, 15.0, &["full body"]),
    ex(22, "Mountain Climbers", "HIIT", Bodyweight, 12.0, &["core", "legs"]),
    ex(23, "High Knees", "HIIT", Bodyweight, 10.0, &["legs", "cardiovascular"]),
    ex(24, "Jumping Jacks", "HIIT", Bodyweight, 8.0, &["full body"]),
    ex(29, "Yoga", "Flexibility", Bodyweight, 3.0, &["full body"]),
    ex(30, "Stretching", "Flexibility", Bodyweight, 2.0, &["full body"]),
    ex(31, "Pilates", "Flexibility", Bodyweight, 4.0, &["core", "full body"]),
];

pub fn find_by_name(name: &str) -> Option<&'static Exercise> {
    let name = name.trim();
    EXERCISES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

pub fn by_category(category: &str) -> impl Iterator<Item = &'static Exercise> + '_ {
    EXERCISES.iter().filter(move |e| e.category.eq_ignore_ascii_case(category))
}

/// Substring match on name, category or any muscle group; `All` or no
/// category means every category. A blank query matches nothing.
pub fn search(query: &str, category: Option<&str>) -> Vec<&'static Exercise> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

    EXERCISES
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.category.to_lowercase().contains(&needle)
                || e.muscle_groups.iter().any(|g| g.contains(&needle))
        })
        .filter(|e| category.map_or(true, |c| e.category.eq_ignore_ascii_case(c)))
        .collect()
}

/// Calories for `minutes` of the named exercise, falling back to the custom rate.
pub fn estimate_calories(name: &str, minutes: i32) -> f64 {
    let rate = find_by_name(name)
        .map(|e| e.calories_per_minute)
        .unwrap_or(CUSTOM_CALORIES_PER_MINUTE);
    rate * f64::from(minutes.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(hits: Vec<&Exercise>) -> Vec<&'static str> {
        hits.into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn matches_muscle_groups_and_categories() {
        assert_eq!(names(search("glutes", None)), ["Squats", "Deadlifts"]);
        assert_eq!(search("hiit", Some("All")).len(), 4);
    }

    #[test]
    fn category_filter_narrows_results() {
        assert_eq!(names(search("legs", Some("HIIT"))), ["Mountain Climbers", "High Knees"]);
        assert!(search("legs", Some("Flexibility")).is_empty());
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(search("  ", None).is_empty());
    }

    #[test]
    fn calorie_estimate_uses_library_rate_or_custom_default() {
        assert_eq!(estimate_calories("running", 30), 360.0);
        assert_eq!(estimate_calories("Underwater basket weaving", 10), 60.0);
        assert_eq!(estimate_calories("Running", -5), 0.0);
    }

    #[test]
    fn serializes_with_client_field_names() {
        let v = serde_json::to_value(find_by_name("Yoga").unwrap()).unwrap();
        assert_eq!(v["type"], "bodyweight");
        assert_eq!(v["caloriesPerMinute"], 3.0);
        assert_eq!(v["muscleGroups"][0], "full body");
    }
}
