//! Daily totals and remaining-goal deltas.
//!
//! Everything here is a pure fold over entry rows: order does not matter and
//! empty input yields zeros.

use serde::Serialize;
use std::{iter::Sum, ops::Add};

use crate::{
    auth::User,
    exercise::ExerciseEntry,
    nutrition::{FoodEntry, Meal},
};

pub const DEFAULT_DAILY_CALORIES: f64 = 2000.0;
pub const DEFAULT_DAILY_PROTEIN: f64 = 150.0;
pub const DEFAULT_DAILY_CARBS: f64 = 225.0;
pub const DEFAULT_DAILY_FAT: f64 = 67.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrients {
    pub const DEFAULT_GOALS: Nutrients = Nutrients {
        calories: DEFAULT_DAILY_CALORIES,
        protein: DEFAULT_DAILY_PROTEIN,
        carbs: DEFAULT_DAILY_CARBS,
        fat: DEFAULT_DAILY_FAT,
    };

    pub fn scale(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// `max(0, goal - consumed)` per field.
    pub fn remaining(goal: Nutrients, consumed: Nutrients) -> Nutrients {
        let left = |g: f64, c: f64| (g - c).max(0.0);
        Nutrients {
            calories: left(goal.calories, consumed.calories),
            protein: left(goal.protein, consumed.protein),
            carbs: left(goal.carbs, consumed.carbs),
            fat: left(goal.fat, consumed.fat),
        }
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Nutrients>>(iter: I) -> Self {
        iter.fold(Nutrients::default(), Add::add)
    }
}

impl FoodEntry {
    /// Nutrition as eaten: per-unit values times quantity.
    pub fn consumed(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
        .scale(self.quantity)
    }
}

/// Profile targets; a missing or zero target falls back to the default.
pub fn goals_for(user: Option<&User>) -> Nutrients {
    let pick = |v: Option<f64>, default: f64| match v {
        Some(x) if x > 0.0 => x,
        _ => default,
    };
    let d = Nutrients::DEFAULT_GOALS;
    match user {
        None => d,
        Some(u) => Nutrients {
            calories: pick(u.daily_calories, d.calories),
            protein: pick(u.daily_protein, d.protein),
            carbs: pick(u.daily_carbs, d.carbs),
            fat: pick(u.daily_fat, d.fat),
        },
    }
}

/// Food totals, optionally restricted to one meal.
pub fn food_totals<'a, I>(entries: I, meal: Option<Meal>) -> Nutrients
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    let wanted = meal.map(|m| m.as_str());
    entries
        .into_iter()
        .filter(|e| wanted.is_none() || e.meal_type.as_deref() == wanted)
        .map(FoodEntry::consumed)
        .sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExerciseTotals {
    pub workouts: u32,
    pub minutes: i64,
    pub calories: f64,
}

pub fn exercise_totals<'a, I>(entries: I) -> ExerciseTotals
where
    I: IntoIterator<Item = &'a ExerciseEntry>,
{
    entries
        .into_iter()
        .fold(ExerciseTotals::default(), |acc, e| ExerciseTotals {
            workouts: acc.workouts + 1,
            minutes: acc.minutes + i64::from(e.duration_minutes),
            calories: acc.calories + e.calories_burned,
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Exceeded {
    pub calories: bool,
    pub protein: bool,
    pub carbs: bool,
    pub fat: bool,
}

impl Exceeded {
    /// Strictly over: landing exactly on the goal is not exceeding it.
    pub fn between(goal: Nutrients, consumed: Nutrients) -> Self {
        Self {
            calories: consumed.calories > goal.calories,
            protein: consumed.protein > goal.protein,
            carbs: consumed.carbs > goal.carbs,
            fat: consumed.fat > goal.fat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub consumed: Nutrients,
    pub goals: Nutrients,
    pub remaining: Nutrients,
    pub exceeded: Exceeded,
    pub exercise: ExerciseTotals,
    /// Calorie goal minus intake plus exercise burn; may go negative.
    pub net_calories_remaining: f64,
}

pub fn summarize(
    food: &[FoodEntry],
    exercise: &[ExerciseEntry],
    meal: Option<Meal>,
    goals: Nutrients,
) -> DailySummary {
    let consumed = food_totals(food, meal);
    let exercise = exercise_totals(exercise);
    DailySummary {
        consumed,
        goals,
        remaining: Nutrients::remaining(goals, consumed),
        exceeded: Exceeded::between(goals, consumed),
        exercise,
        net_calories_remaining: goals.calories - consumed.calories + exercise.calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn food(name: &str, cal: f64, p: f64, c: f64, f: f64, qty: f64, meal: &str) -> FoodEntry {
        FoodEntry {
            id: 0,
            user_id: 1,
            food_name: name.into(),
            calories: cal,
            protein: p,
            carbs: c,
            fat: f,
            quantity: qty,
            meal_type: Some(meal.into()),
            date: date!(2025 - 05 - 01),
            created_at: datetime!(2025-05-01 08:00 UTC),
        }
    }

    fn workout(minutes: i32, calories: f64) -> ExerciseEntry {
        ExerciseEntry {
            id: 0,
            user_id: 1,
            exercise_name: "Running".into(),
            duration_minutes: minutes,
            calories_burned: calories,
            sets: None,
            reps: None,
            weight: None,
            exercise_type: "cardio".into(),
            date: date!(2025 - 05 - 01),
            created_at: datetime!(2025-05-01 18:00 UTC),
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let s = summarize(&[], &[], None, Nutrients::DEFAULT_GOALS);
        assert_eq!(s.consumed, Nutrients::default());
        assert_eq!(s.exercise, ExerciseTotals::default());
        assert_eq!(s.remaining, Nutrients::DEFAULT_GOALS);
        assert_eq!(s.exceeded, Exceeded::default());
    }

    #[test]
    fn food_totals_multiply_by_quantity() {
        let entries = [
            food("Egg", 70.0, 6.0, 0.5, 5.0, 2.0, "Breakfast"),
            food("Toast", 80.0, 3.0, 15.0, 1.0, 1.5, "Breakfast"),
            food("Salad", 150.0, 4.0, 10.0, 9.0, 1.0, "Lunch"),
        ];
        let all = food_totals(&entries, None);
        assert_eq!(all.calories, 70.0 * 2.0 + 80.0 * 1.5 + 150.0);
        assert_eq!(all.protein, 12.0 + 4.5 + 4.0);

        let breakfast = food_totals(&entries, Some(Meal::Breakfast));
        assert_eq!(breakfast.calories, 260.0);
        assert_eq!(food_totals(&entries, Some(Meal::Dinner)), Nutrients::default());
    }

    #[test]
    fn totals_do_not_depend_on_order() {
        let mut entries = vec![
            food("A", 100.0, 1.0, 2.0, 3.0, 1.0, "Snack"),
            food("B", 250.0, 10.0, 20.0, 5.0, 3.0, "Dinner"),
            food("C", 40.0, 0.0, 10.0, 0.0, 0.5, "Lunch"),
        ];
        let forward = food_totals(&entries, None);
        entries.reverse();
        assert_eq!(food_totals(&entries, None), forward);
    }

    #[test]
    fn exercise_totals_count_and_sum() {
        let t = exercise_totals(&[workout(30, 360.0), workout(15, 120.5)]);
        assert_eq!(t, ExerciseTotals { workouts: 2, minutes: 45, calories: 480.5 });
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let goals = Nutrients { calories: 2000.0, protein: 150.0, carbs: 225.0, fat: 67.0 };
        let consumed = Nutrients { calories: 2500.0, protein: 150.0, carbs: 100.0, fat: 70.0 };
        let r = Nutrients::remaining(goals, consumed);
        assert_eq!(r, Nutrients { calories: 0.0, protein: 0.0, carbs: 125.0, fat: 0.0 });
        let ex = Exceeded::between(goals, consumed);
        assert!(ex.calories && ex.fat);
        assert!(!ex.protein, "meeting a goal exactly is not exceeding it");
        assert!(!ex.carbs);
    }

    #[test]
    fn net_calories_credit_exercise() {
        let s = summarize(
            &[food("Pizza", 800.0, 30.0, 90.0, 35.0, 3.0, "Dinner")],
            &[workout(30, 300.0)],
            None,
            Nutrients::DEFAULT_GOALS,
        );
        assert_eq!(s.remaining.calories, 0.0);
        assert_eq!(s.net_calories_remaining, 2000.0 - 2400.0 + 300.0);
    }

    #[test]
    fn goals_fall_back_per_field() {
        assert_eq!(goals_for(None), Nutrients::DEFAULT_GOALS);
    }
}
