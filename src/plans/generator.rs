//! Plan generation from the user profile.
//!
//! Calorie needs use Mifflin-St Jeor with the midpoint of the male and female
//! offsets, scaled by activity and shifted by goal. Macros split the calories 30/45/30
//! for protein/carbs/fat, which reproduces the 2000/150/225/67 defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    auth::User,
    exercise::catalog,
    summary::{goals_for, Nutrients},
};

const SEX_NEUTRAL_OFFSET: f64 = -78.0;
const PROTEIN_SHARE: f64 = 0.30;
const CARBS_SHARE: f64 = 0.45;
const FAT_SHARE: f64 = 0.30;
const MIN_CALORIES: f64 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    GeneralFitness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

/// Lowercase and drop separators so "Weight Loss", "weight_loss" and
/// "weight-loss" compare equal.
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "weightloss" | "loseweight" => Ok(Goal::WeightLoss),
            "musclegain" | "buildmuscle" => Ok(Goal::MuscleGain),
            "maintenance" | "maintain" => Ok(Goal::Maintenance),
            "generalfitness" | "fitness" => Ok(Goal::GeneralFitness),
            _ => Err(format!("unknown goal '{s}'")),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightlyactive" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderatelyactive" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "veryactive" | "active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("unknown activity level '{s}'")),
        }
    }
}

impl Goal {
    fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::WeightLoss => -500.0,
            Goal::MuscleGain => 300.0,
            Goal::Maintenance | Goal::GeneralFitness => 0.0,
        }
    }

    fn workout_categories(self) -> &'static [&'static str] {
        match self {
            Goal::WeightLoss => &["HIIT", "Cardio"],
            Goal::MuscleGain => &["Strength"],
            Goal::Maintenance => &["Cardio", "Strength"],
            Goal::GeneralFitness => &["Cardio", "Strength", "HIIT", "Flexibility"],
        }
    }
}

impl ActivityLevel {
    fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    fn weekly_minutes(self) -> u32 {
        match self {
            ActivityLevel::Sedentary => 90,
            ActivityLevel::LightlyActive => 150,
            ActivityLevel::ModeratelyActive => 200,
            ActivityLevel::VeryActive => 250,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// Derived from age, weight and height.
    Calculated,
    /// Targets already on the profile (or defaults) were kept.
    Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanContent {
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub daily_targets: PlanTargets,
    pub target_source: TargetSource,
    pub weekly_workout_minutes: u32,
    pub workouts: Vec<String>,
    pub focus_habits: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<Nutrients> for PlanTargets {
    fn from(n: Nutrients) -> Self {
        Self { calories: n.calories, protein: n.protein, carbs: n.carbs, fat: n.fat }
    }
}

pub fn macro_split(calories: f64) -> PlanTargets {
    PlanTargets {
        calories: calories.round(),
        protein: (calories * PROTEIN_SHARE / 4.0).round(),
        carbs: (calories * CARBS_SHARE / 4.0).round(),
        fat: (calories * FAT_SHARE / 9.0).round(),
    }
}

/// Resting energy expenditure; `None` unless age, weight and height are all
/// known and positive.
pub fn resting_calories(user: &User) -> Option<f64> {
    let age = f64::from(user.age.filter(|a| *a > 0)?);
    let weight = user.weight.filter(|w| *w > 0.0)?;
    let height = user.height.filter(|h| *h > 0.0)?;
    Some(10.0 * weight + 6.25 * height - 5.0 * age + SEX_NEUTRAL_OFFSET)
}

pub fn generate(user: &User) -> PlanContent {
    let goal = user
        .goal
        .as_deref()
        .and_then(|g| g.parse().ok())
        .unwrap_or(Goal::GeneralFitness);
    let activity_level = user
        .activity_level
        .as_deref()
        .and_then(|a| a.parse().ok())
        .unwrap_or(ActivityLevel::LightlyActive);

    let (daily_targets, target_source) = match resting_calories(user) {
        Some(rest) => {
            let calories =
                (rest * activity_level.multiplier() + goal.calorie_adjustment()).max(MIN_CALORIES);
            (macro_split(calories), TargetSource::Calculated)
        }
        None => (PlanTargets::from(goals_for(Some(user))), TargetSource::Profile),
    };

    let workouts = goal
        .workout_categories()
        .iter()
        .flat_map(|c| catalog::by_category(c).take(2))
        .map(|e| e.name.to_string())
        .collect();

    let mut focus_habits = vec!["water".to_string(), "sleep".to_string()];
    match goal {
        Goal::WeightLoss | Goal::MuscleGain => focus_habits.insert(0, "exercise".into()),
        Goal::Maintenance | Goal::GeneralFitness => focus_habits.push("meditation".into()),
    }

    PlanContent {
        goal,
        activity_level,
        daily_targets,
        target_source,
        weekly_workout_minutes: activity_level.weekly_minutes(),
        workouts,
        focus_habits,
    }
}
