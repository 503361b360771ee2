use serde::Serialize;
use std::collections::BTreeSet;
use time::Date;

use crate::{daily::DailyData, dates};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: String,
    pub streak: u32,
    pub completed_today: bool,
    pub completed_dates: BTreeSet<String>,
    pub target: f64,
    pub unit: String,
    pub is_custom: bool,
}

struct Builtin {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    category: &'static str,
    streak: u32,
    target: f64,
    unit: &'static str,
}

const fn builtin(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    category: &'static str,
    streak: u32,
    target: f64,
    unit: &'static str,
) -> Builtin {
    Builtin { id, name, icon, category, streak, target, unit }
}

static BUILTINS: &[Builtin] = &[
    builtin("water", "Drink 8 glasses of water", "Droplets", "Health", 7, 8.0, "glasses"),
    builtin("exercise", "Exercise for 30 minutes", "Dumbbell", "Fitness", 5, 30.0, "minutes"),
    builtin("sleep", "Get 8 hours of sleep", "Moon", "Health", 3, 8.0, "hours"),
    builtin("meditation", "Meditate for 10 minutes", "Brain", "Mindfulness", 12, 10.0, "minutes"),
];

impl Builtin {
    /// Meditation has no snapshot field, so it only completes by toggling.
    fn reached(&self, daily: &DailyData) -> bool {
        let actual = match self.id {
            "water" => f64::from(daily.water),
            "exercise" => f64::from(daily.exercise_minutes),
            "sleep" => daily.sleep_hours,
            _ => return false,
        };
        actual >= self.target
    }

    fn habit(&self, daily: &DailyData) -> Habit {
        let completed_today = self.reached(daily);
        let mut completed_dates = BTreeSet::new();
        if completed_today {
            completed_dates.insert(dates::format(daily.date));
        }
        Habit {
            id: self.id.into(),
            name: self.name.into(),
            icon: self.icon.into(),
            category: self.category.into(),
            streak: self.streak,
            completed_today,
            completed_dates,
            target: self.target,
            unit: self.unit.into(),
            is_custom: false,
        }
    }
}

impl Habit {
    /// Flip today's completion. Completing bumps the streak; undoing it
    /// takes one back off, never below zero.
    pub fn toggle(&mut self, today: Date) {
        let day = dates::format(today);
        self.completed_today = !self.completed_today;
        if self.completed_today {
            self.streak += 1;
            self.completed_dates.insert(day);
        } else {
            self.streak = self.streak.saturating_sub(1);
            self.completed_dates.remove(&day);
        }
    }
}

/// The built-in habits, with completion derived from the day's snapshot.
pub fn default_habits(daily: &DailyData) -> Vec<Habit> {
    BUILTINS.iter().map(|b| b.habit(daily)).collect()
}

pub fn is_builtin(id: &str) -> bool {
    BUILTINS.iter().any(|b| b.id == id)
}

pub fn find_habit(id: &str, daily: &DailyData) -> Option<Habit> {
    BUILTINS.iter().find(|b| b.id == id).map(|b| b.habit(daily))
}
