//! Aggregation of logged food entries.
//!
//! The food log itself (the list, its add/remove lifecycle) lives with the
//! caller; these functions only do the arithmetic — reducing a sequence of
//! entries to totals and comparing totals against the stored targets.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::calculator::{scale_entry, ScaledNutrients};
use crate::models::{FoodEntry, MealSlot, NutritionTargets};

/// Summed nutrient intake for a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    /// Calories consumed (kcal)
    pub calories: f64,
    /// Protein consumed (g)
    pub protein_g: f64,
    /// Carbs consumed (g)
    pub carbs_g: f64,
    /// Fat consumed (g)
    pub fat_g: f64,
}

impl DailyTotals {
    fn absorb(&mut self, scaled: &ScaledNutrients) {
        self.calories += scaled.calories;
        self.protein_g += scaled.protein_g;
        self.carbs_g += scaled.carbs_g;
        self.fat_g += scaled.fat_g;
    }
}

/// Sum the scaled nutrients of every entry. An empty log totals to zeros.
pub fn daily_totals<'a, I>(entries: I) -> DailyTotals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    let mut totals = DailyTotals::default();
    for entry in entries {
        totals.absorb(&scale_entry(entry));
    }
    totals
}

/// Group entries by meal slot and total each group.
///
/// Slots nothing was logged under are absent from the map; iteration order
/// follows the day (breakfast first, snacks last).
pub fn totals_by_meal<'a, I>(entries: I) -> BTreeMap<MealSlot, DailyTotals>
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    let mut groups: BTreeMap<MealSlot, DailyTotals> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.meal)
            .or_default()
            .absorb(&scale_entry(entry));
    }
    groups
}

/// Percentage of each daily target consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// Compare consumed totals against the stored targets.
///
/// Over 100 means the target is exceeded. A target of zero or less reports
/// 0.0 progress for that field rather than a non-finite ratio.
pub fn progress(totals: &DailyTotals, targets: &NutritionTargets) -> GoalProgress {
    GoalProgress {
        calories_pct: pct(totals.calories, targets.daily_calories),
        protein_pct: pct(totals.protein_g, targets.protein_g),
        carbs_pct: pct(totals.carbs_g, targets.carbs_g),
        fat_pct: pct(totals.fat_g, targets.fat_g),
    }
}

fn pct(consumed: f64, target: i32) -> f64 {
    if target > 0 {
        consumed / f64::from(target) * 100.0
    } else {
        0.0
    }
}
