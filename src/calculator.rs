//! Pure nutrition formulas.
//!
//! Every function here is a side-effect-free function of its inputs: no
//! validation, no errors, no clamping beyond what each formula itself
//! specifies. Callers (or the [`crate::goals`] boundary) are responsible
//! for rejecting nonsense magnitudes before asking for numbers; feed a
//! negative weight in and a nonsense BMR comes back out.
//!
//! Rounding throughout is `f64::round`, i.e. half-away-from-zero.
//!
//! # Reference
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting
//! energy expenditure. *American Journal of Clinical Nutrition*, 51(2).

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, BodyProfile, FoodEntry, GoalType, NutritionTargets, Sex};

/// Calories per gram of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: i32 = 4;
/// Calories per gram of carbohydrate (kcal/g)
pub const KCAL_PER_G_CARBS: i32 = 4;
/// Calories per gram of fat (kcal/g)
pub const KCAL_PER_G_FAT: i32 = 9;

/// Daily deficit applied for a weight-loss goal (kcal)
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;
/// Daily surplus applied for a weight-gain goal (kcal)
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Share of the calorie target allotted to protein
pub const PROTEIN_FRACTION: f64 = 0.25;
/// Share of the calorie target allotted to carbs
pub const CARB_FRACTION: f64 = 0.50;
/// Share of the calorie target allotted to fat
pub const FAT_FRACTION: f64 = 0.25;

/// Basal Metabolic Rate via Mifflin-St Jeor (kcal/day).
///
/// `10*kg + 6.25*cm - 5*age`, plus 5 for males or minus 161 for females.
/// Age is guarded to a minimum of 1; nothing else is range-checked and the
/// result is not rounded — round only for display.
pub fn bmr(profile: &BodyProfile) -> f64 {
    let age = f64::from(profile.age_years.max(1));
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * age;
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier.
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Daily calorie target for a goal: TDEE minus 500 to lose, plus 300 to
/// gain, unchanged to maintain, rounded half-away-from-zero.
///
/// Not clamped — a very low TDEE with a "lose" goal yields a negative
/// target, which the goals boundary is expected to have screened out.
pub fn recommended_calories(tdee: f64, goal: GoalType) -> i32 {
    let adjusted = match goal {
        GoalType::Lose => tdee - LOSE_DEFICIT_KCAL,
        GoalType::Maintain => tdee,
        GoalType::Gain => tdee + GAIN_SURPLUS_KCAL,
    };
    adjusted.round() as i32
}

/// A recommended macro split in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// Standard macro distribution for a calorie target: 25% protein, 50%
/// carbs, 25% fat, converted to grams at 4/4/9 kcal/g.
///
/// Each component rounds independently, so the grams multiplied back out
/// land within a few kcal of the target rather than exactly on it. That is
/// expected, not a bug.
pub fn recommended_macros(calories: i32) -> MacroSplit {
    let kcal = f64::from(calories);
    MacroSplit {
        protein_g: (kcal * PROTEIN_FRACTION / f64::from(KCAL_PER_G_PROTEIN)).round() as i32,
        carbs_g: (kcal * CARB_FRACTION / f64::from(KCAL_PER_G_CARBS)).round() as i32,
        fat_g: (kcal * FAT_FRACTION / f64::from(KCAL_PER_G_FAT)).round() as i32,
    }
}

/// How a targets record breaks down into calories per macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein_kcal: i32,
    pub carbs_kcal: i32,
    pub fat_kcal: i32,
    /// Sum of the three macro calorie figures
    pub total_kcal: i32,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// Re-derive the calorie breakdown of a targets record for display.
///
/// Percentages divide by `daily_calories` — the stated target, not
/// `total_kcal` — so they show how far the macro grams deviate from the
/// calorie goal and need not sum to 100. A zero calorie target makes the
/// ratios non-finite; use [`crate::goals::checked_breakdown`] when that
/// matters.
pub fn macro_breakdown(targets: &NutritionTargets) -> MacroBreakdown {
    let protein_kcal = targets.protein_g * KCAL_PER_G_PROTEIN;
    let carbs_kcal = targets.carbs_g * KCAL_PER_G_CARBS;
    let fat_kcal = targets.fat_g * KCAL_PER_G_FAT;
    let denom = f64::from(targets.daily_calories);

    MacroBreakdown {
        protein_kcal,
        carbs_kcal,
        fat_kcal,
        total_kcal: protein_kcal + carbs_kcal + fat_kcal,
        protein_pct: f64::from(protein_kcal) / denom * 100.0,
        carbs_pct: f64::from(carbs_kcal) / denom * 100.0,
        fat_pct: f64::from(fat_kcal) / denom * 100.0,
    }
}

/// Nutrients a single entry actually contributed, after quantity scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScaledNutrients {
    /// Calories contributed (kcal)
    pub calories: f64,
    /// Protein contributed (g)
    pub protein_g: f64,
    /// Carbs contributed (g)
    pub carbs_g: f64,
    /// Fat contributed (g)
    pub fat_g: f64,
}

/// Scale an entry's per-100 g nutrients by the logged quantity.
///
/// Linear and order-independent, so the food log can reduce any sequence
/// of entries by plain summation. A zero quantity contributes zeros.
pub fn scale_entry(entry: &FoodEntry) -> ScaledNutrients {
    let factor = entry.quantity_g / 100.0;
    ScaledNutrients {
        calories: entry.calories * factor,
        protein_g: entry.protein_g * factor,
        carbs_g: entry.carbs_g * factor,
        fat_g: entry.fat_g * factor,
    }
}
