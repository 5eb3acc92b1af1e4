use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Biological sex as discriminated by the Mifflin-St Jeor formula.
///
/// The formula only has two branches; broader inclusivity is an open
/// product question, not something to guess a third coefficient set for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level for the TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Active,
    /// Hard training 2x/day
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR. These constants are load-bearing:
    /// stored targets were computed against them, so they must not drift.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

/// What the user wants their weight to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Lose,
    Maintain,
    Gain,
}

/// Body stats the BMR formula needs. Owned by the caller and passed in per
/// calculation; the calculator never stores one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub age_years: u32,
    /// Weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
    pub sex: Sex,
}

/// Daily calorie and macro targets.
///
/// Consistent with each other only right after a recommendation is applied.
/// Once the user edits a field the record is free-form; nothing re-derives
/// the other fields until the user explicitly asks for a recommendation
/// again. Signed because recommended calories are deliberately unclamped
/// and can go negative for pathological profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily calorie target (kcal)
    pub daily_calories: i32,
    /// Protein target (g)
    #[serde(rename = "protein")]
    pub protein_g: i32,
    /// Carb target (g)
    #[serde(rename = "carbs")]
    pub carbs_g: i32,
    /// Fat target (g)
    #[serde(rename = "fat")]
    pub fat_g: i32,
}

/// Which meal a food entry was logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);

/// A logged food item. Nutrient fields are per 100 g; `quantity_g` is the
/// amount actually eaten. Entries are immutable after creation — the log
/// only ever appends or deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Entry id, unique within a session
    pub id: String,
    pub name: String,
    /// Calories per 100 g (kcal)
    pub calories: f64,
    /// Protein per 100 g (g)
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Carbs per 100 g (g)
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Fat per 100 g (g)
    #[serde(rename = "fat")]
    pub fat_g: f64,
    /// Logged quantity in grams
    #[serde(rename = "quantity")]
    pub quantity_g: f64,
    pub meal: MealSlot,
}

impl FoodEntry {
    /// Create an entry with a fresh id.
    ///
    /// Ids are timestamp-based like the app has always minted them, with a
    /// process-wide sequence appended so rapid submissions in the same
    /// millisecond still get distinct ids.
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        quantity_g: f64,
        meal: MealSlot,
    ) -> Self {
        let seq = ENTRY_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("{}-{}", Utc::now().timestamp_millis(), seq),
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            quantity_g,
            meal,
        }
    }
}
