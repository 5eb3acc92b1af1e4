//! Validating boundary around the calculator.
//!
//! The formulas in [`crate::calculator`] compute uncritically; this module
//! is where bad magnitudes get rejected with a typed error instead of
//! silently turning into negative targets or non-finite ratios.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::calculator::{self, MacroBreakdown};
use crate::models::{ActivityLevel, BodyProfile, GoalType, NutritionTargets};

/// Rejection reasons for the validating layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// A profile magnitude the formulas would silently accept but that can
    /// only be bad input (non-positive weight, height, or age).
    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: &'static str },
    /// A calorie target of zero or less makes the macro percentages
    /// meaningless.
    #[error("macro percentages are undefined for a non-positive calorie target")]
    UndefinedRatio,
}

/// A full recommendation: the intermediate figures plus the targets record
/// the caller may copy into the user's editable goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    pub targets: NutritionTargets,
}

/// Run the whole recommendation pipeline for a profile: BMR, TDEE,
/// goal-adjusted calories, macro split.
///
/// This is what backs the "Use Recommended" action in the goals screen.
/// Idempotent — same inputs, same outputs, every time.
///
/// # Errors
///
/// `InvalidProfile` if weight, height, or age is not positive.
pub fn recommend_targets(
    profile: &BodyProfile,
    activity_level: ActivityLevel,
    goal: GoalType,
) -> Result<Recommendation, NutritionError> {
    if profile.weight_kg <= 0.0 {
        return Err(NutritionError::InvalidProfile {
            reason: "weight must be positive",
        });
    }
    if profile.height_cm <= 0.0 {
        return Err(NutritionError::InvalidProfile {
            reason: "height must be positive",
        });
    }
    if profile.age_years == 0 {
        return Err(NutritionError::InvalidProfile {
            reason: "age must be at least 1",
        });
    }

    let bmr = calculator::bmr(profile);
    let tdee = calculator::tdee(bmr, activity_level);
    let daily_calories = calculator::recommended_calories(tdee, goal);
    let split = calculator::recommended_macros(daily_calories);

    debug!(
        bmr,
        tdee,
        daily_calories,
        ?activity_level,
        ?goal,
        "computed nutrition recommendation"
    );

    Ok(Recommendation {
        bmr,
        tdee,
        targets: NutritionTargets {
            daily_calories,
            protein_g: split.protein_g,
            carbs_g: split.carbs_g,
            fat_g: split.fat_g,
        },
    })
}

/// [`calculator::macro_breakdown`] with the zero-denominator case screened
/// out.
///
/// # Errors
///
/// `UndefinedRatio` if `daily_calories` is zero or negative.
pub fn checked_breakdown(targets: &NutritionTargets) -> Result<MacroBreakdown, NutritionError> {
    if targets.daily_calories <= 0 {
        return Err(NutritionError::UndefinedRatio);
    }
    Ok(calculator::macro_breakdown(targets))
}
