// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (lower bound inclusive)
// ─────────────────────────────────────────────────────────────────────────────

/// BMI at or above this is Normal weight.
pub const BMI_NORMAL_MIN: f64 = 18.5;

/// BMI at or above this is Overweight.
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;

/// BMI at or above this is Obese.
pub const BMI_OBESE_MIN: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict coefficients (revised)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_MALE_BASE: f64 = 88.362;
pub const BMR_MALE_WEIGHT: f64 = 13.397;
pub const BMR_MALE_HEIGHT: f64 = 4.799;
pub const BMR_MALE_AGE: f64 = 5.677;

/// Also used for `Gender::Other`.
pub const BMR_FEMALE_BASE: f64 = 447.593;
pub const BMR_FEMALE_WEIGHT: f64 = 9.247;
pub const BMR_FEMALE_HEIGHT: f64 = 3.098;
pub const BMR_FEMALE_AGE: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers and goal adjustment
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHT_ACTIVE: f64 = 1.375;
pub const ACTIVITY_MODERATE_ACTIVE: f64 = 1.55;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.725;

/// Daily kcal removed for Lose, added for Gain.
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal selection
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a generated schedule.
pub const PLAN_DAYS: usize = 7;

/// A food is eligible when its calories are at most this multiple of the
/// category target. No lower bound.
pub const CALORIE_HEADROOM: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Input ranges accepted by the prompts and CLI flags
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_MAX: u32 = 120;
pub const HEIGHT_CM_MIN: f64 = 100.0;
pub const HEIGHT_CM_MAX: f64 = 250.0;
pub const WEIGHT_KG_MIN: f64 = 20.0;
pub const WEIGHT_KG_MAX: f64 = 200.0;

/// Upper bound of each meal share slider.
pub const MEAL_SHARE_MAX: f64 = 40.0;

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Protein below this many grams per kg of body weight triggers a hint.
pub const PROTEIN_G_PER_KG_MIN: f64 = 0.8;

/// Average carbs above this while losing weight triggers a hint.
pub const CARBS_G_LOSS_MAX: f64 = 200.0;
