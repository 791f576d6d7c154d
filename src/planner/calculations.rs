use std::fmt;

use serde::Serialize;

use crate::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};
use crate::planner::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body Mass Index: weight / height².
///
/// `height_m` must be positive; zero yields an IEEE infinity or NaN.
#[inline]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Partition BMI into four bands with inclusive lower bounds.
///
/// NaN (the zero-height case of [`calculate_bmi`]) fails every comparison
/// and lands in `Obese`.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal Metabolic Rate (revised Harris-Benedict).
///
/// Only `Gender::Male` takes the male coefficients; `Female` and `Other`
/// share the female ones.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let age = age as f64;
    match gender {
        Gender::Male => {
            BMR_MALE_BASE + BMR_MALE_WEIGHT * weight_kg + BMR_MALE_HEIGHT * height_cm
                - BMR_MALE_AGE * age
        }
        Gender::Female | Gender::Other => {
            BMR_FEMALE_BASE + BMR_FEMALE_WEIGHT * weight_kg + BMR_FEMALE_HEIGHT * height_cm
                - BMR_FEMALE_AGE * age
        }
    }
}

/// Total Daily Energy Expenditure.
#[inline]
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Daily calorie target for a goal. Not floored, so it can go negative.
pub fn calculate_calorie_target(tdee: f64, goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::Lose => tdee - GOAL_CALORIE_ADJUSTMENT,
        FitnessGoal::Maintain => tdee,
        FitnessGoal::Gain => tdee + GOAL_CALORIE_ADJUSTMENT,
    }
}

/// Everything the metabolic pipeline derives from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_target: f64,
}

impl HealthMetrics {
    pub fn compute(profile: &UserProfile) -> Self {
        let bmi = calculate_bmi(profile.weight_kg, profile.height_m);
        let bmr = calculate_bmr(
            profile.weight_kg,
            profile.height_cm(),
            profile.age,
            profile.gender,
        );
        let tdee = calculate_tdee(bmr, profile.activity);

        Self {
            bmi,
            bmi_category: categorize_bmi(bmi),
            bmr,
            tdee,
            calorie_target: calculate_calorie_target(tdee, profile.goal),
        }
    }
}
