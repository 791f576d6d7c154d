use serde::Serialize;

use crate::models::{FitnessGoal, MealPlan, UserProfile};
use crate::planner::constants::{CARBS_G_LOSS_MAX, PROTEIN_G_PER_KG_MIN};
use crate::planner::{BmiCategory, HealthMetrics};

/// Average macros across every selected meal of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub meal_count: usize,
    pub total_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
}

impl NutritionSummary {
    /// Mean over meals, not days. `None` for an empty plan.
    pub fn from_plan(plan: &MealPlan) -> Option<Self> {
        let meal_count = plan.meal_count();
        if meal_count == 0 {
            return None;
        }

        let (mut calories, mut protein, mut carbs, mut fat) = (0.0, 0.0, 0.0, 0.0);
        for meal in plan.meals() {
            calories += meal.food.calories;
            protein += meal.food.protein;
            carbs += meal.food.carbs;
            fat += meal.food.fat;
        }

        let n = meal_count as f64;
        Some(Self {
            meal_count,
            total_calories: calories,
            avg_protein: protein / n,
            avg_carbs: carbs / n,
            avg_fat: fat / n,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    IncreaseProtein,
    ReduceCarbs,
    HealthyWeightGain,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::IncreaseProtein => {
                "Consider increasing your protein intake for better results!"
            }
            Recommendation::ReduceCarbs => {
                "Try reducing carbohydrate intake for better weight loss results"
            }
            Recommendation::HealthyWeightGain => {
                "Focus on protein-rich foods and healthy fats for healthy weight gain"
            }
        }
    }
}

/// Hints derived from the plan averages and the user's goal.
pub fn recommendations(
    summary: &NutritionSummary,
    profile: &UserProfile,
    metrics: &HealthMetrics,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if summary.avg_protein < profile.weight_kg * PROTEIN_G_PER_KG_MIN {
        out.push(Recommendation::IncreaseProtein);
    }

    if profile.goal == FitnessGoal::Lose && summary.avg_carbs > CARBS_G_LOSS_MAX {
        out.push(Recommendation::ReduceCarbs);
    }

    if metrics.bmi_category == BmiCategory::Underweight && profile.goal == FitnessGoal::Gain {
        out.push(Recommendation::HealthyWeightGain);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, DayPlan, DietType, FoodItem, Gender, MealCategory, PlannedMeal,
    };

    fn meal(
        category: MealCategory,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> PlannedMeal {
        PlannedMeal::new(
            category,
            calories,
            FoodItem {
                name: format!("{} dish", category),
                category,
                diet: DietType::Veg,
                tags: vec![],
                calories,
                protein,
                carbs,
                fat,
            },
        )
    }

    fn profile(weight_kg: f64, goal: FitnessGoal) -> UserProfile {
        UserProfile {
            age: 30,
            height_m: 1.75,
            weight_kg,
            target_weight_kg: weight_kg,
            gender: Gender::Female,
            activity: ActivityLevel::LightActive,
            goal,
            diet: DietType::Veg,
            cuisines: vec![],
        }
    }

    fn two_day_plan() -> MealPlan {
        let mut day1 = DayPlan::new(1);
        day1.meals.push(meal(MealCategory::Breakfast, 400.0, 10.0, 60.0, 10.0));
        day1.meals.push(meal(MealCategory::Lunch, 600.0, 30.0, 80.0, 20.0));
        let mut day2 = DayPlan::new(2);
        day2.meals.push(meal(MealCategory::Dinner, 500.0, 20.0, 70.0, 15.0));
        MealPlan {
            days: vec![day1, day2],
        }
    }

    #[test]
    fn test_summary_averages_over_meals() {
        let summary = NutritionSummary::from_plan(&two_day_plan()).unwrap();
        assert_eq!(summary.meal_count, 3);
        assert!((summary.total_calories - 1500.0).abs() < 1e-9);
        assert!((summary.avg_protein - 20.0).abs() < 1e-9);
        assert!((summary.avg_carbs - 70.0).abs() < 1e-9);
        assert!((summary.avg_fat - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty_plan() {
        assert!(NutritionSummary::from_plan(&MealPlan::default()).is_none());
    }

    #[test]
    fn test_protein_recommendation() {
        let summary = NutritionSummary::from_plan(&two_day_plan()).unwrap();
        let p = profile(70.0, FitnessGoal::Maintain);
        let metrics = HealthMetrics::compute(&p);

        // 20 g average < 56 g
        assert_eq!(
            recommendations(&summary, &p, &metrics),
            vec![Recommendation::IncreaseProtein]
        );

        let light = profile(20.0, FitnessGoal::Maintain);
        let metrics = HealthMetrics::compute(&light);
        let hints = recommendations(&summary, &light, &metrics);
        assert!(!hints.contains(&Recommendation::IncreaseProtein));
    }

    #[test]
    fn test_carb_recommendation_only_when_losing() {
        let summary = NutritionSummary {
            meal_count: 4,
            total_calories: 2400.0,
            avg_protein: 80.0,
            avg_carbs: 250.0,
            avg_fat: 20.0,
        };

        let losing = profile(60.0, FitnessGoal::Lose);
        let metrics = HealthMetrics::compute(&losing);
        assert_eq!(
            recommendations(&summary, &losing, &metrics),
            vec![Recommendation::ReduceCarbs]
        );

        let keeping = profile(60.0, FitnessGoal::Maintain);
        let metrics = HealthMetrics::compute(&keeping);
        assert!(recommendations(&summary, &keeping, &metrics).is_empty());
    }

    #[test]
    fn test_underweight_gain_recommendation() {
        let summary = NutritionSummary {
            meal_count: 4,
            total_calories: 2400.0,
            avg_protein: 80.0,
            avg_carbs: 100.0,
            avg_fat: 20.0,
        };

        // 45 kg at 1.75 m is BMI 14.7
        let p = profile(45.0, FitnessGoal::Gain);
        let metrics = HealthMetrics::compute(&p);
        assert_eq!(metrics.bmi_category, BmiCategory::Underweight);
        assert_eq!(
            recommendations(&summary, &p, &metrics),
            vec![Recommendation::HealthyWeightGain]
        );
    }
}
