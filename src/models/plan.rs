use serde::Serialize;

use crate::models::{FoodItem, MealCategory};

/// A food picked for one meal slot of a day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub category: MealCategory,

    /// Calorie share this slot was aiming for.
    pub target_calories: f64,

    pub food: FoodItem,
}

impl PlannedMeal {
    pub fn new(category: MealCategory, target_calories: f64, food: FoodItem) -> Self {
        Self {
            category,
            target_calories,
            food,
        }
    }
}

/// Meals selected for a single day, at most one per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: usize,
    pub label: String,
    pub meals: Vec<PlannedMeal>,
}

impl DayPlan {
    pub fn new(day: usize) -> Self {
        Self {
            day,
            label: format!("Day {}", day),
            meals: Vec::new(),
        }
    }

    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.food.calories).sum()
    }

    pub fn meal(&self, category: MealCategory) -> Option<&PlannedMeal> {
        self.meals.iter().find(|m| m.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Weekly schedule. Only days with at least one meal are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    /// True when no day produced a meal; the caller should ask the user to
    /// adjust their preferences.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All selected meals in day order.
    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }
}
