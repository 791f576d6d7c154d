use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Meal slot a food is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    /// Fixed order in which a day is filled.
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealCategory::Breakfast),
            "lunch" => Ok(MealCategory::Lunch),
            "dinner" => Ok(MealCategory::Dinner),
            "snack" | "snacks" => Ok(MealCategory::Snack),
            other => Err(format!("unknown meal category '{}'", other)),
        }
    }
}

/// Vegetarian / non-vegetarian marker.
///
/// Matched exactly, so `Veg` never matches a `Non-Veg` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    Veg,
    NonVeg,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "Veg",
            DietType::NonVeg => "Non-Veg",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match squashed.as_str() {
            "veg" | "vegetarian" => Ok(DietType::Veg),
            "nonveg" | "nonvegetarian" => Ok(DietType::NonVeg),
            _ => Err(format!("unknown diet type '{}'", s.trim())),
        }
    }
}

/// A catalog row with nutritional data per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub category: MealCategory,
    pub diet: DietType,
    pub tags: Vec<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodItem {
    /// Non-negative, finite nutrient values.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Absolute calorie distance to a target.
    #[inline]
    pub fn calorie_gap(&self, target: f64) -> f64 {
        (self.calories - target).abs()
    }
}

/// Split a comma-separated tag field into trimmed, non-empty labels.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
