pub mod distribution;
pub mod food;
pub mod plan;
pub mod profile;

pub use distribution::MealDistribution;
pub use food::{split_tags, DietType, FoodItem, MealCategory};
pub use plan::{DayPlan, MealPlan, PlannedMeal};
pub use profile::{ActivityLevel, FitnessGoal, Gender, UserProfile};
