pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::{load_catalog, Catalog, CatalogCache};
pub use error::{PlannerError, Result};
pub use models::{FoodItem, MealDistribution, MealPlan, UserProfile};
