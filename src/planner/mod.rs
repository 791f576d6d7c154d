pub mod calculations;
pub mod constants;
pub mod selection;

pub use calculations::{
    calculate_bmi, calculate_bmr, calculate_calorie_target, calculate_tdee, categorize_bmi,
    BmiCategory, HealthMetrics,
};
pub use constants::*;
pub use selection::{category_target, generate_plan, plan_day, select_for_category, within_cap};
