pub mod insights;
pub mod prompts;
pub mod render;
pub mod report;

pub use insights::{recommendations, NutritionSummary, Recommendation};
pub use prompts::{
    collect_plan_inputs, prompt_cuisines, prompt_distribution, prompt_profile, prompt_yes_no,
    resolve_cuisine, PromptDefaults, DEFAULT_CUISINE,
};
pub use render::{
    display_calorie_chart, display_cuisines, display_meal_plan, display_metrics,
    display_nutrition, display_plan_failure, display_recommendations,
};
pub use report::{display_report, PlanReport};
