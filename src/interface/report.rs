use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::interface::insights::{recommendations, NutritionSummary, Recommendation};
use crate::interface::render::{
    display_calorie_chart, display_meal_plan, display_metrics, display_nutrition,
    display_recommendations,
};
use crate::models::{MealDistribution, MealPlan, UserProfile};
use crate::planner::{generate_plan, HealthMetrics};

/// Everything shown to the user for one planning round.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub profile: UserProfile,
    pub distribution: MealDistribution,
    pub metrics: HealthMetrics,
    pub plan: MealPlan,
    pub nutrition: Option<NutritionSummary>,
    pub recommendations: Vec<Recommendation>,
}

impl PlanReport {
    /// Run the metric pipeline and the generator, then derive display aggregates.
    ///
    /// `distribution` is stored normalized.
    pub fn build(
        catalog: &Catalog,
        profile: UserProfile,
        distribution: &MealDistribution,
    ) -> Result<Self> {
        let distribution = distribution.normalized()?;
        let metrics = HealthMetrics::compute(&profile);
        let plan = generate_plan(catalog, metrics.calorie_target, profile.diet, &distribution)?;

        let nutrition = NutritionSummary::from_plan(&plan);
        let recommendations = nutrition
            .as_ref()
            .map(|summary| recommendations(summary, &profile, &metrics))
            .unwrap_or_default();

        Ok(Self {
            profile,
            distribution,
            metrics,
            plan,
            nutrition,
            recommendations,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Print the full text report.
pub fn display_report(report: &PlanReport) {
    display_metrics(&report.metrics, &report.profile);
    display_meal_plan(&report.plan);

    if let Some(summary) = &report.nutrition {
        display_calorie_chart(&report.plan);
        display_nutrition(summary);
        display_recommendations(&report.recommendations);
    }
}
