use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{
    DayPlan, DietType, FoodItem, MealCategory, MealDistribution, MealPlan, PlannedMeal,
};
use crate::planner::constants::{CALORIE_HEADROOM, PLAN_DAYS};

/// Calories a category should contribute, given a normalized share in percent.
#[inline]
pub fn category_target(calorie_target: f64, share_pct: f64) -> f64 {
    calorie_target * (share_pct / 100.0)
}

/// Whether a food fits under the headroom cap for a category target.
#[inline]
pub fn within_cap(food: &FoodItem, target: f64) -> bool {
    food.calories <= target * CALORIE_HEADROOM
}

/// Pick the food closest in calories to `target` among `candidates` of the
/// given category that fit under the cap.
///
/// Ties go to the earliest candidate, so catalog order decides.
pub fn select_for_category<'a>(
    candidates: &[&'a FoodItem],
    category: MealCategory,
    target: f64,
) -> Option<&'a FoodItem> {
    candidates
        .iter()
        .copied()
        .filter(|f| f.category == category && within_cap(f, target))
        .min_by(|a, b| a.calorie_gap(target).total_cmp(&b.calorie_gap(target)))
}

/// Fill one day with at most one food per category.
///
/// Categories with no eligible food are skipped.
pub fn plan_day(
    day: usize,
    candidates: &[&FoodItem],
    calorie_target: f64,
    distribution: &MealDistribution,
) -> DayPlan {
    let mut plan = DayPlan::new(day);

    for category in MealCategory::ALL {
        let target = category_target(calorie_target, distribution.share(category));

        match select_for_category(candidates, category, target) {
            Some(food) => {
                plan.meals
                    .push(PlannedMeal::new(category, target, food.clone()));
            }
            None => debug!(
                day,
                %category,
                target,
                "no eligible food under cap, skipping category"
            ),
        }
    }

    plan
}

/// Generate a seven-day schedule.
///
/// The raw distribution is normalized first. Each day is solved on its own,
/// so repeated foods across days are expected. Days without any meal are
/// dropped; an empty [`MealPlan`] means nothing in the catalog fit.
pub fn generate_plan(
    catalog: &Catalog,
    calorie_target: f64,
    diet: DietType,
    distribution: &MealDistribution,
) -> Result<MealPlan> {
    let distribution = distribution.normalized()?;

    let candidates: Vec<&FoodItem> = catalog.iter().filter(|f| f.diet == diet).collect();
    debug!(
        %diet,
        candidates = candidates.len(),
        "filtered catalog by diet type"
    );

    let mut plan = MealPlan::default();

    for day in 1..=PLAN_DAYS {
        let day_plan = plan_day(day, &candidates, calorie_target, &distribution);
        if !day_plan.is_empty() {
            plan.days.push(day_plan);
        }
    }

    info!(
        calorie_target,
        days = plan.days.len(),
        meals = plan.meal_count(),
        "generated meal plan"
    );

    Ok(plan)
}
