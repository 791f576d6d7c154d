use crate::interface::insights::{NutritionSummary, Recommendation};
use crate::models::{MealCategory, MealPlan, PlannedMeal, UserProfile};
use crate::planner::{BmiCategory, HealthMetrics};

/// Width of the longest bar in the calorie chart.
const CHART_WIDTH: usize = 40;

pub fn meal_emoji(category: MealCategory) -> &'static str {
    match category {
        MealCategory::Breakfast => "🍳",
        MealCategory::Lunch => "🍱",
        MealCategory::Dinner => "🍽️",
        MealCategory::Snack => "🍪",
    }
}

pub fn bmi_emoji(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "⚖️",
        BmiCategory::Normal => "✅",
        BmiCategory::Overweight => "⚠️",
        BmiCategory::Obese => "❗",
    }
}

/// Glyph per category for the stacked chart.
fn bar_glyph(category: MealCategory) -> char {
    match category {
        MealCategory::Breakfast => 'B',
        MealCategory::Lunch => 'L',
        MealCategory::Dinner => 'D',
        MealCategory::Snack => 'S',
    }
}

/// One schedule line: category, food, then calories and macros.
pub fn format_meal_line(meal: &PlannedMeal) -> String {
    format!(
        "{} {:<9} {} | {:.0} kcal | Protein: {:.1}g | Carbs: {:.1}g | Fat: {:.1}g",
        meal_emoji(meal.category),
        meal.category.as_str(),
        meal.food.name,
        meal.food.calories,
        meal.food.protein,
        meal.food.carbs,
        meal.food.fat
    )
}

/// Stacked bar for one day, scaled so `max_calories` spans the chart width.
pub fn calorie_bar(meals: &[PlannedMeal], max_calories: f64) -> String {
    if max_calories <= 0.0 {
        return String::new();
    }

    let mut bar = String::new();
    for category in MealCategory::ALL {
        let calories: f64 = meals
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.food.calories)
            .sum();
        let width = (calories / max_calories * CHART_WIDTH as f64).round() as usize;
        bar.extend(std::iter::repeat(bar_glyph(category)).take(width));
    }
    bar
}

/// Display the metrics bundle.
pub fn display_metrics(metrics: &HealthMetrics, profile: &UserProfile) {
    println!();
    println!("=== Your Health Metrics ===");
    println!();
    println!(
        "BMI: {:.1}  ({} {})",
        metrics.bmi,
        metrics.bmi_category,
        bmi_emoji(metrics.bmi_category)
    );
    println!("Base Metabolic Rate: {:.0} kcal", metrics.bmr);
    println!("Daily Energy Expenditure: {:.0} kcal", metrics.tdee);
    println!(
        "Daily Calorie Target: {:.0} kcal ({})",
        metrics.calorie_target,
        profile.goal.label()
    );
    if (profile.target_weight_kg - profile.weight_kg).abs() > f64::EPSILON {
        println!(
            "Target weight: {:.0} kg (current {:.0} kg)",
            profile.target_weight_kg, profile.weight_kg
        );
    }
    if !profile.cuisines.is_empty() {
        println!("Preferred cuisines: {}", profile.cuisines.join(", "));
    }
}

/// Display the weekly schedule day by day.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        display_plan_failure();
        return;
    }

    println!();
    println!("=== Your Weekly Meal Schedule ===");

    for day in &plan.days {
        println!();
        println!("📅 {} ({:.0} kcal)", day.label, day.total_calories());
        for meal in &day.meals {
            println!("  {}", format_meal_line(meal));
        }
    }
    println!();
}

/// Calories per day, stacked by meal category.
pub fn display_calorie_chart(plan: &MealPlan) {
    let max = plan
        .days
        .iter()
        .map(|d| d.total_calories())
        .fold(0.0, f64::max);

    println!("=== Calorie Distribution by Day and Meal ===");
    println!();
    for day in &plan.days {
        println!(
            "{:<6} {:>5.0} | {}",
            day.label,
            day.total_calories(),
            calorie_bar(&day.meals, max)
        );
    }
    println!();
    println!("       B = Breakfast  L = Lunch  D = Dinner  S = Snack");
    println!();
}

/// Average macros across the selected meals.
pub fn display_nutrition(summary: &NutritionSummary) {
    println!("=== Nutritional Balance (average per meal) ===");
    println!();
    println!("Protein: {:.1}g", summary.avg_protein);
    println!("Carbs:   {:.1}g", summary.avg_carbs);
    println!("Fat:     {:.1}g", summary.avg_fat);
    println!(
        "Meals:   {} ({:.0} kcal total)",
        summary.meal_count, summary.total_calories
    );
    println!();
}

pub fn display_recommendations(recommendations: &[Recommendation]) {
    println!("=== Smart Recommendations ===");
    println!();
    if recommendations.is_empty() {
        println!("Your plan looks well balanced. Keep it up!");
    }
    for rec in recommendations {
        println!("- {}", rec.message());
    }
    println!();
}

pub fn display_plan_failure() {
    println!();
    println!("We couldn't generate a meal plan with these preferences. Try adjusting them!");
    println!();
}

pub fn display_cuisines(cuisines: &[String]) {
    if cuisines.is_empty() {
        println!("Cuisines: (none)");
        return;
    }

    println!();
    println!("=== Cuisines ({} tags) ===", cuisines.len());
    println!();
    for cuisine in cuisines {
        println!("  {}", cuisine);
    }
    println!();
}
